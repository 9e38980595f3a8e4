//! Embedded word lists
//!
//! Corpus and dictionary compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
