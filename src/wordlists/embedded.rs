//! Embedded vocabulary
//!
//! Word list compiled into the binary at build time.

// Include the generated vocabulary from the build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
