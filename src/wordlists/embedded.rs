//! Embedded word list
//!
//! Answer words compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
