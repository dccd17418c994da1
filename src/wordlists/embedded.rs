//! Embedded seed word list
//!
//! Compiled into the binary at build time from `data/words_de.txt`.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/seed_words.rs"));
