#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

pub mod session;

pub use session::{read_source, tokens_json, Lox, RunStatus, EXIT_DATA_ERR, MAX_SOURCE_SIZE};
