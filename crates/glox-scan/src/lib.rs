#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

mod error;
mod keyword;
mod lexer;

pub use error::{LexError, LexResult};
pub use keyword::keyword;
pub use lexer::Scanner;

/// Scan a complete source text into tokens, ending with exactly one `Eof`.
pub fn scan_str(src: &str) -> LexResult<Vec<glox_token::Token>> {
    Scanner::new(src).scan_tokens()
}
