#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(clippy::dbg_macro, clippy::todo, clippy::unimplemented)]

//! Token model shared by the scanner and everything downstream of it.

pub mod kind {
    use serde::Serialize;
    use std::fmt;

    /// Lexical category of a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "kebab-case")]
    pub enum TokenType {
        // single-character punctuation
        LeftParen,
        RightParen,
        LeftBrace,
        RightBrace,
        Comma,
        Dot,
        Minus,
        Plus,
        Semicolon,
        Slash,
        Star,
        // one or two characters
        Bang,
        BangEqual,
        Equal,
        EqualEqual,
        Greater,
        GreaterEqual,
        Less,
        LessEqual,
        // literals
        Identifier,
        String,
        Number,
        // keywords
        And,
        Class,
        Else,
        False,
        For,
        Fun,
        If,
        Nil,
        Or,
        Print,
        Return,
        Super,
        This,
        True,
        Var,
        While,
        // end of input
        Eof,
    }

    impl TokenType {
        pub fn name(self) -> &'static str {
            match self {
                TokenType::LeftParen => "left-paren",
                TokenType::RightParen => "right-paren",
                TokenType::LeftBrace => "left-brace",
                TokenType::RightBrace => "right-brace",
                TokenType::Comma => "comma",
                TokenType::Dot => "dot",
                TokenType::Minus => "minus",
                TokenType::Plus => "plus",
                TokenType::Semicolon => "semicolon",
                TokenType::Slash => "slash",
                TokenType::Star => "star",
                TokenType::Bang => "bang",
                TokenType::BangEqual => "bang-equal",
                TokenType::Equal => "equal",
                TokenType::EqualEqual => "equal-equal",
                TokenType::Greater => "greater",
                TokenType::GreaterEqual => "greater-equal",
                TokenType::Less => "less",
                TokenType::LessEqual => "less-equal",
                TokenType::Identifier => "identifier",
                TokenType::String => "string",
                TokenType::Number => "number",
                TokenType::And => "and",
                TokenType::Class => "class",
                TokenType::Else => "else",
                TokenType::False => "false",
                TokenType::For => "for",
                TokenType::Fun => "fun",
                TokenType::If => "if",
                TokenType::Nil => "nil",
                TokenType::Or => "or",
                TokenType::Print => "print",
                TokenType::Return => "return",
                TokenType::Super => "super",
                TokenType::This => "this",
                TokenType::True => "true",
                TokenType::Var => "var",
                TokenType::While => "while",
                TokenType::Eof => "eof",
            }
        }

        /// True for the sixteen reserved words.
        pub fn is_keyword(self) -> bool {
            matches!(
                self,
                TokenType::And
                    | TokenType::Class
                    | TokenType::Else
                    | TokenType::False
                    | TokenType::For
                    | TokenType::Fun
                    | TokenType::If
                    | TokenType::Nil
                    | TokenType::Or
                    | TokenType::Print
                    | TokenType::Return
                    | TokenType::Super
                    | TokenType::This
                    | TokenType::True
                    | TokenType::Var
                    | TokenType::While
            )
        }
    }

    impl fmt::Display for TokenType {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }
}

pub mod token {
    use super::kind::TokenType;
    use serde::Serialize;
    use std::fmt;

    /// Payload of a literal token. Only `String` tokens carry `Text` and only
    /// `Number` tokens carry `Number`.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(untagged)]
    pub enum Literal {
        None,
        Text(String),
        Number(f64),
    }

    impl fmt::Display for Literal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Literal::None => f.write_str("nil"),
                Literal::Text(s) => f.write_str(s),
                // Debug keeps the trailing `.0` on integral values
                Literal::Number(n) => write!(f, "{:?}", n),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Token {
        pub kind: TokenType,
        /// Exact source slice; empty for the end-of-input marker.
        pub lexeme: String,
        pub literal: Literal,
        /// Newlines consumed before the token's first character (0-based).
        pub line: usize,
    }

    impl Token {
        pub fn new(
            kind: TokenType,
            lexeme: impl Into<String>,
            literal: Literal,
            line: usize,
        ) -> Self {
            Self {
                kind,
                lexeme: lexeme.into(),
                literal,
                line,
            }
        }

        pub fn eof(line: usize) -> Self {
            Self::new(TokenType::Eof, "", Literal::None, line)
        }
    }

    impl fmt::Display for Token {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{} {} {}", self.kind, self.lexeme, self.literal)
        }
    }
}

pub use kind::TokenType;
pub use token::{Literal, Token};
