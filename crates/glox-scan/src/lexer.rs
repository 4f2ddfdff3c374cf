use crate::error::{LexError, LexResult};
use crate::keyword::keyword;
use glox_token::{Literal, Token, TokenType};
use log::{debug, trace};

/// Single-pass scanner over one complete source text.
///
/// The source is walked byte by byte. Every token starts on an ASCII byte, so
/// `start` and `pos` always sit on char boundaries when a lexeme is sliced out.
pub struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    start: usize,
    pos: usize,
    // line of the token under construction; multi-line strings advance `line`
    start_line: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            start: 0,
            pos: 0,
            start_line: 0,
            line: 0,
        }
    }

    /// Scan the whole input. Stops at the first lexical error; no partial
    /// token list is returned in that case.
    pub fn scan_tokens(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while !self.at_end() {
            self.start = self.pos;
            self.start_line = self.line;
            match self.scan_token() {
                Ok(Some(tok)) => {
                    trace!("token {}", tok);
                    tokens.push(tok);
                }
                Ok(None) => {}
                Err(e) => {
                    debug!("scan aborted after {} tokens: {}", tokens.len(), e);
                    return Err(e);
                }
            }
        }
        tokens.push(Token::eof(self.line));
        debug!("scanned {} tokens over {} lines", tokens.len(), self.line + 1);
        Ok(tokens)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
    fn peek2(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Consume the next byte only if it is `want`.
    fn eat(&mut self, want: u8) -> bool {
        if self.peek() == Some(want) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
    }

    fn lexeme(&self) -> &'a str {
        &self.src[self.start..self.pos]
    }

    fn token(&self, kind: TokenType) -> Token {
        self.token_with(kind, Literal::None)
    }

    fn token_with(&self, kind: TokenType, literal: Literal) -> Token {
        Token::new(kind, self.lexeme(), literal, self.start_line)
    }

    /// Scan one lexeme starting at `start`. Trivia yields `Ok(None)`.
    fn scan_token(&mut self) -> LexResult<Option<Token>> {
        let Some(b) = self.bump() else {
            return Ok(None);
        };

        let kind = match b {
            b'(' => TokenType::LeftParen,
            b')' => TokenType::RightParen,
            b'{' => TokenType::LeftBrace,
            b'}' => TokenType::RightBrace,
            b',' => TokenType::Comma,
            b'.' => TokenType::Dot,
            b'-' => TokenType::Minus,
            b'+' => TokenType::Plus,
            b';' => TokenType::Semicolon,
            b'*' => TokenType::Star,
            // maximal munch: `!=` is never `!` followed by `=`
            b'!' if self.eat(b'=') => TokenType::BangEqual,
            b'!' => TokenType::Bang,
            b'=' if self.eat(b'=') => TokenType::EqualEqual,
            b'=' => TokenType::Equal,
            b'<' if self.eat(b'=') => TokenType::LessEqual,
            b'<' => TokenType::Less,
            b'>' if self.eat(b'=') => TokenType::GreaterEqual,
            b'>' => TokenType::Greater,
            b'/' if self.eat(b'/') => {
                // line comment runs up to, not through, the newline
                self.eat_while(|b| b != b'\n');
                return Ok(None);
            }
            b'/' => TokenType::Slash,
            b' ' | b'\r' | b'\t' => return Ok(None),
            b'\n' => {
                self.line += 1;
                return Ok(None);
            }
            b'"' => return self.string().map(Some),
            b'0'..=b'9' => return Ok(Some(self.number())),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => return Ok(Some(self.identifier())),
            _ => {
                let ch = self.src[self.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::unexpected_character(self.line, ch));
            }
        };
        Ok(Some(self.token(kind)))
    }

    fn string(&mut self) -> LexResult<Token> {
        while let Some(b) = self.peek() {
            if b == b'"' {
                break;
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
        if !self.eat(b'"') {
            return Err(LexError::unterminated_string(self.line));
        }
        // literal excludes both quotes; the lexeme keeps them
        let value = &self.src[self.start + 1..self.pos - 1];
        Ok(self.token_with(TokenType::String, Literal::Text(value.to_string())))
    }

    fn number(&mut self) -> Token {
        self.eat_while(|b| b.is_ascii_digit());

        // a `.` is only part of the number when a digit follows it
        if self.peek() == Some(b'.') && matches!(self.peek2(), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
            self.eat_while(|b| b.is_ascii_digit());
        }

        let value: f64 = self
            .lexeme()
            .parse()
            .expect("digits with an optional digit-led fraction always parse as f64");
        self.token_with(TokenType::Number, Literal::Number(value))
    }

    fn identifier(&mut self) -> Token {
        self.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let kind = keyword(self.lexeme()).unwrap_or(TokenType::Identifier);
        self.token(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookahead_past_end_is_none() {
        let mut s = Scanner::new("a");
        assert_eq!(s.peek(), Some(b'a'));
        assert_eq!(s.peek2(), None);
        assert_eq!(s.bump(), Some(b'a'));
        assert_eq!(s.peek(), None);
        assert_eq!(s.bump(), None);
        assert!(s.at_end());
    }

    #[test]
    fn eat_only_consumes_on_match() {
        let mut s = Scanner::new("=>");
        assert!(!s.eat(b'>'));
        assert!(s.eat(b'='));
        assert!(s.eat(b'>'));
        assert!(!s.eat(b'>'));
    }

    #[test]
    fn multiline_string_keeps_start_line() {
        let toks = Scanner::new("\n\"x\ny\nz\" w").scan_tokens().unwrap();
        assert_eq!(toks[0].line, 1);
        assert_eq!(toks[0].literal, Literal::Text("x\ny\nz".into()));
        assert_eq!(toks[1].line, 3);
        assert_eq!(toks[2].line, 3);
    }

    #[test]
    fn utf8_inside_string_is_preserved() {
        let toks = Scanner::new("\"héllo → wörld\"").scan_tokens().unwrap();
        assert_eq!(toks[0].literal, Literal::Text("héllo → wörld".into()));
        assert_eq!(toks[0].lexeme, "\"héllo → wörld\"");
    }

    #[test]
    fn non_ascii_outside_string_reports_whole_char() {
        let err = Scanner::new("x é").scan_tokens().unwrap_err();
        assert_eq!(err, LexError::unexpected_character(0, 'é'));
    }
}
