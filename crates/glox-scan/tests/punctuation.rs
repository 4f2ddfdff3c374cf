use glox_scan::scan_str;
use glox_token::TokenType::{self, *};

fn kinds(src: &str) -> Vec<TokenType> {
    scan_str(src).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn parens_and_braces() {
    let toks = scan_str("(( )){}").unwrap();
    let got: Vec<_> = toks.iter().map(|t| t.kind).collect();
    assert_eq!(
        got,
        vec![LeftParen, LeftParen, RightParen, RightParen, LeftBrace, RightBrace, Eof]
    );
    assert!(toks.iter().all(|t| t.line == 0));
}

#[test]
fn every_single_char_token() {
    assert_eq!(
        kinds("(){},.-+;/*"),
        vec![
            LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
            Slash, Star, Eof
        ]
    );
}

#[test]
fn lexeme_is_the_consumed_char() {
    let toks = scan_str("( ;").unwrap();
    assert_eq!(toks[0].lexeme, "(");
    assert_eq!(toks[1].lexeme, ";");
    assert_eq!(toks[2].lexeme, "");
}

#[test]
fn whitespace_only_is_just_eof() {
    for src in ["", " ", "\t\r ", "\n", "\n\n \t\n", "\r\n\r\n"] {
        let toks = scan_str(src).unwrap();
        assert_eq!(toks.len(), 1, "input {:?}", src);
        assert_eq!(toks[0].kind, Eof);
        assert_eq!(toks[0].line, src.matches('\n').count(), "input {:?}", src);
    }
}
