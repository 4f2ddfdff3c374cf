use glox_scan::scan_str;
use glox_token::{Literal, TokenType::*};

#[test]
fn string_spans_lines() {
    let toks = scan_str("\"a\nb\"X").unwrap();
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[0].kind, String);
    assert_eq!(toks[0].literal, Literal::Text("a\nb".into()));
    assert_eq!(toks[0].line, 0);
    assert_eq!(toks[1].kind, Identifier);
    assert_eq!(toks[1].lexeme, "X");
    assert_eq!(toks[1].line, 1);
    assert_eq!(toks[2].line, 1);
}

#[test]
fn lines_never_decrease() {
    let src = "var a = 1;\nprint a;\n\n\"two\nlines\" // c\nwhile (a < 10) {\n a = a + 1;\n}\n";
    let toks = scan_str(src).unwrap();
    assert!(toks.windows(2).all(|w| w[0].line <= w[1].line));
    assert_eq!(toks.last().unwrap().kind, Eof);
    assert_eq!(toks.last().unwrap().line, src.matches('\n').count());
    assert_eq!(toks.iter().filter(|t| t.kind == Eof).count(), 1);
}

#[test]
fn crlf_counts_once() {
    let toks = scan_str("a\r\nb").unwrap();
    assert_eq!(toks[0].line, 0);
    assert_eq!(toks[1].line, 1);
}

#[test]
fn lexemes_reassemble_source_without_trivia() {
    let src = "fun add(a, b) { return a+b; }";
    let joined: std::string::String = scan_str(src)
        .unwrap()
        .iter()
        .map(|t| t.lexeme.as_str())
        .collect();
    let stripped: std::string::String = src.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, stripped);
}
