//! Integration tests for end-to-end lexing.
//!
//! These tests run the full scan-and-validate pipeline over a realistic
//! Java source file and over multi-line inputs with structural errors.

use javalex::lexer::lexer::tokenize;
use javalex::lexer::tokens::TokenKind;
use std::fs::read_to_string;

#[test]
fn test_lex_dice_game() {
    let source = read_to_string("tests/DiceGame.java").unwrap();
    let tokens = tokenize(source.clone()).unwrap();

    // Every byte of the file is covered by exactly one token.
    let rebuilt: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(rebuilt, source);

    assert_eq!(tokens[0].kind, TokenKind::BlockComment);

    let non_whitespace: Vec<_> = tokens
        .iter()
        .filter(|t| !t.kind.is_whitespace())
        .collect();
    assert!(non_whitespace.len() > 50);
    assert!(non_whitespace.len() < tokens.len());
}

#[test]
fn test_lex_dice_game_token_kinds() {
    let source = read_to_string("tests/DiceGame.java").unwrap();
    let tokens = tokenize(source).unwrap();

    let has = |kind: TokenKind| tokens.iter().any(|t| t.kind == kind);

    assert!(has(TokenKind::Public));
    assert!(has(TokenKind::Class));
    assert!(has(TokenKind::This));
    assert!(has(TokenKind::Return));
    assert!(has(TokenKind::Boolean));
    assert!(has(TokenKind::StringType));
    assert!(has(TokenKind::DoubleConstant));
    assert!(has(TokenKind::IntConstant));
    assert!(has(TokenKind::StringLiteral));
    assert!(has(TokenKind::CharLiteral));
    assert!(has(TokenKind::LineComment));
    assert!(has(TokenKind::Equals));
}

#[test]
fn test_lex_dice_game_twice_is_identical() {
    let source = read_to_string("tests/DiceGame.java").unwrap();
    let first = tokenize(source.clone()).unwrap();
    let second = tokenize(source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_wrong_close_bracket_reports_line_and_text() {
    let source = "public class A {\n    public void run() {\n        int x = 1;)\n    }\n}\n";
    let error = tokenize(source.to_string()).unwrap_err();

    assert_eq!(error.get_error_name(), "IncorrectCloseBracket");
    let line = error.get_line().unwrap();
    assert_eq!(line.number, 3);
    assert_eq!(line.text, "        int x = 1;)");
    assert!(error.to_string().contains('}'));
}

#[test]
fn test_unclosed_method_body_reports_open_line() {
    let source = "public class A {\n    public void run() {\n        int x = 1;\n";
    let error = tokenize(source.to_string()).unwrap_err();

    assert_eq!(error.get_error_name(), "MissingCloseBracket");
    // The { opened on line 2 is the innermost one still open at EOF.
    assert_eq!(error.get_line().unwrap().number, 2);
}

#[test]
fn test_stray_close_bracket_reports_line() {
    let source = "int a;\n]\n";
    let error = tokenize(source.to_string()).unwrap_err();

    assert_eq!(error.get_error_name(), "MissingOpenBracket");
    let line = error.get_line().unwrap();
    assert_eq!(line.number, 2);
    assert_eq!(line.text, "]");
}

#[test]
fn test_lexical_error_reports_offending_line() {
    let source = "int a;\nint b;\nint $c;\n";
    let error = tokenize(source.to_string()).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    let line = error.get_line().unwrap();
    assert_eq!(line.number, 3);
    assert_eq!(line.text, "int $c;");
}
