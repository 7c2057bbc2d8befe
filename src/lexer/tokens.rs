use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::{Span, MK_KEYWORD, MK_PATTERN};

lazy_static! {
    /// The token catalog, in match-priority order.
    ///
    /// Entries are tried top-to-bottom at every cursor position and the
    /// first match wins, so the order is load-bearing: comments come
    /// before the divide/multiply operators, fraction constants before
    /// integer constants, every reserved word before `Identifier`, and
    /// `==`/`!=` before the single-character `=`. The two quoted-literal
    /// kinds sit last and capture only their interior (see
    /// `token_at`, which widens their match past the closing quote).
    pub static ref TOKEN_CATALOG: Vec<(TokenKind, Regex)> = vec![
        (TokenKind::BlockComment, Regex::new(r"(?s)\A(/\*.*?\*/)").unwrap()),
        (TokenKind::LineComment, Regex::new(r"\A(//[^\n]*\n?)").unwrap()),
        MK_PATTERN!(TokenKind::Space, r" "),
        MK_PATTERN!(TokenKind::OpenParen, r"\("),
        MK_PATTERN!(TokenKind::CloseParen, r"\)"),
        MK_PATTERN!(TokenKind::Semicolon, r";"),
        MK_PATTERN!(TokenKind::Comma, r","),
        MK_PATTERN!(TokenKind::OpenCurly, r"\{"),
        MK_PATTERN!(TokenKind::CloseCurly, r"\}"),
        MK_PATTERN!(TokenKind::OpenBracket, r"\["),
        MK_PATTERN!(TokenKind::CloseBracket, r"\]"),
        (TokenKind::DoubleConstant, Regex::new(r"\A(\d{1,9}\.\d{1,32})\b").unwrap()),
        (TokenKind::IntConstant, Regex::new(r"\A(\d{1,9})\b").unwrap()),
        MK_KEYWORD!(TokenKind::Void, "void"),
        MK_KEYWORD!(TokenKind::Int, "int"),
        MK_KEYWORD!(TokenKind::Double, "double"),
        MK_PATTERN!(TokenKind::Tab, r"\t"),
        MK_PATTERN!(TokenKind::NewLine, r"\n"),
        MK_KEYWORD!(TokenKind::Public, "public"),
        MK_KEYWORD!(TokenKind::Private, "private"),
        MK_KEYWORD!(TokenKind::False, "false"),
        MK_KEYWORD!(TokenKind::True, "true"),
        MK_KEYWORD!(TokenKind::Null, "null"),
        MK_KEYWORD!(TokenKind::Return, "return"),
        MK_KEYWORD!(TokenKind::New, "new"),
        MK_KEYWORD!(TokenKind::Class, "class"),
        MK_KEYWORD!(TokenKind::If, "if"),
        MK_KEYWORD!(TokenKind::Else, "else"),
        MK_KEYWORD!(TokenKind::While, "while"),
        MK_KEYWORD!(TokenKind::Static, "static"),
        MK_KEYWORD!(TokenKind::StringType, "String"),
        MK_KEYWORD!(TokenKind::Char, "char"),
        MK_KEYWORD!(TokenKind::Final, "final"),
        MK_KEYWORD!(TokenKind::Abstract, "abstract"),
        MK_KEYWORD!(TokenKind::Continue, "continue"),
        MK_KEYWORD!(TokenKind::For, "for"),
        MK_KEYWORD!(TokenKind::Switch, "switch"),
        MK_KEYWORD!(TokenKind::Assert, "assert"),
        MK_KEYWORD!(TokenKind::Default, "default"),
        MK_KEYWORD!(TokenKind::Goto, "goto"),
        MK_KEYWORD!(TokenKind::Package, "package"),
        MK_KEYWORD!(TokenKind::Synchronized, "synchronized"),
        MK_KEYWORD!(TokenKind::Boolean, "boolean"),
        MK_KEYWORD!(TokenKind::Do, "do"),
        MK_KEYWORD!(TokenKind::This, "this"),
        MK_KEYWORD!(TokenKind::Byte, "byte"),
        MK_KEYWORD!(TokenKind::Import, "import"),
        MK_KEYWORD!(TokenKind::Throws, "throws"),
        MK_KEYWORD!(TokenKind::Break, "break"),
        MK_KEYWORD!(TokenKind::Implements, "implements"),
        MK_KEYWORD!(TokenKind::Protected, "protected"),
        MK_KEYWORD!(TokenKind::Throw, "throw"),
        MK_KEYWORD!(TokenKind::Case, "case"),
        MK_KEYWORD!(TokenKind::Enum, "enum"),
        MK_KEYWORD!(TokenKind::Instanceof, "instanceof"),
        MK_KEYWORD!(TokenKind::Transient, "transient"),
        MK_KEYWORD!(TokenKind::Catch, "catch"),
        MK_KEYWORD!(TokenKind::Extends, "extends"),
        MK_KEYWORD!(TokenKind::Short, "short"),
        MK_KEYWORD!(TokenKind::Try, "try"),
        MK_KEYWORD!(TokenKind::Interface, "interface"),
        MK_KEYWORD!(TokenKind::Finally, "finally"),
        MK_KEYWORD!(TokenKind::Long, "long"),
        MK_KEYWORD!(TokenKind::Strictfp, "strictfp"),
        MK_KEYWORD!(TokenKind::Volatile, "volatile"),
        MK_KEYWORD!(TokenKind::Const, "const"),
        MK_KEYWORD!(TokenKind::Float, "float"),
        MK_KEYWORD!(TokenKind::Native, "native"),
        MK_KEYWORD!(TokenKind::Super, "super"),
        MK_PATTERN!(TokenKind::Dot, r"\."),
        MK_PATTERN!(TokenKind::Plus, r"\+"),
        MK_PATTERN!(TokenKind::Dash, r"-"),
        MK_PATTERN!(TokenKind::Star, r"\*"),
        MK_PATTERN!(TokenKind::Slash, r"/"),
        MK_PATTERN!(TokenKind::Equals, r"=="),
        MK_PATTERN!(TokenKind::Assignment, r"="),
        MK_PATTERN!(TokenKind::NotEquals, r"!="),
        MK_PATTERN!(TokenKind::Greater, r">"),
        MK_PATTERN!(TokenKind::Less, r"<"),
        (TokenKind::Identifier, Regex::new(r"\A([a-zA-Z][0-9a-zA-Z_]{0,31})\b").unwrap()),
        (TokenKind::StringLiteral, Regex::new(r#"\A"((?:\\.|[^"\\])*)""#).unwrap()),
        (TokenKind::CharLiteral, Regex::new(r"\A'((?:\\.|[^'\\])*)'").unwrap()),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    BlockComment,
    LineComment,

    Space,
    Tab,
    NewLine,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Semicolon,
    Comma,

    DoubleConstant,
    IntConstant,
    StringLiteral,
    CharLiteral,

    Dot,
    Plus,
    Dash,
    Star,
    Slash,
    Equals,     // ==
    Assignment, // =
    NotEquals,  // !=
    Greater,
    Less,

    Identifier,

    // Reserved
    Abstract,
    Assert,
    Boolean,
    Break,
    Byte,
    Case,
    Catch,
    Char,
    Class,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extends,
    False,
    Final,
    Finally,
    Float,
    For,
    Goto,
    If,
    Implements,
    Import,
    Instanceof,
    Int,
    Interface,
    Long,
    Native,
    New,
    Null,
    Package,
    Private,
    Protected,
    Public,
    Return,
    Short,
    Static,
    Strictfp,
    StringType,
    Super,
    Switch,
    Synchronized,
    This,
    Throw,
    Throws,
    Transient,
    True,
    Try,
    Void,
    Volatile,
    While,
}

impl TokenKind {
    /// For an open-bracket kind, the close kind that ends it and the
    /// printable close character for diagnostics.
    pub fn bracket_pair(self) -> Option<(TokenKind, char)> {
        match self {
            TokenKind::OpenParen => Some((TokenKind::CloseParen, ')')),
            TokenKind::OpenBracket => Some((TokenKind::CloseBracket, ']')),
            TokenKind::OpenCurly => Some((TokenKind::CloseCurly, '}')),
            _ => None,
        }
    }

    pub fn is_open_bracket(self) -> bool {
        self.bracket_pair().is_some()
    }

    pub fn is_close_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::CloseParen | TokenKind::CloseBracket | TokenKind::CloseCurly
        )
    }

    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Space | TokenKind::Tab | TokenKind::NewLine)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t\t{}", self.kind, self.value)
    }
}
