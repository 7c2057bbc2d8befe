use crate::{
    errors::errors::{Error, ErrorImpl, LineInfo},
    get_line_at_offset, Span,
};

use super::tokens::{Token, TokenKind, TOKEN_CATALOG};

/// Classifies the source text at a single cursor offset.
///
/// Walks the token catalog in priority order and returns the first kind
/// whose pattern matches anchored exactly at `begin`, or `Ok(None)` when
/// no kind matches there. The token's `end` is the end of the pattern's
/// capturing group; for the two quoted-literal kinds the group covers only
/// the interior, so the end is widened by one byte to take in the closing
/// quote.
///
/// `begin` must lie inside the source; anything else is a contract
/// violation reported as `IndexOutOfBounds`, not a lexical error.
pub fn token_at(source: &str, begin: usize) -> Result<Option<Token>, Error> {
    if begin >= source.len() {
        return Err(Error::new(
            ErrorImpl::IndexOutOfBounds {
                index: begin,
                length: source.len(),
            },
            None,
        ));
    }

    let rest = &source[begin..];

    for (kind, pattern) in TOKEN_CATALOG.iter() {
        let Some(captures) = pattern.captures(rest) else {
            continue;
        };
        let Some(group) = captures.get(1) else {
            continue;
        };

        let mut end = begin + group.end();
        if matches!(kind, TokenKind::StringLiteral | TokenKind::CharLiteral) {
            end += 1;
        }

        return Ok(Some(Token {
            kind: *kind,
            value: source[begin..end].to_string(),
            span: Span { begin, end },
        }));
    }

    Ok(None)
}

/// One lex session: owns the source text, the accumulated token list, and
/// the bracket stack. Nothing is shared between sessions.
pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    stack: Vec<Token>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            tokens: vec![],
            stack: vec![],
            pos: 0,
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn trouble_line(&self, offset: usize) -> LineInfo {
        let (number, text) = get_line_at_offset(&self.source, offset);
        LineInfo { number, text }
    }

    /// Appends a token and runs it through the bracket-balance check.
    ///
    /// Open brackets push onto the stack; a close bracket must match the
    /// stack top exactly and pops it. Every other kind leaves the stack
    /// untouched.
    fn add(&mut self, token: Token) -> Result<(), Error> {
        if token.kind.is_open_bracket() {
            self.stack.push(token.clone());
        } else if token.kind.is_close_bracket() {
            let Some(top) = self.stack.last() else {
                return Err(Error::new(
                    ErrorImpl::MissingOpenBracket {
                        found: token.value.clone(),
                    },
                    Some(self.trouble_line(token.span.end)),
                ));
            };

            match top.kind.bracket_pair() {
                Some((required, _)) if required == token.kind => {
                    self.stack.pop();
                }
                Some((_, required_char)) => {
                    return Err(Error::new(
                        ErrorImpl::IncorrectCloseBracket {
                            found: token.value.clone(),
                            required: required_char,
                        },
                        Some(self.trouble_line(token.span.end)),
                    ));
                }
                // The stack only ever holds open-bracket tokens.
                None => {}
            }
        }

        self.tokens.push(token);
        Ok(())
    }

    /// Ends the session, failing if any bracket is still open. The
    /// diagnostic points at the innermost unclosed bracket.
    fn finish(self) -> Result<Vec<Token>, Error> {
        if let Some(top) = self.stack.last() {
            return Err(Error::new(
                ErrorImpl::MissingCloseBracket {
                    open: top.value.clone(),
                },
                Some(self.trouble_line(top.span.begin)),
            ));
        }

        Ok(self.tokens)
    }
}

/// Lexes the whole source, validating bracket nesting along the way.
///
/// The cursor starts at 0 and advances to each token's `end`, so the
/// produced tokens are contiguous and cover the input exactly. A position
/// where no catalog entry matches before end of input is a lexical error
/// at that offset.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let Some(token) = token_at(&lex.source, lex.pos)? else {
            break;
        };

        lex.pos = token.span.end;
        lex.add(token)?;
    }

    if !lex.at_eof() {
        let line = lex.trouble_line(lex.pos);
        return Err(Error::new(
            ErrorImpl::UnrecognisedToken { offset: lex.pos },
            Some(line),
        ));
    }

    lex.finish()
}
