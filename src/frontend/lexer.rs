//! Lexer for Gengar
//!
//! Converts source text into tokens one at a time. Whitespace and newline
//! tokens are emitted like any other; callers filter what they do not care
//! about. Lookahead goes through [`Lexer::peek`], and the handful of parser
//! decisions that need to reattempt a production use the explicit snapshots
//! from [`Lexer::save`] / [`Lexer::backtrack`].
#![allow(dead_code)]

use crate::frontend::token::{first_match, Token, TokenKind};
use crate::utils::{Error, Result};

/// The lexer state
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset into `source`
    offset: usize,
    /// Characters consumed so far
    pos: u32,
    /// 1-based current line
    line: u32,
    /// 0-based current column
    col: u32,
    /// Last token returned by `get_token`
    current: Option<Token>,
}

/// An immutable copy of the lexer state. Feeding it back to
/// [`Lexer::backtrack`] restores the lexer to a byte-identical prior state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    offset: usize,
    pos: u32,
    line: u32,
    col: u32,
    current: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            pos: 0,
            line: 1,
            col: 0,
            current: None,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Characters consumed so far; the parser's forward-progress guards
    /// compare this across loop iterations.
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// The last token returned by [`Lexer::get_token`].
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Advance one token and make it the current token. At end of input
    /// this returns an empty-valued EOF token, idempotently.
    pub fn get_token(&mut self) -> Result<Token> {
        let token = self.scan()?;
        self.current = Some(token.clone());
        Ok(token)
    }

    /// The next token without observable state change: `current` and the
    /// scan position are left exactly as they were.
    pub fn peek(&mut self) -> Result<Token> {
        let snapshot = self.save();
        let token = self.scan();
        self.backtrack(snapshot);
        token
    }

    /// Check the next token's kind; with `advance` set, consume it too.
    pub fn expect(&mut self, kind: TokenKind, advance: bool) -> Result<bool> {
        let token = if advance { self.get_token()? } else { self.peek()? };
        Ok(token.kind == kind)
    }

    /// Advance `n` tokens.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.get_token()?;
        }
        Ok(())
    }

    /// Collect tokens while their kind is in `kinds`. Starts from `current`
    /// when `from_current` is set, otherwise from a fresh token. On return,
    /// `current` is the first non-matching token.
    pub fn skip_of(&mut self, kinds: &[TokenKind], from_current: bool) -> Result<Vec<Token>> {
        let mut collected = Vec::new();
        let mut token = match (from_current, &self.current) {
            (true, Some(current)) => current.clone(),
            _ => self.get_token()?,
        };
        while kinds.contains(&token.kind) {
            collected.push(token);
            token = self.get_token()?;
        }
        Ok(collected)
    }

    /// Collect tokens while their kind is *not* in `kinds`; stops once a
    /// matching token (left as `current`, not collected) or end of input is
    /// reached.
    pub fn skip_to(&mut self, kinds: &[TokenKind]) -> Result<Vec<Token>> {
        let mut collected = Vec::new();
        loop {
            let token = self.get_token()?;
            if token.kind == TokenKind::Eof || kinds.contains(&token.kind) {
                return Ok(collected);
            }
            collected.push(token);
        }
    }

    /// Collect tokens until one matches `(kind, value)` or end of input.
    pub fn skip_to_value_of(&mut self, kind: TokenKind, value: &str) -> Result<Vec<Token>> {
        let mut collected = Vec::new();
        loop {
            let token = self.get_token()?;
            if token.kind == TokenKind::Eof || (token.kind == kind && token.value == value) {
                return Ok(collected);
            }
            collected.push(token);
        }
    }

    /// Snapshot the full lexer state.
    pub fn save(&self) -> Snapshot {
        Snapshot {
            offset: self.offset,
            pos: self.pos,
            line: self.line,
            col: self.col,
            current: self.current.clone(),
        }
    }

    /// Restore a previously saved state.
    pub fn backtrack(&mut self, snapshot: Snapshot) {
        self.offset = snapshot.offset;
        self.pos = snapshot.pos;
        self.line = snapshot.line;
        self.col = snapshot.col;
        self.current = snapshot.current;
    }

    fn scan(&mut self) -> Result<Token> {
        let rest = self.remaining();
        if rest.is_empty() {
            return Ok(Token::eof(self.line, self.col));
        }
        let Some((kind, len)) = first_match(rest) else {
            return Err(Error::Lex {
                pos: self.pos,
                line: self.line,
                col: self.col,
                preview: rest.chars().take(16).collect(),
            });
        };
        let value = &rest[..len];
        let token = Token::new(kind, value, self.line, self.col);
        let chars = value.chars().count() as u32;
        self.offset += len;
        self.pos += chars;
        if kind == TokenKind::Crlf {
            self.line += value.matches('\n').count() as u32;
            self.col = 0;
        } else {
            self.col += chars;
        }
        Ok(token)
    }
}
