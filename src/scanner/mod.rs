//! Byte-cursor scanner. Operates on raw bytes, not validated UTF-8 —
//! bytes `>= 128` are only ever copied through inside a string literal;
//! anywhere else they are an unexpected character.

use std::fmt;

use crate::token::{keyword_kind, Token, TokenKind};

/// A single lexical error, attributed to the line it was found on.
/// Scanning never stops at the first one — every error in the source is
/// collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for LexError {}

pub struct Scanner {
    source: Vec<u8>,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Scanner {
    pub fn new(source: Vec<u8>) -> Self {
        Scanner {
            source,
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Scans the whole source, always terminating the token list with an
    /// `EOF` token regardless of whether any errors were found.
    pub fn scan(mut self) -> (Vec<Token>, Vec<LexError>) {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));
        (self.tokens, self.errors)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source[self.current];
        self.current += 1;
        byte
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.source[self.current]
        }
    }

    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            0
        } else {
            self.source[self.current + 1]
        }
    }

    /// Consumes the next byte if it matches `expected` (one step of
    /// lookahead, no backtracking).
    fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token::simple(kind, self.line));
    }

    fn lexeme(&self) -> String {
        String::from_utf8_lossy(&self.source[self.start..self.current]).into_owned()
    }

    fn scan_token(&mut self) {
        let byte = self.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'!' => {
                let kind = if self.matches(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.matches(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.matches(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.matches(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            b'/' => {
                if self.matches(b'/') {
                    while self.peek() != b'\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b if is_alpha(b) => self.identifier(),
            other => self.errors.push(LexError {
                line: self.line,
                message: format!("Unexpected character: {}", other as char),
            }),
        }
    }

    fn string(&mut self) {
        let line_started = self.line;
        let mut value = Vec::new();

        while self.peek() != b'"' && !self.is_at_end() {
            let byte = self.advance();
            if byte == b'\n' {
                self.line += 1;
            }
            value.push(byte);
        }

        if self.is_at_end() {
            self.errors.push(LexError {
                line: line_started,
                message: "Unterminated string.".to_string(),
            });
            return;
        }

        self.advance(); // the closing quote
        let value: String = value.into_iter().map(char::from).collect();
        self.tokens.push(Token::string(value, line_started));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A `.` is only part of the number if at least one digit follows
        // it; a trailing `.` with nothing after it scans as its own DOT
        // token on the next call.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme = self.lexeme();
        let value: f64 = lexeme
            .parse()
            .expect("the digit/dot scan above only ever admits a well-formed float literal");
        self.tokens.push(Token::number(lexeme, value, self.line));
    }

    fn identifier(&mut self) {
        while is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        match keyword_kind(&text) {
            Some(kind) => self.add_token(kind),
            None => self.tokens.push(Token::identifier(text, self.line)),
        }
    }
}

fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_alphanumeric(byte: u8) -> bool {
    is_alpha(byte) || byte.is_ascii_digit()
}
