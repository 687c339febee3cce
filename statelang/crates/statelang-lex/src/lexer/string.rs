//! String literal lexing.
//!
//! This module handles lexing of double-quoted string literals and their
//! escape sequences.

use std::io::Read;

use crate::cursor::Position;
use crate::error::{LexErrorKind, Result};
use crate::token::Token;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a string literal.
    ///
    /// Expects the lookahead to be the opening `"`. Characters, including
    /// raw newlines, are collected until an unescaped closing `"`.
    ///
    /// # Returns
    ///
    /// `Token::StringLiteral` with the decoded content, without the quotes.
    ///
    /// # Errors
    ///
    /// - `UnterminatedString` if the stream ends first
    /// - `InvalidEscape` for an unknown escape sequence
    /// - `LiteralTooLong` if the decoded content exceeds the configured limit
    pub(crate) fn lex_string(&mut self) -> Result<Token> {
        self.advance()?;

        let mut content = String::new();
        let mut len = 0;

        loop {
            let c = match self.cursor.current() {
                Some(c) => c,
                None => return Err(self.error(LexErrorKind::UnterminatedString)),
            };

            match c {
                '"' => {
                    self.advance()?;
                    break;
                }
                '\\' => {
                    let escape_start = self.cursor.position();
                    self.advance()?;
                    let escaped = self.parse_escape(escape_start)?;
                    content.push(escaped);
                }
                c => {
                    content.push(c);
                    self.advance()?;
                }
            }

            len += 1;
            self.check_literal_len(len)?;
        }

        Ok(Token::StringLiteral(content))
    }

    /// Parses the character after a backslash.
    ///
    /// Handles: `\"`, `\\`, `\n`, `\t`, `\r`, `\0`
    fn parse_escape(&mut self, escape_start: Position) -> Result<char> {
        let c = match self.cursor.current() {
            Some(c) => c,
            None => return Err(self.error(LexErrorKind::UnterminatedString)),
        };
        self.advance()?;

        match c {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '0' => Ok('\0'),
            other => Err(self.error_at(LexErrorKind::InvalidEscape(other), escape_start)),
        }
    }
}
