//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers and keywords.

use std::io::Read;

use crate::error::Result;
use crate::token::{KeywordKind, Token};
use crate::unicode::is_ascii_ident_continue;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII alphanumeric characters or underscores. After reading the
    /// identifier, checks if it matches a reserved keyword. The match is
    /// exact and case-sensitive.
    ///
    /// # Returns
    ///
    /// Either `Token::Keyword(kind)` or `Token::Identifier(name)`
    pub(crate) fn lex_identifier(&mut self) -> Result<Token> {
        let mut text = String::new();

        while let Some(c) = self.cursor.current().filter(|&c| is_ascii_ident_continue(c)) {
            text.push(c);
            self.advance()?;
            self.check_literal_len(text.len())?;
        }

        Ok(match KeywordKind::from_spelling(&text) {
            Some(kind) => Token::Keyword(kind),
            None => Token::Identifier(text),
        })
    }
}
