//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its dispatch loop, and the
//! helpers the scan routines share.

use std::io::Read;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::{Cursor, Position};
use crate::error::{LexError, LexErrorKind, Result};
use crate::token::{OperatorKind, Spanned, Token};
use crate::unicode::is_ascii_ident_start;

/// Observable lifecycle of a [`Lexer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerState {
    /// No character has been read yet.
    Fresh,
    /// The lookahead holds the next character, or end of stream was reached.
    Positioned,
}

/// Lexer for statelang.
///
/// The lexer pulls characters from a reader on demand and produces one
/// token per call to [`Lexer::next_token`]. It holds a single character of
/// lookahead and never backtracks.
///
/// The reader is not closed by the lexer. Pass `&mut reader` to keep
/// ownership of the stream, or get it back with [`Lexer::into_inner`].
///
/// # Example
///
/// ```
/// use statelang_lex::{KeywordKind, Lexer, OperatorKind, Token};
///
/// let mut lexer = Lexer::from_source("if x == 1");
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(KeywordKind::If)));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::Identifier("x".into())));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::Operator(OperatorKind::Equal)));
/// assert_eq!(lexer.next_token().unwrap(), Some(Token::IntLiteral(1)));
/// assert_eq!(lexer.next_token().unwrap(), None);
/// ```
pub struct Lexer<R> {
    /// Character cursor over the source.
    pub(crate) cursor: Cursor<R>,

    /// Effective settings.
    config: LexerConfig,

    /// Whether the first character has been read.
    state: LexerState,

    /// Position of the first character of the current token.
    pub(crate) token_start: Position,

    /// Set once an error has been yielded through the iterator.
    failed: bool,
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over an in-memory source string.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, LexerConfig::default())
    }

    /// Creates a lexer with the given configuration.
    pub fn with_config(reader: R, config: LexerConfig) -> Self {
        debug!(
            buffer_capacity = config.buffer_capacity,
            skip_bom = config.skip_bom,
            max_literal_len = ?config.max_literal_len,
            "creating lexer"
        );
        Self {
            cursor: Cursor::new(reader, config.buffer_capacity),
            config,
            state: LexerState::Fresh,
            token_start: Position::START,
            failed: false,
        }
    }

    /// Returns the next token from the stream.
    ///
    /// Whitespace is skipped first. `Ok(None)` means the stream ended
    /// cleanly; every later call returns `Ok(None)` again. On error the
    /// offending character has been consumed.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        Ok(self.next_spanned()?.map(|spanned| spanned.token))
    }

    /// Like [`Lexer::next_token`], but also reports where the token starts.
    pub fn next_spanned(&mut self) -> Result<Option<Spanned>> {
        if self.state == LexerState::Fresh {
            self.start()?;
        }

        self.skip_whitespace()?;
        self.token_start = self.cursor.position();

        let c = match self.cursor.current() {
            Some(c) => c,
            None => {
                debug!(position = %self.token_start, "end of stream");
                return Ok(None);
            }
        };

        let result = match c {
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ascii_ident_start(c) => self.lex_identifier(),
            c if OperatorKind::is_start(c) => self.lex_operator(),
            c => self
                .advance()
                .and_then(|()| Err(self.error(LexErrorKind::UnrecognizedCharacter(c)))),
        };

        match result {
            Ok(token) => {
                trace!(
                    kind = token.kind_name(),
                    %token,
                    position = %self.token_start,
                    "scanned token"
                );
                Ok(Some(Spanned {
                    token,
                    start: self.token_start,
                }))
            }
            Err(err) => {
                debug!(error = %err, "lexing failed");
                Err(err)
            }
        }
    }

    /// Lexes the rest of the stream, stopping at the first error.
    pub fn tokenize(self) -> Result<Vec<Token>> {
        self.collect()
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Returns the effective configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Returns the position of the lookahead character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> Position {
        self.token_start
    }

    /// Returns the underlying reader. Buffered but unread bytes are lost.
    pub fn into_inner(self) -> R {
        self.cursor.into_inner()
    }

    /// Performs the first read, moving from `Fresh` to `Positioned`.
    fn start(&mut self) -> Result<()> {
        self.state = LexerState::Positioned;
        self.advance()?;
        if self.config.skip_bom && self.cursor.current() == Some('\u{FEFF}') {
            trace!("skipping byte order mark");
            self.advance()?;
        }
        Ok(())
    }

    /// Builds an error located at the start of the current token.
    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.token_start)
    }

    /// Builds an error located at the given position.
    pub(crate) fn error_at(&self, kind: LexErrorKind, position: Position) -> LexError {
        LexError::new(kind, position)
    }

    /// Advances the cursor, wrapping read failures.
    pub(crate) fn advance(&mut self) -> Result<()> {
        let position = self.cursor.position();
        self.cursor
            .advance()
            .map_err(|e| LexError::new(LexErrorKind::StreamRead(e), position))
    }

    /// Consumes the lookahead if it equals `expected`.
    pub(crate) fn match_char(&mut self, expected: char) -> Result<bool> {
        let position = self.cursor.position();
        self.cursor
            .match_char(expected)
            .map_err(|e| LexError::new(LexErrorKind::StreamRead(e), position))
    }

    /// Fails if a literal has grown past the configured length limit.
    pub(crate) fn check_literal_len(&self, len: usize) -> Result<()> {
        match self.config.max_literal_len {
            Some(limit) if len > limit => {
                Err(self.error(LexErrorKind::LiteralTooLong { limit }))
            }
            _ => Ok(()),
        }
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Lexer<R> {}
