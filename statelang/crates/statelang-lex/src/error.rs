//! Error types for statelang-lex.
//!
//! Lexing fails fast: the first malformed character aborts the current
//! `next_token` call with a [`LexError`]. Reaching the end of the input is
//! not an error and is reported as `Ok(None)` by the lexer.

use std::io;

use thiserror::Error;

use crate::cursor::Position;

/// Classification of a lexical error.
#[derive(Debug, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// The input ended before the closing `"` of a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A backslash followed by a character with no escape meaning.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// A numeric literal outside the range of its type.
    #[error("number literal '{0}' is out of range")]
    NumberOverflow(String),

    /// A numeric literal with a dangling decimal point, such as `123.`.
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),

    /// An operator-start character that forms no operator, such as a lone `&`.
    #[error("unrecognized operator '{0}'")]
    UnrecognizedOperator(String),

    /// A string, identifier or number literal longer than the configured limit.
    #[error("literal exceeds the maximum length of {limit} characters")]
    LiteralTooLong {
        /// The configured limit, in characters.
        limit: usize,
    },

    /// The underlying reader failed or produced invalid UTF-8.
    #[error("failed to read input stream: {0}")]
    StreamRead(#[source] io::Error),
}

/// A lexical error together with the position where it was detected.
#[derive(Debug, Error)]
#[error("{position}: {kind}")]
pub struct LexError {
    kind: LexErrorKind,
    position: Position,
}

impl LexError {
    /// Creates a new error at the given position.
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// The error classification.
    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    /// Position of the character that triggered the error.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consumes the error, returning its classification.
    pub fn into_kind(self) -> LexErrorKind {
        self.kind
    }

    /// Returns true if the error came from the underlying reader rather than
    /// from malformed source text.
    pub fn is_stream_error(&self) -> bool {
        matches!(self.kind, LexErrorKind::StreamRead(_))
    }
}

/// Error type for loading a [`LexerConfig`](crate::LexerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value was parsed but is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for lexing operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
