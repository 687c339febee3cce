//! statelang-lex - Streaming Tokenizer for statelang
//!
//! This crate turns statelang source, read from any [`std::io::Read`]
//! stream, into a sequence of tokens for a parser to consume. Input is
//! decoded as UTF-8 one character at a time with a single character of
//! lookahead, so sources never have to be loaded into memory whole.
//!
//! # Example Usage
//!
//! ```
//! use statelang_lex::{KeywordKind, Lexer, Token};
//!
//! let source = "state idle\nvar count = 0";
//! let mut lexer = Lexer::from_source(source);
//!
//! // Get tokens one at a time
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Keyword(KeywordKind::State)));
//! assert_eq!(lexer.next_token().unwrap(), Some(Token::Identifier("idle".into())));
//!
//! // Or drain the rest through the iterator
//! let rest: Vec<Token> = lexer.collect::<Result<_, _>>().unwrap();
//! assert_eq!(rest.len(), 4);
//! ```
//!
//! Files and sockets work the same way:
//!
//! ```no_run
//! use std::fs::File;
//! use statelang_lex::Lexer;
//!
//! let file = File::open("machine.sl")?;
//! for token in Lexer::new(file) {
//!     println!("{}", token?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - UTF-8 character cursor and source positions
//! - [`unicode`] - Character classes
//! - [`error`] - Lexing and configuration errors
//! - [`config`] - Lexer settings, loadable from TOML
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `bool`, `break`, `case`, `continue`, `default`, `else`, `enum`, `false`,
//! `float`, `function`, `if`, `mutator`, `state`, `string`, `struct`,
//! `switch`, `true`, `var`, `while`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `007` (fits in an `i32`)
//! - **Float**: `3.14`, `123.5` (an `f32`)
//! - **String**: `"hello"`, `"tab\there"`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`
//! - **Assignment**: `=`
//!
//! There are no comments and no delimiter tokens; any other character is an
//! error.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::{Cursor, Position};
pub use error::{ConfigError, LexError, LexErrorKind, Result};
pub use lexer::{Lexer, LexerState};
pub use token::{KeywordKind, OperatorKind, Spanned, Token};
