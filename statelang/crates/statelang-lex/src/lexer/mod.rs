//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `whitespace` - Skipping between tokens
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod whitespace;

pub use self::core::{Lexer, LexerState};
