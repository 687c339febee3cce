//! Whitespace skipping.
//!
//! statelang has no comment syntax, so whitespace is the only thing skipped
//! between tokens. `//` is two division operators.

use std::io::Read;

use crate::error::Result;
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Skips space, tab, carriage return and line feed.
    ///
    /// Stops at the first other character or at end of stream.
    pub(crate) fn skip_whitespace(&mut self) -> Result<()> {
        while self.cursor.current_is(is_whitespace) {
            self.advance()?;
        }
        Ok(())
    }
}
