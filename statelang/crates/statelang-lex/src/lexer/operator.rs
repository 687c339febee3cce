//! Operator lexing.
//!
//! One- and two-character operators. A second character is only consumed
//! when it completes a two-character operator.

use std::io::Read;

use crate::error::{LexErrorKind, Result};
use crate::token::{OperatorKind, Token};
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes an operator starting at the lookahead.
    ///
    /// The caller has checked [`OperatorKind::is_start`].
    ///
    /// # Errors
    ///
    /// `UnrecognizedOperator` for a single `&` or `|`. The character after
    /// it is left in place.
    pub(crate) fn lex_operator(&mut self) -> Result<Token> {
        let first = match self.cursor.current() {
            Some(c) => c,
            None => return Err(self.error(LexErrorKind::UnrecognizedOperator(String::new()))),
        };
        self.advance()?;

        let kind = match first {
            '*' => OperatorKind::Multiply,
            '/' => OperatorKind::Divide,
            '%' => OperatorKind::Modulo,
            '+' => OperatorKind::AddOrPositive,
            '-' => OperatorKind::SubtractOrNegative,
            '<' => self.lex_or_equal(OperatorKind::LessThanOrEqual, OperatorKind::LessThan)?,
            '>' => {
                self.lex_or_equal(OperatorKind::GreaterThanOrEqual, OperatorKind::GreaterThan)?
            }
            '=' => self.lex_or_equal(OperatorKind::Equal, OperatorKind::Assignment)?,
            '!' => self.lex_or_equal(OperatorKind::NotEqual, OperatorKind::Not)?,
            '&' => self.lex_doubled('&', OperatorKind::And)?,
            '|' => self.lex_doubled('|', OperatorKind::Or)?,
            other => {
                return Err(self.error(LexErrorKind::UnrecognizedOperator(other.to_string())))
            }
        };

        Ok(Token::Operator(kind))
    }

    /// Picks `with_equal` if the next character is `=`, else `single`.
    fn lex_or_equal(
        &mut self,
        with_equal: OperatorKind,
        single: OperatorKind,
    ) -> Result<OperatorKind> {
        Ok(if self.match_char('=')? { with_equal } else { single })
    }

    /// Operators that only exist doubled (`&&`, `||`).
    fn lex_doubled(&mut self, c: char, kind: OperatorKind) -> Result<OperatorKind> {
        if self.match_char(c)? {
            Ok(kind)
        } else {
            Err(self.error(LexErrorKind::UnrecognizedOperator(c.to_string())))
        }
    }
}
