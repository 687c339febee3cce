//! Number literal lexing.
//!
//! This module handles lexing of integer and floating-point literals.

use std::io::Read;

use crate::error::{LexErrorKind, Result};
use crate::token::Token;
use crate::Lexer;

impl<R: Read> Lexer<R> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `2147483647`
    /// - Float: `3.14`, `123.5`, `0.25`
    ///
    /// There is no sign, exponent or radix prefix. After the integer part
    /// the `.` has to be consumed before the next character can be seen, so
    /// `123.` without a fractional digit is an error rather than an integer
    /// followed by a dot.
    ///
    /// # Returns
    ///
    /// Either `Token::IntLiteral(i32)` or `Token::FloatLiteral(f32)`
    pub(crate) fn lex_number(&mut self) -> Result<Token> {
        let mut text = String::new();
        self.take_digits(&mut text)?;

        if !self.match_char('.')? {
            return self.finish_integer(text);
        }
        text.push('.');

        if !self.cursor.current_is(|c| c.is_ascii_digit()) {
            return Err(self.error(LexErrorKind::MalformedNumber(text)));
        }
        self.take_digits(&mut text)?;

        match text.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(Token::FloatLiteral(value)),
            Ok(_) => Err(self.error(LexErrorKind::NumberOverflow(text))),
            Err(_) => Err(self.error(LexErrorKind::MalformedNumber(text))),
        }
    }

    /// Appends the run of decimal digits at the lookahead to `text`.
    ///
    /// The literal's full text, including any `.`, counts against the
    /// configured length limit.
    fn take_digits(&mut self, text: &mut String) -> Result<()> {
        while let Some(c) = self.cursor.current().filter(char::is_ascii_digit) {
            text.push(c);
            self.advance()?;
            self.check_literal_len(text.len())?;
        }
        Ok(())
    }

    fn finish_integer(&self, text: String) -> Result<Token> {
        match text.parse::<i32>() {
            Ok(value) => Ok(Token::IntLiteral(value)),
            Err(_) => Err(self.error(LexErrorKind::NumberOverflow(text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LexerConfig;
    use crate::error::{LexErrorKind, Result};
    use crate::token::Token;
    use crate::Lexer;

    fn lex_num(source: &str) -> Result<Option<Token>> {
        Lexer::from_source(source).next_token()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex_num("42").unwrap(), Some(Token::IntLiteral(42)));
        assert_eq!(lex_num("0").unwrap(), Some(Token::IntLiteral(0)));
        assert_eq!(lex_num("123").unwrap(), Some(Token::IntLiteral(123)));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(lex_num("007").unwrap(), Some(Token::IntLiteral(7)));
    }

    #[test]
    fn test_i32_bounds() {
        assert_eq!(lex_num("2147483647").unwrap(), Some(Token::IntLiteral(i32::MAX)));
        let err = lex_num("2147483648").unwrap_err();
        assert!(
            matches!(err.kind(), LexErrorKind::NumberOverflow(text) if text == "2147483648")
        );
    }

    #[test]
    fn test_huge_integer_overflows() {
        let err = lex_num("99999999999999999999999").unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::NumberOverflow(_)));
    }

    #[test]
    fn test_float() {
        assert_eq!(lex_num("123.5").unwrap(), Some(Token::FloatLiteral(123.5)));
        assert_eq!(lex_num("0.25").unwrap(), Some(Token::FloatLiteral(0.25)));
    }

    #[test]
    fn test_float_approximation() {
        let token = lex_num("3.14").unwrap();
        assert!(matches!(token, Some(Token::FloatLiteral(f)) if (f - 3.14).abs() < 0.001));
    }

    #[test]
    fn test_float_with_large_integer_part_is_not_overflow() {
        // 2^31 does not fit an i32 but is an ordinary f32.
        assert_eq!(
            lex_num("2147483648.0").unwrap(),
            Some(Token::FloatLiteral(2147483648.0))
        );
    }

    #[test]
    fn test_float_out_of_range() {
        let source = format!("{}.0", "9".repeat(40));
        let err = lex_num(&source).unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::NumberOverflow(_)));
    }

    #[test]
    fn test_trailing_dot_is_malformed() {
        let err = lex_num("123.").unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::MalformedNumber(text) if text == "123."));

        let err = lex_num("123.x").unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::MalformedNumber(_)));
    }

    #[test]
    fn test_leading_dot_is_unrecognized() {
        let err = lex_num(".5").unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::UnrecognizedCharacter('.')));
    }

    #[test]
    fn test_number_stops_at_letter() {
        let tokens = Lexer::from_source("12ab").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![Token::IntLiteral(12), Token::Identifier("ab".to_string())]
        );
    }

    #[test]
    fn test_second_dot_ends_float() {
        let mut lexer = Lexer::from_source("1.5.3");
        assert_eq!(lexer.next_token().unwrap(), Some(Token::FloatLiteral(1.5)));
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::UnrecognizedCharacter('.')));
    }

    fn limited(source: &str, limit: usize) -> Result<Option<Token>> {
        let config = LexerConfig {
            max_literal_len: Some(limit),
            ..Default::default()
        };
        Lexer::with_config(source.as_bytes(), config).next_token()
    }

    #[test]
    fn test_integer_length_limit() {
        assert_eq!(limited("1234", 4).unwrap(), Some(Token::IntLiteral(1234)));

        let source = format!("{}1", "0".repeat(100_000));
        let err = limited(&source, 4).unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::LiteralTooLong { limit: 4 }));
        assert_eq!(err.position().column, 1);
    }

    #[test]
    fn test_float_length_limit() {
        assert_eq!(limited("1.25", 4).unwrap(), Some(Token::FloatLiteral(1.25)));

        let source = format!("1.{}", "0".repeat(100_000));
        let err = limited(&source, 4).unwrap_err();
        assert!(matches!(err.kind(), LexErrorKind::LiteralTooLong { limit: 4 }));
    }

    #[test]
    fn test_minus_is_an_operator() {
        let tokens = Lexer::from_source("-5").tokenize().unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].as_operator().is_some());
        assert_eq!(tokens[1], Token::IntLiteral(5));
    }
}
