//! Character classes used by the statelang lexer.
//!
//! Identifiers are ASCII-only; any other character outside string literals
//! is rejected by the dispatch step.

/// Checks if a character is skipped between tokens.
///
/// Only space, tab, carriage return and line feed count as whitespace.
///
/// # Example
///
/// ```
/// use statelang_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\r'));
/// assert!(!is_whitespace('\u{000B}'));  // vertical tab
/// assert!(!is_whitespace('\u{00A0}'));  // no-break space
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character is a valid ASCII identifier start.
///
/// # Example
///
/// ```
/// use statelang_lex::unicode::is_ascii_ident_start;
///
/// assert!(is_ascii_ident_start('a'));
/// assert!(is_ascii_ident_start('Z'));
/// assert!(is_ascii_ident_start('_'));
/// assert!(!is_ascii_ident_start('α'));
/// assert!(!is_ascii_ident_start('1'));
/// ```
#[inline]
pub fn is_ascii_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an ASCII identifier.
///
/// # Example
///
/// ```
/// use statelang_lex::unicode::is_ascii_ident_continue;
///
/// assert!(is_ascii_ident_continue('a'));
/// assert!(is_ascii_ident_continue('9'));
/// assert!(is_ascii_ident_continue('_'));
/// assert!(!is_ascii_ident_continue('-'));
/// ```
#[inline]
pub fn is_ascii_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_letters_are_not_identifiers() {
        for c in ['é', 'ß', 'Ж', '中'] {
            assert!(!is_ascii_ident_start(c));
            assert!(!is_ascii_ident_continue(c));
        }
    }

    #[test]
    fn test_digits_continue_but_do_not_start() {
        for c in '0'..='9' {
            assert!(!is_ascii_ident_start(c));
            assert!(is_ascii_ident_continue(c));
        }
    }

    #[test]
    fn test_form_feed_is_not_whitespace() {
        assert!(!is_whitespace('\u{000C}'));
    }
}
