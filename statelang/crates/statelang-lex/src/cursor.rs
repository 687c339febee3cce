//! Character cursor over a byte stream.
//!
//! This module provides the [`Cursor`] struct which decodes UTF-8 from any
//! [`io::Read`] source one character at a time. It holds exactly one
//! character of lookahead and tracks line/column information for error
//! reporting. The cursor never seeks or rewinds its source.

use std::fmt;
use std::io::{self, BufRead, BufReader, Read};

/// A location in the source stream.
///
/// Line and column are 1-based and counted in characters; the offset is the
/// 0-based byte offset from the start of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
    /// Byte offset (0-based).
    pub offset: usize,
}

impl Position {
    /// Position of the first character of a stream.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    /// Moves past `c`.
    fn advance(&mut self, c: char) {
        self.offset = self.offset.saturating_add(c.len_utf8());
        if c == '\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else {
            self.column = self.column.saturating_add(1);
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A forward-only cursor with a single character of lookahead.
///
/// The lookahead starts out empty; the first call to [`Cursor::advance`]
/// fills it. After the stream is exhausted [`Cursor::current`] returns
/// `None`.
///
/// # Example
///
/// ```
/// use statelang_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab".as_bytes(), 64);
/// cursor.advance().unwrap();
/// assert_eq!(cursor.current(), Some('a'));
/// cursor.advance().unwrap();
/// assert_eq!(cursor.current(), Some('b'));
/// cursor.advance().unwrap();
/// assert_eq!(cursor.current(), None);
/// ```
pub struct Cursor<R> {
    /// Buffered source.
    reader: BufReader<R>,

    /// The lookahead character, `None` before the first advance and at end.
    current: Option<char>,

    /// Position of the lookahead character.
    position: Position,
}

impl<R: Read> Cursor<R> {
    /// Creates a cursor reading from `reader` through a buffer of
    /// `capacity` bytes. A zero capacity is raised to one byte, since an
    /// empty buffer would read as end of stream.
    pub fn new(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            current: None,
            position: Position::START,
        }
    }

    /// Returns the lookahead character.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Returns the position of the lookahead character, or the position
    /// just past the last character once the stream is exhausted.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns true if the lookahead is empty.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the lookahead satisfies `predicate`.
    #[inline]
    pub fn current_is(&self, predicate: impl FnOnce(char) -> bool) -> bool {
        self.current.is_some_and(predicate)
    }

    /// Consumes the lookahead and reads the next character in its place.
    ///
    /// If the read fails the lookahead is left empty, so the cursor reports
    /// end of stream from then on.
    pub fn advance(&mut self) -> io::Result<()> {
        if let Some(c) = self.current.take() {
            self.position.advance(c);
        }
        self.current = self.read_char()?;
        Ok(())
    }

    /// Consumes the lookahead and returns it.
    pub fn bump(&mut self) -> io::Result<Option<char>> {
        let c = self.current;
        self.advance()?;
        Ok(c)
    }

    /// Consumes the lookahead if it equals `expected`.
    ///
    /// Returns whether a character was consumed.
    pub fn match_char(&mut self, expected: char) -> io::Result<bool> {
        if self.current == Some(expected) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the underlying reader.
    ///
    /// Bytes already pulled into the internal buffer are discarded.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            let byte = match self.reader.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if byte.is_some() {
                self.reader.consume(1);
            }
            return Ok(byte);
        }
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        let lead = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let len = utf8_sequence_length(lead).ok_or_else(|| {
            invalid_utf8(format!(
                "invalid UTF-8 lead byte 0x{:02X} at byte offset {}",
                lead, self.position.offset
            ))
        })?;

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(len).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| {
                invalid_utf8(format!(
                    "incomplete UTF-8 sequence at byte offset {}",
                    self.position.offset
                ))
            })?;
        }

        let text = std::str::from_utf8(&bytes[..len])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(text.chars().next())
    }
}

/// Number of bytes in the UTF-8 sequence introduced by `lead_byte`.
fn utf8_sequence_length(lead_byte: u8) -> Option<usize> {
    match lead_byte {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
