//! Shared helpers for the statelang-lex integration tests.

#![allow(dead_code)]

use std::io::{self, Read};

use statelang_lex::{Lexer, Result, Token};

/// Installs a test-friendly tracing subscriber once per process.
///
/// Set `RUST_LOG=statelang_lex=trace` to see every scanned token.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Lexes an in-memory source to the end.
pub fn lex_all(source: &str) -> Result<Vec<Token>> {
    Lexer::from_source(source).tokenize()
}

/// Reader that hands out at most `chunk` bytes per call.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self { data, chunk }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that yields `data` and then fails with `kind`.
pub struct FailingReader<'a> {
    data: &'a [u8],
    kind: io::ErrorKind,
}

impl<'a> FailingReader<'a> {
    pub fn new(data: &'a [u8], kind: io::ErrorKind) -> Self {
        Self { data, kind }
    }
}

impl Read for FailingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(self.kind, "simulated read failure"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Reader that is interrupted before every successful read.
pub struct InterruptingReader<'a> {
    data: &'a [u8],
    interrupt_next: bool,
}

impl<'a> InterruptingReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            interrupt_next: true,
        }
    }
}

impl Read for InterruptingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let n = buf.len().min(self.data.len()).min(1);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}
