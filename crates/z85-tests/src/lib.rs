//! Shared support for the Z85 integration tests and benches.
//!
//! - [`FaultySink`]: a `Write` sink that accepts a fixed number of bytes
//!   and then fails, counting any attempts made after the failure.
//! - [`stream_encode`] / [`stream_decode`]: drive the streaming codecs
//!   with writes cut to a repeating pattern of piece sizes.

use std::io::{self, Write};

use z85_decoder::{DecodeError, DecoderConfig, Z85Decoder};
use z85_encoder::{EncodeError, Z85Encoder};

/// Sink that accepts `budget` bytes and then fails every write with `kind`.
#[derive(Debug)]
pub struct FaultySink {
    pub written: Vec<u8>,
    pub budget: usize,
    pub kind: io::ErrorKind,
    /// Writes attempted after the budget ran out.
    pub attempts_after_failure: usize,
}

impl FaultySink {
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self::with_kind(budget, io::ErrorKind::BrokenPipe)
    }

    #[must_use]
    pub fn with_kind(budget: usize, kind: io::ErrorKind) -> Self {
        Self {
            written: Vec::new(),
            budget,
            kind,
            attempts_after_failure: 0,
        }
    }
}

impl Write for FaultySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.budget == 0 {
            self.attempts_after_failure += 1;
            return Err(io::Error::new(self.kind, "sink budget exhausted"));
        }
        let n = buf.len().min(self.budget);
        self.written.extend_from_slice(&buf[..n]);
        self.budget -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Cut `data` into consecutive pieces whose sizes cycle through `pattern`.
///
/// Zero sizes in `pattern` are treated as 1 so every piece makes progress;
/// an empty pattern yields `data` in one piece.
pub fn split_pieces<'a>(data: &'a [u8], pattern: &[usize]) -> Vec<&'a [u8]> {
    if pattern.is_empty() {
        return vec![data];
    }
    let mut pieces = Vec::new();
    let mut rest = data;
    for &size in pattern.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(size.max(1).min(rest.len()));
        pieces.push(head);
        rest = tail;
    }
    pieces
}

/// Stream-encode `data` in writes cut to `pattern`, then close.
///
/// # Errors
///
/// Propagates any [`EncodeError`] from the encoder.
pub fn stream_encode(data: &[u8], pattern: &[usize]) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = Z85Encoder::new(Vec::new());
    for piece in split_pieces(data, pattern) {
        encoder.feed(piece)?;
    }
    encoder.finish()
}

/// Stream-decode `text` in writes cut to `pattern`, then close.
///
/// # Errors
///
/// Propagates any [`DecodeError`] from the decoder.
pub fn stream_decode(
    text: &[u8],
    pattern: &[usize],
    config: DecoderConfig,
) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Z85Decoder::with_config(Vec::new(), config);
    for piece in split_pieces(text, pattern) {
        decoder.feed(piece)?;
    }
    decoder.finish()
}
