use std::io::{self, Write};

use z85_wire::{RAW_CHUNK_LEN, StreamState, encode_chunk, encode_partial};

use crate::error::EncodeError;

/// Streaming Z85 encoder: raw bytes in, Z85 symbols out to a sink.
///
/// Input may arrive in writes of any size. Whole 4-byte groups are
/// encoded and sent to the sink during the write that completes them;
/// the 0–3 bytes left over are held in a carry buffer until the next
/// write. [`close`](Self::close) flushes the carry as a truncated final
/// group, so the sink ends up with exactly what [`encode`](crate::encode)
/// returns for the concatenated input, however it was split.
///
/// ```text
///   write(b"Hel")   carry = "Hel"                      → (nothing)
///   write(b"lo w")  carry = "Hel"+"l" → group, "o w"   → 5 symbols
///   write(b"orld")  "o w"+"o" → group, carry = "rld"   → 5 symbols
///   close()         "rld" padded, truncated to 4       → 4 symbols
/// ```
///
/// # Lifecycle
///
/// - A sink error moves the encoder to a failed state. That write and
///   every later `write` or `close` return the same
///   [`EncodeError::Sink`] without touching the sink again. Groups
///   already handed to the sink stay written.
/// - After a successful `close`, writes fail with [`EncodeError::Closed`]
///   and further closes are no-ops.
/// - Dropping the encoder without closing it discards the carry.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use z85_encoder::Z85Encoder;
///
/// let mut encoder = Z85Encoder::new(Vec::new());
/// encoder.write_all(b"Hello ").unwrap();
/// encoder.write_all(b"world!!").unwrap();
/// let out = encoder.finish().unwrap();
/// assert_eq!(out, b"nm=QNzY<mxA+]nfaP");
/// ```
pub struct Z85Encoder<W: Write> {
    sink: W,
    carry: [u8; RAW_CHUNK_LEN],
    carry_len: usize,
    /// Symbols produced by the current call, sent to the sink in one
    /// `write_all`. Reused across calls.
    out: Vec<u8>,
    state: StreamState,
}

impl<W: Write> Z85Encoder<W> {
    /// Create an open encoder with an empty carry buffer.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            carry: [0; RAW_CHUNK_LEN],
            carry_len: 0,
            out: Vec::new(),
            state: StreamState::Open,
        }
    }

    /// Feed raw bytes to the encoder.
    ///
    /// On success the whole of `input` is consumed and the returned count
    /// equals `input.len()`.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::Closed`] if the encoder was already closed.
    /// - [`EncodeError::Sink`] if the sink fails now or failed before.
    pub fn feed(&mut self, mut input: &[u8]) -> Result<usize, EncodeError> {
        self.check_open()?;
        let consumed = input.len();
        self.out.clear();

        // Complete a pending group first.
        if self.carry_len > 0 {
            let take = (RAW_CHUNK_LEN - self.carry_len).min(input.len());
            self.carry[self.carry_len..self.carry_len + take].copy_from_slice(&input[..take]);
            self.carry_len += take;
            input = &input[take..];

            if self.carry_len < RAW_CHUNK_LEN {
                return Ok(consumed);
            }
            self.out.extend_from_slice(&encode_chunk(self.carry));
            self.carry_len = 0;
        }

        let mut chunks = input.chunks_exact(RAW_CHUNK_LEN);
        for chunk in &mut chunks {
            let mut raw = [0u8; RAW_CHUNK_LEN];
            raw.copy_from_slice(chunk);
            self.out.extend_from_slice(&encode_chunk(raw));
        }

        let rest = chunks.remainder();
        self.carry[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();

        self.emit()?;
        Ok(consumed)
    }

    /// Flush the carry as a truncated final group and flush the sink.
    ///
    /// A carry of `n` bytes (1–3) is zero-padded, encoded, and cut to
    /// `n + 1` symbols. After a successful close the carry is empty and
    /// calling `close` again writes nothing and returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// [`EncodeError::Sink`] if the sink fails while writing the final
    /// group or flushing, or if it failed earlier.
    pub fn close(&mut self) -> Result<(), EncodeError> {
        match &self.state {
            StreamState::Open => {}
            StreamState::Closed => return Ok(()),
            StreamState::Failed(failure) => return Err(EncodeError::Sink(failure.clone())),
        }

        self.out.clear();
        if self.carry_len > 0 {
            tracing::trace!(carry = self.carry_len, "encoding trailing partial group");
            let (symbols, n) = encode_partial(&self.carry[..self.carry_len]);
            self.out.extend_from_slice(&symbols[..n]);
            self.carry_len = 0;
        }
        self.emit()?;

        if let Err(e) = self.sink.flush() {
            return Err(self.sink_failed(&e));
        }

        self.state = StreamState::Closed;
        Ok(())
    }

    /// Close the encoder and return the sink.
    ///
    /// # Errors
    ///
    /// Same as [`close`](Self::close).
    pub fn finish(mut self) -> Result<W, EncodeError> {
        self.close()?;
        Ok(self.sink)
    }

    /// Number of bytes waiting in the carry buffer (0–3).
    #[must_use]
    pub fn carry_len(&self) -> usize {
        self.carry_len
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Mutable access to the sink. Writing to it directly interleaves
    /// with encoded output.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    fn check_open(&self) -> Result<(), EncodeError> {
        match &self.state {
            StreamState::Open => Ok(()),
            StreamState::Closed => Err(EncodeError::Closed),
            StreamState::Failed(failure) => Err(EncodeError::Sink(failure.clone())),
        }
    }

    fn emit(&mut self) -> Result<(), EncodeError> {
        if self.out.is_empty() {
            return Ok(());
        }
        match self.sink.write_all(&self.out) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.sink_failed(&e)),
        }
    }

    fn sink_failed(&mut self, err: &io::Error) -> EncodeError {
        tracing::debug!(error = %err, "z85 encoder sink failed; stream is now failed");
        EncodeError::Sink(self.state.fail(err))
    }
}

impl<W: Write> Write for Z85Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf).map_err(io::Error::from)
    }

    /// Flushes the sink only. The carry is emitted by `close`, never here,
    /// since emitting a partial group mid-stream would corrupt the output.
    fn flush(&mut self) -> io::Result<()> {
        match &self.state {
            StreamState::Open => {}
            StreamState::Closed => return Ok(()),
            StreamState::Failed(failure) => return Err(failure.to_io_error()),
        }
        self.sink.flush().map_err(|e| self.sink_failed(&e).into())
    }
}
