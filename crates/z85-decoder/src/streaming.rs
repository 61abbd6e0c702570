use std::io::{self, Write};

use z85_wire::{
    ENCODED_CHUNK_LEN, StreamState, WireError, decode_chunk, decode_partial, find_invalid_symbol,
};

use crate::config::{DecoderConfig, SymbolPolicy};
use crate::error::DecodeError;

/// Streaming Z85 decoder: symbols in, raw bytes out to a sink.
///
/// The mirror of `Z85Encoder`. Symbols may arrive in writes of any size;
/// every complete 5-symbol group is decoded and written to the sink
/// during the write that completes it, and the 0–4 leftover symbols wait
/// in a carry buffer. [`close`](Self::close) pads the carry with `#`,
/// decodes it, and writes the first `carry - 1` bytes.
///
/// For any split of the input, the sink receives exactly what
/// [`decode_with`](crate::decode_with) returns for the whole text.
///
/// # Lifecycle
///
/// ```text
///   Open ──close() ok──► Closed     (close again: no-op; write: Closed)
///     │
///     └──sink error────► Failed     (every write/close: same Sink error)
/// ```
///
/// Under [`SymbolPolicy::Strict`] a write containing a non-alphabet byte
/// is rejected whole: nothing from it is consumed, the error carries the
/// byte's offset in the overall stream, and the decoder stays open.
///
/// Dropping the decoder without closing it discards the carry.
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use z85_decoder::Z85Decoder;
///
/// let mut decoder = Z85Decoder::new(Vec::new());
/// decoder.write_all(b"nm=QNzY<").unwrap();
/// decoder.write_all(b"mxA+]nfaP").unwrap();
/// assert_eq!(decoder.finish().unwrap(), b"Hello world!!");
/// ```
pub struct Z85Decoder<W: Write> {
    sink: W,
    config: DecoderConfig,
    carry: [u8; ENCODED_CHUNK_LEN],
    carry_len: usize,
    /// Total symbols accepted so far; base for strict-mode error offsets.
    position: usize,
    out: Vec<u8>,
    state: StreamState,
}

impl<W: Write> Z85Decoder<W> {
    /// Create a permissive decoder.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(sink: W, config: DecoderConfig) -> Self {
        Self {
            sink,
            config,
            carry: [0; ENCODED_CHUNK_LEN],
            carry_len: 0,
            position: 0,
            out: Vec::new(),
            state: StreamState::Open,
        }
    }

    /// Feed encoded symbols to the decoder.
    ///
    /// On success the whole of `input` is consumed and the returned count
    /// equals `input.len()`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Closed`] if the decoder was already closed.
    /// - [`DecodeError::Sink`] if the sink fails now or failed before.
    /// - [`DecodeError::Wire`] for an invalid symbol in strict mode.
    pub fn feed(&mut self, mut input: &[u8]) -> Result<usize, DecodeError> {
        self.check_open()?;
        if self.config.symbols == SymbolPolicy::Strict {
            self.validate(input)?;
        }
        let consumed = input.len();
        self.position += consumed;
        self.out.clear();

        if self.carry_len > 0 {
            let take = (ENCODED_CHUNK_LEN - self.carry_len).min(input.len());
            self.carry[self.carry_len..self.carry_len + take].copy_from_slice(&input[..take]);
            self.carry_len += take;
            input = &input[take..];

            if self.carry_len < ENCODED_CHUNK_LEN {
                return Ok(consumed);
            }
            self.out.extend_from_slice(&decode_chunk(self.carry));
            self.carry_len = 0;
        }

        let mut groups = input.chunks_exact(ENCODED_CHUNK_LEN);
        for group in &mut groups {
            let mut symbols = [0u8; ENCODED_CHUNK_LEN];
            symbols.copy_from_slice(group);
            self.out.extend_from_slice(&decode_chunk(symbols));
        }

        let rest = groups.remainder();
        self.carry[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();

        self.emit()?;
        Ok(consumed)
    }

    /// Decode the carry as a truncated final group and flush the sink.
    ///
    /// A carry of `n` symbols (1–4) is padded with `#` to 5, decoded, and
    /// cut to `n - 1` bytes; a lone trailing symbol writes nothing. After
    /// a successful close, closing again writes nothing and returns
    /// `Ok(())`.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Sink`] if the sink fails now or failed before.
    pub fn close(&mut self) -> Result<(), DecodeError> {
        match &self.state {
            StreamState::Open => {}
            StreamState::Closed => return Ok(()),
            StreamState::Failed(failure) => return Err(DecodeError::Sink(failure.clone())),
        }

        self.out.clear();
        if self.carry_len > 0 {
            tracing::trace!(carry = self.carry_len, "decoding trailing partial group");
            let (bytes, n) = decode_partial(&self.carry[..self.carry_len]);
            self.out.extend_from_slice(&bytes[..n]);
            self.carry_len = 0;
        }
        self.emit()?;

        if let Err(e) = self.sink.flush() {
            return Err(self.sink_failed(&e));
        }

        self.state = StreamState::Closed;
        Ok(())
    }

    /// Close the decoder and return the sink.
    ///
    /// # Errors
    ///
    /// Same as [`close`](Self::close).
    pub fn finish(mut self) -> Result<W, DecodeError> {
        self.close()?;
        Ok(self.sink)
    }

    /// Number of symbols waiting in the carry buffer (0–4).
    #[must_use]
    pub fn carry_len(&self) -> usize {
        self.carry_len
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    fn check_open(&self) -> Result<(), DecodeError> {
        match &self.state {
            StreamState::Open => Ok(()),
            StreamState::Closed => Err(DecodeError::Closed),
            StreamState::Failed(failure) => Err(DecodeError::Sink(failure.clone())),
        }
    }

    fn validate(&self, input: &[u8]) -> Result<(), DecodeError> {
        find_invalid_symbol(input).map_err(|WireError::InvalidSymbol { symbol, offset }| {
            let offset = self.position + offset;
            tracing::debug!(symbol, offset, "rejecting invalid z85 symbol");
            DecodeError::Wire(WireError::InvalidSymbol { symbol, offset })
        })
    }

    fn emit(&mut self) -> Result<(), DecodeError> {
        if self.out.is_empty() {
            return Ok(());
        }
        match self.sink.write_all(&self.out) {
            Ok(()) => Ok(()),
            Err(e) => Err(self.sink_failed(&e)),
        }
    }

    fn sink_failed(&mut self, err: &io::Error) -> DecodeError {
        tracing::debug!(error = %err, "z85 decoder sink failed; stream is now failed");
        DecodeError::Sink(self.state.fail(err))
    }
}

impl<W: Write> Write for Z85Decoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf).map_err(io::Error::from)
    }

    /// Flushes the sink only; the carry is decoded by `close`.
    fn flush(&mut self) -> io::Result<()> {
        match &self.state {
            StreamState::Open => {}
            StreamState::Closed => return Ok(()),
            StreamState::Failed(failure) => return Err(failure.to_io_error()),
        }
        self.sink.flush().map_err(|e| self.sink_failed(&e).into())
    }
}
