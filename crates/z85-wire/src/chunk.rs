use crate::alphabet::{ALPHABET, PADDING_SYMBOL, digit};

/// Raw bytes per chunk.
pub const RAW_CHUNK_LEN: usize = 4;

/// Encoded symbols per chunk.
pub const ENCODED_CHUNK_LEN: usize = 5;

/// Encode one 4-byte group as 5 alphabet symbols.
///
/// The group is read as a big-endian `u32` and written out as five
/// base-85 digits, most significant first.
///
/// | Input                    | Output    |
/// |--------------------------|-----------|
/// | `00 00 00 00`            | `"00000"` |
/// | `86 4F D2 6F`            | `"Hello"` |
/// | `FF FF FF FF`            | `"%nSc0"` |
#[must_use]
pub fn encode_chunk(chunk: [u8; RAW_CHUNK_LEN]) -> [u8; ENCODED_CHUNK_LEN] {
    let mut value = u32::from_be_bytes(chunk);
    let mut out = [0u8; ENCODED_CHUNK_LEN];
    for symbol in out.iter_mut().rev() {
        *symbol = ALPHABET[(value % 85) as usize];
        value /= 85;
    }
    out
}

/// Decode one 5-symbol group into 4 bytes.
///
/// No validation happens here: bytes outside the alphabet count as
/// digit 0. Five symbols can express values up to `85^5 - 1`, which is
/// above `u32::MAX`; those groups wrap modulo `2^32` instead of failing.
/// The encoder never produces them.
#[must_use]
pub fn decode_chunk(chunk: [u8; ENCODED_CHUNK_LEN]) -> [u8; RAW_CHUNK_LEN] {
    let value = chunk.iter().fold(0u32, |acc, &symbol| {
        acc.wrapping_mul(85).wrapping_add(u32::from(digit(symbol)))
    });
    value.to_be_bytes()
}

/// Encode a trailing group of fewer than 4 bytes.
///
/// The group is zero-padded on the right, encoded, and cut back to
/// `tail.len() + 1` symbols. Returns the symbol buffer and how many of
/// its leading symbols are valid (0 for an empty tail).
///
/// # Panics
///
/// Panics if `tail` holds 4 or more bytes.
#[must_use]
pub fn encode_partial(tail: &[u8]) -> ([u8; ENCODED_CHUNK_LEN], usize) {
    assert!(tail.len() < RAW_CHUNK_LEN, "partial group too long: {}", tail.len());
    if tail.is_empty() {
        return ([0; ENCODED_CHUNK_LEN], 0);
    }
    let mut padded = [0u8; RAW_CHUNK_LEN];
    padded[..tail.len()].copy_from_slice(tail);
    (encode_chunk(padded), tail.len() + 1)
}

/// Decode a trailing group of fewer than 5 symbols.
///
/// The group is padded on the right with [`PADDING_SYMBOL`], decoded,
/// and cut back to `tail.len() - 1` bytes. A single trailing symbol
/// therefore decodes to nothing. Returns the byte buffer and how many of
/// its leading bytes are valid.
///
/// # Panics
///
/// Panics if `tail` holds 5 or more symbols.
#[must_use]
pub fn decode_partial(tail: &[u8]) -> ([u8; RAW_CHUNK_LEN], usize) {
    assert!(tail.len() < ENCODED_CHUNK_LEN, "partial group too long: {}", tail.len());
    if tail.is_empty() {
        return ([0; RAW_CHUNK_LEN], 0);
    }
    let mut padded = [PADDING_SYMBOL; ENCODED_CHUNK_LEN];
    padded[..tail.len()].copy_from_slice(tail);
    (decode_chunk(padded), tail.len() - 1)
}

/// Number of symbols needed to encode `raw_len` bytes.
///
/// Full groups take 5 symbols; a trailing group of `r` bytes takes `r + 1`.
#[must_use]
pub const fn encoded_len(raw_len: usize) -> usize {
    let rem = raw_len % RAW_CHUNK_LEN;
    let tail = if rem == 0 { 0 } else { rem + 1 };
    raw_len / RAW_CHUNK_LEN * ENCODED_CHUNK_LEN + tail
}

/// Number of bytes produced by decoding `encoded_len` symbols.
///
/// A trailing group of `r` symbols yields `r - 1` bytes, so a lone
/// trailing symbol yields nothing.
#[must_use]
pub const fn decoded_len(encoded_len: usize) -> usize {
    let rem = encoded_len % ENCODED_CHUNK_LEN;
    let tail = if rem == 0 { 0 } else { rem - 1 };
    encoded_len / ENCODED_CHUNK_LEN * RAW_CHUNK_LEN + tail
}
