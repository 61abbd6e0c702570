use z85_wire::{
    ENCODED_CHUNK_LEN, decode_chunk, decode_partial, decoded_len, find_invalid_symbol,
};

use crate::config::{DecoderConfig, SymbolPolicy};
use crate::error::DecodeError;

/// Decode complete Z85 text into bytes.
///
/// Every 5 symbols become 4 bytes. A trailing group of `r` symbols
/// (1–4) is padded with `#`, decoded, and cut to `r - 1` bytes, so a
/// single trailing symbol contributes nothing. Bytes outside the
/// alphabet are read as digit 0; use [`decode_with`] with
/// [`DecoderConfig::strict`] to reject them instead.
///
/// | Input                   | Output                       |
/// |-------------------------|------------------------------|
/// | `""`                    | `[]`                         |
/// | `"li"`                  | `[0x42]`                     |
/// | `"Hello"`               | `[0x86, 0x4F, 0xD2, 0x6F]`   |
/// | `"Hello0"`              | `[0x86, 0x4F, 0xD2, 0x6F]`   |
/// | `"nm=QNzY<mxA+]nfaP"`   | `b"Hello world!!"`           |
///
/// ```rust
/// assert_eq!(z85_decoder::decode("Hello"), [0x86, 0x4F, 0xD2, 0x6F]);
/// ```
#[must_use]
pub fn decode(text: impl AsRef<[u8]>) -> Vec<u8> {
    decode_unchecked(text.as_ref())
}

/// Decode Z85 text under the given configuration.
///
/// # Errors
///
/// With [`SymbolPolicy::Strict`], [`DecodeError::Wire`] carrying the
/// first out-of-alphabet byte and its offset. Permissive decoding
/// never fails.
pub fn decode_with(text: impl AsRef<[u8]>, config: &DecoderConfig) -> Result<Vec<u8>, DecodeError> {
    let text = text.as_ref();
    if config.symbols == SymbolPolicy::Strict {
        find_invalid_symbol(text)?;
    }
    Ok(decode_unchecked(text))
}

fn decode_unchecked(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(decoded_len(text.len()));

    let mut groups = text.chunks_exact(ENCODED_CHUNK_LEN);
    for group in &mut groups {
        let mut symbols = [0u8; ENCODED_CHUNK_LEN];
        symbols.copy_from_slice(group);
        out.extend_from_slice(&decode_chunk(symbols));
    }

    let (bytes, n) = decode_partial(groups.remainder());
    out.extend_from_slice(&bytes[..n]);

    out
}
