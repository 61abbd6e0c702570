use z85_wire::{RAW_CHUNK_LEN, encode_chunk, encode_partial, encoded_len};

/// Encode a complete byte slice as Z85 text.
///
/// Every 4 input bytes become 5 symbols. A trailing group of 1–3 bytes
/// is zero-padded, encoded, and cut to `len + 1` symbols, so the output
/// is exactly [`encoded_len`] symbols long and nothing is appended to
/// mark the padding.
///
/// | Input                          | Output                |
/// |--------------------------------|-----------------------|
/// | `[]`                           | `""`                  |
/// | `[0x42]`                       | `"li"`                |
/// | `[0x86, 0x4F, 0xD2, 0x6F]`     | `"Hello"`             |
/// | `b"Hello world!!"`             | `"nm=QNzY<mxA+]nfaP"` |
///
/// ```rust
/// assert_eq!(z85_encoder::encode(&[0x86, 0x4F, 0xD2, 0x6F]), "Hello");
/// ```
#[must_use]
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    let mut chunks = data.chunks_exact(RAW_CHUNK_LEN);
    for chunk in &mut chunks {
        let mut raw = [0u8; RAW_CHUNK_LEN];
        raw.copy_from_slice(chunk);
        push_symbols(&mut out, &encode_chunk(raw));
    }

    let (symbols, n) = encode_partial(chunks.remainder());
    push_symbols(&mut out, &symbols[..n]);

    out
}

// Alphabet symbols are ASCII, so each byte is one char.
fn push_symbols(out: &mut String, symbols: &[u8]) {
    out.extend(symbols.iter().copied().map(char::from));
}
