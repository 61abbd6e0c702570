#![no_main]

use std::io::Write;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use z85_decoder::{DecoderConfig, Z85Decoder};
use z85_encoder::Z85Encoder;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    data: Vec<u8>,
    /// Write sizes for the encoder, cycled. Zero is bumped to 1.
    encode_splits: Vec<u8>,
    /// Write sizes for the decoder, cycled independently.
    decode_splits: Vec<u8>,
}

fn pieces<'a>(data: &'a [u8], splits: &[u8]) -> Vec<&'a [u8]> {
    if splits.is_empty() {
        return vec![data];
    }
    let mut out = Vec::new();
    let mut rest = data;
    for &size in splits.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(usize::from(size.max(1)).min(rest.len()));
        out.push(head);
        rest = tail;
    }
    out
}

// Fuzz target: streaming encode -> streaming decode with independent
// write splits on each side.
//
// The streamed text must equal the bulk encoding, and the streamed
// decode must reproduce the input exactly.
fuzz_target!(|input: FuzzInput| {
    let mut encoder = Z85Encoder::new(Vec::new());
    for piece in pieces(&input.data, &input.encode_splits) {
        encoder.write_all(piece).unwrap();
    }
    let encoded = encoder.finish().unwrap();
    assert_eq!(encoded, z85_encoder::encode(&input.data).into_bytes());

    let mut decoder = Z85Decoder::with_config(Vec::new(), DecoderConfig::strict());
    for piece in pieces(&encoded, &input.decode_splits) {
        decoder.write_all(piece).unwrap();
    }
    let decoded = decoder.finish().unwrap();
    assert_eq!(decoded, input.data);
});
