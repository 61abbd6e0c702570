#![no_main]

use libfuzzer_sys::fuzz_target;
use z85_decoder::DecoderConfig;

// Fuzz target: permissive and strict bulk decode of arbitrary bytes.
//
// Catches bugs in:
// - Overflowing groups (values >= 2^32 must wrap, not panic)
// - Trailing groups of every length, including a lone symbol
// - Non-alphabet bytes (permissive: digit 0; strict: error, never panic)
fuzz_target!(|data: &[u8]| {
    let permissive = z85_decoder::decode(data);
    assert_eq!(permissive.len(), z85_wire::decoded_len(data.len()));

    if let Ok(strict) = z85_decoder::decode_with(data, &DecoderConfig::strict()) {
        assert_eq!(strict, permissive);
    }
});
