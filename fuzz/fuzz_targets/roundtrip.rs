#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: bulk encode -> decode roundtrip.
//
// Asserts the encoded text has the expected length, uses only alphabet
// symbols, and decodes back to the input.
fuzz_target!(|data: &[u8]| {
    let encoded = z85_encoder::encode(data);
    assert_eq!(encoded.len(), z85_wire::encoded_len(data.len()));
    assert!(z85_wire::find_invalid_symbol(encoded.as_bytes()).is_ok());

    let decoded = z85_decoder::decode(&encoded);
    assert_eq!(decoded, data);
});
