//! Property tests for the Z85 codec.
//!
//! - **Round-trip**: `decode(encode(b)) == b` for arbitrary `b`.
//! - **Split invariance**: the streaming encoder and decoder produce the
//!   bulk output no matter how their input is cut into writes, with the
//!   encoded text re-cut independently before decoding.
//! - **Length law**: output lengths follow `encoded_len` / `decoded_len`.

use proptest::prelude::*;
use z85_decoder::{DecoderConfig, decode, decode_with};
use z85_encoder::encode;
use z85_tests::{stream_decode, stream_encode};
use z85_wire::{ALPHABET, decoded_len, encoded_len};

fn raw_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..600)
}

fn write_pattern() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=11, 1..6)
}

/// Text built only from alphabet symbols, any length.
fn z85_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(ALPHABET.as_slice()), 0..600)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn bulk_roundtrip(data in raw_bytes()) {
        let encoded = encode(&data);
        prop_assert_eq!(decode(&encoded), data);
    }

    #[test]
    fn encoded_text_is_strictly_valid(data in raw_bytes()) {
        let encoded = encode(&data);
        prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
        prop_assert_eq!(decode_with(&encoded, &DecoderConfig::strict()).unwrap(), data);
    }

    #[test]
    fn length_law(data in raw_bytes()) {
        let encoded = encode(&data);
        prop_assert_eq!(encoded.len(), encoded_len(data.len()));
        if data.len() % 4 == 0 {
            prop_assert_eq!(encoded.len(), data.len() / 4 * 5);
        } else {
            prop_assert_eq!(encoded.len(), data.len() + data.len().div_ceil(4));
        }
        prop_assert_eq!(decoded_len(encoded.len()), data.len());
    }

    #[test]
    fn stream_encode_matches_bulk(data in raw_bytes(), pattern in write_pattern()) {
        let streamed = stream_encode(&data, &pattern).unwrap();
        prop_assert_eq!(streamed, encode(&data).into_bytes());
    }

    #[test]
    fn stream_decode_matches_bulk(text in z85_text(), pattern in write_pattern()) {
        let streamed = stream_decode(&text, &pattern, DecoderConfig::default()).unwrap();
        let bulk = decode(&text);
        prop_assert_eq!(streamed.len(), decoded_len(text.len()));
        prop_assert_eq!(streamed, bulk);
    }

    #[test]
    fn stream_roundtrip_with_independent_splits(
        data in raw_bytes(),
        encode_pattern in write_pattern(),
        decode_pattern in write_pattern(),
    ) {
        let encoded = stream_encode(&data, &encode_pattern).unwrap();
        let decoded = stream_decode(&encoded, &decode_pattern, DecoderConfig::strict()).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn permissive_decode_never_panics(text in prop::collection::vec(any::<u8>(), 0..300)) {
        let bulk = decode(&text);
        prop_assert_eq!(bulk.len(), decoded_len(text.len()));
        let streamed = stream_decode(&text, &[3, 7], DecoderConfig::default()).unwrap();
        prop_assert_eq!(streamed, bulk);
    }
}

#[test]
fn roundtrip_every_length_up_to_three_groups() {
    let data: Vec<u8> = (0u8..=255).rev().collect();
    for len in 0..=12 {
        for start in [0, 1, 100, 243] {
            let slice = &data[start..start + len];
            assert_eq!(decode(encode(slice)), slice, "start {start}, len {len}");
        }
    }
}
