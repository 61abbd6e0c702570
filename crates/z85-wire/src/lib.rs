#![warn(clippy::pedantic)]

pub mod alphabet;
pub mod chunk;
pub mod error;
pub mod stream_state;

pub use alphabet::{ALPHABET, PADDING_SYMBOL, find_invalid_symbol};
pub use chunk::{
    ENCODED_CHUNK_LEN, RAW_CHUNK_LEN, decode_chunk, decode_partial, decoded_len, encode_chunk,
    encode_partial, encoded_len,
};
pub use error::WireError;
pub use stream_state::{SinkFailure, StreamState};
