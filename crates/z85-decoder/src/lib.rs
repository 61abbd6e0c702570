#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod streaming;

pub use config::{DecoderConfig, SymbolPolicy};
pub use decoder::{decode, decode_with};
pub use error::DecodeError;
pub use streaming::Z85Decoder;
