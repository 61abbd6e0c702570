#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;
pub mod streaming;

pub use encoder::encode;
pub use error::EncodeError;
pub use streaming::Z85Encoder;
