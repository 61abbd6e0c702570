use std::io;

use z85_wire::{SinkFailure, WireError};

/// Errors that can occur during Z85 decoding.
///
/// Permissive bulk [`decode`](crate::decode) never fails. Strict
/// decoding adds symbol validation, and the streaming decoder adds its
/// sink and lifecycle errors.
///
/// ```text
///   DecodeError
///   ├── Closed              ← write after a successful close()
///   ├── Sink(SinkFailure)   ← output sink failed (sticky)
///   └── Wire(WireError)     ← invalid symbol under SymbolPolicy::Strict
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("write after decoder was closed")]
    Closed,

    /// The sink failed. Every later operation on the same decoder
    /// returns this same failure.
    #[error("output sink failed: {0}")]
    Sink(SinkFailure),

    #[error(transparent)]
    Wire(#[from] WireError),
}

impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Sink(failure) => failure.to_io_error(),
            DecodeError::Wire(wire) => io::Error::new(io::ErrorKind::InvalidData, wire),
            DecodeError::Closed => io::Error::other(DecodeError::Closed),
        }
    }
}
