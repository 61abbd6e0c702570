use std::io;

use z85_wire::SinkFailure;

/// Errors that can occur while streaming Z85 output.
///
/// Bulk [`encode`](crate::encode) is infallible; only the streaming
/// encoder fails, and only because of its sink or its lifecycle.
///
/// ```text
///   EncodeError
///   ├── Closed              ← write after a successful close()
///   └── Sink(SinkFailure)   ← output sink failed (sticky)
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("write after encoder was closed")]
    Closed,

    #[error("output sink failed: {0}")]
    Sink(SinkFailure),
}

impl From<EncodeError> for io::Error {
    /// Sink failures keep the sink's original `ErrorKind`, so callers of
    /// the `io::Write` impl see the same kind the sink reported.
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::Sink(failure) => failure.to_io_error(),
            EncodeError::Closed => io::Error::other(EncodeError::Closed),
        }
    }
}
