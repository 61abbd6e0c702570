use std::fmt;
use std::io;

/// Lifecycle of a streaming encoder or decoder.
///
/// ```text
///            close() ok
///   Open ───────────────► Closed
///     │
///     │ sink error (write or close)
///     ▼
///   Failed(SinkFailure) ──► Failed(SinkFailure) ──► ...
/// ```
///
/// `Failed` is terminal: once a sink write fails, every later `write`
/// and `close` returns the same [`SinkFailure`] without touching the
/// sink again. `Closed` is terminal too; a second close is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum StreamState {
    #[default]
    Open,
    Closed,
    Failed(SinkFailure),
}

impl StreamState {
    /// Record a sink error and return the failure to report.
    pub fn fail(&mut self, err: &io::Error) -> SinkFailure {
        let failure = SinkFailure::from(err);
        *self = Self::Failed(failure.clone());
        failure
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn failure(&self) -> Option<&SinkFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Snapshot of the first error returned by an output sink.
///
/// `io::Error` is not `Clone`, so the kind and message are kept and a
/// fresh `io::Error` is rebuilt each time the failure is re-reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkFailure {
    kind: io::ErrorKind,
    message: String,
}

impl SinkFailure {
    #[must_use]
    pub fn new(kind: io::ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rebuild an `io::Error` with the original kind and message.
    #[must_use]
    pub fn to_io_error(&self) -> io::Error {
        io::Error::new(self.kind, self.message.clone())
    }
}

impl From<&io::Error> for SinkFailure {
    fn from(err: &io::Error) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
