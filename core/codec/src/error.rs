use std::convert::From;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No payload was supplied, as opposed to an empty one.
    #[error("payload must not be absent")]
    MissingPayload,

    #[error("buffer too small")]
    BufferTooSmall,

    /// Unexpected failure while building bytes. `source` keeps the root cause.
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn internal(context: &'static str, source: io::Error) -> Error {
        Error::Internal { context, source }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::UnexpectedEof | io::ErrorKind::WriteZero => Error::BufferTooSmall,
            _ => Error::internal("failed to build header", error),
        }
    }
}
