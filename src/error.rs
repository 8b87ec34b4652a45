use std::fmt::Formatter;

use http::StatusCode;

use crate::context::ContextError;
use crate::Response;

/// The error returned by every [`Client`](crate::Client).
///
/// Errors raised after a response came back (validation and decoding
/// failures) keep that response so the caller can still look at its status,
/// headers and body.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    response: Option<Response>,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("invalid request method: {0}")]
    InvalidMethod(#[source] http::method::InvalidMethod),
    #[error("invalid request address: {0}")]
    InvalidUri(#[source] http::uri::InvalidUri),
    #[error("invalid header: {0}")]
    InvalidHeader(#[source] http::Error),
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
    #[error("invalid status code: expected {}, got {}", .expected.as_u16(), .actual.as_u16())]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("missing body in response")]
    MissingBody,
    #[error("received errors in header {header}: {value:?}")]
    HeaderError { header: String, value: String },
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("failed to read body: {0}")]
    Body(#[source] std::io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            response: None,
        }
    }

    /// An opaque failure reported by a transport.
    pub fn transport<E>(error: E) -> Error
    where
        E: Into<anyhow::Error>,
    {
        Error::new(ErrorKind::Transport(error.into()))
    }

    pub fn with_response(mut self, response: Response) -> Error {
        self.response = Some(response);
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn response_mut(&mut self) -> Option<&mut Response> {
        self.response.as_mut()
    }

    pub fn into_response(self) -> Option<Response> {
        self.response
    }

    pub fn into_parts(self) -> (ErrorKind, Option<Response>) {
        (self.kind, self.response)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Context(ContextError::Cancelled))
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self.kind, ErrorKind::Context(ContextError::DeadlineExceeded))
    }

    /// The transport delivered a response but a decorator rejected it.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnexpectedStatus { .. } | ErrorKind::MissingBody | ErrorKind::HeaderError { .. }
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

impl From<ContextError> for Error {
    fn from(error: ContextError) -> Self {
        Error::new(error.into())
    }
}
