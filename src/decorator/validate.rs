use http::{HeaderName, StatusCode};
use tracing::debug;

use crate::error::ErrorKind;
use crate::{Client, Error, Request, Response, Result};

/// The header [`CheckHeaderError`] looks at unless told otherwise.
pub const ERRORS_HEADER: &str = "errors";

/// Fails any response whose status is not the expected one.
#[derive(Debug, Clone)]
pub struct CheckStatus<C> {
    inner: C,
    expected: StatusCode,
}

impl<C> CheckStatus<C> {
    pub fn new(inner: C, expected: StatusCode) -> CheckStatus<C> {
        CheckStatus { inner, expected }
    }
}

impl<C: Client> Client for CheckStatus<C> {
    fn submit(&self, request: Request) -> Result<Response> {
        let response = self.inner.submit(request)?;
        let actual = response.status();
        if actual != self.expected {
            debug!(expected = %self.expected, actual = %actual, "unexpected status code");
            let kind = ErrorKind::UnexpectedStatus {
                expected: self.expected,
                actual,
            };
            return Err(Error::new(kind).with_response(response));
        }
        Ok(response)
    }
}

/// Fails any response that came back without a body.
#[derive(Debug, Clone)]
pub struct CheckBody<C> {
    inner: C,
}

impl<C> CheckBody<C> {
    pub fn new(inner: C) -> CheckBody<C> {
        CheckBody { inner }
    }
}

impl<C: Client> Client for CheckBody<C> {
    fn submit(&self, request: Request) -> Result<Response> {
        let response = self.inner.submit(request)?;
        if response.body().is_none() {
            debug!(status = %response.status(), "missing body in response");
            return Err(Error::new(ErrorKind::MissingBody).with_response(response));
        }
        Ok(response)
    }
}

/// Fails any response that reports errors through a header.
///
/// The header's presence with a non-empty value is taken as a failure
/// whatever the status code says.
#[derive(Debug, Clone)]
pub struct CheckHeaderError<C> {
    inner: C,
    header: HeaderName,
}

impl<C> CheckHeaderError<C> {
    pub fn new(inner: C) -> CheckHeaderError<C> {
        CheckHeaderError::with_header(inner, HeaderName::from_static(ERRORS_HEADER))
    }

    pub fn with_header(inner: C, header: HeaderName) -> CheckHeaderError<C> {
        CheckHeaderError { inner, header }
    }
}

impl<C: Client> Client for CheckHeaderError<C> {
    fn submit(&self, request: Request) -> Result<Response> {
        let response = self.inner.submit(request)?;
        let value = match response.headers().get(&self.header) {
            Some(value) if !value.is_empty() => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            _ => return Ok(response),
        };
        debug!(header = %self.header, %value, "received errors in header");
        let kind = ErrorKind::HeaderError {
            header: self.header.to_string(),
            value,
        };
        Err(Error::new(kind).with_response(response))
    }
}
