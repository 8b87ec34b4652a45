use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::ErrorKind;
use crate::{Body, Client, Error, Request, Response, Result};

/// Decodes the response body as JSON into a shared destination.
///
/// The body is read to the end and the original stream released; the
/// buffered bytes are put back into the response so outer layers (and the
/// caller) can still read them. The destination is only written when
/// decoding succeeds. Only the first JSON value in the body is decoded.
#[derive(Debug, Clone)]
pub struct DecodeJson<C, T> {
    inner: C,
    destination: Arc<Mutex<T>>,
}

impl<C, T> DecodeJson<C, T> {
    pub fn new(inner: C, destination: Arc<Mutex<T>>) -> DecodeJson<C, T> {
        DecodeJson { inner, destination }
    }
}

impl<C, T> Client for DecodeJson<C, T>
where
    C: Client,
    T: DeserializeOwned,
{
    fn submit(&self, request: Request) -> Result<Response> {
        let mut response = self.inner.submit(request)?;
        let body = match response.body_mut().take() {
            Some(body) => body,
            None => return Err(Error::new(ErrorKind::MissingBody).with_response(response)),
        };
        let bytes = match body.into_bytes() {
            Ok(bytes) => bytes,
            Err(e) => return Err(Error::new(ErrorKind::Body(e)).with_response(response)),
        };
        trace!(len = bytes.len(), "decoding response body");

        // only the first value is decoded, anything after it is left alone
        let decoded = <T as serde::Deserialize>::deserialize(&mut serde_json::Deserializer::from_slice(&bytes));
        *response.body_mut() = Some(Body::from(bytes));
        match decoded {
            Ok(value) => {
                *self
                    .destination
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = value;
                Ok(response)
            }
            Err(e) => Err(Error::new(ErrorKind::Decode(e)).with_response(response)),
        }
    }
}
