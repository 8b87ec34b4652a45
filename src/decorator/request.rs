use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue};
use serde::Serialize;

use crate::context::{Context, RequestExt};
use crate::error::ErrorKind;
use crate::{Body, Client, Error, Request, Response, Result};

/// Replaces the context of every request with a fixed one.
///
/// Method, address, headers and body are left alone. Cancelling the
/// context (or letting its deadline pass) is observed by the transport.
#[derive(Debug, Clone)]
pub struct WithContext<C> {
    inner: C,
    context: Context,
}

impl<C> WithContext<C> {
    pub fn new(inner: C, context: Context) -> WithContext<C> {
        WithContext { inner, context }
    }
}

impl<C: Client> Client for WithContext<C> {
    fn submit(&self, mut request: Request) -> Result<Response> {
        request.set_context(self.context.clone());
        self.inner.submit(request)
    }
}

/// Serializes a value as JSON and sends it as the request body.
///
/// The value is encoded once per request. If it cannot be encoded the
/// request is dropped and the inner client is never called.
#[derive(Debug, Clone)]
pub struct WithJsonBody<C, T> {
    inner: C,
    value: T,
}

impl<C, T> WithJsonBody<C, T> {
    pub fn new(inner: C, value: T) -> WithJsonBody<C, T> {
        WithJsonBody { inner, value }
    }
}

impl<C, T> Client for WithJsonBody<C, T>
where
    C: Client,
    T: Serialize,
{
    fn submit(&self, mut request: Request) -> Result<Response> {
        let body = serde_json::to_vec(&self.value).map_err(ErrorKind::Encode)?;
        *request.body_mut() = Some(Body::from(body));
        if !request.headers().contains_key(CONTENT_TYPE) {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        self.inner.submit(request)
    }
}

/// Appends a header to every request, keeping any values already set
/// under the same name. `content-type` is single-valued, so it replaces
/// whatever was there instead.
#[derive(Debug, Clone)]
pub struct WithHeader<C> {
    inner: C,
    name: HeaderName,
    value: HeaderValue,
}

impl<C> WithHeader<C> {
    pub fn new(inner: C, name: HeaderName, value: HeaderValue) -> WithHeader<C> {
        WithHeader { inner, name, value }
    }

    pub fn try_new(inner: C, name: &str, value: &str) -> Result<WithHeader<C>> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::new(ErrorKind::InvalidHeader(e.into())))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| Error::new(ErrorKind::InvalidHeader(e.into())))?;
        Ok(WithHeader::new(inner, name, value))
    }
}

impl<C: Client> Client for WithHeader<C> {
    fn submit(&self, mut request: Request) -> Result<Response> {
        let headers = request.headers_mut();
        if self.name == CONTENT_TYPE {
            headers.insert(self.name.clone(), self.value.clone());
        } else {
            headers.append(self.name.clone(), self.value.clone());
        }
        self.inner.submit(request)
    }
}
