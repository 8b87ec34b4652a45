use std::time::Duration;

use reqwest::blocking::Client as Inner;
use reqwest::blocking::Request as Reqwest;
use tracing::{debug, trace};

use crate::context::RequestExt;
use crate::http_client::ClientConfig;
use crate::{Body, Client, Error, Request, Response, Result};

/// A blocking transport backed by `reqwest`.
///
/// Before sending, the request's [`Context`](crate::Context) is checked and
/// its remaining time becomes the request timeout. A cancellation that
/// happens while the request is already on the wire is only noticed once
/// `reqwest` returns.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Inner,
    timeout: Option<Duration>,
}

/// Panics when the TLS backend cannot be initialized, the same way
/// `reqwest::blocking::Client::new` does. Use [`ReqwestHttpClient::create`]
/// to get the error instead.
impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::create(ClientConfig::default()).expect("failed to initialize the reqwest client")
    }
}

impl ReqwestHttpClient {
    pub fn create(config: ClientConfig) -> Result<ReqwestHttpClient> {
        let client = Inner::builder()
            .danger_accept_invalid_certs(!config.ssl_check)
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(Error::transport)?;

        Ok(ReqwestHttpClient {
            client,
            timeout: config.timeout,
        })
    }

    fn timeout_for(&self, remaining: Option<Duration>) -> Option<Duration> {
        match (remaining, self.timeout) {
            (Some(remaining), Some(timeout)) => Some(remaining.min(timeout)),
            (remaining, timeout) => remaining.or(timeout),
        }
    }
}

impl Client for ReqwestHttpClient {
    fn submit(&self, request: Request) -> Result<Response> {
        let ctx = request.context();
        ctx.check()?;
        debug!(method = %request.method(), uri = %request.uri(), "submitting request");

        // reqwest doesn't deal with the non-existence of a body in their TryFrom method
        // so take it out and deal with it separately
        let (parts, body) = request.into_parts();
        let mut outgoing: Reqwest = http::Request::from_parts(parts, "")
            .try_into()
            .map_err(Error::transport)?;
        *outgoing.body_mut() = body.map(into_reqwest_body);
        *outgoing.timeout_mut() = self.timeout_for(ctx.remaining());

        let mut response = match self.client.execute(outgoing) {
            Ok(response) => response,
            Err(e) => {
                if let Some(done) = ctx.err() {
                    debug!(error = %e, "request abandoned: {}", done);
                    return Err(done.into());
                }
                return Err(Error::transport(e));
            }
        };

        let status = response.status();
        let version = response.version();
        let headers = std::mem::take(response.headers_mut());
        trace!(%status, "received response");

        let mut converted = Response::new(Some(Body::from_reader(response)));
        *converted.status_mut() = status;
        *converted.version_mut() = version;
        *converted.headers_mut() = headers;
        Ok(converted)
    }
}

fn into_reqwest_body(body: Body) -> reqwest::blocking::Body {
    match body.try_into_buffer() {
        Ok(bytes) => bytes.into(),
        Err(stream) => reqwest::blocking::Body::new(stream),
    }
}
