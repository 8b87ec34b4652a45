//! Clients that wrap another client and add one behavior to it.
//!
//! Every decorator delegates exactly once to the client it wraps. Request
//! decorators change the request on the way in; response decorators look at
//! the response on the way out and skip their work entirely when the inner
//! client failed. Which one runs first is decided by nesting: the decorator
//! added last is the outermost one.
//!
//! ```no_run
//! use http::{HeaderName, HeaderValue, StatusCode};
//! use httpx::http_client::reqwest::ReqwestHttpClient;
//! use httpx::{do_request, ClientExt};
//!
//! let client = ReqwestHttpClient::default()
//!     .check_status(StatusCode::OK)
//!     .check_header_error()
//!     .check_body()
//!     .with_header(
//!         HeaderName::from_static("x-custom-header"),
//!         HeaderValue::from_static("my-header"),
//!     );
//!
//! let response = do_request(&client, "GET", "http://example.com/my/api", None)?;
//! # Ok::<(), httpx::Error>(())
//! ```

use std::sync::{Arc, Mutex};

use http::{HeaderName, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::context::Context;
use crate::Client;

pub use self::decode::DecodeJson;
pub use self::request::{WithContext, WithHeader, WithJsonBody};
pub use self::validate::{CheckBody, CheckHeaderError, CheckStatus, ERRORS_HEADER};

mod decode;
mod request;
mod validate;


/// A type-erased chain, for call sites that pick their decorators at
/// runtime.
pub type BoxClient<'a> = Box<dyn Client + Send + Sync + 'a>;

/// Chaining constructors for the decorators in this module.
pub trait ClientExt: Client + Sized {
    fn with_context(self, context: Context) -> WithContext<Self> {
        WithContext::new(self, context)
    }

    fn with_json_body<T>(self, value: T) -> WithJsonBody<Self, T>
    where
        T: Serialize,
    {
        WithJsonBody::new(self, value)
    }

    fn with_header(self, name: HeaderName, value: HeaderValue) -> WithHeader<Self> {
        WithHeader::new(self, name, value)
    }

    fn check_status(self, expected: StatusCode) -> CheckStatus<Self> {
        CheckStatus::new(self, expected)
    }

    fn check_body(self) -> CheckBody<Self> {
        CheckBody::new(self)
    }

    fn check_header_error(self) -> CheckHeaderError<Self> {
        CheckHeaderError::new(self)
    }

    fn check_header_error_named(self, header: HeaderName) -> CheckHeaderError<Self> {
        CheckHeaderError::with_header(self, header)
    }

    fn decode_json<T>(self, destination: Arc<Mutex<T>>) -> DecodeJson<Self, T>
    where
        T: DeserializeOwned,
    {
        DecodeJson::new(self, destination)
    }

    fn boxed<'a>(self) -> BoxClient<'a>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<C> ClientExt for C where C: Client {}
