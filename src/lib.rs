//! # httpx
//!
//! httpx is a small, composable HTTP client pipeline. Everything that can
//! send a request implements one trait, [`Client`], and cross-cutting
//! behavior (headers, JSON bodies, cancellation, response validation,
//! decoding) is added by wrapping one client in another rather than by
//! changing the transport underneath.
//!
//! ## The pieces
//!
//! - [`Client`]: `submit(Request) -> Result<Response>`.
//! - [`ClientFn`]: any `Fn(Request) -> Result<Response>` is a client too,
//!   which makes one-off decorators a single closure.
//! - [`do_request`] / [`do_request_with_context`]: build a request from a
//!   method, an address and an optional body and submit it.
//! - [`decorator`]: the bundled decorators and the [`ClientExt`] methods
//!   that stack them.
//! - [`http_client::reqwest::ReqwestHttpClient`]: a blocking transport.
//!
//! ## Putting a chain together
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use std::time::Duration;
//!
//! use http::{HeaderName, HeaderValue, StatusCode};
//! use httpx::http_client::reqwest::ReqwestHttpClient;
//! use httpx::{do_request, ClientExt, Context};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct MyType {
//!     foo: String,
//!     bar: String,
//! }
//!
//! let (ctx, _cancel) = Context::background().with_timeout(Duration::from_secs(60));
//! let client = ReqwestHttpClient::default()
//!     .check_status(StatusCode::OK)
//!     .check_header_error()
//!     .check_body()
//!     .with_context(ctx);
//!
//! // POST a value
//! let post = (&client)
//!     .with_json_body(MyType { foo: "bar".into(), ..MyType::default() })
//!     .with_header(
//!         HeaderName::from_static("x-custom-header"),
//!         HeaderValue::from_static("my-header"),
//!     );
//! do_request(&post, "POST", "http://example.com/my/api", None)?;
//!
//! // GET it back
//! let value = Arc::new(Mutex::new(MyType::default()));
//! let get = (&client).decode_json(Arc::clone(&value));
//! do_request(&get, "GET", "http://example.com/my/api?foo=bar", None)?;
//! println!("{:?}", value.lock().unwrap());
//! # Ok::<(), httpx::Error>(())
//! ```
//!
//! The response body is released when the [`Response`] is dropped.

pub mod body;
pub mod client;
pub mod context;
pub mod decorator;
pub mod error;
pub mod http_client;
pub mod request;

pub use crate::body::Body;
pub use crate::client::{client_fn, Client, ClientFn};
pub use crate::context::{CancelHandle, Context, ContextError, RequestExt};
pub use crate::decorator::{BoxClient, ClientExt};
pub use crate::error::{Error, ErrorKind};
pub use crate::request::{do_request, do_request_with_context};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type Request = http::Request<Option<Body>>;

pub type Response = http::Response<Option<Body>>;
