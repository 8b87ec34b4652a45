use http::{Method, Uri};

use crate::context::{Context, RequestExt};
use crate::error::ErrorKind;
use crate::{Body, Client, Request, Response, Result};

/// Builds a request bound to `ctx` and submits it through `client`.
///
/// Fails before anything is submitted when `method` or `address` cannot be
/// parsed. The response is handed back as-is: any retrying or validation
/// has to come from a decorator in the chain.
pub fn do_request_with_context<C>(
    ctx: Context,
    client: &C,
    method: &str,
    address: &str,
    body: Option<Body>,
) -> Result<Response>
where
    C: Client + ?Sized,
{
    let request = new_request(ctx, method, address, body)?;
    client.submit(request)
}

/// [`do_request_with_context`] with [`Context::background`].
pub fn do_request<C>(client: &C, method: &str, address: &str, body: Option<Body>) -> Result<Response>
where
    C: Client + ?Sized,
{
    do_request_with_context(Context::background(), client, method, address, body)
}

/// Builds a request bound to `ctx`. An empty `method` means `GET`.
pub fn new_request(ctx: Context, method: &str, address: &str, body: Option<Body>) -> Result<Request> {
    let method = match method {
        "" => Method::GET,
        method => Method::from_bytes(method.as_bytes()).map_err(ErrorKind::InvalidMethod)?,
    };
    let uri = address.parse::<Uri>().map_err(ErrorKind::InvalidUri)?;

    let mut request = Request::new(body);
    *request.method_mut() = method;
    *request.uri_mut() = uri;
    request.set_context(ctx);
    Ok(request)
}
