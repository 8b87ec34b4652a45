use std::fmt;
use std::sync::Arc;

use crate::{Request, Response, Result};


/// Anything that can turn a [`Request`] into a [`Response`].
///
/// Transports, decorators and plain closures (through [`ClientFn`]) all
/// implement this one method, so each can stand in for the others.
pub trait Client {
    fn submit(&self, request: Request) -> Result<Response>;
}

impl<C> Client for &C
where
    C: Client + ?Sized,
{
    fn submit(&self, request: Request) -> Result<Response> {
        (**self).submit(request)
    }
}

impl<C> Client for Box<C>
where
    C: Client + ?Sized,
{
    fn submit(&self, request: Request) -> Result<Response> {
        (**self).submit(request)
    }
}

impl<C> Client for Arc<C>
where
    C: Client + ?Sized,
{
    fn submit(&self, request: Request) -> Result<Response> {
        (**self).submit(request)
    }
}

/// Adapts a function into a [`Client`].
///
/// ```
/// use httpx::{client_fn, Client, Request, Response};
///
/// let client = client_fn(|_request: Request| Ok(Response::new(None)));
/// let response = client.submit(Request::new(None)).unwrap();
/// assert_eq!(200, response.status().as_u16());
/// ```
#[derive(Clone, Copy)]
pub struct ClientFn<F> {
    f: F,
}

pub fn client_fn<F>(f: F) -> ClientFn<F>
where
    F: Fn(Request) -> Result<Response>,
{
    ClientFn { f }
}

impl<F> Client for ClientFn<F>
where
    F: Fn(Request) -> Result<Response>,
{
    fn submit(&self, request: Request) -> Result<Response> {
        (self.f)(request)
    }
}

impl<F> fmt::Debug for ClientFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientFn").finish_non_exhaustive()
    }
}
