//! Cancellation and deadlines for in-flight requests.
//!
//! A [`Context`] travels with a [`Request`](crate::Request) in its
//! extensions. Decorators pass it along untouched (or swap it out, see
//! [`WithContext`](crate::decorator::WithContext)); the transport at the
//! bottom of the chain is the one that observes it.

use std::time::{Duration, Instant};

use tokio::sync::watch;


#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("context canceled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// A cancellation signal and an optional deadline.
///
/// Contexts form a tree: a child derived with [`Context::with_cancel`] or
/// [`Context::with_deadline`] is cancelled whenever any of its ancestors is,
/// and its deadline is never later than its parent's.
#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    signals: Vec<watch::Receiver<bool>>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Context {
        Context::default()
    }

    pub fn with_cancel(&self) -> (Context, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        let mut child = self.clone();
        child.signals.push(receiver);
        (child, CancelHandle { sender })
    }

    pub fn with_deadline(&self, deadline: Instant) -> (Context, CancelHandle) {
        let (mut child, handle) = self.with_cancel();
        child.deadline = Some(match self.deadline {
            Some(parent) => parent.min(deadline),
            None => deadline,
        });
        (child, handle)
    }

    /// Same as [`Context::with_deadline`] with a deadline of now plus
    /// `timeout`. A timeout too large to represent leaves the deadline
    /// unchanged.
    pub fn with_timeout(&self, timeout: Duration) -> (Context, CancelHandle) {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self.with_cancel(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline, zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_cancelled(&self) -> bool {
        self.signals.iter().any(|signal| *signal.borrow())
    }

    /// Why the context is done, or `None` while it is still live.
    /// Cancellation wins over an expired deadline.
    pub fn err(&self) -> Option<ContextError> {
        if self.is_cancelled() {
            return Some(ContextError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ContextError::DeadlineExceeded),
            _ => None,
        }
    }

    pub fn check(&self) -> Result<(), ContextError> {
        match self.err() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Cancels the context it was created with.
///
/// Dropping the handle cancels the context as well, so keep it bound
/// (`let (ctx, _cancel) = ...`) for as long as the context should stay live.
#[derive(Debug)]
#[must_use = "dropping a CancelHandle cancels its context"]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Access to the [`Context`] attached to a request.
pub trait RequestExt {
    /// The attached context, or [`Context::background`] if there is none.
    fn context(&self) -> Context;

    fn set_context(&mut self, context: Context);
}

impl<B> RequestExt for http::Request<B> {
    fn context(&self) -> Context {
        self.extensions()
            .get::<Context>()
            .cloned()
            .unwrap_or_default()
    }

    fn set_context(&mut self, context: Context) {
        self.extensions_mut().insert(context);
    }
}
