//! Cooperative cancellation and deadlines for API calls.
//!
//! A [`Context`] is handed to every call. The executor checks it before the
//! request goes out and races it against the network exchange, so a cancelled
//! or expired context never leads to a decoded response.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

/// Why a [`Context`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelCause {
    /// [`Context::cancel`] was called.
    Cancelled,
    /// The context deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelCause::Cancelled => f.write_str("context canceled"),
            CancelCause::DeadlineExceeded => f.write_str("context deadline exceeded"),
        }
    }
}

impl std::error::Error for CancelCause {}

/// Cancellation signal and optional deadline shared by clones.
///
/// # Examples
///
/// ```
/// use oura_client::{CancelCause, Context};
///
/// let ctx = Context::background();
/// assert_eq!(ctx.err(), None);
///
/// let child = ctx.clone();
/// ctx.cancel();
/// assert_eq!(child.err(), Some(CancelCause::Cancelled));
/// ```
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    state: watch::Sender<Option<CancelCause>>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled unless [`cancel`](Self::cancel) is called.
    pub fn background() -> Self {
        Self::new(None)
    }

    /// A context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(Some(Instant::now() + timeout))
    }

    /// A context that expires at `deadline`.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self::new(Some(deadline))
    }

    fn new(deadline: Option<Instant>) -> Self {
        let (state, _) = watch::channel(None);
        Self {
            inner: Arc::new(ContextInner { state, deadline }),
        }
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Cancels this context and every clone of it.
    ///
    /// Cancelling an already stopped context keeps the original cause.
    pub fn cancel(&self) {
        self.inner.state.send_if_modified(|state| {
            if state.is_some() {
                return false;
            }
            *state = Some(CancelCause::Cancelled);
            true
        });
    }

    /// Returns why the context stopped, or `None` while it is still live.
    pub fn err(&self) -> Option<CancelCause> {
        if let Some(cause) = *self.inner.state.borrow() {
            return Some(cause);
        }
        match self.inner.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(CancelCause::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context is cancelled or its deadline passes.
    pub async fn done(&self) -> CancelCause {
        let mut rx = self.inner.state.subscribe();
        let cancelled = async move {
            loop {
                let current = *rx.borrow_and_update();
                if let Some(cause) = current {
                    return cause;
                }
                // Sender gone: only the deadline can fire now.
                if rx.changed().await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
        };

        match self.inner.deadline {
            Some(deadline) => tokio::select! {
                cause = cancelled => cause,
                _ = tokio::time::sleep_until(deadline) => CancelCause::DeadlineExceeded,
            },
            None => cancelled.await,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("deadline", &self.inner.deadline)
            .field("err", &self.err())
            .finish()
    }
}
