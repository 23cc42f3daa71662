use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::client::InfobipError;

#[derive(Debug, Clone, Default)]
/// Per-call cancellation and deadline.
///
/// The in-flight HTTP request is dropped as soon as the token is cancelled or the
/// deadline passes, and the call returns [`InfobipError::Cancelled`] or
/// [`InfobipError::DeadlineExceeded`].
///
/// ```rust
/// use std::time::Duration;
/// use infobip::Context;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = Context::with_cancellation(token.clone()).timeout(Duration::from_secs(5));
/// assert!(ctx.deadline_at().is_some());
/// ```
pub struct Context {
    cancel: Option<CancellationToken>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A context cancelled when `token` is.
    pub fn with_cancellation(token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            deadline: None,
        }
    }

    /// Set a deadline `timeout` from now. An earlier existing deadline is kept.
    ///
    /// A timeout too large to represent as an instant adds no deadline.
    pub fn timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.deadline(deadline),
            None => self,
        }
    }

    /// Set an absolute deadline. An earlier existing deadline is kept.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) => current.min(deadline),
            None => deadline,
        });
        self
    }

    /// The token this context listens to, if any.
    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    /// The effective deadline, if any.
    pub fn deadline_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drive `fut` unless cancellation or the deadline fires first.
    ///
    /// Both are checked before `fut` is first polled, so an already cancelled
    /// context never starts the request.
    pub(crate) async fn run<F, T>(&self, fut: F) -> Result<T, InfobipError>
    where
        F: Future<Output = Result<T, InfobipError>>,
    {
        let cancelled = async {
            match self.cancel.as_ref() {
                Some(token) => token.cancelled().await,
                None => std::future::pending().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            () = cancelled => Err(InfobipError::Cancelled),
            () = expired => Err(InfobipError::DeadlineExceeded),
            result = fut => result,
        }
    }
}
