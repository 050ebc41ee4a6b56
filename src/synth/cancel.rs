//! Cancellation plumbing for pending synthesis calls.

use tokio::sync::watch;

/// Create a linked cancel handle/token pair.
///
/// The handle side is held by whoever may abort the call (e.g. a session's
/// stop path); the token side is consumed by
/// [`crate::SynthesisClient::synthesize_with_cancel`].
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Aborts the linked synthesis call when triggered.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation. Idempotent; has no effect once the call has
    /// already completed.
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Receiving side of a cancel pair.
#[derive(Debug)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves once cancellation is signalled. If every handle is dropped
    /// without cancelling, this never resolves and the call runs to
    /// completion.
    pub(crate) async fn cancelled(&mut self) {
        if *self.rx.borrow() {
            return;
        }
        while self.rx.changed().await.is_ok() {
            if *self.rx.borrow() {
                return;
            }
        }
        std::future::pending::<()>().await
    }
}
