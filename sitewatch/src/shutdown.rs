//! Cooperative shutdown controller.
//!
//! `server::run` combines this with OS signals to perform graceful shutdown.

use tokio_util::sync::CancellationToken;

/// Cooperative shutdown signal used for graceful exit.
///
/// Lets tests and embedding code stop the server without sending OS signals.
#[derive(Clone, Debug, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    /// Returns true if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Request shutdown and wake all waiters.
    pub fn request_shutdown(&self) {
        self.token.cancel();
    }

    /// Wait until shutdown is requested.
    ///
    /// Returns immediately if shutdown was already requested.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }
}
