//! Cancellation scope for everything a screen starts.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Owner side of a screen lifetime. Ends the lifetime when dropped.
pub struct ScreenLifetime {
    ended: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        Self {
            ended: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// End the lifetime; every task spawned through a handle is cancelled.
    pub fn end(&self) {
        if !self.ended.swap(true, Ordering::SeqCst) {
            tracing::debug!("Screen lifetime ended");
            self.notify.notify_waiters();
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with spawned work.
    pub fn handle(&self) -> LifetimeHandle {
        LifetimeHandle {
            ended: Arc::clone(&self.ended),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenLifetime {
    fn drop(&mut self) {
        self.end();
    }
}

/// Lightweight handle for observing a screen lifetime.
#[derive(Clone)]
pub struct LifetimeHandle {
    ended: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl LifetimeHandle {
    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise an end()
        // between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_ended() {
            return;
        }
        notified.await;
    }

    /// Spawn `future` so that it is dropped as soon as the lifetime ends.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = handle.wait() => {}
                _ = future => {}
            }
        })
    }
}
