use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::error::OperationError;

/// Lazy, push-based feed of values.
pub type FeedStream<T> = BoxStream<'static, T>;

/// Read-only observer of some subject, keyed by `P`.
///
/// Each call starts an independent feed; dropping the stream unsubscribes.
pub trait SubjectObserver<P, T>: Send + Sync {
    fn observe(&self, params: P) -> FeedStream<T>;
}

/// A single operation with side effects (storage, network).
#[async_trait]
pub trait Interactor<P>: Send + Sync
where
    P: Send + 'static,
{
    /// Short name used in logs and user-visible messages.
    fn name(&self) -> &'static str;

    /// Run the operation to completion.
    async fn execute(&self, params: P) -> Result<(), OperationError>;
}
