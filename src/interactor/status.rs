use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};

use super::traits::Interactor;
use crate::error::OperationError;

/// Progress of one interactor run.
#[derive(Debug, Clone)]
pub enum InvokeStatus {
    Started,
    Success,
    Error(Arc<OperationError>),
}

impl InvokeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvokeStatus::Started)
    }
}

pub type StatusStream = BoxStream<'static, InvokeStatus>;

/// Run `interactor` lazily, reporting `Started` followed by exactly one
/// terminal status.
///
/// Nothing executes until the stream is polled. A run longer than `timeout`
/// ends with [`OperationError::Timeout`].
pub fn invoke<P>(interactor: Arc<dyn Interactor<P>>, params: P, timeout: Duration) -> StatusStream
where
    P: Send + 'static,
{
    let run = async move {
        let operation = interactor.name();
        match tokio::time::timeout(timeout, interactor.execute(params)).await {
            Ok(Ok(())) => InvokeStatus::Success,
            Ok(Err(err)) => InvokeStatus::Error(Arc::new(err)),
            Err(_) => InvokeStatus::Error(Arc::new(OperationError::Timeout {
                operation,
                after: timeout,
            })),
        }
    };

    stream::once(async { InvokeStatus::Started })
        .chain(stream::once(run))
        .boxed()
}
