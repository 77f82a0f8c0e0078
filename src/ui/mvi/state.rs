/// Marker trait for screen state snapshots.
///
/// Snapshots are replaced wholesale on every change, so they must be cheap
/// to compare and `Clone` to hand out to readers.
pub trait UiState: Clone + PartialEq + Send + Sync + 'static {}
