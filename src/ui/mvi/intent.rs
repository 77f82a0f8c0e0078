/// Marker trait for events a reducer folds into state.
///
/// Side effects (starting operations, forwarding to services) are handled by
/// the screen before or after dispatch, never inside the reducer.
pub trait Intent: Send + 'static {}
