use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Produce the next snapshot. Must be free of side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Replace `state` with the reduced snapshot.
    ///
    /// Returns `false` when the intent left the snapshot unchanged, so callers
    /// can skip notifying readers.
    fn apply(state: &mut Self::State, intent: Self::Intent) -> bool {
        let next = Self::reduce(state.clone(), intent);
        if next == *state {
            return false;
        }
        *state = next;
        true
    }
}
