/// Counts operations between their `Started` and terminal status.
///
/// The screen is loading while the count is above zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadingCounter {
    pending: usize,
}

impl LoadingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_loader(&mut self) {
        self.pending += 1;
    }

    /// Extra removals are ignored; the count never drops below zero.
    pub fn remove_loader(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }
}
