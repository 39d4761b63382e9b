//! Generation-counter debouncing
//!
//! Every new input takes a ticket. A spawned task sleeps, then asks whether
//! its ticket is still current; older tickets quietly drop. Toast auto-hide
//! uses the same rule so a newer toast is never hidden by an older timer.

/// Search input debounce in milliseconds
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// How long a toast stays visible in milliseconds
pub const TOAST_VISIBLE_MS: u64 = 2200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersede every outstanding ticket and hand out a new one
    pub fn ticket(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Supersede every outstanding ticket without issuing a new one
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_ticket_fires() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.ticket();
        let second = debouncer.ticket();
        let third = debouncer.ticket();

        let fired: Vec<u64> = [first, second, third]
            .into_iter()
            .filter(|t| debouncer.is_current(*t))
            .collect();
        assert_eq!(fired, vec![third]);
    }

    #[test]
    fn cancel_invalidates_pending_ticket() {
        let mut debouncer = Debouncer::new();
        let pending = debouncer.ticket();
        debouncer.cancel();
        assert!(!debouncer.is_current(pending));
    }
}
