use std::collections::BTreeSet;

/// Tracks left resources with at least one unresolved key, minus those
/// that resolved through some other key.
#[derive(Debug, Default)]
pub struct UnmatchedTracker {
    unmatched: BTreeSet<String>,
    confirmed: BTreeSet<String>,
}

impl UnmatchedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn miss(&mut self, resource: &str) {
        if !self.unmatched.contains(resource) {
            self.unmatched.insert(resource.to_string());
        }
    }

    pub fn confirm(&mut self, resource: &str) {
        if !self.confirmed.contains(resource) {
            self.confirmed.insert(resource.to_string());
        }
    }

    /// `unmatched − confirmed`, sorted.
    pub fn finish(self) -> Vec<String> {
        self.unmatched.difference(&self.confirmed).cloned().collect()
    }
}
