//! Append-only visit log with consecutive-duplicate suppression.

use url::Url;

use crate::visit::VisitedPage;

/// Ordered log of the pages one session has visited.
///
/// Only *consecutive* duplicates are suppressed: revisiting a page after
/// going somewhere else appends a fresh entry.
#[derive(Clone, Debug, Default)]
pub struct VisitHistory {
    entries: Vec<VisitedPage>,
}

impl VisitHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[VisitedPage] {
        &self.entries
    }

    /// Appends a visit. Dropped without effect when `title` is blank (pages
    /// that never set a display title) or when `location` repeats the most
    /// recent entry. Returns whether an entry was appended.
    pub fn record_visit(&mut self, title: &str, location: &Url) -> bool {
        if title.trim().is_empty() {
            log::debug!(target: "nav.history", "visit to {location} dropped: blank title");
            return false;
        }
        if let Some(last) = self.entries.last() {
            if last.matches(location) {
                log::debug!(
                    target: "nav.history",
                    "visit to {location} suppressed: repeats the last entry"
                );
                return false;
            }
        }
        self.entries.push(VisitedPage::new(title, location.clone()));
        true
    }

    /// The last `max` entries in visit order; all of them when fewer exist,
    /// none when `max` is zero.
    pub fn tail(&self, max: usize) -> &[VisitedPage] {
        let start = self.entries.len().saturating_sub(max);
        &self.entries[start..]
    }
}
