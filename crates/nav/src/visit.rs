//! One entry of the navigation trail.

use url::Url;

/// A page the session has visited: its display title and its location.
#[derive(Clone, Debug)]
pub struct VisitedPage {
    title: String,
    location: Url,
}

impl VisitedPage {
    pub fn new(title: impl Into<String>, location: Url) -> Self {
        Self {
            title: title.into(),
            location,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    /// True when `other` names the same page: the absolute forms match, or
    /// the path-only forms match. Because a bare path is enough, two hosts
    /// sharing `/about` compare equal; callers that need host-exact matching
    /// must compare the full URLs themselves.
    pub fn matches(&self, other: &Url) -> bool {
        self.location.as_str() == other.as_str() || self.location.path() == other.path()
    }

    /// Same rule as [`matches`](Self::matches), against a raw location
    /// string that may be either form.
    pub fn matches_location(&self, other: &str) -> bool {
        self.location.as_str() == other || self.location.path() == other
    }
}

impl PartialEq for VisitedPage {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.location)
    }
}
