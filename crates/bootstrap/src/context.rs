//! Request-scoped state handed to the helpers.

use nav::VisitHistory;
use url::Url;

/// Resolves an action/controller pair plus explicit route parameters to a
/// location string. The host's router owns the mapping; helpers treat the
/// result as an opaque address.
pub trait LinkResolver {
    fn resolve(&self, action: &str, controller: &str, params: &[(&str, &str)]) -> String;
}

/// State for one request: the current location and the session's visit
/// history. The session store owns the history value between requests and
/// must serialize concurrent access to it; this type assumes one request at
/// a time per session.
pub struct PageContext {
    current: Url,
    history: VisitHistory,
}

impl PageContext {
    pub fn new(current: Url, history: VisitHistory) -> Self {
        Self { current, history }
    }

    pub fn current(&self) -> &Url {
        &self.current
    }

    pub fn history(&self) -> &VisitHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut VisitHistory {
        &mut self.history
    }

    /// Hands the history back to the session store at end of request.
    pub fn into_history(self) -> VisitHistory {
        self.history
    }

    /// Records the current page under `title`. Blank titles and reloads of
    /// the most recent entry are dropped; returns whether an entry was
    /// appended.
    pub fn register_visit(&mut self, title: &str) -> bool {
        let current = self.current.clone();
        self.history.record_visit(title, &current)
    }

    /// True when `url` names the current request location, in either its
    /// absolute or its path-only form.
    pub fn is_current(&self, url: &str) -> bool {
        self.current.as_str() == url || self.current.path() == url
    }
}
