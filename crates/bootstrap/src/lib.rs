//! Bootstrap helper catalogue: decorators over the `markup` tag builder plus
//! the navigation-history breadcrumb. Class names follow Bootstrap 2.
//!
//! Helpers come in two shapes, mirroring the two emission modes of `markup`:
//! eager ones return rendered [`Html`], streaming ones (`begin_*`) return a
//! [`markup::Scope`] whose close tag is guaranteed on scope exit.

pub mod breadcrumb;
pub mod buttons;
pub mod images;
pub mod lists;
pub mod menu;
pub mod typography;

mod context;

pub use crate::context::{LinkResolver, PageContext};

use std::fmt;
use std::io;

use markup::{MarkupError, RenderMode, Tag};
use nav::NavError;

/// Markup that is already rendered; splice it without re-escaping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub(crate) fn from_tag(tag: &Tag) -> Self {
        Html(tag.render(RenderMode::Full))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
pub enum HelperError {
    Markup(MarkupError),
    Nav(NavError),
    Sink(io::Error),
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelperError::Markup(err) => write!(f, "{err}"),
            HelperError::Nav(err) => write!(f, "{err}"),
            HelperError::Sink(err) => write!(f, "sink write failed: {err}"),
        }
    }
}

impl std::error::Error for HelperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HelperError::Markup(err) => Some(err),
            HelperError::Nav(err) => Some(err),
            HelperError::Sink(err) => Some(err),
        }
    }
}

impl From<MarkupError> for HelperError {
    fn from(err: MarkupError) -> Self {
        HelperError::Markup(err)
    }
}

impl From<NavError> for HelperError {
    fn from(err: NavError) -> Self {
        HelperError::Nav(err)
    }
}

impl From<io::Error> for HelperError {
    fn from(err: io::Error) -> Self {
        HelperError::Sink(err)
    }
}
