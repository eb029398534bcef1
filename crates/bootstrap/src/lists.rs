//! List decorators: eager trees and streamed containers.

use std::io::Write;

use markup::{Scope, ScopeConfig, Tag};

use crate::{HelperError, Html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListStyle {
    Unordered,
    Ordered,
    /// `ul` without bullets.
    Unstyled,
    /// `ul` laid out horizontally.
    Inline,
}

impl ListStyle {
    fn config(self) -> ScopeConfig {
        match self {
            ListStyle::Unordered => ScopeConfig {
                tag_name: "ul",
                classes: &[],
            },
            ListStyle::Ordered => ScopeConfig {
                tag_name: "ol",
                classes: &[],
            },
            ListStyle::Unstyled => ScopeConfig {
                tag_name: "ul",
                classes: &["unstyled"],
            },
            ListStyle::Inline => ScopeConfig {
                tag_name: "ul",
                classes: &["inline"],
            },
        }
    }
}

fn description_root(horizontal: bool) -> Result<Tag, HelperError> {
    let mut root = Tag::new("dl")?;
    if horizontal {
        root.add_class("dl-horizontal");
    }
    Ok(root)
}

/// Eager list: every item becomes an `li` with escaped text.
pub fn list<S: AsRef<str>>(style: ListStyle, items: &[S]) -> Result<Html, HelperError> {
    let mut root = style.config().root()?;
    for item in items {
        root.add_child(Tag::with_text("li", item.as_ref())?);
    }
    Ok(Html::from_tag(&root))
}

/// Eager description list: `dt`/`dd` per pair, in order.
pub fn description_list<S: AsRef<str>>(
    horizontal: bool,
    pairs: &[(S, S)],
) -> Result<Html, HelperError> {
    let mut root = description_root(horizontal)?;
    for (term, description) in pairs {
        root.add_child(Tag::with_text("dt", term.as_ref())?);
        root.add_child(Tag::with_text("dd", description.as_ref())?);
    }
    Ok(Html::from_tag(&root))
}

/// Streams the list's open tag now; entries go through the returned scope,
/// the close tag lands when the scope ends.
pub fn begin_list<W: Write>(sink: &mut W, style: ListStyle) -> Result<Scope<'_, W>, HelperError> {
    Ok(Scope::begin(sink, style.config().root()?)?)
}

/// Streamed description list container.
pub fn begin_description_list<W: Write>(
    sink: &mut W,
    horizontal: bool,
) -> Result<Scope<'_, W>, HelperError> {
    Ok(Scope::begin(sink, description_root(horizontal)?)?)
}
