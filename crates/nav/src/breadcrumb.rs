//! Projection of a history window into a breadcrumb trail.
//!
//! Contract:
//! - The trail covers the last `max` visits in visit order.
//! - Every entry but the last renders as a link followed by a
//!   `span.divider` (skipped when the divider text is blank).
//! - The last entry always renders as a plain `li.active` label, and so
//!   does any earlier entry whose location matches the current request.
//! - An empty window is an error: an empty breadcrumb means no page ever
//!   recorded a title, which is a logic error upstream.

use std::fmt;

use markup::{MarkupError, Tag};
use url::Url;

use crate::history::VisitHistory;

#[derive(Debug)]
pub enum NavError {
    EmptyHistory,
    Markup(MarkupError),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::EmptyHistory => f.write_str("no visits to project into a breadcrumb"),
            NavError::Markup(err) => write!(f, "breadcrumb markup: {err}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::EmptyHistory => None,
            NavError::Markup(err) => Some(err),
        }
    }
}

impl From<MarkupError> for NavError {
    fn from(err: MarkupError) -> Self {
        NavError::Markup(err)
    }
}

/// Builds the `ul.breadcrumb` trail for the last `max` visits of `history`.
pub fn breadcrumb_trail(
    history: &VisitHistory,
    max: usize,
    divider: &str,
    current: &Url,
) -> Result<Tag, NavError> {
    let window = history.tail(max);
    if window.is_empty() {
        return Err(NavError::EmptyHistory);
    }

    let mut root = Tag::new("ul")?;
    root.add_class("breadcrumb");

    let last = window.len() - 1;
    for (i, page) in window.iter().enumerate() {
        let item = if i == last {
            active_entry(page.title(), "")?
        } else {
            breadcrumb_entry(page.title(), page.location().as_str(), divider, current)?
        };
        root.add_child(item);
    }
    Ok(root)
}

/// One `li` breadcrumb entry: a link to `url`, or a plain active label when
/// `url` is the current request location.
pub fn breadcrumb_entry(
    title: &str,
    url: &str,
    divider: &str,
    current: &Url,
) -> Result<Tag, NavError> {
    if current.as_str() == url || current.path() == url {
        return active_entry(title, divider);
    }

    let mut item = Tag::new("li")?;
    let mut link = Tag::with_text("a", title)?;
    link.set_attr("href", url);
    item.add_child(link);
    append_divider(&mut item, divider)?;
    Ok(item)
}

fn active_entry(title: &str, divider: &str) -> Result<Tag, NavError> {
    let mut item = Tag::with_text("li", title)?;
    item.add_class("active");
    append_divider(&mut item, divider)?;
    Ok(item)
}

fn append_divider(item: &mut Tag, divider: &str) -> Result<(), NavError> {
    if divider.trim().is_empty() {
        return Ok(());
    }
    let mut span = Tag::with_text("span", divider)?;
    span.add_class("divider");
    item.add_child(span);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::RenderMode;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn sample_history() -> VisitHistory {
        let mut history = VisitHistory::new();
        history.record_visit("Home", &url("http://shop.example/"));
        history.record_visit("Products", &url("http://shop.example/p"));
        history.record_visit("Widget", &url("http://shop.example/p/w"));
        history
    }

    #[test]
    fn empty_history_is_an_error() {
        let err = breadcrumb_trail(&VisitHistory::new(), 5, "/", &url("http://shop.example/"))
            .unwrap_err();
        assert!(matches!(err, NavError::EmptyHistory));
    }

    #[test]
    fn zero_window_is_an_error_even_with_history() {
        let err = breadcrumb_trail(&sample_history(), 0, "/", &url("http://shop.example/p/w"))
            .unwrap_err();
        assert!(matches!(err, NavError::EmptyHistory));
    }

    #[test]
    fn window_keeps_only_the_trailing_entries() {
        let trail = breadcrumb_trail(&sample_history(), 2, "/", &url("http://shop.example/p/w"))
            .unwrap();
        assert_eq!(
            trail.render(RenderMode::Full),
            "<ul class=\"breadcrumb\">\
             <li><a href=\"http://shop.example/p\">Products</a><span class=\"divider\">/</span></li>\
             <li class=\"active\">Widget</li>\
             </ul>"
        );
    }

    #[test]
    fn last_entry_is_never_a_link_and_has_no_divider() {
        // Current location deliberately elsewhere: the last entry is still a
        // plain label.
        let trail = breadcrumb_trail(&sample_history(), 3, ">", &url("http://shop.example/other"))
            .unwrap();
        let html = trail.render(RenderMode::Full);
        assert!(html.ends_with("<li class=\"active\">Widget</li></ul>"));
        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches("<span class=\"divider\">&gt;</span>").count(), 2);
    }

    #[test]
    fn blank_divider_is_skipped() {
        let trail = breadcrumb_trail(&sample_history(), 3, " ", &url("http://shop.example/p/w"))
            .unwrap();
        assert!(!trail.render(RenderMode::Full).contains("divider"));
    }

    #[test]
    fn entry_matching_the_current_location_goes_active_even_in_the_middle() {
        let trail = breadcrumb_trail(&sample_history(), 3, "/", &url("http://shop.example/p"))
            .unwrap();
        let html = trail.render(RenderMode::Full);
        // "Products" matches the current request, so it is a label with its
        // divider kept; only "Home" stays a link.
        assert!(html.contains(
            "<li class=\"active\">Products<span class=\"divider\">/</span></li>"
        ));
        assert_eq!(html.matches("<a ").count(), 1);
    }

    #[test]
    fn entry_links_escape_titles() {
        let mut history = VisitHistory::new();
        history.record_visit("Q & A", &url("http://shop.example/qa"));
        history.record_visit("End", &url("http://shop.example/end"));
        let trail =
            breadcrumb_trail(&history, 5, "/", &url("http://shop.example/end")).unwrap();
        assert!(trail.render(RenderMode::Full).contains(">Q &amp; A</a>"));
    }

    #[test]
    fn path_only_current_form_also_matches() {
        let entry = breadcrumb_entry("Docs", "/docs", "/", &url("http://a.example/docs")).unwrap();
        assert_eq!(
            entry.render(RenderMode::Full),
            "<li class=\"active\">Docs<span class=\"divider\">/</span></li>"
        );
    }
}
