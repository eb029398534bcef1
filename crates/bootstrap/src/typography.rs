//! Typography decorators.

use markup::Tag;

use crate::{HelperError, Html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmphasisType {
    Muted,
    Warning,
    Error,
    Info,
    Success,
}

impl EmphasisType {
    fn class(self) -> &'static str {
        match self {
            EmphasisType::Muted => "muted",
            EmphasisType::Warning => "text-warning",
            EmphasisType::Error => "text-error",
            EmphasisType::Info => "text-info",
            EmphasisType::Success => "text-success",
        }
    }
}

/// Stand-out leading paragraph (`p.lead`).
pub fn lead_body(text: &str) -> Result<Html, HelperError> {
    let mut p = Tag::with_text("p", text)?;
    p.add_class("lead");
    Ok(Html::from_tag(&p))
}

/// Paragraph carrying one of the Bootstrap emphasis classes.
pub fn emphasized_paragraph(text: &str, emphasis: EmphasisType) -> Result<Html, HelperError> {
    let mut p = Tag::with_text("p", text)?;
    p.add_class(emphasis.class());
    Ok(Html::from_tag(&p))
}

/// `abbr` with its definition in the `title` attribute; `reduced` adds the
/// `initialism` class for a slightly smaller font size.
pub fn abbreviation(title: &str, value: &str, reduced: bool) -> Result<Html, HelperError> {
    let mut abbr = Tag::with_text("abbr", value)?;
    if reduced {
        abbr.add_class("initialism");
    }
    abbr.set_attr("title", title);
    Ok(Html::from_tag(&abbr))
}

/// `blockquote > p + small > cite[title]`, optionally floated right.
pub fn block_quote(
    quote: &str,
    author: &str,
    source: &str,
    source_title: &str,
    pulled_right: bool,
) -> Result<Html, HelperError> {
    let mut cite = Tag::with_text("cite", source)?;
    cite.set_attr("title", source_title);

    let mut small = Tag::with_text("small", format!("{author} "))?;
    small.add_child(cite);

    let p = Tag::with_text("p", quote)?;

    let mut blockquote = Tag::new("blockquote")?;
    if pulled_right {
        blockquote.add_class("pull-right");
    }
    blockquote.add_child(p);
    blockquote.add_child(small);
    Ok(Html::from_tag(&blockquote))
}
