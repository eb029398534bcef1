//! Element tag tree: name, ordered attributes, class list, content, children.
//!
//! Contract:
//! - Attribute order is first-set order; re-setting a key overwrites the
//!   value in place.
//! - The `class` attribute is synthesized from the class list in insertion
//!   order and rendered before the other attributes.
//! - Inner content renders before child markup (concatenation, not nesting).
//! - Void elements self-close only when they carry no content and no
//!   children; every other element emits a matching close tag, even empty.

use std::fmt;

use crate::escape;

/// Elements that never take a separate close tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

#[derive(Debug, PartialEq, Eq)]
pub enum MarkupError {
    EmptyTagName,
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::EmptyTagName => f.write_str("tag name is empty or blank"),
        }
    }
}

impl std::error::Error for MarkupError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Open tag, content, children, close tag.
    Full,
    /// The open tag alone; content and children are ignored.
    OpenOnly,
    /// The close tag alone.
    CloseOnly,
}

/// Inner content of a tag. Text is escaped on render, raw markup is not;
/// setting one replaces the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Raw(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    content: Content,
    children: Vec<Tag>,
}

impl Tag {
    /// Creates an empty element. The name must not be blank.
    pub fn new(name: impl Into<String>) -> Result<Self, MarkupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MarkupError::EmptyTagName);
        }
        Ok(Self {
            name,
            classes: Vec::new(),
            attributes: Vec::new(),
            content: Content::Empty,
            children: Vec::new(),
        })
    }

    /// Creates an element whose content is the given literal text.
    pub fn with_text(
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self, MarkupError> {
        let mut tag = Self::new(name)?;
        tag.set_text(text);
        Ok(tag)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS
            .iter()
            .any(|v| self.name.eq_ignore_ascii_case(v))
    }

    /// Stores literal text, escaped on render. Replaces any existing content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Stores pre-formed markup, emitted verbatim. Replaces any existing
    /// content.
    pub fn set_raw(&mut self, html: impl Into<String>) {
        self.content = Content::Raw(html.into());
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Adds a CSS class; adding the same class again is a no-op.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.iter().any(|c| *c == class) {
            self.classes.push(class);
        }
    }

    /// Sets an attribute. An existing key keeps its position and takes the
    /// new value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a child element; insertion order is render order.
    pub fn add_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    pub fn render(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        self.render_into(&mut out, mode);
        out
    }

    fn render_into(&self, out: &mut String, mode: RenderMode) {
        match mode {
            RenderMode::OpenOnly => self.render_open(out, false),
            RenderMode::CloseOnly => self.render_close(out),
            RenderMode::Full => {
                let self_closing = self.is_void()
                    && self.content == Content::Empty
                    && self.children.is_empty();
                self.render_open(out, self_closing);
                if self_closing {
                    return;
                }
                match &self.content {
                    Content::Empty => {}
                    Content::Text(text) => escape::escape_into(out, text),
                    Content::Raw(html) => out.push_str(html),
                }
                for child in &self.children {
                    child.render_into(out, RenderMode::Full);
                }
                self.render_close(out);
            }
        }
    }

    fn render_open(&self, out: &mut String, self_closing: bool) {
        out.push('<');
        out.push_str(&self.name);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i != 0 {
                    out.push(' ');
                }
                escape::escape_into(out, class);
            }
            out.push('"');
        }
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            escape::escape_into(out, value);
            out.push('"');
        }
        out.push_str(if self_closing { " />" } else { ">" });
    }

    fn render_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderMode::Full))
    }
}
