//! Streaming tag emission with guaranteed close-tag release.
//!
//! Contract:
//! - `begin` writes the root's open tag immediately; the matching close tag
//!   is written exactly once, on explicit [`Scope::end`] or on drop.
//! - A failed close still marks the scope closed, so no fallback cleanup
//!   path retries the write.
//! - Open and close tags are written line-wise.
//! - A nested scope borrows the sink from its parent, so the borrow checker
//!   forces close tags into reverse open order.

use std::io::{self, Write};

use crate::tag::{MarkupError, RenderMode, Tag};

/// Fixed shape of a scope's root element: the tag name plus the classes
/// stamped on it. Scope kinds (plain list, menu bar, breadcrumb trail)
/// differ only in this descriptor.
#[derive(Clone, Copy, Debug)]
pub struct ScopeConfig {
    pub tag_name: &'static str,
    pub classes: &'static [&'static str],
}

impl ScopeConfig {
    /// Builds the root tag this descriptor describes.
    pub fn root(&self) -> Result<Tag, MarkupError> {
        let mut tag = Tag::new(self.tag_name)?;
        for class in self.classes {
            tag.add_class(*class);
        }
        Ok(tag)
    }
}

/// A streamed element region: open tag already in the sink, close tag owed.
///
/// The root tag is kept only to regenerate the matching close tag and to
/// answer questions about the open tag; mutating it after `begin` cannot
/// change what was already written.
pub struct Scope<'a, W: Write> {
    sink: &'a mut W,
    root: Tag,
    closed: bool,
}

impl<'a, W: Write> Scope<'a, W> {
    /// Writes the open tag of `root` and returns the scope owing its close
    /// tag.
    pub fn begin(sink: &'a mut W, root: Tag) -> io::Result<Self> {
        let open = root.render(RenderMode::OpenOnly);
        log::trace!(target: "markup.emit", "begin scope {open}");
        sink.write_all(open.as_bytes())?;
        sink.write_all(b"\n")?;
        Ok(Self {
            sink,
            root,
            closed: false,
        })
    }

    pub fn root(&self) -> &Tag {
        &self.root
    }

    /// Writes pre-rendered markup inside the scope.
    pub fn write_html(&mut self, html: &str) -> io::Result<()> {
        self.sink.write_all(html.as_bytes())
    }

    /// Renders `tag` in full and writes it inside the scope.
    pub fn emit(&mut self, tag: &Tag) -> io::Result<()> {
        self.sink.write_all(tag.render(RenderMode::Full).as_bytes())
    }

    /// Opens a child scope on the same sink. While the child lives the
    /// parent is unusable, so the child's close tag always lands first.
    pub fn nested(&mut self, root: Tag) -> io::Result<Scope<'_, W>> {
        Scope::begin(self.sink, root)
    }

    /// Writes the close tag. Subsequent calls, including the drop path, are
    /// no-ops even when this write fails.
    pub fn end(&mut self) -> io::Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        let close = self.root.render(RenderMode::CloseOnly);
        log::trace!(target: "markup.emit", "end scope {close}");
        self.sink.write_all(close.as_bytes())?;
        self.sink.write_all(b"\n")
    }
}

impl<W: Write> Drop for Scope<'_, W> {
    fn drop(&mut self) {
        if let Err(err) = self.end() {
            log::warn!(
                target: "markup.emit",
                "close tag for <{}> lost: {err}",
                self.root.name()
            );
        }
    }
}
