//! End-to-end checks that eager rendering and scoped streaming produce the
//! same well-formed markup.

use std::io;

use markup::{RenderMode, Scope, Tag};

fn item(text: &str) -> Tag {
    Tag::with_text("li", text).unwrap()
}

#[test]
fn full_render_brackets_children_between_open_and_close() {
    let mut root = Tag::new("div").unwrap();
    root.add_class("well");
    let mut list = Tag::new("ul").unwrap();
    list.add_child(item("first"));
    list.add_child(item("second"));
    root.add_child(list);

    let html = root.render(RenderMode::Full);
    assert_eq!(
        html,
        "<div class=\"well\"><ul><li>first</li><li>second</li></ul></div>"
    );

    // Exactly one close tag per non-void node.
    assert_eq!(html.matches("</div>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("</li>").count(), 2);
}

#[test]
fn streamed_region_matches_the_open_close_pair_of_its_root() {
    let mut sink = Vec::new();
    {
        let mut root = Tag::new("ul").unwrap();
        root.add_class("breadcrumb");
        let mut scope = Scope::begin(&mut sink, root).unwrap();
        scope.emit(&item("Home")).unwrap();
        scope.emit(&item("Library")).unwrap();
        scope.end().unwrap();
    }
    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "<ul class=\"breadcrumb\">\n<li>Home</li><li>Library</li></ul>\n"
    );
}

#[test]
fn deeply_nested_scopes_stay_balanced_across_an_error() {
    fn render(sink: &mut Vec<u8>, fail: bool) -> io::Result<()> {
        let mut menu = Scope::begin(sink, Tag::new("ul").unwrap())?;
        let mut entry = menu.nested(Tag::new("li").unwrap())?;
        let mut sub = entry.nested(Tag::new("ul").unwrap())?;
        sub.write_html("<li>leaf</li>")?;
        if fail {
            return Err(io::Error::other("boom"));
        }
        sub.end()?;
        drop(sub);
        entry.end()?;
        drop(entry);
        menu.end()
    }

    for fail in [false, true] {
        let mut sink = Vec::new();
        let result = render(&mut sink, fail);
        assert_eq!(result.is_err(), fail);
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "<ul>\n<li>\n<ul>\n<li>leaf</li></ul>\n</li>\n</ul>\n"
        );
    }
}
