//! Navbar menu decorators.

use std::io::Write;

use markup::{Scope, ScopeConfig, Tag};

use crate::context::{LinkResolver, PageContext};
use crate::{HelperError, Html};

const MENU_ITEMS: ScopeConfig = ScopeConfig {
    tag_name: "ul",
    classes: &["nav"],
};

/// Brand link shown as the menu title.
pub fn menu_title(title: &str, url: &str) -> Result<Html, HelperError> {
    let mut a = Tag::with_text("a", title)?;
    a.add_class("brand");
    a.set_attr("href", url);
    Ok(Html::from_tag(&a))
}

/// Brand link whose location comes from the host's router.
pub fn menu_title_for_action(
    resolver: &dyn LinkResolver,
    title: &str,
    action: &str,
    controller: &str,
    params: &[(&str, &str)],
) -> Result<Html, HelperError> {
    menu_title(title, &resolver.resolve(action, controller, params))
}

/// `li > a` menu entry, marked `active` when `url` is the current request.
pub fn menu_link(ctx: &PageContext, title: &str, url: &str) -> Result<Html, HelperError> {
    let mut item = Tag::new("li")?;
    if ctx.is_current(url) {
        item.add_class("active");
    }
    let mut link = Tag::with_text("a", title)?;
    link.set_attr("href", url);
    item.add_child(link);
    Ok(Html::from_tag(&item))
}

/// Menu entry whose location comes from the host's router.
pub fn menu_link_for_action(
    ctx: &PageContext,
    resolver: &dyn LinkResolver,
    title: &str,
    action: &str,
    controller: &str,
    params: &[(&str, &str)],
) -> Result<Html, HelperError> {
    menu_link(ctx, title, &resolver.resolve(action, controller, params))
}

/// Vertical separator between menu items.
pub fn menu_item_separator() -> Result<Html, HelperError> {
    let mut li = Tag::new("li")?;
    li.add_class("divider-vertical");
    Ok(Html::from_tag(&li))
}

/// Opens the `ul.nav` container; entries go through the returned scope.
pub fn begin_menu_items<W: Write>(sink: &mut W) -> Result<Scope<'_, W>, HelperError> {
    Ok(Scope::begin(sink, MENU_ITEMS.root()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav::VisitHistory;
    use url::Url;

    fn context_at(url: &str) -> PageContext {
        PageContext::new(Url::parse(url).unwrap(), VisitHistory::new())
    }

    struct StubResolver;

    impl LinkResolver for StubResolver {
        fn resolve(&self, action: &str, controller: &str, params: &[(&str, &str)]) -> String {
            let mut url = format!("/{controller}/{action}");
            for (name, value) in params {
                url.push_str(&format!("/{name}-{value}"));
            }
            url
        }
    }

    #[test]
    fn menu_title_is_a_brand_link() {
        assert_eq!(
            menu_title("Shop", "/").unwrap().as_str(),
            "<a class=\"brand\" href=\"/\">Shop</a>"
        );
    }

    #[test]
    fn menu_link_marks_the_current_page_active() {
        let ctx = context_at("http://shop.example/about");
        assert_eq!(
            menu_link(&ctx, "About", "/about").unwrap().as_str(),
            "<li class=\"active\"><a href=\"/about\">About</a></li>"
        );
        assert_eq!(
            menu_link(&ctx, "Contact", "/contact").unwrap().as_str(),
            "<li><a href=\"/contact\">Contact</a></li>"
        );
    }

    #[test]
    fn resolver_backed_links_use_explicit_parameters() {
        let ctx = context_at("http://shop.example/");
        let html = menu_link_for_action(
            &ctx,
            &StubResolver,
            "Widget",
            "show",
            "products",
            &[("id", "42")],
        )
        .unwrap();
        assert_eq!(
            html.as_str(),
            "<li><a href=\"/products/show/id-42\">Widget</a></li>"
        );
    }

    #[test]
    fn separator_is_an_empty_divider_item() {
        assert_eq!(
            menu_item_separator().unwrap().as_str(),
            "<li class=\"divider-vertical\"></li>"
        );
    }

    #[test]
    fn begin_menu_items_opens_the_nav_container() {
        let mut sink = Vec::new();
        {
            let mut scope = begin_menu_items(&mut sink).unwrap();
            scope
                .write_html(menu_item_separator().unwrap().as_str())
                .unwrap();
        }
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "<ul class=\"nav\">\n<li class=\"divider-vertical\"></li></ul>\n"
        );
    }
}
