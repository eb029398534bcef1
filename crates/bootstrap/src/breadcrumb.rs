//! Breadcrumb decorators: a hand-filled container and the automatic trail
//! projected from the session's navigation history.

use std::io::Write;

use markup::{Scope, ScopeConfig};

use crate::context::{LinkResolver, PageContext};
use crate::{HelperError, Html};

const BREADCRUMB: ScopeConfig = ScopeConfig {
    tag_name: "ul",
    classes: &["breadcrumb"],
};

/// Opens a `ul.breadcrumb` container for hand-written entries.
pub fn begin_breadcrumb<W: Write>(sink: &mut W) -> Result<Scope<'_, W>, HelperError> {
    Ok(Scope::begin(sink, BREADCRUMB.root()?)?)
}

/// Automatic breadcrumb over the last `max` entries of the session's
/// navigation history. Fails when the window is empty: that means no page
/// ever recorded a title, which is an upstream logic error.
pub fn breadcrumb(ctx: &PageContext, max: usize, divider: &str) -> Result<Html, HelperError> {
    let trail = nav::breadcrumb_trail(ctx.history(), max, divider, ctx.current())?;
    Ok(Html::from_tag(&trail))
}

/// One breadcrumb entry checked against the current request location.
pub fn breadcrumb_link(
    ctx: &PageContext,
    title: &str,
    url: &str,
    divider: &str,
) -> Result<Html, HelperError> {
    let entry = nav::breadcrumb_entry(title, url, divider, ctx.current())?;
    Ok(Html::from_tag(&entry))
}

/// Breadcrumb entry whose location comes from the host's router.
pub fn breadcrumb_link_for_action(
    ctx: &PageContext,
    resolver: &dyn LinkResolver,
    title: &str,
    action: &str,
    controller: &str,
    params: &[(&str, &str)],
    divider: &str,
) -> Result<Html, HelperError> {
    breadcrumb_link(
        ctx,
        title,
        &resolver.resolve(action, controller, params),
        divider,
    )
}
