//! Button decorators. All of them stamp `btn` plus the style, size and
//! disabled classes; the element kind varies per helper.

use markup::Tag;

use crate::{HelperError, Html};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonStyle {
    #[default]
    Default,
    Primary,
    Info,
    Success,
    Warning,
    Danger,
    Inverse,
    Link,
}

impl ButtonStyle {
    fn class(self) -> Option<&'static str> {
        match self {
            ButtonStyle::Default => None,
            ButtonStyle::Primary => Some("btn-primary"),
            ButtonStyle::Info => Some("btn-info"),
            ButtonStyle::Success => Some("btn-success"),
            ButtonStyle::Warning => Some("btn-warning"),
            ButtonStyle::Danger => Some("btn-danger"),
            ButtonStyle::Inverse => Some("btn-inverse"),
            ButtonStyle::Link => Some("btn-link"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Large,
    Small,
    Mini,
}

impl ButtonSize {
    fn class(self) -> Option<&'static str> {
        match self {
            ButtonSize::Default => None,
            ButtonSize::Large => Some("btn-large"),
            ButtonSize::Small => Some("btn-small"),
            ButtonSize::Mini => Some("btn-mini"),
        }
    }
}

fn base_button(
    tag_name: &'static str,
    style: ButtonStyle,
    size: ButtonSize,
    disabled: bool,
) -> Result<Tag, HelperError> {
    let mut tag = Tag::new(tag_name)?;
    tag.add_class("btn");
    if let Some(class) = style.class() {
        tag.add_class(class);
    }
    if let Some(class) = size.class() {
        tag.add_class(class);
    }
    if disabled {
        tag.add_class("disabled");
    }
    Ok(tag)
}

/// `a` styled as a button.
pub fn link_button(
    text: &str,
    href: &str,
    style: ButtonStyle,
    size: ButtonSize,
    disabled: bool,
) -> Result<Html, HelperError> {
    let mut tag = base_button("a", style, size, disabled)?;
    tag.set_text(text);
    tag.set_attr("href", href);
    Ok(Html::from_tag(&tag))
}

/// `button[type=submit]`.
pub fn submit_button(
    text: &str,
    style: ButtonStyle,
    size: ButtonSize,
    disabled: bool,
) -> Result<Html, HelperError> {
    let mut tag = base_button("button", style, size, disabled)?;
    tag.set_attr("type", "submit");
    tag.set_text(text);
    Ok(Html::from_tag(&tag))
}

/// `input[type=button]`.
pub fn input_button(
    text: &str,
    style: ButtonStyle,
    size: ButtonSize,
    disabled: bool,
) -> Result<Html, HelperError> {
    let mut tag = base_button("input", style, size, disabled)?;
    tag.set_attr("type", "button");
    tag.set_text(text);
    Ok(Html::from_tag(&tag))
}

/// `input[type=submit]`.
pub fn input_submit_button(
    text: &str,
    style: ButtonStyle,
    size: ButtonSize,
    disabled: bool,
) -> Result<Html, HelperError> {
    let mut tag = base_button("input", style, size, disabled)?;
    tag.set_attr("type", "submit");
    tag.set_text(text);
    Ok(Html::from_tag(&tag))
}
