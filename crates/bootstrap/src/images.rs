//! Image decorators.

use markup::Tag;

use crate::{HelperError, Html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageType {
    Rounded,
    Circle,
    Polaroid,
}

impl ImageType {
    fn class(self) -> &'static str {
        match self {
            ImageType::Rounded => "img-rounded",
            ImageType::Circle => "img-circle",
            ImageType::Polaroid => "img-polaroid",
        }
    }
}

/// `img` with the Bootstrap shape class. Use the source as the alternate
/// text when nothing better exists.
pub fn image(source: &str, alt: &str, image_type: ImageType) -> Result<Html, HelperError> {
    let mut img = Tag::new("img")?;
    img.add_class(image_type.class());
    img.set_attr("alt", alt);
    img.set_attr("src", source);
    Ok(Html::from_tag(&img))
}
