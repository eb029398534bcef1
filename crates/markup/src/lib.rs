//! Hierarchical tag composition with scoped streaming emission.
//!
//! Two ways to produce markup share one element model:
//! - eager: build a [`Tag`] tree, then [`Tag::render`] it to a string;
//! - streaming: open a [`Scope`] that writes the open tag into a sink right
//!   away and guarantees the matching close tag when the scope ends.

pub mod escape;

mod emit;
mod tag;

pub use crate::emit::{Scope, ScopeConfig};
pub use crate::tag::{Content, MarkupError, RenderMode, Tag};
