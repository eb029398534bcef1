//! Facade over the workspace members: programmatic HTML composition
//! (`markup`), session navigation history (`nav`), and the Bootstrap helper
//! catalogue built on top of both (`bootstrap`).

pub use bootstrap;
pub use markup;
pub use nav;
