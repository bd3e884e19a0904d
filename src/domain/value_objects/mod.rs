//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod naming;
mod path;
mod reference;

pub use category::ContentCategory;
pub use naming::NamingPolicy;
pub use path::{clean, FilePath, PathNormalizer};
pub use reference::RawReference;
