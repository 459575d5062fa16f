//! Application layer: use-case helpers on top of the domain
//!
//! No terminal I/O here; the CLI layer owns reading and writing.

pub mod error;
pub mod error_ext;
pub mod render;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use render::format_tree;
