//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod tree;

pub use entities::{EmployeeNode, Side};
pub use error::{DomainError, DomainResult};
pub use tree::{PreOrderIterator, TeamTree};
