//! Domain layer: tree construction, parsing, serialization
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod parser;
pub mod serialize;
pub mod tree;

pub use entities::{NewTreeRecord, TreeRecord};
pub use error::{DomainError, DomainResult};
pub use parser::{format_numbers, parse_numbers};
pub use serialize::{to_display_tree, to_document, to_json};
pub use tree::{build_tree, Node, Tree};
