//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod node;
pub mod taxonomy;

pub use builder::{IdGenerator, SequentialGenerator, TreeBuilder, UuidGenerator};
pub use node::Node;
pub use taxonomy::{Level, Metadata, Row, LEVELS};
