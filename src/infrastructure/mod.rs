//! Infrastructure layer: file-based collaborators around the domain
//!
//! The reader turns tabular sources into domain rows, the sink persists the
//! built tree. The domain itself stays free of I/O.

pub mod error;
pub mod reader;
pub mod sink;

pub use error::{InfraError, InfraResult};
