//! proctree: convert flat business-process taxonomy spreadsheets into a
//! deduplicated JSON tree.
//!
//! The library is layered: `domain` holds the taxonomy model and the tree
//! builder (no I/O), `infrastructure` holds the tabular reader and the JSON
//! sink, `report` is a read-only consumer of built trees, and `cli` wires it
//! all to the command line.

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod report;
pub mod util;
