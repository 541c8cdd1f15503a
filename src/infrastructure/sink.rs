//! JSON sink: persist and reload the ordered node list

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, instrument};

use crate::domain::node::Node;
use crate::infrastructure::error::{InfraError, InfraResult};

/// Write the node sequence as pretty-printed JSON.
///
/// Called only after the build succeeded, so a failed read or transform never
/// leaves partial output behind.
#[instrument(level = "debug", skip(nodes), fields(nodes = nodes.len()))]
pub fn write_nodes(path: &Path, nodes: &[Node]) -> InfraResult<()> {
    let file = File::create(path)
        .map_err(|e| InfraError::io(format!("cannot create {}", path.display()), e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, nodes).map_err(|source| InfraError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "tree written");
    Ok(())
}

/// Load a previously written node sequence.
#[instrument(level = "debug")]
pub fn read_nodes(path: &Path) -> InfraResult<Vec<Node>> {
    if !path.exists() {
        return Err(InfraError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path)
        .map_err(|e| InfraError::io(format!("cannot open {}", path.display()), e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| InfraError::Json {
        path: path.to_path_buf(),
        source,
    })
}
