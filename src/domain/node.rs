//! Output tree node with its persisted record shape

use serde::{Deserialize, Serialize};

use crate::domain::taxonomy::{Level, Metadata, LEVELS};

/// One element of the deduplicated tree.
///
/// Nodes are serialized as flat records with parent/child references instead of
/// nested structures, so consumers can index them by id. Exactly one of the
/// five level attributes is non-empty, and it equals `title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    /// Id of the owning node, empty for top-level nodes.
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// Child ids in first-encounter order, append-only, no duplicates.
    #[serde(rename = "_child", default)]
    pub children: Vec<String>,
    #[serde(rename = "Line of Business", default)]
    pub line_of_business: String,
    #[serde(rename = "Process Group", default)]
    pub process_group: String,
    #[serde(rename = "Scope Item", default)]
    pub scope_item: String,
    #[serde(rename = "Process Variant", default)]
    pub process_variant: String,
    #[serde(rename = "Process Step", default)]
    pub process_step: String,
    #[serde(flatten)]
    pub metadata: Metadata,
}

impl Node {
    /// Create a node placed at `level`, with all other level attributes empty.
    pub fn new(
        id: String,
        title: String,
        level: Level,
        parent: Option<&str>,
        metadata: Metadata,
    ) -> Self {
        let mut node = Self {
            id,
            title: title.clone(),
            parent: parent.unwrap_or_default().to_string(),
            children: Vec::new(),
            line_of_business: String::new(),
            process_group: String::new(),
            scope_item: String::new(),
            process_variant: String::new(),
            process_step: String::new(),
            metadata,
        };
        *node.level_value_mut(level) = title;
        node
    }

    /// The level this node instantiates, derived from the one non-empty level
    /// attribute. `None` only for hand-built records violating the invariant.
    pub fn level(&self) -> Option<Level> {
        LEVELS.iter().find(|l| !self.level_value(**l).is_empty()).copied()
    }

    /// True for nodes without a parent (rank-1 nodes).
    pub fn is_root(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn level_value(&self, level: Level) -> &str {
        match level {
            Level::LineOfBusiness => &self.line_of_business,
            Level::ProcessGroup => &self.process_group,
            Level::ScopeItem => &self.scope_item,
            Level::ProcessVariant => &self.process_variant,
            Level::ProcessStep => &self.process_step,
        }
    }

    fn level_value_mut(&mut self, level: Level) -> &mut String {
        match level {
            Level::LineOfBusiness => &mut self.line_of_business,
            Level::ProcessGroup => &mut self.process_group,
            Level::ScopeItem => &mut self.scope_item,
            Level::ProcessVariant => &mut self.process_variant,
            Level::ProcessStep => &mut self.process_step,
        }
    }
}
