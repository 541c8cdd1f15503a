//! Tree construction with path-qualified deduplication

use std::collections::HashMap;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::node::Node;
use crate::domain::taxonomy::{Level, Row, LEVELS};

/// Source of fresh node ids.
///
/// Swappable so tests can assert on structure with deterministic ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production id source: random v4 UUIDs without hyphens.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Monotonically increasing ids ("1", "2", ...) for deterministic tests.
#[derive(Debug, Default)]
pub struct SequentialGenerator {
    counter: u64,
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        self.counter.to_string()
    }
}

/// Key under which node identity is resolved: a node is identified by its
/// level, its title, and its immediate parent. The same title under a
/// different parent (or at a different level) is a distinct node.
type DedupKey = (Level, String, Option<String>);

/// Builds the deduplicated tree from a flat row sequence.
///
/// The build is a strict in-order fold: rows are processed top to bottom,
/// levels within a row in ascending rank order. The first row to reach a
/// given (level, title, parent) tuple creates the node and wins its metadata;
/// later rows resolving to the same tuple contribute nothing.
pub struct TreeBuilder<G: IdGenerator> {
    id_gen: G,
}

impl Default for TreeBuilder<UuidGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder<UuidGenerator> {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }
}

impl<G: IdGenerator> TreeBuilder<G> {
    pub fn with_id_generator(id_gen: G) -> Self {
        Self { id_gen }
    }

    /// Fold the rows into nodes, in creation order.
    ///
    /// Rows with no level values contribute zero nodes. The two lookup
    /// structures live only for the duration of the call.
    #[instrument(level = "debug", skip_all, fields(rows = rows.len()))]
    pub fn build(&mut self, rows: &[Row]) -> Vec<Node> {
        let mut nodes: Vec<Node> = Vec::new();
        // dedup key -> node id, id -> position in `nodes`
        let mut seen: HashMap<DedupKey, String> = HashMap::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let mut parent: Option<String> = None;

            for level in LEVELS {
                let Some(title) = row.level_value(level) else {
                    // Gap tolerance: a missing intermediate level keeps the
                    // chain intact between the levels flanking it.
                    continue;
                };

                let key = (level, title.to_string(), parent.clone());
                let id = match seen.get(&key) {
                    Some(existing) => existing.clone(),
                    None => {
                        let id = self.id_gen.next_id();
                        let node = Node::new(
                            id.clone(),
                            title.to_string(),
                            level,
                            parent.as_deref(),
                            row.metadata.clone(),
                        );
                        if let Some(parent_id) = &parent {
                            let pos = by_id[parent_id];
                            let siblings = &mut nodes[pos].children;
                            if !siblings.contains(&id) {
                                siblings.push(id.clone());
                            }
                        }
                        by_id.insert(id.clone(), nodes.len());
                        nodes.push(node);
                        seen.insert(key, id.clone());
                        id
                    }
                };

                parent = Some(id);
            }
        }

        debug!(nodes = nodes.len(), "tree built");
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::taxonomy::Metadata;

    fn build(rows: &[Row]) -> Vec<Node> {
        TreeBuilder::with_id_generator(SequentialGenerator::default()).build(rows)
    }

    #[test]
    fn test_repeated_path_creates_single_node() {
        let rows = vec![
            Row::new().with_level(Level::LineOfBusiness, "A"),
            Row::new().with_level(Level::LineOfBusiness, "A"),
        ];
        let nodes = build(&rows);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].title, "A");
        assert!(nodes[0].is_root());
    }

    #[test]
    fn test_same_title_under_different_parents_stays_distinct() {
        let rows = vec![
            Row::new()
                .with_level(Level::LineOfBusiness, "A")
                .with_level(Level::ProcessGroup, "X"),
            Row::new()
                .with_level(Level::LineOfBusiness, "B")
                .with_level(Level::ProcessGroup, "X"),
        ];
        let nodes = build(&rows);
        assert_eq!(nodes.len(), 4);

        let xs: Vec<&Node> = nodes.iter().filter(|n| n.title == "X").collect();
        assert_eq!(xs.len(), 2);
        assert_ne!(xs[0].id, xs[1].id);
        assert_ne!(xs[0].parent, xs[1].parent);

        for root in nodes.iter().filter(|n| n.is_root()) {
            assert_eq!(root.children.len(), 1);
        }
    }

    #[test]
    fn test_missing_intermediate_level_chains_across_gap() {
        let rows = vec![Row::new()
            .with_level(Level::LineOfBusiness, "A")
            .with_level(Level::ScopeItem, "Z")];
        let nodes = build(&rows);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].title, "Z");
        assert_eq!(nodes[1].level(), Some(Level::ScopeItem));
        assert_eq!(nodes[1].parent, nodes[0].id);
        assert_eq!(nodes[0].children, vec![nodes[1].id.clone()]);
    }

    #[test]
    fn test_first_row_wins_metadata() {
        let first = Metadata {
            description: "first".to_string(),
            ..Default::default()
        };
        let second = Metadata {
            description: "second".to_string(),
            ..Default::default()
        };
        let rows = vec![
            Row::new()
                .with_level(Level::LineOfBusiness, "A")
                .with_metadata(first),
            Row::new()
                .with_level(Level::LineOfBusiness, "A")
                .with_metadata(second),
        ];
        let nodes = build(&rows);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].metadata.description, "first");
    }

    #[test]
    fn test_empty_row_contributes_nothing() {
        let rows = vec![
            Row::new().with_level(Level::LineOfBusiness, "A"),
            Row::new(),
            Row::new().with_level(Level::LineOfBusiness, "A"),
        ];
        let nodes = build(&rows);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn test_output_order_is_creation_order() {
        let rows = vec![
            Row::new()
                .with_level(Level::LineOfBusiness, "A")
                .with_level(Level::ProcessGroup, "P"),
            Row::new()
                .with_level(Level::LineOfBusiness, "B")
                .with_level(Level::ProcessGroup, "Q"),
            Row::new()
                .with_level(Level::LineOfBusiness, "A")
                .with_level(Level::ProcessGroup, "R"),
        ];
        let titles: Vec<String> = build(&rows).into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["A", "P", "B", "Q", "R"]);
    }
}
