//! Domain model: taxonomy levels, row metadata, input rows

use serde::{Deserialize, Serialize};

/// One tier in the fixed five-level business-process taxonomy.
///
/// Order is significant: a node at rank `i` can only be parented by a node at
/// a lower rank within the same row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    LineOfBusiness,
    ProcessGroup,
    ScopeItem,
    ProcessVariant,
    ProcessStep,
}

/// All levels in ascending rank order.
pub const LEVELS: [Level; 5] = [
    Level::LineOfBusiness,
    Level::ProcessGroup,
    Level::ScopeItem,
    Level::ProcessVariant,
    Level::ProcessStep,
];

impl Level {
    /// Rank within the hierarchy, 1-based.
    pub fn rank(&self) -> usize {
        *self as usize + 1
    }

    /// The exact column header used in source spreadsheets and in the
    /// serialized node records.
    pub fn column_name(&self) -> &'static str {
        match self {
            Level::LineOfBusiness => "Line of Business",
            Level::ProcessGroup => "Process Group",
            Level::ScopeItem => "Scope Item",
            Level::ProcessVariant => "Process Variant",
            Level::ProcessStep => "Process Step",
        }
    }

    /// Look up a level by its column header.
    pub fn from_column_name(name: &str) -> Option<Level> {
        LEVELS.iter().find(|l| l.column_name() == name).copied()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

/// Row-scoped descriptive fields, copied verbatim onto the node that first
/// instantiates a deduplication key. Field names match the source columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "ID", default)]
    pub external_id: String,
    #[serde(rename = "Business Role", default)]
    pub business_role: String,
    #[serde(rename = "Fiori app UX recommendations", default)]
    pub fiori_recommendations: String,
    #[serde(rename = "Insights (Indicative)", default)]
    pub insights: String,
    #[serde(rename = "Business stakeholders", default)]
    pub stakeholders: String,
    #[serde(rename = "Materiality", default)]
    pub materiality: f64,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// One input record: an optional trimmed value per level plus metadata.
///
/// Whitespace-only cell values count as absent.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: [Option<String>; LEVELS.len()],
    pub metadata: Metadata,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a level. Trims the input; empty values clear the slot.
    pub fn set_level(&mut self, level: Level, value: &str) {
        let trimmed = value.trim();
        self.values[level.rank() - 1] = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// The trimmed value at a level, or `None` if absent.
    pub fn level_value(&self, level: Level) -> Option<&str> {
        self.values[level.rank() - 1].as_deref()
    }

    /// True if no level carries a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    /// Builder-style helper for tests and callers constructing rows by hand.
    pub fn with_level(mut self, level: Level, value: &str) -> Self {
        self.set_level(level, value);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ranks_are_ascending() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.rank(), i + 1);
        }
    }

    #[test]
    fn test_level_column_name_roundtrip() {
        for level in LEVELS {
            assert_eq!(Level::from_column_name(level.column_name()), Some(level));
        }
        assert_eq!(Level::from_column_name("Not a level"), None);
    }

    #[test]
    fn test_row_trims_and_clears_blank_values() {
        let mut row = Row::new();
        row.set_level(Level::ScopeItem, "  Order to Cash  ");
        assert_eq!(row.level_value(Level::ScopeItem), Some("Order to Cash"));

        row.set_level(Level::ScopeItem, "   ");
        assert_eq!(row.level_value(Level::ScopeItem), None);
        assert!(row.is_empty());
    }
}
