//! Tests for the tabular source reader (CSV paths; Excel type mapping is
//! covered by unit tests on the cell conversion)

use std::path::PathBuf;

use tempfile::TempDir;

use proctree::domain::taxonomy::Level;
use proctree::infrastructure::reader::read_rows;
use proctree::infrastructure::InfraError;
use proctree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn create_csv(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write csv file");
    path
}

#[test]
fn given_csv_with_levels_and_metadata_when_reading_then_rows_are_mapped() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_csv(
        &temp,
        "taxonomy.csv",
        "Line of Business,Process Group,Description,Materiality\n\
         Finance,Invoicing,Customer invoices,2.5\n\
         Finance,,No group here,\n",
    );

    // Act
    let rows = read_rows(&path).unwrap();

    // Assert
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].level_value(Level::LineOfBusiness), Some("Finance"));
    assert_eq!(rows[0].level_value(Level::ProcessGroup), Some("Invoicing"));
    assert_eq!(rows[0].metadata.description, "Customer invoices");
    assert_eq!(rows[0].metadata.materiality, 2.5);

    assert_eq!(rows[1].level_value(Level::ProcessGroup), None);
    assert_eq!(rows[1].metadata.materiality, 0.0);
}

#[test]
fn given_csv_with_unknown_columns_when_reading_then_they_are_ignored() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_csv(
        &temp,
        "extra.csv",
        "Line of Business,Owner,Scope Item\nFinance,alice,Dunning\n",
    );

    // Act
    let rows = read_rows(&path).unwrap();

    // Assert
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].level_value(Level::LineOfBusiness), Some("Finance"));
    assert_eq!(rows[0].level_value(Level::ScopeItem), Some("Dunning"));
    assert_eq!(rows[0].metadata.business_role, "");
}

#[test]
fn given_csv_with_padded_cells_when_reading_then_values_are_trimmed() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_csv(
        &temp,
        "padded.csv",
        "Line of Business,Description\n  Finance  ,  note  \n",
    );

    // Act
    let rows = read_rows(&path).unwrap();

    // Assert
    assert_eq!(rows[0].level_value(Level::LineOfBusiness), Some("Finance"));
    assert_eq!(rows[0].metadata.description, "note");
}

#[test]
fn given_missing_file_when_reading_then_errors_with_file_not_found() {
    // Act
    let result = read_rows(&PathBuf::from("/nonexistent/taxonomy.csv"));

    // Assert
    assert!(matches!(result, Err(InfraError::FileNotFound(_))));
}

#[test]
fn given_unsupported_extension_when_reading_then_errors() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_csv(&temp, "taxonomy.txt", "not tabular");

    // Act
    let result = read_rows(&path);

    // Assert
    assert!(matches!(
        result,
        Err(InfraError::UnsupportedFormat { .. })
    ));
}
