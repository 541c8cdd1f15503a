//! Tabular source reader: CSV and Excel (.xlsx/.xlsm/.xlsb) into domain rows
//!
//! Columns are matched to the taxonomy by exact (trimmed) header name; unknown
//! columns are ignored and missing cells fall back to field defaults. A missing
//! cell is never an error, only unreadable source data is.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx, Xlsb};
use tracing::{debug, instrument, warn};

use crate::domain::taxonomy::{Level, Row};
use crate::infrastructure::error::{InfraError, InfraResult};

/// Read all data rows from a tabular source file.
#[instrument(level = "debug")]
pub fn read_rows(path: &Path) -> InfraResult<Vec<Row>> {
    if !path.exists() {
        return Err(InfraError::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xlsm" => read_excel::<Xlsx<_>>(path),
        "xlsb" => read_excel::<Xlsb<_>>(path),
        _ => Err(InfraError::UnsupportedFormat { extension }),
    }
}

fn read_csv(path: &Path) -> InfraResult<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .map_err(|source| InfraError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| InfraError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let columns = classify_headers(&headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| InfraError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let cells: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        rows.push(row_from_cells(&columns, &cells));
    }

    debug!(rows = rows.len(), "read CSV source");
    Ok(rows)
}

/// Read the first worksheet that has a header row and at least one data row.
fn read_excel<W>(path: &Path) -> InfraResult<Vec<Row>>
where
    W: Reader<std::io::BufReader<std::fs::File>>,
    W::Error: std::fmt::Display,
{
    let mut workbook: W = open_workbook(path).map_err(|e: W::Error| InfraError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    for name in &sheet_names {
        let range = match workbook.worksheet_range(name) {
            Ok(r) => r,
            Err(e) => {
                warn!("Skipping sheet '{}': {}", name, e);
                continue;
            }
        };

        let mut cell_rows = range.rows();
        let Some(header_row) = cell_rows.next() else {
            continue;
        };
        let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            continue;
        }
        let columns = classify_headers(&headers);

        let mut rows = Vec::new();
        for cell_row in cell_rows {
            let cells: Vec<String> = cell_row.iter().map(cell_to_string).collect();
            if cells.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            rows.push(row_from_cells(&columns, &cells));
        }

        if !rows.is_empty() {
            debug!(sheet = %name, rows = rows.len(), "read Excel source");
            return Ok(rows);
        }
    }

    Err(InfraError::EmptySource(path.to_path_buf()))
}

/// What a source column maps to in the domain model.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Level(Level),
    ExternalId,
    BusinessRole,
    FioriRecommendations,
    Insights,
    Stakeholders,
    Materiality,
    Description,
    Ignored,
}

fn classify_headers(headers: &[String]) -> Vec<Column> {
    headers
        .iter()
        .map(|h| {
            let name = h.trim();
            if let Some(level) = Level::from_column_name(name) {
                return Column::Level(level);
            }
            match name {
                "ID" => Column::ExternalId,
                "Business Role" => Column::BusinessRole,
                "Fiori app UX recommendations" => Column::FioriRecommendations,
                "Insights (Indicative)" => Column::Insights,
                "Business stakeholders" => Column::Stakeholders,
                "Materiality" => Column::Materiality,
                "Description" => Column::Description,
                _ => Column::Ignored,
            }
        })
        .collect()
}

fn row_from_cells(columns: &[Column], cells: &[String]) -> Row {
    let mut row = Row::new();
    for (column, cell) in columns.iter().zip(cells) {
        let value = cell.trim();
        match column {
            Column::Level(level) => row.set_level(*level, value),
            Column::ExternalId => row.metadata.external_id = value.to_string(),
            Column::BusinessRole => row.metadata.business_role = value.to_string(),
            Column::FioriRecommendations => {
                row.metadata.fiori_recommendations = value.to_string()
            }
            Column::Insights => row.metadata.insights = value.to_string(),
            Column::Stakeholders => row.metadata.stakeholders = value.to_string(),
            Column::Materiality => {
                row.metadata.materiality = value.parse::<f64>().unwrap_or(0.0)
            }
            Column::Description => row.metadata.description = value.to_string(),
            Column::Ignored => {}
        }
    }
    row
}

/// Stringify a calamine cell by type. Whole floats lose the trailing ".0" so
/// numeric-looking identifiers survive Excel's float coercion.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if *f == (*f as i64) as f64 && f.abs() < i64::MAX as f64 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERR:{:?}", e),
    }
}
