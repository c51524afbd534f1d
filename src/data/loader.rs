use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, DatasetError, Record};

pub const COUNTRY_COLUMN: &str = "Country";
pub const CONTINENT_COLUMN: &str = "Continent";
pub const VALUE_A_COLUMN: &str = "house2015";
pub const VALUE_B_COLUMN: &str = "house2022";

const REQUIRED_COLUMNS: [&str; 4] = [
    COUNTRY_COLUMN,
    CONTINENT_COLUMN,
    VALUE_A_COLUMN,
    VALUE_B_COLUMN,
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV headers")]
    Headers(#[source] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("CSV row {row}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the housing cost table from a CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    log::info!(
        "Loaded {} countries across {} continents from {}",
        dataset.len(),
        dataset.continents.len(),
        path.display()
    );
    Ok(dataset)
}

/// Load the housing cost table from any reader producing CSV text.
pub fn load_reader<R: Read>(rdr: R) -> Result<Dataset, LoadError> {
    load_csv(reader_builder().from_reader(rdr))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// A row as it appears on disk. The numeric columns are kept as text so a
/// blank cell reads as 0 and a malformed one degrades to NaN instead of
/// failing the whole load.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Continent")]
    continent: String,
    #[serde(rename = "house2015")]
    value_a: String,
    #[serde(rename = "house2022")]
    value_b: String,
}

fn load_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = reader.headers().map_err(LoadError::Headers)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.map_err(|source| LoadError::Row {
            row: idx + 1,
            source,
        })?;

        let value_a = coerce_number(&raw.value_a);
        let value_b = coerce_number(&raw.value_b);
        if value_a.is_nan() || value_b.is_nan() {
            log::warn!(
                "Row {}: non-numeric burden for '{}' ({:?}, {:?}); it will never pass a cutoff",
                idx + 1,
                raw.country,
                raw.value_a,
                raw.value_b
            );
        }

        records.push(Record::new(&raw.country, &raw.continent, value_a, value_b));
    }

    Ok(Dataset::from_records(records)?)
}

/// Decimal parse of a numeric cell. An empty or blank cell counts as 0;
/// any other unparseable text becomes NaN.
pub fn coerce_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Country,Continent,house2015,house2022
Chile,South America,18.5,21.0
Japan,Asia,12.25,14.5
Spain,Europe,n/a,30
";

    #[test]
    fn loads_rows_in_file_order() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        let names: Vec<&str> = ds.records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Japan", "Spain"]);
        assert_eq!(ds.records[1].value_a, 12.25);
        assert_eq!(ds.records[1].value_b, 14.5);
        assert_eq!(ds.continents, vec!["South America", "Asia", "Europe"]);
    }

    #[test]
    fn malformed_number_becomes_nan() {
        let ds = load_reader(SAMPLE.as_bytes()).unwrap();
        assert!(ds.records[2].value_a.is_nan());
        assert_eq!(ds.records[2].value_b, 30.0);
    }

    #[test]
    fn coerce_trims_and_reads_blank_as_zero() {
        assert_eq!(coerce_number(" 7.5 "), 7.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert!(coerce_number("12%").is_nan());
    }

    #[test]
    fn blank_cell_row_is_visible_at_zero_cutoff() {
        use crate::data::filter::{visible_indices, FilterKey};

        let csv = "Country,Continent,house2015,house2022\nPeru,SA,,5\nChile,SA,3,4\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].value_a, 0.0);
        assert_eq!(visible_indices(&ds, &FilterKey::All, 0.0), vec![0, 1]);
        assert_eq!(visible_indices(&ds, &FilterKey::All, 1.0), vec![1]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "Country,Code,Continent,house2015,house2022\nPeru,PE,South America,1,2\n";
        let ds = load_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].continent, "South America");
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "Country,Continent,house2015\nPeru,South America,1\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("house2022")));
    }

    #[test]
    fn duplicate_country_is_fatal() {
        let csv = "Country,Continent,house2015,house2022\nPeru,SA,1,2\nPeru,SA,3,4\n";
        let err = load_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Dataset(DatasetError::DuplicateCountry(ref c)) if c == "Peru"
        ));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_file(Path::new("/nonexistent/housing_cost.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
