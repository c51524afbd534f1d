use std::collections::HashSet;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("country '{0}' appears more than once")]
    DuplicateCountry(String),
}

// ---------------------------------------------------------------------------
// Record – one row of the housing cost table
// ---------------------------------------------------------------------------

/// One country's housing cost burden in the two surveyed years.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Unique key for the lifetime of the dataset.
    pub country: String,
    pub continent: String,
    /// Burden in 2015 (percent). `NaN` when the source cell was malformed.
    pub value_a: f64,
    /// Burden in 2022 (percent). `NaN` when the source cell was malformed.
    pub value_b: f64,
}

impl Record {
    pub fn new(country: &str, continent: &str, value_a: f64, value_b: f64) -> Self {
        Self {
            country: country.to_string(),
            continent: continent.to_string(),
            value_a,
            value_b,
        }
    }

    /// Larger of the two values, or `None` if either is not a number.
    pub fn max_value(&self) -> Option<f64> {
        if self.value_a.is_nan() || self.value_b.is_nan() {
            None
        } else {
            Some(self.value_a.max(self.value_b))
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records in file order, plus the continent list for the selector.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Continents in order of first appearance.
    pub continents: Vec<String>,
}

impl Dataset {
    /// Build the dataset, rejecting duplicate countries.
    pub fn from_records(records: Vec<Record>) -> Result<Self, DatasetError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
        let mut continents: Vec<String> = Vec::new();

        for rec in &records {
            if !seen.insert(rec.country.as_str()) {
                return Err(DatasetError::DuplicateCountry(rec.country.clone()));
            }
            if !continents.contains(&rec.continent) {
                continents.push(rec.continent.clone());
            }
        }

        Ok(Dataset {
            records,
            continents,
        })
    }

    /// Largest value across both metrics and all records, ignoring NaN rows.
    pub fn max_value(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(Record::max_value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
