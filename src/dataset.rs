//! Dataset loading and metadata.
//!
//! The dataset is loaded once at startup and treated as read-only shared
//! state for the lifetime of the process. Every aggregate is recomputed from
//! a filtered copy of these records; nothing here is mutated after load.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{CsvOrderRow, OrderRecord};

/// Errors raised while loading the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset contains no usable records")]
    Empty,
}

/// In-memory order-item table plus load metadata.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<OrderRecord>,
    checksum: String,
    skipped_rows: usize,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// Rows with an unparseable purchase timestamp are skipped with a
    /// warning rather than failing the whole load. The SHA-256 checksum of
    /// the raw file is recorded so a run can be tied to an exact input.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let bytes = std::fs::read(path.as_ref())?;
        let checksum = checksum_hex(&bytes);

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for row in reader.deserialize::<CsvOrderRow>() {
            let row = row?;
            match row.to_record() {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped_rows += 1;
                    log::warn!("skipping order {}: {}", row.order_id, e);
                }
            }
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        log::info!(
            "loaded {} order items ({} rows skipped), checksum {}",
            records.len(),
            skipped_rows,
            checksum
        );

        Ok(Self {
            records,
            checksum,
            skipped_rows,
        })
    }

    /// Build a dataset directly from records, checksummed over their JSON
    /// form. Used by tests and by callers that source records elsewhere.
    pub fn from_records(records: Vec<OrderRecord>) -> Self {
        let encoded = serde_json::to_vec(&records).unwrap_or_default();
        Self {
            checksum: checksum_hex(&encoded),
            records,
            skipped_rows: 0,
        }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Min and max purchase date over the whole dataset. `None` only for an
    /// empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().map(|r| r.purchase_date());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d))))
    }

    /// Distinct customer states, sorted.
    pub fn states(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.customer_state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct customer cities, sorted, optionally narrowed to a state
    /// selection. An empty selection means all states, matching the filter
    /// semantics.
    pub fn cities(&self, states: &[String]) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| states.is_empty() || states.contains(&r.customer_state))
            .map(|r| r.customer_city.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn checksum_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
