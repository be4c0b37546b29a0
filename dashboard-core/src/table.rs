//! Loading and indexing the launch table.
//!
//! ```text
//!  spacex_launch_dash.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  header check → row validation
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ LaunchTable │  Vec<LaunchRecord>, site order, payload bounds
//!   └─────────────┘
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LoadError, SelectionError};
use crate::models::*;

/// The immutable launch table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct sites by row count descending, ties in first-appearance order.
    sites: Vec<String>,
    bounds: PayloadRange,
}

impl LaunchTable {
    /// Build a table from already-parsed records.
    ///
    /// Fails if `records` is empty or any record breaks the row invariants
    /// (finite non-negative payload, class 0 or 1).
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        for (i, record) in records.iter().enumerate() {
            let row = i + 1;
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(LoadError::InvalidPayload {
                    row,
                    value: record.payload_mass_kg,
                });
            }
            if record.outcome_class > 1 {
                return Err(LoadError::InvalidOutcome {
                    row,
                    value: i64::from(record.outcome_class),
                });
            }
        }

        let bounds = payload_bounds(&records).ok_or(LoadError::Empty)?;
        let sites = sites_by_frequency(&records);

        Ok(Self {
            records,
            sites,
            bounds,
        })
    }

    /// Load a table from a CSV file on disk.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            sites = table.sites.len(),
            "Loaded launch table"
        );
        Ok(table)
    }

    /// Parse CSV text with a header row. Columns other than the four
    /// required ones are ignored.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|source| LoadError::Csv { row: 0, source })?;

        for required in [
            LAUNCH_SITE_COLUMN,
            PAYLOAD_MASS_COLUMN,
            BOOSTER_CATEGORY_COLUMN,
            CLASS_COLUMN,
        ] {
            if !headers.iter().any(|h| h == required) {
                return Err(LoadError::MissingColumn(required));
            }
        }

        let mut records = Vec::new();
        for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row = i + 1;
            let raw = result.map_err(|source| LoadError::Csv { row, source })?;

            let outcome_class = match raw.class {
                0 => 0,
                1 => 1,
                value => return Err(LoadError::InvalidOutcome { row, value }),
            };

            records.push(LaunchRecord {
                launch_site: raw.launch_site,
                payload_mass_kg: raw.payload_mass_kg,
                booster_version_category: raw.booster_version_category,
                outcome_class,
            });
        }

        Self::from_records(records)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Never true: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites, most launches first.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, name: &str) -> bool {
        self.sites.iter().any(|s| s == name)
    }

    /// (global minimum, global maximum) payload mass.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.bounds
    }

    /// Validate a raw selector value against the sites in this table.
    pub fn resolve_site(&self, raw: &str) -> Result<SiteSelection, SelectionError> {
        match SiteSelection::parse(raw) {
            SiteSelection::All => Ok(SiteSelection::All),
            SiteSelection::Site(name) if self.has_site(&name) => Ok(SiteSelection::Site(name)),
            SiteSelection::Site(name) => Err(SelectionError::UnknownSite(name)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    class: i64,
}

fn payload_bounds(records: &[LaunchRecord]) -> Option<PayloadRange> {
    let first = records.first()?.payload_mass_kg;
    let (low, high) = records
        .iter()
        .map(|r| r.payload_mass_kg)
        .fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
    PayloadRange::new(low, high).ok()
}

fn sites_by_frequency(records: &[LaunchRecord]) -> Vec<String> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let site = record.launch_site.as_str();
        match index.get(site).copied() {
            Some(i) => order[i].1 += 1,
            None => {
                index.insert(site, order.len());
                order.push((site, 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().map(|(site, _)| site.to_string()).collect()
}
