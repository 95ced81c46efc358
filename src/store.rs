use crate::error::Result;
use crate::types::Record;
use metrics::counter;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// What one merge did to the store file.
#[derive(Debug, Clone, Copy)]
pub struct MergeOutcome {
    /// True when this merge created the store file.
    pub created: bool,
    /// Rows the batch contributed that were not already present.
    pub added: usize,
    /// Rows in the store after the merge.
    pub total: usize,
}

/// CSV-backed history of readings, columns `date, code, country, aqi`.
///
/// Single source of truth for the pipeline: loaded and rewritten whole on
/// every merge, never appended to. There is no file locking; concurrent
/// merges against the same path lose updates and must be serialized by the
/// caller's environment.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads every row of the store file, in file order.
    pub fn load(&self) -> Result<Vec<Record>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Merges a batch into the store: existing rows first, new rows after,
    /// exact-duplicate rows dropped (first occurrence wins). Creates the
    /// store when absent; an empty batch against an absent store leaves it
    /// absent. Merging the same batch twice adds nothing the second time.
    #[instrument(skip(self, batch), fields(store = %self.path.display(), batch = batch.len()))]
    pub fn merge(&self, batch: Vec<Record>) -> Result<MergeOutcome> {
        let created = !self.exists();
        if created && batch.is_empty() {
            info!("Nothing collected and no store present; leaving store absent");
            return Ok(MergeOutcome {
                created: false,
                added: 0,
                total: 0,
            });
        }
        let existing = if created { Vec::new() } else { self.load()? };

        let mut seen: HashSet<Record> = HashSet::new();
        let mut merged: Vec<Record> = Vec::new();
        for row in existing {
            if seen.insert(row.clone()) {
                merged.push(row);
            }
        }
        let prior = merged.len();
        for row in batch {
            if seen.insert(row.clone()) {
                merged.push(row);
            }
        }
        let added = merged.len() - prior;

        self.persist(&merged)?;
        counter!("aqi_store_rows_added_total").increment(added as u64);
        if created {
            info!("Created history store with {} rows", merged.len());
        } else {
            info!("Updated history store: {} rows added, {} total", added, merged.len());
        }

        Ok(MergeOutcome {
            created,
            added,
            total: merged.len(),
        })
    }

    /// Full rewrite through a sibling temp file and rename, so an I/O
    /// failure mid-write leaves the previous store intact.
    fn persist(&self, rows: &[Record]) -> Result<()> {
        let tmp = self.path.with_extension("csv.tmp");
        let mut writer = csv::Writer::from_path(&tmp)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        drop(writer);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
