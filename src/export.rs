use crate::classify::{classify, Status};
use crate::countries;
use crate::error::Result;
use crate::store::HistoryStore;
use crate::types::Record;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the derived table the map renderer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub date: String,
    pub country: String,
    pub aqi: Option<f64>,
    pub code: Option<String>,
    pub status: Status,
}

/// Rebuilds the renderer's CSV from the history store on every run. The
/// output is a disposable projection; nothing reads it back into the
/// pipeline.
pub struct Exporter {
    path: PathBuf,
}

impl Exporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store, derives the table, writes it whole. Returns the
    /// number of rows written.
    #[instrument(skip(self, store), fields(export = %self.path.display()))]
    pub fn export(&self, store: &HistoryStore) -> Result<usize> {
        let rows = store.load()?;
        let table = derive_table(rows);
        self.write(&table)?;
        info!("Exported {} rows to {}", table.len(), self.path.display());
        Ok(table.len())
    }

    fn write(&self, rows: &[ExportRow]) -> Result<()> {
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

/// Derives the export table from store rows: drop exact duplicates, attach
/// the alpha-3 code, order chronologically, classify every row. Rows whose
/// country does not resolve keep an empty code; no step drops a row.
pub fn derive_table(rows: Vec<Record>) -> Vec<ExportRow> {
    let mut seen: HashSet<Record> = HashSet::new();
    let mut deduped: Vec<Record> = Vec::new();
    for row in rows {
        if seen.insert(row.clone()) {
            deduped.push(row);
        }
    }

    // Stable sort on the parsed timestamp; rows with an unparseable date
    // sort ahead of the rest, lexicographically among themselves.
    let mut keyed: Vec<(Option<NaiveDateTime>, Record)> = deduped
        .into_iter()
        .map(|r| (NaiveDateTime::parse_from_str(&r.date, DATE_FORMAT).ok(), r))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.date.cmp(&b.1.date)));

    keyed
        .into_iter()
        .map(|(_, r)| ExportRow {
            code: countries::alpha3(&r.country).map(str::to_string),
            status: classify(r.aqi),
            date: r.date,
            country: r.country,
            aqi: r.aqi,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, country: &str, aqi: Option<f64>) -> Record {
        Record::new(date, country, aqi)
    }

    #[test]
    fn rows_come_out_in_chronological_order() {
        let table = derive_table(vec![
            row("2023-07-05 10:00:00", "Peru", Some(80.0)),
            row("2023-07-04 10:00:00", "Chile", Some(42.0)),
            row("2023-07-04 12:30:00", "Japan", Some(120.0)),
        ]);
        let dates: Vec<&str> = table.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            vec![
                "2023-07-04 10:00:00",
                "2023-07-04 12:30:00",
                "2023-07-05 10:00:00"
            ]
        );
    }

    #[test]
    fn duplicates_collapse_before_export() {
        let r = row("2023-07-04 10:00:00", "Chile", Some(42.0));
        let table = derive_table(vec![r.clone(), r.clone(), r]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn unresolvable_countries_keep_their_row() {
        let table = derive_table(vec![
            row("2023-07-04 10:00:00", "Rusia", Some(42.0)),
            row("2023-07-04 11:00:00", "Chile", Some(42.0)),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].code, None);
        assert_eq!(table[1].code.as_deref(), Some("CHL"));
    }

    #[test]
    fn every_row_gets_a_status() {
        let table = derive_table(vec![
            row("2023-07-04 10:00:00", "Chile", Some(42.0)),
            row("2023-07-04 11:00:00", "India", Some(151.0)),
            row("2023-07-04 12:00:00", "Kosovo", None),
        ]);
        let statuses: Vec<Status> = table.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![Status::Good, Status::Unhealthy, Status::Unavailable]
        );
    }

    #[test]
    fn unparseable_dates_sort_first_and_survive() {
        let table = derive_table(vec![
            row("2023-07-04 10:00:00", "Chile", Some(42.0)),
            row("not-a-date", "Peru", Some(80.0)),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].country, "Peru");
    }
}
