use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// One observation extracted from a WAQI feed body: the station timestamp
/// string and the AQI, which the feed reports as a number, null, or a "-"
/// placeholder (the latter two degrade to `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub time: String,
    pub aqi: Option<f64>,
}

/// One row of the history store, columns `date, code, country, aqi`.
///
/// `code` is part of the store schema but stays empty at ingest time; only
/// the exporter resolves it. Equality is full-row (AQI compared bitwise), so
/// two fetches of the same location that return different timestamp strings
/// are distinct rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub date: String,
    pub code: Option<String>,
    pub country: String,
    pub aqi: Option<f64>,
}

impl Record {
    pub fn new(date: impl Into<String>, country: impl Into<String>, aqi: Option<f64>) -> Self {
        Self {
            date: date.into(),
            code: None,
            country: country.into(),
            aqi,
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
            && self.code == other.code
            && self.country == other.country
            && self.aqi.map(f64::to_bits) == other.aqi.map(f64::to_bits)
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
        self.code.hash(state);
        self.country.hash(state);
        self.aqi.map(f64::to_bits).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn record_equality_is_full_row() {
        let a = Record::new("2023-07-04 10:00:00", "Chile", Some(42.0));
        let b = Record::new("2023-07-04 10:00:00", "Chile", Some(42.0));
        let c = Record::new("2023-07-04 11:00:00", "Chile", Some(42.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn missing_aqi_rows_hash_consistently() {
        let mut set = HashSet::new();
        set.insert(Record::new("2023-07-04 10:00:00", "Kosovo", None));
        assert!(!set.insert(Record::new("2023-07-04 10:00:00", "Kosovo", None)));
    }
}
