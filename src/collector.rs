use crate::error::FetchError;
use crate::fetcher::AqiFeed;
use crate::types::Record;
use metrics::{counter, histogram};
use tracing::{debug, info, instrument, warn};

/// Result of one collection pass. Failures are carried for reporting only;
/// they produce no rows and never fail the run.
#[derive(Debug, Default)]
pub struct Batch {
    pub records: Vec<Record>,
    pub failures: Vec<(String, FetchError)>,
}

/// Walks the configured location keys through the feed, one request at a
/// time, and accumulates the readings that came back.
pub struct Collector {
    feed: Box<dyn AqiFeed>,
    locations: Vec<String>,
}

impl Collector {
    pub fn new(feed: Box<dyn AqiFeed>, locations: Vec<String>) -> Self {
        Self { feed, locations }
    }

    /// One fetch per key, in input order. A failed key contributes no row,
    /// so the batch may be shorter than the location list.
    #[instrument(skip(self), fields(locations = self.locations.len()))]
    pub async fn collect(&self) -> Batch {
        counter!("aqi_collector_runs_total").increment(1);
        let mut batch = Batch::default();

        for location in &self.locations {
            let t_fetch = std::time::Instant::now();
            match self.feed.fetch(location).await {
                Ok(reading) => {
                    debug!("Fetched {}: aqi={:?} at {}", location, reading.aqi, reading.time);
                    batch
                        .records
                        .push(Record::new(reading.time, location.clone(), reading.aqi));
                }
                Err(e) => {
                    warn!("Fetch failed for {}: {}", location, e);
                    counter!("aqi_fetch_failures_total").increment(1);
                    batch.failures.push((location.clone(), e));
                }
            }
            histogram!("aqi_fetch_duration_seconds").record(t_fetch.elapsed().as_secs_f64());
        }

        info!(
            "Collected {} readings ({} failures) from {} locations",
            batch.records.len(),
            batch.failures.len(),
            self.locations.len()
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reading;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct CannedFeed {
        readings: HashMap<String, Reading>,
    }

    #[async_trait]
    impl AqiFeed for CannedFeed {
        async fn fetch(&self, location: &str) -> Result<Reading, FetchError> {
            self.readings.get(location).cloned().ok_or(FetchError::Feed {
                message: "Unknown station".to_string(),
            })
        }
    }

    fn feed_with(entries: &[(&str, &str, Option<f64>)]) -> Box<dyn AqiFeed> {
        let readings = entries
            .iter()
            .map(|(loc, time, aqi)| {
                (
                    loc.to_string(),
                    Reading {
                        time: time.to_string(),
                        aqi: *aqi,
                    },
                )
            })
            .collect();
        Box::new(CannedFeed { readings })
    }

    #[tokio::test]
    async fn batch_preserves_input_order() {
        let feed = feed_with(&[
            ("Chile", "2023-07-04 10:00:00", Some(42.0)),
            ("Peru", "2023-07-04 09:00:00", Some(80.0)),
        ]);
        let collector = Collector::new(feed, vec!["Peru".to_string(), "Chile".to_string()]);
        let batch = collector.collect().await;
        let countries: Vec<&str> = batch.records.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["Peru", "Chile"]);
        assert!(batch.failures.is_empty());
    }

    #[tokio::test]
    async fn failed_keys_are_omitted_not_fatal() {
        let feed = feed_with(&[("Chile", "2023-07-04 10:00:00", Some(42.0))]);
        let collector = Collector::new(
            feed,
            vec!["Atlantis".to_string(), "Chile".to_string()],
        );
        let batch = collector.collect().await;
        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.records[0].country, "Chile");
        assert_eq!(batch.failures.len(), 1);
        assert_eq!(batch.failures[0].0, "Atlantis");
    }

    #[tokio::test]
    async fn duplicate_keys_yield_duplicate_rows() {
        let feed = feed_with(&[("Chile", "2023-07-04 10:00:00", Some(42.0))]);
        let collector = Collector::new(feed, vec!["Chile".to_string(), "Chile".to_string()]);
        let batch = collector.collect().await;
        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.records[0], batch.records[1]);
    }
}
