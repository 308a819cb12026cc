//! CSV-backed price history provider.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use eqsim_domain::entities::price_series::{PricePoint, PriceSeries};
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::providers::MarketDataProvider;

/// Provider reading one `<SYMBOL>.csv` file per symbol from a directory.
///
/// Rows are `date,close` with ISO dates; an optional header and malformed
/// rows are skipped. Symbols are upper-cased and trimmed before lookup, so
/// `aapl` and `AAPL ` resolve to the same file.
#[derive(Debug, Clone)]
pub struct CsvDirectoryProvider {
    root: PathBuf,
}

impl CsvDirectoryProvider {
    /// Creates a provider rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn parse_row(line: &str) -> Option<PricePoint> {
        let mut fields = line.split(',');
        let date = NaiveDate::parse_from_str(fields.next()?.trim(), "%Y-%m-%d").ok()?;
        let close: f64 = fields.next()?.trim().parse().ok()?;
        Some(PricePoint::new(date, close))
    }
}

#[async_trait]
impl MarketDataProvider for CsvDirectoryProvider {
    async fn price_history(
        &self,
        symbol: &str,
        lookback_days: u32,
    ) -> Result<PriceSeries, ProviderError> {
        let symbol = symbol.trim().to_uppercase();
        let path = self.root.join(format!("{symbol}.csv"));

        let contents = tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ProviderError::DataUnavailable {
                    symbol: symbol.clone(),
                }
            } else {
                ProviderError::Io {
                    symbol: symbol.clone(),
                    source,
                }
            }
        })?;

        let mut points = Vec::new();
        let mut skipped = 0_usize;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.to_lowercase().starts_with("date") {
                continue;
            }
            match Self::parse_row(line) {
                Some(point) => points.push(point),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(symbol, skipped, "skipped malformed csv rows");
        }

        let series = PriceSeries::from_points(points).window(lookback_days);
        if series.is_empty() {
            return Err(ProviderError::DataUnavailable { symbol });
        }
        debug!(symbol, points = series.len(), "loaded price history");
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_loads_and_cleans_csv() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            &dir,
            "AAPL.csv",
            "date,close\n2024-01-02,185.5\nnot-a-date,10\n2024-01-03,-4\n2024-01-04,186.25\n",
        );

        let provider = CsvDirectoryProvider::new(dir.path());
        let series = provider.price_history("aapl", 30).await.unwrap();

        assert_eq!(series.closes(), vec![185.5, 186.25]);
        assert_eq!(series.spot(), Some(186.25));
    }

    #[tokio::test]
    async fn test_lookback_window_applies() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(
            &dir,
            "MSFT.csv",
            "2023-01-02,240\n2023-12-20,370\n2024-01-04,375\n",
        );

        let provider = CsvDirectoryProvider::new(dir.path());
        let series = provider.price_history("MSFT", 30).await.unwrap();

        assert_eq!(series.closes(), vec![370.0, 375.0]);
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let provider = CsvDirectoryProvider::new(dir.path());

        let err = provider.price_history("NOPE", 30).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::DataUnavailable { symbol } if symbol == "NOPE"
        ));
    }

    #[tokio::test]
    async fn test_file_with_no_valid_rows_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(&dir, "JUNK.csv", "date,close\ngarbage\n,,\n");

        let provider = CsvDirectoryProvider::new(dir.path());
        let err = provider.price_history("JUNK", 30).await.unwrap_err();
        assert!(matches!(err, ProviderError::DataUnavailable { .. }));
    }
}
