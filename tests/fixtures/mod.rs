#![allow(dead_code)]

use obv_stream::{Ohlcv, Price, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// OHLCV bar parsed from Binance CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn open_time(&self) -> Timestamp {
        self.open_time
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Reference value with timestamp.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: f64,
}

const OHLCV_PATH: &str = "tests/fixtures/data/btcusdt-1h.csv";

/// Load reference OHLCV bars from Binance.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Walks `bars` alongside `reference`, checking every bar whose
/// `open_time` has a reference row. Returns the number of rows checked.
pub fn check_against_reference<F>(
    bars: &[RefBar],
    reference: &[RefValue],
    tolerance: f64,
    name: &str,
    mut step: F,
) -> usize
where
    F: FnMut(&RefBar) -> f64,
{
    let mut ref_idx = 0;
    for bar in bars {
        let value = step(bar);

        if ref_idx < reference.len() && bar.open_time == reference[ref_idx].open_time {
            assert_near(
                value,
                reference[ref_idx].expected,
                tolerance,
                &format!("{name} at bar {ref_idx} (t={})", bar.open_time),
            );
            ref_idx += 1;
        }
    }

    ref_idx
}

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
