//! FRED API integration for the Treasury constant-maturity rate series.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{MATURITY_COUNT, Maturity};
use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
const OBS_LIMIT: usize = 100000;

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::new(2, "Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    /// Fetch all eight Treasury yield series over the window, indexed by
    /// `Maturity::position()`.
    ///
    /// Series are fetched strictly sequentially; the first failure aborts the
    /// run with whatever error FRED produced.
    pub fn fetch_all(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<[Vec<(NaiveDate, f64)>; MATURITY_COUNT], AppError> {
        let mut out: [Vec<(NaiveDate, f64)>; MATURITY_COUNT] = Default::default();
        for maturity in Maturity::ALL {
            out[maturity.position()] = self.fetch_series(maturity.series_id(), start, end)?;
        }
        Ok(out)
    }

    /// Fetch one series as `(date, value)` pairs, ascending by date.
    ///
    /// FRED reports missing observations as the literal value `"."`; those
    /// are skipped here, so a day with no data simply does not appear in the
    /// returned sequence.
    pub fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f64)>, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("series_id", series_id),
                ("api_key", &self.api_key),
                ("file_type", "json"),
                ("sort_order", "asc"),
                ("limit", &OBS_LIMIT.to_string()),
                ("observation_start", &start.to_string()),
                ("observation_end", &end.to_string()),
            ])
            .send()
            .map_err(|e| AppError::new(4, format!("FRED request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                4,
                format!(
                    "FRED request for {series_id} failed with status {}.",
                    resp.status()
                ),
            ));
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| AppError::new(4, format!("Failed to parse FRED response: {e}")))?;

        let mut out = Vec::new();
        for obs in body.observations {
            let value = match parse_value(&obs.value) {
                Some(v) => v,
                None => continue,
            };
            let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d")
                .map_err(|e| AppError::new(4, format!("Invalid FRED date '{}': {e}", obs.date)))?;
            // Constant-maturity rates are already in percent; keep them as-is.
            out.push((date, value));
        }

        Ok(out)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    date: String,
    value: String,
}

fn parse_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return None;
    }
    let v = trimmed.parse::<f64>().ok()?;
    if v.is_finite() {
        Some(v)
    } else {
        None
    }
}
