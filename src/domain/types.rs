//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - built once from FRED data and held in memory for the run
//! - indexed per frame during animation without copying
//! - constructed directly in tests without any network access

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The eight constant-maturity points on the Treasury curve, in x-axis order.
///
/// The discriminant doubles as the fixed x position (0..=7) of each maturity
/// in every rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    M1 = 0,
    M3 = 1,
    M6 = 2,
    Y1 = 3,
    Y5 = 4,
    Y10 = 5,
    Y20 = 6,
    Y30 = 7,
}

/// Number of maturities on the curve (and columns in the aligned table).
pub const MATURITY_COUNT: usize = 8;

impl Maturity {
    pub const ALL: [Maturity; MATURITY_COUNT] = [
        Maturity::M1,
        Maturity::M3,
        Maturity::M6,
        Maturity::Y1,
        Maturity::Y5,
        Maturity::Y10,
        Maturity::Y20,
        Maturity::Y30,
    ];

    /// FRED series identifier for this maturity's constant-maturity rate.
    pub fn series_id(self) -> &'static str {
        match self {
            Maturity::M1 => "DTB4WK",
            Maturity::M3 => "DTB3",
            Maturity::M6 => "DTB6",
            Maturity::Y1 => "DGS1",
            Maturity::Y5 => "DGS5",
            Maturity::Y10 => "DGS10",
            Maturity::Y20 => "DGS20",
            Maturity::Y30 => "DGS30",
        }
    }

    /// Compact x-axis tick label.
    pub fn axis_label(self) -> &'static str {
        match self {
            Maturity::M1 => "1m",
            Maturity::M3 => "3m",
            Maturity::M6 => "6m",
            Maturity::Y1 => "1y",
            Maturity::Y5 => "5y",
            Maturity::Y10 => "10y",
            Maturity::Y20 => "20y",
            Maturity::Y30 => "30y",
        }
    }

    /// Human-readable column label for terminal output.
    pub fn column_label(self) -> &'static str {
        match self {
            Maturity::M1 => "1 mo",
            Maturity::M3 => "3 mo",
            Maturity::M6 => "6 mo",
            Maturity::Y1 => "1 yr",
            Maturity::Y5 => "5 yr",
            Maturity::Y10 => "10 yr",
            Maturity::Y20 => "20 yr",
            Maturity::Y30 => "30 yr",
        }
    }

    /// Fixed x position of this maturity on the chart.
    pub fn position(self) -> usize {
        self as usize
    }
}

/// One calendar day of the aligned table: a cell per maturity, `None` where
/// FRED published no observation for that series on that date.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldRow {
    pub date: NaiveDate,
    pub yields: [Option<f64>; MATURITY_COUNT],
}

impl YieldRow {
    /// Whether at least one maturity has an observation on this date.
    pub fn has_any(&self) -> bool {
        self.yields.iter().any(Option::is_some)
    }
}

/// The aligned daily yield table.
///
/// Invariants, established by [`YieldTable::align`] and relied on everywhere
/// downstream:
///
/// - rows are sorted by date, strictly increasing, no duplicates
/// - every row has at least one non-missing cell
/// - the column set is fixed at the eight maturities
#[derive(Debug, Clone, Default)]
pub struct YieldTable {
    rows: Vec<YieldRow>,
}

impl YieldTable {
    /// Merge eight per-maturity series (indexed by `Maturity::position()`)
    /// into one date-indexed table.
    ///
    /// The row index is the union of all dates appearing in any input series.
    /// Dates on which every series is missing are dropped. The transformation
    /// is pure: the same inputs always produce the same table.
    pub fn align(series: &[Vec<(NaiveDate, f64)>; MATURITY_COUNT]) -> YieldTable {
        let mut by_date: BTreeMap<NaiveDate, [Option<f64>; MATURITY_COUNT]> = BTreeMap::new();

        for (col, obs) in series.iter().enumerate() {
            for &(date, value) in obs {
                by_date.entry(date).or_insert([None; MATURITY_COUNT])[col] = Some(value);
            }
        }

        let rows = by_date
            .into_iter()
            .map(|(date, yields)| YieldRow { date, yields })
            .filter(YieldRow::has_any)
            .collect();

        YieldTable { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, i: usize) -> &YieldRow {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[YieldRow] {
        &self.rows
    }

    /// First (earliest) date in the table. `None` when the table is empty.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    /// Last (latest) date in the table.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// First date of the fetch window (inclusive).
    pub start: NaiveDate,
    /// Last date of the fetch window (inclusive).
    pub end: NaiveDate,

    /// Output base path; `.mp4` (and optionally `.ogv`) are appended.
    pub output: PathBuf,

    /// Frames per second of the encoded video.
    pub fps: u32,
    /// Video bitrate for the MP4, in kbit/s.
    pub bitrate_kbps: u32,

    /// Frame width/height in pixels (must be even for yuv420p output).
    pub width: u32,
    pub height: u32,

    /// Top of the percent axis; ticks are drawn every 2 from 2.
    pub y_max: f64,

    /// Whether to transcode the MP4 to OGV after encoding.
    pub transcode_ogv: bool,
}

impl RenderConfig {
    pub fn mp4_path(&self) -> PathBuf {
        self.output.with_extension("mp4")
    }

    pub fn ogv_path(&self) -> PathBuf {
        self.output.with_extension("ogv")
    }
}
