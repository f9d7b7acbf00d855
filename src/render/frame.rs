//! Pure per-frame view of one table row.
//!
//! The animation driver owns the table and derives one `Frame` per row; the
//! chart renderer then consumes the frame as a plain value. Nothing here is
//! shared or mutated between frames.

use crate::domain::{MATURITY_COUNT, YieldTable};
use crate::report::date_label;

/// One frame of the animation: fixed x positions, that day's yields, and the
/// date stamp drawn in the corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Yields in percent at x positions 0..=7; `None` where the maturity has
    /// no observation that day (the curve gets a gap there).
    pub yields: [Option<f64>; MATURITY_COUNT],
    /// Date stamp, e.g. `Jan 04, 2010`.
    pub label: String,
}

impl Frame {
    /// Build the frame for row `i` of the aligned table.
    ///
    /// Panics if `i` is out of bounds; the driver iterates `0..table.len()`.
    pub fn for_row(table: &YieldTable, i: usize) -> Frame {
        let row = table.row(i);
        Frame {
            yields: row.yields,
            label: date_label(row.date),
        }
    }

    /// The curve split into runs of consecutive present points.
    ///
    /// Each run is a list of `(x, yield)` pairs; a missing maturity ends the
    /// current run, so the drawn curve has a gap at that x. Runs of length 1
    /// still show up as a lone point.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();

        for (x, y) in self.yields.iter().enumerate() {
            match y {
                Some(v) => current.push((x as f64, *v)),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn three_day_table() -> YieldTable {
        let mut series: [Vec<(NaiveDate, f64)>; MATURITY_COUNT] =
            std::array::from_fn(|_| Vec::new());
        for (col, s) in series.iter_mut().enumerate() {
            for (day, base) in [(1, 1.0), (2, 1.1), (3, 1.2)] {
                s.push((d(2020, 1, day), base + col as f64 * 0.25));
            }
        }
        YieldTable::align(&series)
    }

    #[test]
    fn frame_labels_cover_the_window() {
        let table = three_day_table();
        assert_eq!(table.len(), 3);
        assert_eq!(Frame::for_row(&table, 0).label, "Jan 01, 2020");
        assert_eq!(Frame::for_row(&table, 2).label, "Jan 03, 2020");
    }

    #[test]
    fn frame_generation_is_deterministic() {
        let table = three_day_table();
        assert_eq!(Frame::for_row(&table, 1), Frame::for_row(&table, 1));
    }

    #[test]
    fn full_curve_is_a_single_segment() {
        let table = three_day_table();
        let frame = Frame::for_row(&table, 0);
        let segments = frame.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), MATURITY_COUNT);
        assert_eq!(segments[0][0], (0.0, 1.0));
        assert_eq!(segments[0][7], (7.0, 1.0 + 7.0 * 0.25));
    }

    #[test]
    fn missing_maturities_split_the_curve() {
        let frame = Frame {
            yields: [
                Some(0.1),
                Some(0.2),
                None,
                Some(1.0),
                Some(1.5),
                None,
                None,
                Some(2.5),
            ],
            label: "Jan 02, 2020".to_string(),
        };

        let segments = frame.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], vec![(0.0, 0.1), (1.0, 0.2)]);
        assert_eq!(segments[1], vec![(3.0, 1.0), (4.0, 1.5)]);
        assert_eq!(segments[2], vec![(7.0, 2.5)]);
    }

    #[test]
    fn all_missing_frame_has_no_segments() {
        let frame = Frame {
            yields: [None; MATURITY_COUNT],
            label: "Jan 01, 2020".to_string(),
        };
        assert!(frame.segments().is_empty());
    }
}
