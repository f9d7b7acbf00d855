//! Terminal output formatting: date labels, covered-range line, elapsed time.
//!
//! We keep formatting code in one place so:
//! - the pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::YieldTable;

/// Format a date the way it appears in the video and in terminal output,
/// e.g. `Jan 04, 2010`.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// The covered-range line printed after alignment.
///
/// Returns `None` for an empty table (the pipeline errors out before
/// printing in that case).
pub fn format_date_range(table: &YieldTable) -> Option<String> {
    let first = table.first_date()?;
    let last = table.last_date()?;
    Some(format!(
        "Date range: {} to {}",
        date_label(first),
        date_label(last)
    ))
}

/// Format elapsed wall time as `0h 05m 12s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (h, rem) = (total / 3600, total % 3600);
    let (m, s) = (rem / 60, rem % 60);
    format!("{h}h {m:02}m {s:02}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MATURITY_COUNT, YieldTable};

    #[test]
    fn date_label_matches_expected_format() {
        let d = NaiveDate::from_ymd_opt(2010, 1, 4).unwrap();
        assert_eq!(date_label(d), "Jan 04, 2010");
    }

    #[test]
    fn date_range_line_uses_first_and_last_rows() {
        let mut series: [Vec<(NaiveDate, f64)>; MATURITY_COUNT] =
            std::array::from_fn(|_| Vec::new());
        series[0] = vec![
            (NaiveDate::from_ymd_opt(2010, 1, 4).unwrap(), 0.05),
            (NaiveDate::from_ymd_opt(2010, 2, 1).unwrap(), 0.06),
        ];
        let table = YieldTable::align(&series);

        assert_eq!(
            format_date_range(&table).unwrap(),
            "Date range: Jan 04, 2010 to Feb 01, 2010"
        );
    }

    #[test]
    fn date_range_of_empty_table_is_none() {
        let table = YieldTable::default();
        assert_eq!(format_date_range(&table), None);
    }

    #[test]
    fn elapsed_formatting_pads_minutes_and_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0h 00m 00s");
        assert_eq!(format_elapsed(Duration::from_secs(62)), "0h 01m 02s");
        assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 5)), "3h 00m 05s");
        assert_eq!(
            format_elapsed(Duration::from_secs(3661 + 25 * 3600)),
            "26h 01m 01s"
        );
    }
}
