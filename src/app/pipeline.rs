//! Shared pipeline logic used by both `render` and `probe`.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! FRED fetch -> alignment -> frame loop -> encode
//!
//! The command handlers in `app` then focus on presentation and the optional
//! transcode step.

use crate::data::FredClient;
use crate::domain::{RenderConfig, YieldTable};
use crate::error::AppError;
use crate::render::{ChartRenderer, Frame};
use crate::video::{EncodeConfig, FfmpegEncoder};

/// Fetch all eight series and align them into the daily table.
///
/// An empty result is a distinct fatal condition: we never hand a zero-frame
/// table to the animation loop.
pub fn fetch_table(config: &RenderConfig) -> Result<YieldTable, AppError> {
    let client = FredClient::from_env()?;
    let series = client.fetch_all(config.start, config.end)?;

    let table = YieldTable::align(&series);
    if table.is_empty() {
        return Err(AppError::new(
            4,
            format!(
                "No observations for any series between {} and {}.",
                config.start, config.end
            ),
        ));
    }

    Ok(table)
}

/// Render every row of the table as one frame and encode the MP4.
///
/// Strictly sequential: one pass over rows 0..N-1, no skipping. Each frame is
/// drawn into a reusable RGB buffer and piped straight to ffmpeg.
pub fn render_video(config: &RenderConfig, table: &YieldTable) -> Result<(), AppError> {
    let mut renderer = ChartRenderer::new(config.width, config.height, config.y_max)?;
    let mut encoder = FfmpegEncoder::new(EncodeConfig {
        width: config.width,
        height: config.height,
        fps: config.fps,
        bitrate_kbps: config.bitrate_kbps,
        out_path: config.mp4_path(),
    })?;

    for i in 0..table.len() {
        let frame = Frame::for_row(table, i);
        let rgb = renderer.draw(&frame)?;
        encoder.encode_frame(rgb)?;
    }

    encoder.finish()?;
    println!("Wrote {}", config.mp4_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MATURITY_COUNT;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// The end-to-end alignment + frame-generation scenario: three synthetic
    /// days produce exactly three frames with the expected first/last labels.
    #[test]
    fn three_day_window_yields_three_labeled_frames() {
        let mut series: [Vec<(NaiveDate, f64)>; MATURITY_COUNT] =
            std::array::from_fn(|_| Vec::new());
        for (col, s) in series.iter_mut().enumerate() {
            for day in 1..=3 {
                s.push((d(2020, 1, day), 1.0 + col as f64 * 0.2 + day as f64 * 0.01));
            }
        }

        let table = YieldTable::align(&series);
        assert_eq!(table.len(), 3);

        let frames: Vec<Frame> = (0..table.len()).map(|i| Frame::for_row(&table, i)).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].label, "Jan 01, 2020");
        assert_eq!(frames[2].label, "Jan 03, 2020");
        assert!(frames.iter().all(|f| f.segments().len() == 1));
    }
}
