//! Plotters-powered frame drawing.
//!
//! Each frame is drawn into a reusable in-memory RGB buffer via Plotters'
//! `BitMapBackend`; the animation driver hands that buffer straight to the
//! video encoder. The renderer is data-driven: it consumes a `Frame` value
//! and holds no reference to the table.

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::domain::{MATURITY_COUNT, Maturity};
use crate::error::AppError;
use crate::render::Frame;

const TITLE: &str = "U.S. Treasury Bond Yield Curve";
const X_DESC: &str = "Time to maturity";
const Y_DESC: &str = "Percent";

/// Matplotlib's default line blue, for continuity with the original figures.
const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);

pub struct ChartRenderer {
    width: u32,
    height: u32,
    y_max: f64,
    buffer: Vec<u8>,
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32, y_max: f64) -> Result<Self, AppError> {
        if width == 0 || height == 0 {
            return Err(AppError::new(2, "Frame width/height must be non-zero."));
        }
        if !(y_max.is_finite() && y_max > 0.0) {
            return Err(AppError::new(2, "Axis y-max must be a positive number."));
        }
        Ok(Self {
            width,
            height,
            y_max,
            // RGB, 3 bytes per pixel.
            buffer: vec![0u8; (width as usize) * (height as usize) * 3],
        })
    }

    /// Draw one frame and return the rendered RGB pixel buffer
    /// (`width * height * 3` bytes, row-major).
    pub fn draw(&mut self, frame: &Frame) -> Result<&[u8], AppError> {
        let y_max = self.y_max;
        {
            let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .caption(TITLE, ("sans-serif", 44))
                .set_label_area_size(LabelAreaPosition::Left, 90)
                .set_label_area_size(LabelAreaPosition::Bottom, 70)
                .build_cartesian_2d(-0.25..(MATURITY_COUNT as f64 - 0.75), 0.0..y_max)
                .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;

            chart
                .configure_mesh()
                .x_labels(MATURITY_COUNT)
                .y_labels((y_max / 2.0).ceil() as usize + 1)
                .x_label_formatter(&maturity_tick_label)
                .y_label_formatter(&percent_tick_label)
                .x_desc(X_DESC)
                .y_desc(Y_DESC)
                .label_style(("sans-serif", 26))
                .axis_desc_style(("sans-serif", 32))
                .draw()
                .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;

            // The curve, with a gap wherever a maturity has no observation
            // that day. A run of length one is drawn as a lone dot since a
            // line needs two endpoints.
            for segment in frame.segments() {
                if segment.len() == 1 {
                    chart
                        .draw_series(std::iter::once(Circle::new(
                            segment[0],
                            5,
                            CURVE_COLOR.filled(),
                        )))
                        .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;
                } else {
                    chart
                        .draw_series(LineSeries::new(
                            segment.iter().copied(),
                            CURVE_COLOR.stroke_width(8),
                        ))
                        .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;
                }
            }

            // Date stamp near the top of the plot, right-aligned.
            let stamp_style = TextStyle::from(("sans-serif", 30).into_font())
                .pos(Pos::new(HPos::Right, VPos::Top));
            chart
                .plotting_area()
                .draw(&Text::new(
                    frame.label.clone(),
                    (0.975, 0.925 * y_max),
                    stamp_style,
                ))
                .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;

            root.present()
                .map_err(|e| AppError::new(5, format!("Chart rendering failed: {e}")))?;
        }

        Ok(&self.buffer)
    }
}

/// Label integer x positions with their maturity names; Plotters may probe
/// in-between values, which stay unlabeled.
fn maturity_tick_label(v: &f64) -> String {
    let i = v.round();
    if (v - i).abs() > 1e-6 || !(0.0..(MATURITY_COUNT as f64)).contains(&i) {
        return String::new();
    }
    Maturity::ALL[i as usize].axis_label().to_string()
}

/// Even percent ticks from 2 up, matching the original figure's axis.
fn percent_tick_label(v: &f64) -> String {
    let i = v.round();
    if (v - i).abs() > 1e-6 || i < 2.0 || (i as i64) % 2 != 0 {
        return String::new();
    }
    format!("{}", i as i64)
}
