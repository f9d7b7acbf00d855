//! Per-frame data and chart rendering.

pub mod chart;
pub mod frame;

pub use chart::ChartRenderer;
pub use frame::Frame;
