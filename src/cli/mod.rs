//! Command-line parsing for the yield-curve animation tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the data/rendering code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "yc", version, about = "US Treasury Yield Curve Animator (FRED-based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch yields from FRED, render the animation, and encode the video(s).
    Render(RenderArgs),
    /// Fetch and align only; print the covered date range and row count.
    ///
    /// Useful for checking a window before committing to a long render.
    Probe(RenderArgs),
}

/// Common options for rendering and probing.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// First date of the window (inclusive), YYYY-MM-DD.
    #[arg(long, default_value = "2010-01-01")]
    pub start: NaiveDate,

    /// Last date of the window (inclusive), YYYY-MM-DD.
    ///
    /// The default is far in the future so the window simply covers
    /// everything FRED has published to date.
    #[arg(long, default_value = "2500-01-01")]
    pub end: NaiveDate,

    /// Output base path; `.mp4` (and `.ogv` when enabled) are appended.
    #[arg(short = 'o', long, default_value = "us_treasury_yield_curve")]
    pub output: PathBuf,

    /// Frames per second (one table row per frame).
    #[arg(long, default_value_t = 25)]
    pub fps: u32,

    /// MP4 video bitrate in kbit/s.
    #[arg(long, default_value_t = 3000)]
    pub bitrate: u32,

    /// Frame width in pixels (must be even).
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Frame height in pixels (must be even).
    #[arg(long, default_value_t = 900)]
    pub height: u32,

    /// Top of the percent axis; ticks are drawn every 2 from 2.
    #[arg(long, default_value_t = 18.0)]
    pub y_max: f64,

    /// Also transcode the MP4 to OGV (enabled by default).
    #[arg(long, default_value_t = true)]
    pub ogv: bool,

    /// Disable the OGV transcode.
    #[arg(long)]
    pub no_ogv: bool,
}
