//! `yc-anim` library crate.
//!
//! The binary (`yc`) is a thin wrapper around this library so that:
//!
//! - core logic (alignment, frame generation) is testable without network,
//!   fonts, or a system ffmpeg
//! - modules are reusable (e.g., future batch renderer, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod render;
pub mod report;
pub mod video;
