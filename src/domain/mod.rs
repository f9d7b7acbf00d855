//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed set of Treasury constant-maturity points (`Maturity`)
//! - the aligned daily table (`YieldRow`, `YieldTable`)
//! - the run configuration derived from CLI flags (`RenderConfig`)

pub mod types;

pub use types::*;
