//! Video output: ffmpeg-based MP4 encoding and the optional OGV transcode.

pub mod encoder;
pub mod transcode;

pub use encoder::{EncodeConfig, FfmpegEncoder};
