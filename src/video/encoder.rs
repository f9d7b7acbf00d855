//! MP4 encoding via a spawned system `ffmpeg`.
//!
//! Raw RGB frames are piped to ffmpeg's stdin and encoded with libx264 into
//! yuv420p MP4. We intentionally shell out to the system binary rather than
//! linking FFmpeg, which would require native dev headers/libs at build time.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    /// Video bitrate in kbit/s.
    pub bitrate_kbps: u32,
    pub out_path: PathBuf,
}

impl EncodeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::new(2, "Encode width/height must be non-zero."));
        }
        if self.width % 2 != 0 || self.height % 2 != 0 {
            // yuv420p output requires even dimensions.
            return Err(AppError::new(2, "Encode width/height must be even."));
        }
        if self.fps == 0 {
            return Err(AppError::new(2, "Encode fps must be non-zero."));
        }
        Ok(())
    }

    /// The ffmpeg arguments for this config (input spec first, then output).
    fn to_args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "-y",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgb24",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        args.push("-s".to_string());
        args.push(format!("{}x{}", self.width, self.height));
        args.push("-r".to_string());
        args.push(self.fps.to_string());
        args.extend(["-i", "pipe:0", "-an", "-c:v", "libx264"].iter().map(|s| s.to_string()));
        args.push("-b:v".to_string());
        args.push(format!("{}k", self.bitrate_kbps));
        args.extend(
            ["-pix_fmt", "yuv420p", "-movflags", "+faststart"]
                .iter()
                .map(|s| s.to_string()),
        );
        args.push(self.out_path.display().to_string());
        args
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::new(
                2,
                format!("Failed to create output directory '{}': {e}", parent.display()),
            )
        })?;
    }
    Ok(())
}

pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    frame_len: usize,
}

impl FfmpegEncoder {
    pub fn new(cfg: EncodeConfig) -> Result<Self, AppError> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !is_ffmpeg_on_path() {
            return Err(AppError::new(
                5,
                "ffmpeg is required for MP4 encoding, but was not found on PATH.",
            ));
        }

        let mut child = Command::new("ffmpeg")
            .args(cfg.to_args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AppError::new(5, format!("Failed to spawn ffmpeg: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| AppError::new(5, "Failed to open ffmpeg stdin."))?;

        Ok(Self {
            frame_len: (cfg.width as usize) * (cfg.height as usize) * 3,
            cfg,
            child,
            stdin: Some(stdin),
        })
    }

    /// Write one raw RGB frame (`width * height * 3` bytes, row-major).
    pub fn encode_frame(&mut self, rgb: &[u8]) -> Result<(), AppError> {
        if rgb.len() != self.frame_len {
            return Err(AppError::new(
                5,
                format!(
                    "Frame size mismatch: got {} bytes, expected {} ({}x{} rgb24).",
                    rgb.len(),
                    self.frame_len,
                    self.cfg.width,
                    self.cfg.height
                ),
            ));
        }

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(AppError::new(5, "ffmpeg encoder is already finalized."));
        };

        stdin
            .write_all(rgb)
            .map_err(|e| AppError::new(5, format!("Failed to write frame to ffmpeg: {e}")))
    }

    /// Close the pipe and wait for ffmpeg to finish writing the file.
    pub fn finish(mut self) -> Result<(), AppError> {
        drop(self.stdin.take());

        let output = self
            .child
            .wait_with_output()
            .map_err(|e| AppError::new(5, format!("Failed to wait for ffmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::new(
                5,
                format!("ffmpeg exited with status {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cfg() -> EncodeConfig {
        EncodeConfig {
            width: 1600,
            height: 900,
            fps: 25,
            bitrate_kbps: 3000,
            out_path: PathBuf::from("out.mp4"),
        }
    }

    #[test]
    fn config_validation_catches_bad_values() {
        assert!(base_cfg().validate().is_ok());

        let mut cfg = base_cfg();
        cfg.width = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = base_cfg();
        cfg.height = 901;
        assert!(cfg.validate().is_err());

        let mut cfg = base_cfg();
        cfg.fps = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn args_pipe_raw_rgb_into_libx264() {
        let args = base_cfg().to_args();
        let joined = args.join(" ");
        assert!(joined.contains("-f rawvideo"));
        assert!(joined.contains("-pix_fmt rgb24"));
        assert!(joined.contains("-s 1600x900"));
        assert!(joined.contains("-r 25"));
        assert!(joined.contains("-i pipe:0"));
        assert!(joined.contains("-c:v libx264"));
        assert!(joined.contains("-b:v 3000k"));
        assert!(joined.contains("-pix_fmt yuv420p"));
        assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
    }
}
