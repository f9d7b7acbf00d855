//! OGV transcode of the finished MP4.
//!
//! This is an explicit external-process collaborator with a defined
//! success/failure contract: a failure here is reported by the caller but
//! never invalidates the already-written MP4.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::AppError;

// The original publishing settings: Vorbis stereo audio track parameters
// (unused for a silent video but kept for player compatibility) and a fixed
// OGV video bitrate.
const OGV_ARGS: [&str; 10] = [
    "-acodec", "libvorbis", "-ac", "2", "-ab", "128k", "-ar", "44100", "-b:v", "1800k",
];

/// Build the ffmpeg argument list for the transcode.
fn to_args(mp4: &Path, ogv: &Path) -> Vec<String> {
    let mut args = vec![
        "-y".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-i".to_string(),
        mp4.display().to_string(),
    ];
    args.extend(OGV_ARGS.iter().map(|s| s.to_string()));
    args.push(ogv.display().to_string());
    args
}

/// Transcode `mp4` into `ogv` with the fixed quality parameters.
pub fn transcode_to_ogv(mp4: &Path, ogv: &Path) -> Result<(), AppError> {
    let output = Command::new("ffmpeg")
        .args(to_args(mp4, ogv))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| AppError::new(5, format!("Failed to run ffmpeg for OGV transcode: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::new(
            5,
            format!(
                "OGV transcode exited with status {}: {}",
                output.status,
                stderr.trim()
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn args_carry_the_fixed_quality_settings() {
        let args = to_args(&PathBuf::from("curve.mp4"), &PathBuf::from("curve.ogv"));
        let joined = args.join(" ");
        assert!(joined.contains("-i curve.mp4"));
        assert!(joined.contains("-acodec libvorbis"));
        assert!(joined.contains("-ac 2"));
        assert!(joined.contains("-ab 128k"));
        assert!(joined.contains("-ar 44100"));
        assert!(joined.contains("-b:v 1800k"));
        assert_eq!(args.last().map(String::as_str), Some("curve.ogv"));
    }
}
