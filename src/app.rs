//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - fetches the eight Treasury series from FRED
//! - aligns them into the daily yield table
//! - renders and encodes the animation
//! - prints the covered range and the elapsed runtime

use std::time::Instant;

use clap::Parser;

use crate::cli::{Command, RenderArgs};
use crate::domain::RenderConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `yc` binary.
pub fn run() -> Result<(), AppError> {
    // We want `yc` and `yc --start 2020-01-01` to behave like `yc render ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Probe(args) => handle_probe(args),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let started = Instant::now();
    let config = render_config_from_args(&args)?;

    let table = pipeline::fetch_table(&config)?;
    if let Some(line) = crate::report::format_date_range(&table) {
        println!("{line}");
    }

    pipeline::render_video(&config, &table)?;

    // The OGV is a convenience copy; the MP4 above stands on its own even if
    // the transcode fails.
    if config.transcode_ogv {
        match crate::video::transcode::transcode_to_ogv(&config.mp4_path(), &config.ogv_path()) {
            Ok(()) => println!("Wrote {}", config.ogv_path().display()),
            Err(err) => eprintln!("Warning: OGV transcode failed: {err}"),
        }
    }

    println!("{}", crate::report::format_elapsed(started.elapsed()));
    Ok(())
}

fn handle_probe(args: RenderArgs) -> Result<(), AppError> {
    let config = render_config_from_args(&args)?;
    let table = pipeline::fetch_table(&config)?;

    if let Some(line) = crate::report::format_date_range(&table) {
        println!("{line}");
    }
    println!(
        "Rows: {} (one frame per row at {} fps, about {}s of video)",
        table.len(),
        config.fps,
        table.len() as u32 / config.fps.max(1)
    );
    Ok(())
}

pub fn render_config_from_args(args: &RenderArgs) -> Result<RenderConfig, AppError> {
    if args.start > args.end {
        return Err(AppError::new(
            2,
            format!("Start date {} is after end date {}.", args.start, args.end),
        ));
    }

    Ok(RenderConfig {
        start: args.start,
        end: args.end,
        output: args.output.clone(),
        fps: args.fps,
        bitrate_kbps: args.bitrate,
        width: args.width,
        height: args.height,
        y_max: args.y_max,
        transcode_ogv: args.ogv && !args.no_ogv,
    })
}

/// Rewrite argv so `yc` defaults to `yc render`.
///
/// Rules:
/// - `yc`                      -> `yc render`
/// - `yc --start 2020-01-01`   -> `yc render --start 2020-01-01`
/// - `yc --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("render".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "render" | "probe");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "render flags".
    if arg1.starts_with('-') {
        argv.insert(1, "render".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn args_with_window(start: &str, end: &str) -> RenderArgs {
        RenderArgs {
            start: start.parse::<NaiveDate>().unwrap(),
            end: end.parse::<NaiveDate>().unwrap(),
            output: "out".into(),
            fps: 25,
            bitrate: 3000,
            width: 1600,
            height: 900,
            y_max: 18.0,
            ogv: true,
            no_ogv: false,
        }
    }

    #[test]
    fn inverted_window_is_rejected_before_any_fetch() {
        let err = render_config_from_args(&args_with_window("2020-06-01", "2020-01-01"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn no_ogv_wins_over_the_default() {
        let mut args = args_with_window("2020-01-01", "2020-06-01");
        args.no_ogv = true;
        let config = render_config_from_args(&args).unwrap();
        assert!(!config.transcode_ogv);
    }

    #[test]
    fn output_paths_share_the_base_name() {
        let config = render_config_from_args(&args_with_window("2020-01-01", "2020-06-01")).unwrap();
        assert_eq!(config.mp4_path().to_str(), Some("out.mp4"));
        assert_eq!(config.ogv_path().to_str(), Some("out.ogv"));
    }

    #[test]
    fn bare_invocation_defaults_to_render() {
        let argv = rewrite_args(vec!["yc".to_string()]);
        assert_eq!(argv, vec!["yc", "render"]);
    }

    #[test]
    fn leading_flag_is_treated_as_render_flags() {
        let argv = rewrite_args(vec![
            "yc".to_string(),
            "--start".to_string(),
            "2020-01-01".to_string(),
        ]);
        assert_eq!(argv, vec!["yc", "render", "--start", "2020-01-01"]);
    }

    #[test]
    fn explicit_subcommands_and_help_pass_through() {
        let argv = rewrite_args(vec!["yc".to_string(), "probe".to_string()]);
        assert_eq!(argv, vec!["yc", "probe"]);
        let argv = rewrite_args(vec!["yc".to_string(), "--help".to_string()]);
        assert_eq!(argv, vec!["yc", "--help"]);
    }
}
