// Unit tests for logger module initialization logic

use crate::logger::{initialize, parse_level};

use log::LevelFilter;

/// **VALUE**: LOG_LEVEL accepts the usual names and falls back to Info.
///
/// **BUG THIS CATCHES**: Would catch a typo in LOG_LEVEL silencing all output.
#[test]
fn given_log_level_values_when_parsed_then_mapped_with_info_fallback() {
    assert_eq!(parse_level(None), LevelFilter::Info);
    assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(parse_level(Some(" WARNING ")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("warn")), LevelFilter::Warn);
    assert_eq!(parse_level(Some("CRITICAL")), LevelFilter::Error);
    assert_eq!(parse_level(Some("trace")), LevelFilter::Trace);
    assert_eq!(parse_level(Some("verbose")), LevelFilter::Info);
}

/// **VALUE**: Calling initialize() twice is harmless and the log file is created.
///
/// **WHY THIS MATTERS**: fern's `apply()` fails once a global logger exists;
/// the second call must turn into a warning instead of an error.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    let temp_dir = tempfile::tempdir().unwrap();

    let first = initialize(LevelFilter::Debug, Some(temp_dir.path()));
    let second = initialize(LevelFilter::Debug, Some(temp_dir.path()));

    assert!(first.is_ok(), "First initialization should succeed: {first:?}");
    assert!(second.is_ok(), "Second initialization should succeed (idempotent)");
    assert!(temp_dir.path().join("changeanalysis-mcp.log").exists());
}
