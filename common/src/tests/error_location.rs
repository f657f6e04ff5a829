use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the call site.
///
/// **WHY THIS MATTERS**: Every API and configuration error carries one of these.
/// A wrong file or line makes every error message misleading.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the bracketed `[file:line:column]` Display format.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation::from(Location::caller());

    let formatted = location.to_string();

    assert!(formatted.starts_with('['));
    assert!(formatted.ends_with(']'));
    assert!(formatted.contains(&format!(":{}:", location.line)));
    assert_eq!(formatted.matches(':').count(), 2);
}
