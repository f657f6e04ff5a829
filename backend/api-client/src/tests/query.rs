use crate::api_client::{QueryParams, RequestOptions};
use crate::services::{
    ChangeRequestFilters, FeedbackFilters, ProjectFilters, ResourceFilters, SystemFilters,
};

/// **VALUE**: Absent and blank values never become query parameters.
///
/// **BUG THIS CATCHES**: Would catch `?status=&priority=` reaching the API,
/// which upstream treats as "filter by empty string".
#[test]
fn given_none_and_blank_values_when_pushed_then_omitted() {
    let query = QueryParams::new()
        .with("status", Some("open"))
        .with("priority", None::<&str>)
        .with("department", Some(""))
        .with("search", Some("   "));

    assert_eq!(query.keys().collect::<Vec<_>>(), vec!["status"]);
    assert_eq!(query.get("status"), Some("open"));
}

#[test]
fn given_padded_value_when_pushed_then_trimmed() {
    let query = QueryParams::new().with("search", Some("  CHG-1 "));

    assert_eq!(query.get("search"), Some("CHG-1"));
}

/// **VALUE**: For every combination of set/unset change-request filters, the
/// query keys are exactly the non-blank ones.
#[test]
fn given_all_filter_combinations_when_to_query_then_keys_are_exactly_non_blank_filters() {
    let names = ["status", "priority", "department", "assignee_id", "search"];

    for mask in 0u32..(1 << names.len()) {
        let value = |bit: usize| -> Option<String> {
            if mask & (1 << bit) != 0 {
                Some(format!("v{bit}"))
            } else if bit % 2 == 0 {
                None
            } else {
                Some(String::from(" "))
            }
        };

        let filters = ChangeRequestFilters {
            status: value(0),
            priority: value(1),
            department: value(2),
            assignee_id: value(3),
            search: value(4),
        };

        let query = filters.to_query();

        let mut expected: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, name)| *name)
            .collect();
        expected.sort_unstable();

        assert_eq!(query.keys().collect::<Vec<_>>(), expected, "mask {mask:05b}");
    }
}

/// **VALUE**: Feedback's `source_system` argument goes out as `sourceSystem`.
///
/// **BUG THIS CATCHES**: Would catch someone "fixing" the naming to match the
/// other families, which the upstream API would silently ignore.
#[test]
fn given_feedback_source_system_when_to_query_then_wire_name_is_camel_case() {
    let filters = FeedbackFilters {
        source_system: Some(String::from("SAP")),
        ..FeedbackFilters::default()
    };

    let query = filters.to_query();

    assert_eq!(query.get("sourceSystem"), Some("SAP"));
    assert_eq!(query.get("source_system"), None);
}

#[test]
fn given_default_filters_when_to_query_then_empty_for_every_family() {
    assert!(ChangeRequestFilters::default().to_query().is_empty());
    assert!(SystemFilters::default().to_query().is_empty());
    assert!(FeedbackFilters::default().to_query().is_empty());
    assert!(ProjectFilters::default().to_query().is_empty());
}

#[test]
fn given_invalid_header_name_when_added_then_payload_error() {
    let result = RequestOptions::new().header("bad header", "x");

    assert!(matches!(result, Err(crate::ApiError::Payload { .. })));
}
