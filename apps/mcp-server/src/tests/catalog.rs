use crate::tools::catalog::{Family, Operation, ToolKind, list_schemas};

use std::collections::HashSet;

/// **VALUE**: Every tool name is unique and resolves back to its kind.
///
/// **BUG THIS CATCHES**: Would catch two families generating the same name
/// (feedback has the same singular and plural stem).
#[test]
fn given_all_tools_when_names_generated_then_unique_and_reversible() {
    let kinds = ToolKind::all();
    let names: HashSet<String> = kinds.iter().map(ToolKind::name).collect();

    assert_eq!(names.len(), kinds.len());
    for kind in kinds {
        assert_eq!(ToolKind::lookup(&kind.name()), Some(kind));
    }
}

#[test]
fn given_known_names_when_looked_up_then_expected_kinds() {
    assert_eq!(
        ToolKind::lookup("list_change_requests"),
        Some(ToolKind::Resource(Family::ChangeRequests, Operation::List))
    );
    assert_eq!(
        ToolKind::lookup("get_feedback"),
        Some(ToolKind::Resource(Family::Feedback, Operation::Get))
    );
    assert_eq!(
        ToolKind::lookup("delete_project"),
        Some(ToolKind::Resource(Family::Projects, Operation::Delete))
    );
    assert_eq!(ToolKind::lookup("health_check"), Some(ToolKind::HealthCheck));
    assert_eq!(ToolKind::lookup("greet"), None);
}

/// **VALUE**: List schemas advertise the caller-facing filter names.
#[test]
fn given_feedback_list_schema_when_built_then_uses_source_system() {
    let schema = ToolKind::Resource(Family::Feedback, Operation::List).input_schema();

    assert!(schema["properties"].get("source_system").is_some());
    assert!(schema["properties"].get("sourceSystem").is_none());
}

#[test]
fn given_update_schema_when_built_then_id_and_data_required() {
    let schema = ToolKind::Resource(Family::Systems, Operation::Update).input_schema();

    assert_eq!(schema["required"], serde_json::json!(["system_id", "data"]));
}

#[test]
fn given_catalog_when_listed_then_twenty_five_tools() {
    assert_eq!(list_schemas().len(), 25);
}
