//! Names, descriptions and input schemas of every tool the server exposes.

use crate::protocol::ToolSchema;
use crate::tools::arguments::PAYLOAD_ARG;

use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    ChangeRequests,
    Systems,
    Feedback,
    Projects,
}

impl Family {
    pub const ALL: [Family; 4] = [
        Family::ChangeRequests,
        Family::Systems,
        Family::Feedback,
        Family::Projects,
    ];

    /// Tool-name stem for list operations.
    pub fn plural(&self) -> &'static str {
        match self {
            Family::ChangeRequests => "change_requests",
            Family::Systems => "systems",
            Family::Feedback => "feedback",
            Family::Projects => "projects",
        }
    }

    /// Tool-name stem for single-record operations.
    pub fn singular(&self) -> &'static str {
        match self {
            Family::ChangeRequests => "change_request",
            Family::Systems => "system",
            Family::Feedback => "feedback",
            Family::Projects => "project",
        }
    }

    /// Human-readable name of one record.
    pub fn label(&self) -> &'static str {
        match self {
            Family::ChangeRequests => "change request",
            Family::Systems => "system",
            Family::Feedback => "feedback item",
            Family::Projects => "project",
        }
    }

    pub fn id_arg(&self) -> &'static str {
        match self {
            Family::ChangeRequests => "change_id",
            Family::Systems => "system_id",
            Family::Feedback => "feedback_id",
            Family::Projects => "project_id",
        }
    }

    /// Caller-facing filter arguments and their descriptions.
    pub fn filters(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Family::ChangeRequests => &[
                ("status", "Filter by status"),
                ("priority", "Filter by priority"),
                ("department", "Filter by department"),
                ("assignee_id", "Filter by assignee ID"),
                ("search", "Search by key, title, or description"),
            ],
            Family::Systems => &[
                ("status", "Filter by status"),
                ("department", "Filter by owning department"),
                ("search", "Search by name or description"),
            ],
            Family::Feedback => &[
                ("source_system", "Filter by the system the feedback came from"),
                ("status", "Filter by status"),
                ("search", "Search feedback text"),
            ],
            Family::Projects => &[
                ("status", "Filter by status"),
                ("department", "Filter by department"),
                ("search", "Search by name or description"),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Resource(Family, Operation),
    AddComment,
    Approve,
    Reject,
    AnalyzeChange,
    HealthCheck,
}

impl ToolKind {
    pub fn all() -> Vec<ToolKind> {
        let mut kinds: Vec<ToolKind> = Family::ALL
            .iter()
            .flat_map(|family| {
                Operation::ALL
                    .iter()
                    .map(move |operation| ToolKind::Resource(*family, *operation))
            })
            .collect();
        kinds.extend([
            ToolKind::AddComment,
            ToolKind::Approve,
            ToolKind::Reject,
            ToolKind::AnalyzeChange,
            ToolKind::HealthCheck,
        ]);
        kinds
    }

    pub fn lookup(name: &str) -> Option<ToolKind> {
        Self::all().into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(&self) -> String {
        match self {
            ToolKind::Resource(family, Operation::List) => format!("list_{}", family.plural()),
            ToolKind::Resource(family, Operation::Get) => format!("get_{}", family.singular()),
            ToolKind::Resource(family, Operation::Create) => format!("create_{}", family.singular()),
            ToolKind::Resource(family, Operation::Update) => format!("update_{}", family.singular()),
            ToolKind::Resource(family, Operation::Delete) => format!("delete_{}", family.singular()),
            ToolKind::AddComment => String::from("add_change_request_comment"),
            ToolKind::Approve => String::from("approve_change_request"),
            ToolKind::Reject => String::from("reject_change_request"),
            ToolKind::AnalyzeChange => String::from("analyze_change"),
            ToolKind::HealthCheck => String::from("health_check"),
        }
    }

    pub fn description(&self) -> String {
        match self {
            ToolKind::Resource(family, Operation::List) => format!(
                "List {} records with optional filtering. Blank filters are ignored.",
                family.label()
            ),
            ToolKind::Resource(family, Operation::Get) => {
                format!("Get a single {} by ID.", family.label())
            }
            ToolKind::Resource(family, Operation::Create) => format!(
                "Create a {}. '{PAYLOAD_ARG}' is the record as a JSON string.",
                family.label()
            ),
            ToolKind::Resource(family, Operation::Update) => format!(
                "Partially update a {}. '{PAYLOAD_ARG}' holds only the fields to change, as a JSON string.",
                family.label()
            ),
            ToolKind::Resource(family, Operation::Delete) => {
                format!("Delete a {} by ID.", family.label())
            }
            ToolKind::AddComment => format!(
                "Add a comment to a change request. '{PAYLOAD_ARG}' is the comment as a JSON string."
            ),
            ToolKind::Approve => String::from("Approve a change request."),
            ToolKind::Reject => String::from("Reject a change request."),
            ToolKind::AnalyzeChange => {
                String::from("Search for change requests matching a key, title, or description.")
            }
            ToolKind::HealthCheck => String::from(
                "Report the API configuration and verify connectivity with one list call.",
            ),
        }
    }

    pub fn input_schema(&self) -> Value {
        let change_id = Family::ChangeRequests.id_arg();
        match self {
            ToolKind::Resource(family, Operation::List) => {
                let properties = family
                    .filters()
                    .iter()
                    .map(|(name, description)| (name.to_string(), json_schema_string(description)))
                    .collect::<serde_json::Map<_, _>>();
                json_schema_object(Value::Object(properties), &[])
            }
            ToolKind::Resource(family, Operation::Get | Operation::Delete) => {
                id_schema(family.id_arg(), family.label())
            }
            ToolKind::Resource(_, Operation::Create) => json_schema_object(
                json!({ PAYLOAD_ARG: json_schema_string("Record fields as a JSON string") }),
                &[PAYLOAD_ARG],
            ),
            ToolKind::Resource(family, Operation::Update) => json_schema_object(
                json!({
                    family.id_arg(): json_schema_string(&format!("ID of the {}", family.label())),
                    PAYLOAD_ARG: json_schema_string("Fields to update as a JSON string"),
                }),
                &[family.id_arg(), PAYLOAD_ARG],
            ),
            ToolKind::AddComment => json_schema_object(
                json!({
                    change_id: json_schema_string("ID of the change request"),
                    PAYLOAD_ARG: json_schema_string("Comment fields as a JSON string"),
                }),
                &[change_id, PAYLOAD_ARG],
            ),
            ToolKind::Approve | ToolKind::Reject => id_schema(change_id, "change request"),
            ToolKind::AnalyzeChange => json_schema_object(
                json!({ "change": json_schema_string("Change key, title, or description to search for") }),
                &["change"],
            ),
            ToolKind::HealthCheck => json_schema_object(json!({}), &[]),
        }
    }

    pub fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

pub fn list_schemas() -> Vec<ToolSchema> {
    ToolKind::all().iter().map(ToolKind::schema).collect()
}

// Helper functions for creating tool schemas

fn id_schema(id_arg: &str, label: &str) -> Value {
    json_schema_object(
        json!({ id_arg: json_schema_string(&format!("ID of the {label}")) }),
        &[id_arg],
    )
}

pub fn json_schema_object(properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}
