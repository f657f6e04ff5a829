use crate::api_client::QueryParams;
use crate::error::ApiError;
use crate::services::{Resource, ResourceFilters, ResourceService};

use serde::Deserialize;
use serde_json::Value;

const CHANGE_REQUESTS_PATH: &str = "/change-requests";

pub struct ChangeRequests;

impl Resource for ChangeRequests {
    const NAME: &'static str = "change request";
    const LIST_PATH: &'static str = CHANGE_REQUESTS_PATH;
    const CREATE_PATH: &'static str = CHANGE_REQUESTS_PATH;
    const ITEM_PREFIX: &'static str = CHANGE_REQUESTS_PATH;

    type Filters = ChangeRequestFilters;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChangeRequestFilters {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub department: Option<String>,
    pub assignee_id: Option<String>,
    /// Matches key, title, or description.
    pub search: Option<String>,
}

impl ChangeRequestFilters {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }
}

impl ResourceFilters for ChangeRequestFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("status", self.status.as_deref())
            .with("priority", self.priority.as_deref())
            .with("department", self.department.as_deref())
            .with("assignee_id", self.assignee_id.as_deref())
            .with("search", self.search.as_deref())
    }
}

/// State transitions and comments. The remote API owns the state machine;
/// these just return whatever record it produces.
impl ResourceService<'_, ChangeRequests> {
    pub async fn add_comment(&self, id: &str, data: &Value) -> Result<Value, ApiError> {
        let path = format!("{}/comments", ChangeRequests::item_path(id)?);
        self.client().post(&path, Some(data)).await
    }

    pub async fn approve(&self, id: &str) -> Result<Value, ApiError> {
        let path = format!("{}/approve", ChangeRequests::item_path(id)?);
        self.client().post(&path, None).await
    }

    pub async fn reject(&self, id: &str) -> Result<Value, ApiError> {
        let path = format!("{}/reject", ChangeRequests::item_path(id)?);
        self.client().post(&path, None).await
    }
}
