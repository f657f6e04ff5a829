use crate::api_client::QueryParams;
use crate::services::{Resource, ResourceFilters};

use serde::Deserialize;

pub struct Systems;

// Listing and creation live under `/get-systems` while single records live
// under `/systems/{id}`. This mirrors the upstream API; do not unify.
impl Resource for Systems {
    const NAME: &'static str = "system";
    const LIST_PATH: &'static str = "/get-systems";
    const CREATE_PATH: &'static str = "/get-systems";
    const ITEM_PREFIX: &'static str = "/systems";

    type Filters = SystemFilters;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemFilters {
    pub status: Option<String>,
    pub department: Option<String>,
    pub search: Option<String>,
}

impl ResourceFilters for SystemFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("status", self.status.as_deref())
            .with("department", self.department.as_deref())
            .with("search", self.search.as_deref())
    }
}
