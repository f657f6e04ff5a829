use crate::api_client::QueryParams;
use crate::services::{Resource, ResourceFilters};

use serde::Deserialize;

const PROJECTS_PATH: &str = "/get-projects";

pub struct Projects;

impl Resource for Projects {
    const NAME: &'static str = "project";
    const LIST_PATH: &'static str = PROJECTS_PATH;
    const CREATE_PATH: &'static str = PROJECTS_PATH;
    const ITEM_PREFIX: &'static str = PROJECTS_PATH;

    type Filters = ProjectFilters;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectFilters {
    pub status: Option<String>,
    pub department: Option<String>,
    pub search: Option<String>,
}

impl ResourceFilters for ProjectFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("status", self.status.as_deref())
            .with("department", self.department.as_deref())
            .with("search", self.search.as_deref())
    }
}
