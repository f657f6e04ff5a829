use crate::api_client::QueryParams;
use crate::services::{Resource, ResourceFilters};

use serde::Deserialize;

const FEEDBACK_PATH: &str = "/get-feedback";

pub struct Feedback;

impl Resource for Feedback {
    const NAME: &'static str = "feedback";
    const LIST_PATH: &'static str = FEEDBACK_PATH;
    const CREATE_PATH: &'static str = FEEDBACK_PATH;
    const ITEM_PREFIX: &'static str = FEEDBACK_PATH;

    type Filters = FeedbackFilters;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeedbackFilters {
    /// Sent upstream as `sourceSystem`.
    pub source_system: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ResourceFilters for FeedbackFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("sourceSystem", self.source_system.as_deref())
            .with("status", self.status.as_deref())
            .with("search", self.search.as_deref())
    }
}
