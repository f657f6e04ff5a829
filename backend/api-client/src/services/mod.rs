//! Resource services for the four API families.
//!
//! Every family shares the same list/get/create/update/delete shape against
//! its own paths and filter set; [`ResourceService`] implements it once and
//! each family plugs in through the [`Resource`] trait.

pub mod change_requests;
pub mod feedback;
pub mod payload;
pub mod projects;
pub mod systems;

pub use change_requests::{ChangeRequestFilters, ChangeRequests};
pub use feedback::{Feedback, FeedbackFilters};
pub use payload::parse_payload;
pub use projects::{ProjectFilters, Projects};
pub use systems::{SystemFilters, Systems};

use crate::api_client::{ApiClient, QueryParams};
use crate::error::ApiError;

use std::marker::PhantomData;

use log::debug;
use serde_json::Value;

pub type ChangeRequestsService<'a> = ResourceService<'a, ChangeRequests>;
pub type SystemsService<'a> = ResourceService<'a, Systems>;
pub type FeedbackService<'a> = ResourceService<'a, Feedback>;
pub type ProjectsService<'a> = ResourceService<'a, Projects>;

/// Path layout and filter set of one resource family.
pub trait Resource {
    /// Singular, human-readable name used in logs.
    const NAME: &'static str;
    const LIST_PATH: &'static str;
    const CREATE_PATH: &'static str;
    /// Prefix for item paths; the identifier is appended as one encoded segment.
    const ITEM_PREFIX: &'static str;

    type Filters: ResourceFilters;

    /// # Errors
    ///
    /// Returns [`ApiError::InvalidIdentifier`] if `id` cannot be a path segment.
    fn item_path(id: &str) -> Result<String, ApiError> {
        Ok(format!("{}/{}", Self::ITEM_PREFIX, path_segment(id)?))
    }
}

/// Percent-encode `id` so it stays a single path segment.
///
/// Empty, `.` and `..` are rejected: URL parsing would collapse them into
/// the parent path whatever their encoding.
pub fn path_segment(id: &str) -> Result<String, ApiError> {
    if matches!(id, "" | "." | "..") {
        return Err(ApiError::invalid_identifier(id));
    }
    Ok(urlencoding::encode(id).into_owned())
}

/// Filter arguments that turn into query parameters for `list`.
pub trait ResourceFilters {
    /// Only non-blank filters end up in the result.
    fn to_query(&self) -> QueryParams;
}

// ============================================
// RESPONSE NORMALIZATION
// ============================================

/// The wire shapes a list endpoint may answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// A bare JSON array.
    Collection(Vec<Value>),
    /// An object wrapping the collection under `items`.
    Envelope(Value),
    /// Anything else, typically one object for a zero/one-result query.
    Single(Value),
}

impl From<Value> for ResponseShape {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(records) => ResponseShape::Collection(records),
            Value::Object(mut object) => match object.remove("items") {
                Some(items) => ResponseShape::Envelope(items),
                None => ResponseShape::Single(Value::Object(object)),
            },
            other => ResponseShape::Single(other),
        }
    }
}

impl ResponseShape {
    /// Collapse into the canonical collection type.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            ResponseShape::Collection(records) => records,
            ResponseShape::Envelope(Value::Array(records)) => records,
            ResponseShape::Envelope(Value::Null) => Vec::new(),
            ResponseShape::Envelope(items) => vec![items],
            ResponseShape::Single(record) => vec![record],
        }
    }
}

/// Normalize a list response so callers never see a bare object.
pub fn normalize_collection(value: Value) -> Vec<Value> {
    ResponseShape::from(value).into_records()
}

// ============================================
// GENERIC SERVICE
// ============================================

/// CRUD operations for one resource family, bound to an open [`ApiClient`].
pub struct ResourceService<'a, R: Resource> {
    client: &'a ApiClient,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    pub(crate) fn client(&self) -> &'a ApiClient {
        self.client
    }

    pub async fn list(&self, filters: &R::Filters) -> Result<Vec<Value>, ApiError> {
        let query = filters.to_query();
        debug!("Listing {} records with {} filter(s)", R::NAME, query.len());

        let data = self.client.get(R::LIST_PATH, Some(&query)).await?;
        Ok(normalize_collection(data))
    }

    pub async fn get(&self, id: &str) -> Result<Value, ApiError> {
        self.client.get(&R::item_path(id)?, None).await
    }

    /// The server assigns identifiers; the created record is returned as-is.
    pub async fn create(&self, data: &Value) -> Result<Value, ApiError> {
        self.client.post(R::CREATE_PATH, Some(data)).await
    }

    /// Partial update: only the supplied fields change upstream.
    pub async fn update(&self, id: &str, data: &Value) -> Result<Value, ApiError> {
        self.client.patch(&R::item_path(id)?, Some(data)).await
    }

    /// The API answers deletes with 204, which comes back as `{}`.
    pub async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete(&R::item_path(id)?).await
    }
}
