//! Change-request tools beyond plain CRUD.

use crate::error::ToolError;
use crate::tools::catalog::Family;
use crate::tools::{ToolContext, arguments, format};

use api_client::services::ChangeRequestFilters;

use serde_json::Value;

const CHANGE_ARG: &str = "change";

pub async fn add_comment(context: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let id = arguments::required_str(args, Family::ChangeRequests.id_arg())?;
    let data = arguments::payload(args)?;

    let comment = context
        .with_api(async |api| api.change_requests()?.add_comment(&id, &data).await)
        .await?;

    Ok(format!(
        "Added comment to change request {id}:\n{}",
        format::render_json(&comment)
    ))
}

pub async fn approve(context: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let id = arguments::required_str(args, Family::ChangeRequests.id_arg())?;

    let record = context
        .with_api(async |api| api.change_requests()?.approve(&id).await)
        .await?;

    Ok(format!(
        "Approved change request {id}:\n{}",
        format::render_json(&record)
    ))
}

pub async fn reject(context: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let id = arguments::required_str(args, Family::ChangeRequests.id_arg())?;

    let record = context
        .with_api(async |api| api.change_requests()?.reject(&id).await)
        .await?;

    Ok(format!(
        "Rejected change request {id}:\n{}",
        format::render_json(&record)
    ))
}

/// Search change requests by key, title, or description.
pub async fn analyze_change(context: &ToolContext, args: &Value) -> Result<String, ToolError> {
    let change = arguments::required_str(args, CHANGE_ARG)?;
    let filters = ChangeRequestFilters::search(change.as_str());

    let records = context
        .with_api(async |api| api.change_requests()?.list(&filters).await)
        .await?;

    if records.is_empty() {
        return Ok(format!("No change requests found for '{change}'"));
    }

    Ok(format!(
        "Found {} change request(s) for '{change}':\n{}",
        records.len(),
        format::render_json(&Value::Array(records))
    ))
}
