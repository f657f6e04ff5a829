//! CRUD tools shared by every resource family.

use crate::error::ToolError;
use crate::tools::catalog::{Family, Operation};
use crate::tools::{ToolContext, arguments, format};

use api_client::services::Resource;

use serde::de::DeserializeOwned;

pub async fn run<R>(
    context: &ToolContext,
    family: Family,
    operation: Operation,
    args: &serde_json::Value,
) -> Result<String, ToolError>
where
    R: Resource,
    R::Filters: DeserializeOwned,
{
    match operation {
        Operation::List => {
            let filters: R::Filters = arguments::filters(args)?;
            let records = context
                .with_api(async |api| api.service::<R>()?.list(&filters).await)
                .await?;
            Ok(format::render_records(family.label(), &records))
        }
        Operation::Get => {
            let id = arguments::required_str(args, family.id_arg())?;
            let record = context
                .with_api(async |api| api.service::<R>()?.get(&id).await)
                .await?;
            Ok(format::render_json(&record))
        }
        Operation::Create => {
            let data = arguments::payload(args)?;
            let created = context
                .with_api(async |api| api.service::<R>()?.create(&data).await)
                .await?;
            Ok(format!(
                "Created {}:\n{}",
                family.label(),
                format::render_json(&created)
            ))
        }
        Operation::Update => {
            let id = arguments::required_str(args, family.id_arg())?;
            let data = arguments::payload(args)?;
            let updated = context
                .with_api(async |api| api.service::<R>()?.update(&id, &data).await)
                .await?;
            Ok(format!(
                "Updated {} {id}:\n{}",
                family.label(),
                format::render_json(&updated)
            ))
        }
        Operation::Delete => {
            let id = arguments::required_str(args, family.id_arg())?;
            context
                .with_api(async |api| api.service::<R>()?.delete(&id).await)
                .await?;
            Ok(format!("Deleted {} {id}", family.label()))
        }
    }
}
