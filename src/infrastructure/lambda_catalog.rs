// Lambda repository implementation
use crate::application::resource_catalog::{Page, ResourceCatalog};
use crate::domain::resource::{ResourceKind, ResourceSummary};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_lambda::Client;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct LambdaCatalog {
    client: Client,
}

impl LambdaCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceCatalog for LambdaCatalog {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Function
    }

    async fn list_page(&self, token: Option<String>, page_size: i32) -> Result<Page> {
        let output = self
            .client
            .list_functions()
            .max_items(page_size)
            .set_marker(token)
            .send()
            .await
            .context("Failed to list Lambda functions")?;

        let resources = output
            .functions()
            .iter()
            .filter_map(|f| Some(ResourceSummary::new(f.function_name()?, f.function_arn()?)))
            .collect();

        Ok(Page {
            resources,
            next_token: output.next_marker().map(str::to_string),
        })
    }

    async fn tags(&self, resource: &ResourceSummary) -> Result<HashMap<String, String>> {
        let output = self
            .client
            .get_function()
            .function_name(&resource.name)
            .send()
            .await
            .with_context(|| format!("Failed to describe Lambda function {}", resource.name))?;

        Ok(output.tags().cloned().unwrap_or_default())
    }
}
