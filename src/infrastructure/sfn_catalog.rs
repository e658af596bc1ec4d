// Step Functions repository implementation
use crate::application::resource_catalog::{Page, ResourceCatalog};
use crate::domain::resource::{ResourceKind, ResourceSummary};
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_sfn::Client;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct StepFunctionsCatalog {
    client: Client,
}

impl StepFunctionsCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceCatalog for StepFunctionsCatalog {
    fn kind(&self) -> ResourceKind {
        ResourceKind::StateMachine
    }

    async fn list_page(&self, token: Option<String>, page_size: i32) -> Result<Page> {
        // maxResults must be set for the service to return a nextToken
        let output = self
            .client
            .list_state_machines()
            .max_results(page_size)
            .set_next_token(token)
            .send()
            .await
            .context("Failed to list state machines")?;

        let resources = output
            .state_machines()
            .iter()
            .map(|m| ResourceSummary::new(m.name(), m.state_machine_arn()))
            .collect();

        Ok(Page {
            resources,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn tags(&self, resource: &ResourceSummary) -> Result<HashMap<String, String>> {
        let output = self
            .client
            .list_tags_for_resource()
            .resource_arn(&resource.arn)
            .send()
            .await
            .with_context(|| format!("Failed to list tags for {}", resource.arn))?;

        Ok(output
            .tags()
            .iter()
            .filter_map(|tag| Some((tag.key()?.to_string(), tag.value()?.to_string())))
            .collect())
    }
}
