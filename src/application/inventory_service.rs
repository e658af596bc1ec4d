// Inventory service - Collects the tracked resources of one kind
use crate::application::resource_catalog::ResourceCatalog;
use crate::domain::resource::{ResourceRecord, ResourceSummary};
use crate::domain::tag_filter::TagFilter;
use anyhow::Context;
use futures::stream::Stream;
use futures::TryStreamExt;
use std::sync::Arc;

#[derive(Clone)]
pub struct InventoryService {
    catalog: Arc<dyn ResourceCatalog>,
    page_size: i32,
}

impl InventoryService {
    pub fn new(catalog: Arc<dyn ResourceCatalog>, page_size: i32) -> Self {
        Self { catalog, page_size }
    }

    /// Stream of pages, ending when a page comes back without a continuation token
    fn pages(&self) -> impl Stream<Item = anyhow::Result<Vec<ResourceSummary>>> {
        let catalog = self.catalog.clone();
        let page_size = self.page_size;

        async_stream::try_stream! {
            let mut token: Option<String> = None;
            loop {
                let page = catalog.list_page(token.take(), page_size).await?;
                tracing::debug!(
                    "Listed {} {:?} resources, more pages: {}",
                    page.resources.len(),
                    catalog.kind(),
                    page.next_token.is_some()
                );
                yield page.resources;

                match page.next_token {
                    Some(next) => token = Some(next),
                    None => break,
                }
            }
        }
    }

    /// Every resource in the account/region, sorted by name and deduplicated by ARN
    pub async fn list_all(&self) -> anyhow::Result<Vec<ResourceSummary>> {
        let mut resources: Vec<ResourceSummary> = self.pages().try_concat().await?;
        resources.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.arn.cmp(&b.arn)));
        resources.dedup_by(|a, b| a.arn == b.arn);
        Ok(resources)
    }

    /// Resources passing `filter`, in name order
    pub async fn inventory(&self, filter: &TagFilter) -> anyhow::Result<Vec<ResourceRecord>> {
        let kind = self.catalog.kind();
        let mut records = Vec::new();

        for resource in self.list_all().await? {
            if !filter.accepts_name(&resource.name) {
                continue;
            }

            let tags = self
                .catalog
                .tags(&resource)
                .await
                .with_context(|| format!("Failed to fetch tags for {}", resource.name))?;

            if filter.accepts_tags(&tags) {
                records.push(ResourceRecord::new(kind, resource, tags));
            } else {
                tracing::debug!("Skipping {}: not owned by the tracked organization", resource.name);
            }
        }

        Ok(records)
    }
}
