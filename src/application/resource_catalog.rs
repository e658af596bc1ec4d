// Repository trait for paginated resource listing
use crate::domain::resource::{ResourceKind, ResourceSummary};
use async_trait::async_trait;
use std::collections::HashMap;

/// One page of a listing call. A missing `next_token` ends the listing.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub resources: Vec<ResourceSummary>,
    pub next_token: Option<String>,
}

#[async_trait]
pub trait ResourceCatalog: Send + Sync {
    fn kind(&self) -> ResourceKind;

    /// Fetch a single page, continuing from `token` when one is given
    async fn list_page(&self, token: Option<String>, page_size: i32) -> anyhow::Result<Page>;

    /// Fetch the tags of one resource (one API call per resource)
    async fn tags(&self, resource: &ResourceSummary) -> anyhow::Result<HashMap<String, String>>;
}
