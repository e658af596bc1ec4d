// In-memory catalog for service tests
use crate::application::resource_catalog::{Page, ResourceCatalog};
use crate::domain::resource::{ResourceKind, ResourceSummary};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub struct FakeCatalog {
    kind: ResourceKind,
    pages: Vec<Vec<ResourceSummary>>,
    tags: HashMap<String, HashMap<String, String>>,
    failing_page: Option<usize>,
    failing_tags: HashSet<String>,
    pub page_requests: Mutex<Vec<(Option<String>, i32)>>,
    pub tag_requests: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new(kind: ResourceKind, pages: Vec<Vec<ResourceSummary>>) -> Self {
        Self {
            kind,
            pages,
            tags: HashMap::new(),
            failing_page: None,
            failing_tags: HashSet::new(),
            page_requests: Mutex::new(Vec::new()),
            tag_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_tags(mut self, name: &str, pairs: &[(&str, &str)]) -> Self {
        self.tags.insert(
            name.to_string(),
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// The listing call for page `index` fails as if throttled.
    pub fn failing_page(mut self, index: usize) -> Self {
        self.failing_page = Some(index);
        self
    }

    /// The tag lookup for `name` fails as if throttled.
    pub fn failing_tags(mut self, name: &str) -> Self {
        self.failing_tags.insert(name.to_string());
        self
    }

    /// Tags every resource with the tracked organization.
    pub fn owned_by_iow(mut self) -> Self {
        let names: Vec<String> = self.pages.iter().flatten().map(|r| r.name.clone()).collect();
        for name in names {
            self = self.with_tags(&name, &[("wma:organization", "IOW")]);
        }
        self
    }
}

#[async_trait]
impl ResourceCatalog for FakeCatalog {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn list_page(&self, token: Option<String>, page_size: i32) -> anyhow::Result<Page> {
        self.page_requests
            .lock()
            .unwrap()
            .push((token.clone(), page_size));

        let index = match token {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| anyhow::anyhow!("bad token {}", token))?,
        };
        if self.failing_page == Some(index) {
            anyhow::bail!("throttled");
        }
        let resources = self.pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));

        Ok(Page {
            resources,
            next_token,
        })
    }

    async fn tags(&self, resource: &ResourceSummary) -> anyhow::Result<HashMap<String, String>> {
        self.tag_requests.lock().unwrap().push(resource.name.clone());
        if self.failing_tags.contains(&resource.name) {
            anyhow::bail!("throttled");
        }
        Ok(self.tags.get(&resource.name).cloned().unwrap_or_default())
    }
}

pub fn function(name: &str) -> ResourceSummary {
    ResourceSummary::new(
        name,
        format!("arn:aws:lambda:us-west-2:123456789012:function:{}", name),
    )
}

pub fn state_machine(name: &str) -> ResourceSummary {
    ResourceSummary::new(
        name,
        format!("arn:aws:states:us-west-2:123456789012:stateMachine:{}", name),
    )
}
