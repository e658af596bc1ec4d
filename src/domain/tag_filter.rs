// Ownership and tier filtering of listed resources
use super::deploy_stage::DeployStage;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct TagFilter {
    stage: DeployStage,
    tag_key: String,
    tag_value: String,
    excluded_substrings: Vec<String>,
}

impl TagFilter {
    pub fn new(
        stage: DeployStage,
        tag_key: impl Into<String>,
        tag_value: impl Into<String>,
        excluded_substrings: Vec<String>,
    ) -> Self {
        Self {
            stage,
            tag_key: tag_key.into(),
            tag_value: tag_value.into(),
            excluded_substrings,
        }
    }

    /// Name-only checks. Callers run these first so tags are only fetched for
    /// resources that can still pass.
    pub fn accepts_name(&self, name: &str) -> bool {
        name.contains(self.stage.as_str())
            && !self
                .excluded_substrings
                .iter()
                .any(|excluded| name.contains(excluded.as_str()))
    }

    pub fn accepts_tags(&self, tags: &HashMap<String, String>) -> bool {
        tags.get(&self.tag_key)
            .is_some_and(|value| *value == self.tag_value)
    }

    #[cfg(test)]
    pub fn accepts(&self, name: &str, tags: &HashMap<String, String>) -> bool {
        self.accepts_name(name) && self.accepts_tags(tags)
    }
}
