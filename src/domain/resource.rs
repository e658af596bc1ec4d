// Cloud resource domain models
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Function,
    StateMachine,
}

/// A resource as returned by a listing call, before its tags are known.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSummary {
    pub name: String,
    pub arn: String,
}

impl ResourceSummary {
    pub fn new(name: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arn: arn.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    pub kind: ResourceKind,
    pub name: String,
    pub arn: String,
    pub tags: HashMap<String, String>,
}

impl ResourceRecord {
    pub fn new(kind: ResourceKind, summary: ResourceSummary, tags: HashMap<String, String>) -> Self {
        Self {
            kind,
            name: summary.name,
            arn: summary.arn,
            tags,
        }
    }
}
