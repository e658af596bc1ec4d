// Static lookup table of known resources
use super::category::UNDEFINED;
use super::deploy_stage::DeployStage;
use super::error::DashboardError;
use super::naming::{parse_function_name, tier_agnostic_name};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LookupEntry {
    pub key: String,
    pub repo_name: String,
    pub descriptor: String,
    pub label: String,
    pub etl_branch: String,
}

impl LookupEntry {
    /// Deployed function name for `stage`.
    pub fn function_name(&self, stage: DeployStage) -> String {
        format!("{}-{}-{}", self.repo_name, stage, self.descriptor)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateMachineEntry {
    /// Tier-agnostic state machine name.
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub etl_branch: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Cluster,
    Instance,
}

impl DatabaseKind {
    pub fn dimension(&self) -> &'static str {
        match self {
            DatabaseKind::Cluster => "DBClusterIdentifier",
            DatabaseKind::Instance => "DBInstanceIdentifier",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseEntry {
    pub name: String,
    pub kind: DatabaseKind,
}

/// Function keys referenced by the fixed custom widgets.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomWidgetKeys {
    #[serde(default)]
    pub concurrent_lambdas: Vec<String>,
    #[serde(default = "default_error_handler")]
    pub error_handler: String,
}

fn default_error_handler() -> String {
    "error_handler".to_string()
}

impl Default for CustomWidgetKeys {
    fn default() -> Self {
        Self {
            concurrent_lambdas: Vec::new(),
            error_handler: default_error_handler(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LookupTable {
    #[serde(default)]
    pub functions: Vec<LookupEntry>,
    #[serde(default)]
    pub state_machines: Vec<StateMachineEntry>,
    #[serde(default)]
    pub custom: CustomWidgetKeys,
    #[serde(default)]
    pub databases: Vec<DatabaseEntry>,
}

/// Display title and category resolved for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub title: String,
    pub category: String,
}

impl Resolution {
    fn unmatched(name: &str) -> Self {
        Self {
            title: name.to_string(),
            category: UNDEFINED.to_string(),
        }
    }
}

impl LookupTable {
    pub fn entry(&self, key: &str) -> Result<&LookupEntry, DashboardError> {
        self.functions
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| DashboardError::MissingLookup(key.to_string()))
    }

    pub fn resolve_function(&self, name: &str, stage: DeployStage) -> Resolution {
        let parsed = parse_function_name(name, stage);
        self.functions
            .iter()
            .find(|e| e.repo_name == parsed.repo_name && e.descriptor == parsed.descriptor)
            .map(|e| Resolution {
                title: e.label.clone(),
                category: e.etl_branch.clone(),
            })
            .unwrap_or_else(|| Resolution::unmatched(name))
    }

    pub fn resolve_state_machine(&self, name: &str, stage: DeployStage) -> Resolution {
        let tier_agnostic = tier_agnostic_name(name, stage);
        self.state_machines
            .iter()
            .find(|e| e.name == tier_agnostic)
            .map(|e| Resolution {
                title: e.title.clone(),
                category: e.etl_branch.clone().unwrap_or_else(|| UNDEFINED.to_string()),
            })
            .unwrap_or_else(|| Resolution::unmatched(name))
    }
}
