// Deployment tier a dashboard is generated for
use super::error::DashboardError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DeployStage {
    Dev,
    Test,
    Qa,
    ProdExternal,
}

impl DeployStage {
    /// Tier marker as it appears in resource names, e.g. `PROD-EXTERNAL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStage::Dev => "DEV",
            DeployStage::Test => "TEST",
            DeployStage::Qa => "QA",
            DeployStage::ProdExternal => "PROD-EXTERNAL",
        }
    }

    /// Database identifiers carry the tier in lowercase (`nwcapture-dev`).
    pub fn lowercase(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for DeployStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployStage {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEV" => Ok(DeployStage::Dev),
            "TEST" => Ok(DeployStage::Test),
            "QA" => Ok(DeployStage::Qa),
            "PROD-EXTERNAL" => Ok(DeployStage::ProdExternal),
            _ => Err(DashboardError::UnknownDeployStage(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeployStage {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
