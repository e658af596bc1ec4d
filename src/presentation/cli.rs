// Command line arguments
use crate::infrastructure::config::SettingsOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "etl-dashboard",
    version,
    about = "Generate the CloudWatch dashboard body for the IOW ETL assets of one deploy tier"
)]
pub struct Cli {
    /// Directory holding dashboard.toml and lookups.toml
    #[arg(long, default_value = "config")]
    pub config_dir: PathBuf,

    /// AWS region to list resources in
    #[arg(long)]
    pub region: Option<String>,

    /// Deploy tier: DEV, TEST, QA or PROD-EXTERNAL
    #[arg(long)]
    pub deploy_stage: Option<String>,

    /// Write the dashboard body here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Assign explicit x/y grid positions to every widget
    #[arg(long)]
    pub layout: bool,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            region: self.region.clone(),
            deploy_stage: self.deploy_stage.clone(),
            explicit_layout: self.layout.then_some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_become_overrides() {
        let cli = Cli::parse_from([
            "etl-dashboard",
            "--region",
            "us-east-1",
            "--deploy-stage",
            "qa",
            "--layout",
        ]);
        let overrides = cli.overrides();

        assert_eq!(overrides.region.as_deref(), Some("us-east-1"));
        assert_eq!(overrides.deploy_stage.as_deref(), Some("qa"));
        assert_eq!(overrides.explicit_layout, Some(true));
        assert_eq!(cli.config_dir, PathBuf::from("config"));
    }

    #[test]
    fn test_unset_flags_leave_config_alone() {
        let overrides = Cli::parse_from(["etl-dashboard"]).overrides();

        assert!(overrides.region.is_none());
        assert!(overrides.deploy_stage.is_none());
        assert!(overrides.explicit_layout.is_none());
    }
}
