use crate::domain::deploy_stage::DeployStage;
use crate::domain::lookup::LookupTable;
use crate::domain::tag_filter::TagFilter;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub region: String,
    pub deploy_stage: DeployStage,
    pub organization_tag_key: String,
    pub organization_tag_value: String,
    #[serde(default)]
    pub excluded_name_substrings: Vec<String>,
    pub page_size: i32,
    pub explicit_layout: bool,
}

impl Settings {
    pub fn tag_filter(&self) -> TagFilter {
        TagFilter::new(
            self.deploy_stage,
            self.organization_tag_key.clone(),
            self.organization_tag_value.clone(),
            self.excluded_name_substrings.clone(),
        )
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_PAGE_SIZE).contains(&self.page_size),
            "page_size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE,
            self.page_size
        );
        Ok(())
    }
}

/// Values supplied on the command line; they win over files and environment.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub region: Option<String>,
    pub deploy_stage: Option<String>,
    pub explicit_layout: Option<bool>,
}

/// Largest page requested from the listing APIs.
pub const MAX_PAGE_SIZE: i32 = 50;

/// Load `{config_dir}/dashboard.*`, then `DASHBOARD__*` environment variables,
/// then command line overrides.
pub fn load_settings(config_dir: &Path, overrides: &SettingsOverrides) -> anyhow::Result<Settings> {
    load_settings_from(config_dir, overrides, None)
}

/// Same as [`load_settings`], reading environment variables from `env`
/// instead of the process environment when given.
pub fn load_settings_from(
    config_dir: &Path,
    overrides: &SettingsOverrides,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .set_default("region", "us-west-2")?
        .set_default("organization_tag_key", "wma:organization")?
        .set_default("organization_tag_value", "IOW")?
        .set_default("excluded_name_substrings", vec!["CleanupFunction"])?
        .set_default("page_size", 10)?
        .set_default("explicit_layout", false)?
        .add_source(
            config::File::with_name(&config_dir.join("dashboard").to_string_lossy())
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("excluded_name_substrings")
                .source(env),
        )
        .set_override_option("region", overrides.region.clone())?
        .set_override_option("deploy_stage", overrides.deploy_stage.clone())?
        .set_override_option("explicit_layout", overrides.explicit_layout)?
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

pub fn load_lookup_table(config_dir: &Path) -> anyhow::Result<LookupTable> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(&config_dir.join("lookups").to_string_lossy()))
        .build()?;

    Ok(settings.try_deserialize()?)
}
