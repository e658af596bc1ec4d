// Main entry point - Dependency injection and a single batch run
use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use etl_dashboard::application::dashboard_service::DashboardService;
use etl_dashboard::infrastructure::config::{load_lookup_table, load_settings};
use etl_dashboard::infrastructure::lambda_catalog::LambdaCatalog;
use etl_dashboard::infrastructure::output::write_dashboard;
use etl_dashboard::infrastructure::sfn_catalog::StepFunctionsCatalog;
use etl_dashboard::presentation::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the dashboard body
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = load_settings(&cli.config_dir, &cli.overrides())?;
    let lookups = load_lookup_table(&cli.config_dir)?;
    tracing::info!(
        "Generating {} dashboard in {}",
        settings.deploy_stage,
        settings.region
    );

    // Create repositories (infrastructure layer)
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(settings.region.clone()))
        .load()
        .await;
    let functions = Arc::new(LambdaCatalog::new(aws_sdk_lambda::Client::new(&sdk_config)));
    let state_machines = Arc::new(StepFunctionsCatalog::new(aws_sdk_sfn::Client::new(
        &sdk_config,
    )));

    // Create service (application layer)
    let service = DashboardService::new(functions, state_machines, lookups, settings);

    let dashboard = service.build_dashboard().await?;
    write_dashboard(&dashboard, cli.output.as_deref())?;

    Ok(())
}
