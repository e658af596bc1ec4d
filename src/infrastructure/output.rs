// Writes the generated dashboard body
use crate::domain::dashboard::Dashboard;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Write the dashboard body to `path`, or to stdout when no path is given
pub fn write_dashboard(dashboard: &Dashboard, path: Option<&Path>) -> anyhow::Result<()> {
    let body = dashboard
        .to_json_pretty()
        .context("Failed to serialize dashboard")?;

    match path {
        Some(path) => std::fs::write(path, body + "\n")
            .with_context(|| format!("Failed to write dashboard to {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", body).context("Failed to write dashboard to stdout")?;
        }
    }

    tracing::info!(
        "Wrote {} widgets to {}",
        dashboard.widgets.len(),
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string())
    );
    Ok(())
}
