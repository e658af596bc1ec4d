// RDS database status widgets
use crate::domain::deploy_stage::DeployStage;
use crate::domain::lookup::DatabaseEntry;
use crate::domain::widget::{
    MetricOptions, MetricProperties, MetricRow, Size, Stat, View, Widget, YAxis, SAME,
};

pub const DB_STATUS_SIZE: Size = Size::new(12, 6);

/// CPU and connection count for one database, keyed by the cluster or
/// instance dimension that matches how the database is deployed.
pub fn db_status_widget(region: &str, stage: DeployStage, database: &DatabaseEntry) -> Widget {
    let identifier = format!("{}-{}", database.name, stage.lowercase());

    Widget::metric(
        DB_STATUS_SIZE,
        MetricProperties {
            metrics: vec![
                MetricRow::new([
                    "AWS/RDS",
                    "CPUUtilization",
                    database.kind.dimension(),
                    identifier.as_str(),
                ]),
                MetricRow::new([SAME, "DatabaseConnections", SAME, SAME])
                    .with_options(MetricOptions::y_axis(YAxis::Right)),
            ],
            view: View::TimeSeries,
            stacked: false,
            region: region.to_string(),
            title: format!("{} DB Status", capitalize(&database.name)),
            period: 300,
            stat: Stat::Average,
        },
    )
}

pub fn rds_widgets(region: &str, stage: DeployStage, databases: &[DatabaseEntry]) -> Vec<Widget> {
    databases
        .iter()
        .map(|database| db_status_widget(region, stage, database))
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
