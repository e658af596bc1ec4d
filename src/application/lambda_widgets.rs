// Lambda function widgets
use crate::domain::deploy_stage::DeployStage;
use crate::domain::error::DashboardError;
use crate::domain::lookup::LookupTable;
use crate::domain::widget::{
    LogProperties, MetricOptions, MetricProperties, MetricRow, Size, Stat, View, Widget, REPEAT,
    SAME,
};

const NAMESPACE: &str = "AWS/Lambda";
const DIMENSION: &str = "FunctionName";

pub const OVERVIEW_SIZE: Size = Size::new(24, 3);
pub const DETAIL_SIZE: Size = Size::new(8, 6);
pub const CUSTOM_SIZE: Size = Size::new(24, 6);

pub const CONCURRENT_LAMBDAS_TITLE: &str = "Concurrent Lambdas (Average per minute)";
pub const ERROR_HANDLER_TITLE: &str = "Error Handler Activity";
pub const ERROR_HANDLER_LOG_TITLE: &str = "Error Handler Recent Errors";

/// The four widgets shown for every tracked function: a single-value
/// overview followed by one detail chart per metric family.
pub fn function_widgets(function_name: &str, title: &str, region: &str) -> Vec<Widget> {
    vec![
        overview(function_name, title, region),
        detail(
            format!("{} Invocations and Errors", title),
            vec![
                MetricRow::new([NAMESPACE, "Invocations", DIMENSION, function_name]),
                MetricRow::new([SAME, "Errors", SAME, SAME]),
            ],
            Stat::Sum,
            region,
        ),
        detail(
            format!("{} Duration", title),
            vec![
                MetricRow::new([NAMESPACE, "Duration", DIMENSION, function_name]),
                MetricRow::new([SAME, "Duration", SAME, SAME])
                    .with_options(MetricOptions::stat(Stat::Maximum)),
            ],
            Stat::Average,
            region,
        ),
        detail(
            format!("{} Concurrency and Throttles", title),
            vec![
                MetricRow::new([NAMESPACE, "ConcurrentExecutions", DIMENSION, function_name]),
                MetricRow::new([SAME, "Throttles", SAME, SAME])
                    .with_options(MetricOptions::stat(Stat::Sum)),
            ],
            Stat::Maximum,
            region,
        ),
    ]
}

fn overview(function_name: &str, title: &str, region: &str) -> Widget {
    Widget::metric(
        OVERVIEW_SIZE,
        MetricProperties {
            metrics: vec![
                MetricRow::new([NAMESPACE, "ConcurrentExecutions", DIMENSION, function_name]),
                MetricRow::new([SAME, "Invocations", SAME, SAME])
                    .with_options(MetricOptions::stat(Stat::Sum)),
                MetricRow::new([SAME, "Duration", SAME, SAME]),
                MetricRow::new([SAME, "Errors", SAME, SAME])
                    .with_options(MetricOptions::stat(Stat::Sum)),
                MetricRow::new([SAME, "Throttles", SAME, SAME]),
            ],
            view: View::SingleValue,
            stacked: false,
            region: region.to_string(),
            title: title.to_string(),
            period: 300,
            stat: Stat::Average,
        },
    )
}

fn detail(title: String, metrics: Vec<MetricRow>, stat: Stat, region: &str) -> Widget {
    Widget::metric(
        DETAIL_SIZE,
        MetricProperties {
            metrics,
            view: View::TimeSeries,
            stacked: false,
            region: region.to_string(),
            title,
            period: 60,
            stat,
        },
    )
}

/// Fixed widgets for functions known ahead of time. Fails if the lookup table
/// lacks a function they reference.
pub fn custom_widgets(
    lookups: &LookupTable,
    stage: DeployStage,
    region: &str,
) -> Result<Vec<Widget>, DashboardError> {
    let mut widgets = Vec::new();
    if !lookups.custom.concurrent_lambdas.is_empty() {
        widgets.push(concurrent_lambdas(lookups, stage, region)?);
    }
    widgets.push(error_handler_activity(lookups, stage, region)?);
    widgets.push(error_handler_log(lookups, stage, region)?);
    Ok(widgets)
}

/// Stacked concurrency of the functions on the ETL path. Only the first row
/// spells out namespace and metric; the rest repeat it with `...`.
pub fn concurrent_lambdas(
    lookups: &LookupTable,
    stage: DeployStage,
    region: &str,
) -> Result<Widget, DashboardError> {
    let mut metrics = Vec::with_capacity(lookups.custom.concurrent_lambdas.len());
    for key in &lookups.custom.concurrent_lambdas {
        let entry = lookups.entry(key)?;
        let name = entry.function_name(stage);
        let row = if metrics.is_empty() {
            MetricRow::new([NAMESPACE, "ConcurrentExecutions", DIMENSION, name.as_str()])
        } else {
            MetricRow::new([REPEAT, name.as_str()])
        };
        metrics.push(row.with_options(MetricOptions::label(entry.label.as_str())));
    }

    Ok(Widget::metric(
        CUSTOM_SIZE,
        MetricProperties {
            metrics,
            view: View::TimeSeries,
            stacked: true,
            region: region.to_string(),
            title: CONCURRENT_LAMBDAS_TITLE.to_string(),
            period: 60,
            stat: Stat::Average,
        },
    ))
}

pub fn error_handler_activity(
    lookups: &LookupTable,
    stage: DeployStage,
    region: &str,
) -> Result<Widget, DashboardError> {
    let name = lookups.entry(&lookups.custom.error_handler)?.function_name(stage);

    Ok(Widget::metric(
        CUSTOM_SIZE,
        MetricProperties {
            metrics: vec![
                MetricRow::new([
                    NAMESPACE,
                    "ConcurrentExecutions",
                    DIMENSION,
                    name.as_str(),
                    "Resource",
                    name.as_str(),
                ]),
                MetricRow::new([SAME, "Invocations", SAME, SAME])
                    .with_options(MetricOptions::stat(Stat::Sum)),
            ],
            view: View::TimeSeries,
            stacked: false,
            region: region.to_string(),
            title: ERROR_HANDLER_TITLE.to_string(),
            period: 60,
            stat: Stat::Average,
        },
    ))
}

/// Logs Insights table of the error handler's latest error lines.
pub fn error_handler_log(
    lookups: &LookupTable,
    stage: DeployStage,
    region: &str,
) -> Result<Widget, DashboardError> {
    let name = lookups.entry(&lookups.custom.error_handler)?.function_name(stage);

    Ok(Widget::log(
        CUSTOM_SIZE,
        LogProperties {
            query: format!(
                "SOURCE '/aws/lambda/{}' | fields @timestamp, @message\n| filter @message like /ERROR/\n| sort @timestamp desc\n| limit 20",
                name
            ),
            region: region.to_string(),
            title: ERROR_HANDLER_LOG_TITLE.to_string(),
            view: View::Table,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lookup::{CustomWidgetKeys, LookupEntry};
    use serde_json::json;

    fn entry(key: &str, repo_name: &str, descriptor: &str, label: &str) -> LookupEntry {
        LookupEntry {
            key: key.to_string(),
            repo_name: repo_name.to_string(),
            descriptor: descriptor.to_string(),
            label: label.to_string(),
            etl_branch: "capture".to_string(),
        }
    }

    fn lookups() -> LookupTable {
        LookupTable {
            functions: vec![
                entry("trigger", "aqts-capture-trigger", "aqtsCaptureTrigger", "Trigger"),
                entry("raw_load", "aqts-capture-raw-load", "iowCapture", "Raw Load"),
                entry("error_handler", "aqts-capture-error-handler", "aqtsErrorHandler", "Error Handler"),
            ],
            custom: CustomWidgetKeys {
                concurrent_lambdas: vec!["trigger".to_string(), "raw_load".to_string()],
                error_handler: "error_handler".to_string(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_overview_widget() {
        let widgets = function_widgets("aqts-capture-trigger-DEV-aqtsCaptureTrigger", "Trigger", "us-west-2");

        assert_eq!(widgets.len(), 4);
        assert_eq!(
            serde_json::to_value(&widgets[0]).unwrap(),
            json!({
                "type": "metric",
                "height": 3,
                "width": 24,
                "properties": {
                    "metrics": [
                        ["AWS/Lambda", "ConcurrentExecutions", "FunctionName", "aqts-capture-trigger-DEV-aqtsCaptureTrigger"],
                        [".", "Invocations", ".", ".", {"stat": "Sum"}],
                        [".", "Duration", ".", "."],
                        [".", "Errors", ".", ".", {"stat": "Sum"}],
                        [".", "Throttles", ".", "."]
                    ],
                    "view": "singleValue",
                    "region": "us-west-2",
                    "title": "Trigger",
                    "period": 300,
                    "stacked": false,
                    "stat": "Average"
                }
            })
        );
    }

    #[test]
    fn test_detail_widgets_fill_one_row() {
        let widgets = function_widgets("fn-DEV-x", "Fn", "us-west-2");

        let titles: Vec<&str> = widgets.iter().filter_map(Widget::title).collect();
        assert_eq!(
            titles,
            vec!["Fn", "Fn Invocations and Errors", "Fn Duration", "Fn Concurrency and Throttles"]
        );
        assert_eq!(widgets[1..].iter().map(|w| w.width).sum::<u32>(), 24);
        assert!(widgets[1..].iter().all(|w| w.height == 6));
    }

    #[test]
    fn test_function_widgets_are_deterministic() {
        assert_eq!(
            function_widgets("fn-DEV-x", "Fn", "us-west-2"),
            function_widgets("fn-DEV-x", "Fn", "us-west-2")
        );
    }

    #[test]
    fn test_concurrent_lambdas_elides_repeated_prefix() {
        let widget = concurrent_lambdas(&lookups(), DeployStage::Dev, "us-west-2").unwrap();

        assert_eq!(
            serde_json::to_value(&widget).unwrap(),
            json!({
                "type": "metric",
                "height": 6,
                "width": 24,
                "properties": {
                    "metrics": [
                        ["AWS/Lambda", "ConcurrentExecutions", "FunctionName", "aqts-capture-trigger-DEV-aqtsCaptureTrigger", {"label": "Trigger"}],
                        ["...", "aqts-capture-raw-load-DEV-iowCapture", {"label": "Raw Load"}]
                    ],
                    "view": "timeSeries",
                    "stacked": true,
                    "region": "us-west-2",
                    "period": 60,
                    "stat": "Average",
                    "title": "Concurrent Lambdas (Average per minute)"
                }
            })
        );
    }

    #[test]
    fn test_error_handler_activity() {
        let widget = error_handler_activity(&lookups(), DeployStage::Qa, "us-west-2").unwrap();

        assert_eq!(
            serde_json::to_value(&widget).unwrap()["properties"]["metrics"],
            json!([
                ["AWS/Lambda", "ConcurrentExecutions", "FunctionName", "aqts-capture-error-handler-QA-aqtsErrorHandler",
                    "Resource", "aqts-capture-error-handler-QA-aqtsErrorHandler"],
                [".", "Invocations", ".", ".", {"stat": "Sum"}]
            ])
        );
    }

    #[test]
    fn test_error_handler_log_queries_function_log_group() {
        let widget = error_handler_log(&lookups(), DeployStage::Dev, "us-west-2").unwrap();
        let value = serde_json::to_value(&widget).unwrap();

        assert_eq!(value["type"], json!("log"));
        assert_eq!(value["properties"]["view"], json!("table"));
        assert!(value["properties"]["query"]
            .as_str()
            .unwrap()
            .starts_with("SOURCE '/aws/lambda/aqts-capture-error-handler-DEV-aqtsErrorHandler'"));
    }

    #[test]
    fn test_custom_widgets_require_lookup_entries() {
        let mut lookups = lookups();
        lookups.custom.concurrent_lambdas.push("missing".to_string());

        assert_eq!(
            custom_widgets(&lookups, DeployStage::Dev, "us-west-2"),
            Err(DashboardError::MissingLookup("missing".to_string()))
        );
    }

    #[test]
    fn test_custom_widgets_skip_empty_concurrency_list() {
        let mut lookups = lookups();
        lookups.custom.concurrent_lambdas.clear();

        let widgets = custom_widgets(&lookups, DeployStage::Dev, "us-west-2").unwrap();
        let titles: Vec<&str> = widgets.iter().filter_map(Widget::title).collect();
        assert_eq!(titles, vec![ERROR_HANDLER_TITLE, ERROR_HANDLER_LOG_TITLE]);
    }
}
