// Dashboard widget domain models
//
// Field names and value shapes follow the CloudWatch dashboard body schema
// verbatim, so these types serialize straight into the output document.
use serde::Serialize;

/// Repeats the value at the same position in the previous metric row.
pub const SAME: &str = ".";
/// Repeats every leading value of the previous metric row.
pub const REPEAT: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Metric,
    Text,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    TimeSeries,
    SingleValue,
    Table,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stat {
    Average,
    Sum,
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAxis {
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Trailing options object of a metric row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<Stat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "yAxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxis>,
}

impl MetricOptions {
    pub fn stat(stat: Stat) -> Self {
        Self {
            stat: Some(stat),
            ..Default::default()
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn y_axis(y_axis: YAxis) -> Self {
        Self {
            y_axis: Some(y_axis),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricField {
    Value(String),
    Options(MetricOptions),
}

/// One metric specifier: `["Namespace", "MetricName", "DimensionName", "DimensionValue", {..}]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricRow(Vec<MetricField>);

impl MetricRow {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            values
                .into_iter()
                .map(|v| MetricField::Value(v.into()))
                .collect(),
        )
    }

    pub fn with_options(mut self, options: MetricOptions) -> Self {
        self.0.push(MetricField::Options(options));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricProperties {
    pub metrics: Vec<MetricRow>,
    pub view: View,
    pub stacked: bool,
    pub region: String,
    pub title: String,
    pub period: u32,
    pub stat: Stat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextProperties {
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogProperties {
    pub query: String,
    pub region: String,
    pub title: String,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WidgetProperties {
    Metric(MetricProperties),
    Text(TextProperties),
    Log(LogProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Widget {
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u32>,
    pub width: u32,
    pub height: u32,
    pub properties: WidgetProperties,
}

impl Widget {
    pub fn metric(size: Size, properties: MetricProperties) -> Self {
        Self::sized(WidgetType::Metric, size, WidgetProperties::Metric(properties))
    }

    pub fn text(size: Size, markdown: impl Into<String>) -> Self {
        Self::sized(
            WidgetType::Text,
            size,
            WidgetProperties::Text(TextProperties {
                markdown: markdown.into(),
            }),
        )
    }

    pub fn log(size: Size, properties: LogProperties) -> Self {
        Self::sized(WidgetType::Log, size, WidgetProperties::Log(properties))
    }

    fn sized(widget_type: WidgetType, size: Size, properties: WidgetProperties) -> Self {
        Self {
            widget_type,
            x: None,
            y: None,
            width: size.width,
            height: size.height,
            properties,
        }
    }

    /// Copy of this widget pinned to a grid position.
    pub fn positioned(&self, x: u32, y: u32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..self.clone()
        }
    }

    #[cfg(test)]
    pub fn title(&self) -> Option<&str> {
        match &self.properties {
            WidgetProperties::Metric(p) => Some(&p.title),
            WidgetProperties::Log(p) => Some(&p.title),
            WidgetProperties::Text(_) => None,
        }
    }
}
