// Step Functions state machine widgets
use crate::domain::widget::{MetricProperties, MetricRow, Size, Stat, View, Widget, SAME};

pub const STATE_MACHINE_SIZE: Size = Size::new(12, 6);

pub fn state_machine_widget(state_machine_arn: &str, title: &str, region: &str) -> Widget {
    Widget::metric(
        STATE_MACHINE_SIZE,
        MetricProperties {
            metrics: vec![
                MetricRow::new(["AWS/States", "ExecutionsStarted", "StateMachineArn", state_machine_arn]),
                MetricRow::new([SAME, "ExecutionsSucceeded", SAME, SAME]),
                MetricRow::new([SAME, "ExecutionsFailed", SAME, SAME]),
                MetricRow::new([SAME, "ExecutionsTimedOut", SAME, SAME]),
            ],
            view: View::TimeSeries,
            stacked: false,
            region: region.to_string(),
            title: title.to_string(),
            period: 60,
            stat: Stat::Sum,
        },
    )
}
