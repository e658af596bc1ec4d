// Category partitioning of generated widgets
use super::widget::Widget;

/// Category of resources with no lookup entry; always rendered last.
pub const UNDEFINED: &str = "undefined";

/// Display order of ETL branches, upstream first.
pub const PRIORITY: &[&str] = &[
    "capture",
    "time_series",
    "field_visit",
    "discrete_groundwater",
    "error_handling",
    "maintenance",
];

/// Widgets produced for one resource, tagged with its category label.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetGroup {
    pub category: String,
    pub widgets: Vec<Widget>,
}

impl WidgetGroup {
    pub fn new(category: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            category: category.into(),
            widgets,
        }
    }
}

/// Stable partition of `groups` into category buckets, flattened in
/// [`PRIORITY`] order. Categories missing from the priority list follow in
/// first-seen order and [`UNDEFINED`] closes the list.
pub fn partition(groups: Vec<WidgetGroup>) -> Vec<Widget> {
    let mut buckets: Vec<(String, Vec<Widget>)> = Vec::new();
    for group in groups {
        match buckets.iter_mut().find(|(category, _)| *category == group.category) {
            Some((_, widgets)) => widgets.extend(group.widgets),
            None => buckets.push((group.category, group.widgets)),
        }
    }

    let rank = |category: &str| {
        if category == UNDEFINED {
            PRIORITY.len() + 1
        } else {
            PRIORITY
                .iter()
                .position(|p| *p == category)
                .unwrap_or(PRIORITY.len())
        }
    };

    // sort_by_key is stable, so unranked buckets keep first-seen order
    buckets.sort_by_key(|(category, _)| rank(category));
    buckets.into_iter().flat_map(|(_, widgets)| widgets).collect()
}
