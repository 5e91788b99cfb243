use crate::pipeline::long_form_row::Category;

use serde::Serialize;

/// Explicit configuration for one rendered chart.
///
/// Everything a renderer needs to style a chart travels in this value,
/// alongside the table it plots; there is no renderer-global theme state.
///
/// # Fields
///
/// * `title` - Chart title.
/// * `x_label` - Label of the player axis.
/// * `y_label` - Label of the value axis.
/// * `stacked` - Whether category bars stack per player.
/// * `category_order` - Stacking order of the category labels; identical
///   across both report charts.
/// * `normalized` - When set, the value axis is a 0..=1 share instead of
///   raw points.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub stacked: bool,
    pub category_order: [&'static str; 3],
    pub normalized: bool,
}

impl ChartConfig {
    /// Configuration for the absolute-volume chart over the points table.
    pub fn points_chart(season: u32) -> ChartConfig {
        ChartConfig {
            title: format!("Points by scoring category, {} season", season),
            x_label: "Player".to_owned(),
            y_label: "Points".to_owned(),
            stacked: true,
            category_order: category_labels(),
            normalized: false,
        }
    }

    /// Configuration for the share-of-total chart over the shares table.
    pub fn shares_chart(season: u32) -> ChartConfig {
        ChartConfig {
            title: format!("Scoring category shares, {} season", season),
            x_label: "Player".to_owned(),
            y_label: "Share of points".to_owned(),
            stacked: true,
            category_order: category_labels(),
            normalized: true,
        }
    }
}

fn category_labels() -> [&'static str; 3] {
    [
        Category::ORDER[0].label(),
        Category::ORDER[1].label(),
        Category::ORDER[2].label(),
    ]
}
