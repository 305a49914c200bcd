//! Declarative option objects for the charting engine.
//!
//! Both builders disable the engine's own tooltip; hover content is
//! rendered by the app from [`crate::build_tooltip`].

use crate::transform::{RankingEntry, RegionColorEntry};
use crate::{region_label, Topology};
use serde_json::{json, Value};

pub const MAP_HEIGHT: u32 = 330;
pub const RANKING_ROW_HEIGHT: u32 = 32;
pub const RANKING_MIN_HEIGHT: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub font_family: String,
    pub background: String,
    pub label_color: String,
    pub axis_label_color: String,
    pub hover_border: String,
    pub nav_button_fill: String,
    pub nav_button_hover: String,
    pub bar_gradient: (String, String),
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            font_family: "Inter, sans-serif".to_string(),
            background: "#ffffff".to_string(),
            label_color: "#333".to_string(),
            axis_label_color: "#666".to_string(),
            hover_border: "#1a1a1a".to_string(),
            nav_button_fill: "#1a1a1a".to_string(),
            nav_button_hover: "#333333".to_string(),
            bar_gradient: ("#48a999".to_string(), "#5dc9b8".to_string()),
        }
    }
}

/// Ranking chart height: one row per bar with a floor.
pub fn ranking_chart_height(entries: usize) -> u32 {
    let rows = u32::try_from(entries).unwrap_or(u32::MAX);
    rows.saturating_mul(RANKING_ROW_HEIGHT).max(RANKING_MIN_HEIGHT)
}

pub fn map_options(regions: &[RegionColorEntry], topology: &Topology, theme: &ChartTheme) -> Value {
    let data: Vec<Value> = regions
        .iter()
        .map(|entry| {
            json!({
                "hc-key": entry.region_key,
                "regionKey": entry.region_key,
                "value": entry.value,
                "color": entry.color,
                "label": region_label(&entry.region_key).unwrap_or_default(),
            })
        })
        .collect();

    json!({
        "chart": {
            "map": topology,
            "backgroundColor": theme.background,
            "height": MAP_HEIGHT,
            "spacing": [10, 10, 10, 10],
        },
        "credits": { "enabled": false },
        "title": { "text": null },
        "mapNavigation": {
            "enabled": true,
            "buttonOptions": {
                "verticalAlign": "bottom",
                "theme": {
                    "fill": theme.nav_button_fill,
                    "stroke-width": 0,
                    "r": 4,
                    "style": { "color": "#ffffff", "fontWeight": "500" },
                    "states": { "hover": { "fill": theme.nav_button_hover } },
                },
            },
        },
        "legend": { "enabled": false },
        "tooltip": { "enabled": false },
        "series": [{
            "type": "map",
            "name": "Market Share",
            "data": data,
            "showInLegend": false,
            "enableMouseTracking": true,
            "states": {
                "hover": {
                    "brightness": 0.05,
                    "borderColor": theme.hover_border,
                    "borderWidth": 1.5,
                },
            },
            "dataLabels": {
                "enabled": true,
                "format": "{point.label}",
                "allowOverlap": true,
                "style": {
                    "fontSize": "7px",
                    "fontWeight": "500",
                    "color": theme.label_color,
                    "textOutline": "1.5px white",
                    "fontFamily": theme.font_family,
                },
            },
            "borderColor": "#ffffff",
            "borderWidth": 1.5,
        }],
    })
}

pub fn ranking_options(rankings: &[RankingEntry], theme: &ChartTheme) -> Value {
    let data: Vec<Value> = rankings
        .iter()
        .map(|entry| {
            json!({
                "name": entry.label,
                "y": entry.total_volume,
                "regionKey": entry.region_key,
            })
        })
        .collect();
    let (gradient_from, gradient_to) = &theme.bar_gradient;

    json!({
        "chart": {
            "type": "bar",
            "backgroundColor": theme.background,
            "height": ranking_chart_height(rankings.len()),
            "marginLeft": 160,
            "marginRight": 10,
        },
        "credits": { "enabled": false },
        "title": { "text": null },
        "xAxis": {
            "type": "category",
            "labels": {
                "style": {
                    "fontSize": "10px",
                    "fontFamily": theme.font_family,
                    "color": theme.axis_label_color,
                },
            },
        },
        "yAxis": {
            "min": 0,
            "title": { "text": null },
            "labels": { "enabled": false },
            "gridLineWidth": 0,
        },
        "legend": { "enabled": false },
        "tooltip": { "enabled": false },
        "plotOptions": {
            "bar": {
                "dataLabels": { "enabled": false },
                "colorByPoint": false,
                "pointPadding": 0.15,
                "groupPadding": 0.05,
                "borderRadius": 4,
            },
        },
        "series": [{
            "type": "bar",
            "name": "Total Volume",
            "data": data,
            "color": {
                "linearGradient": { "x1": 0, "y1": 0, "x2": 1, "y2": 0 },
                "stops": [[0, gradient_from], [1, gradient_to]],
            },
        }],
    })
}
