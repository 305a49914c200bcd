//! Tooltip content shared by the map and the ranking chart.

use crate::{Brand, StateRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct BrandRow {
    pub brand: Brand,
    pub label: &'static str,
    pub color: &'static str,
    pub percentage: f64,
    pub share_label: String,
    pub volume_label: String,
    /// CSS width of the proportional bar; equals the percentage.
    pub bar_width: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub title: String,
    pub flag_url: Option<String>,
    pub dominant: Brand,
    pub dominant_label: &'static str,
    pub dominant_color: &'static str,
    pub rows: [BrandRow; 3],
    pub total_volume: f64,
    pub total_volume_label: String,
}

/// Builds the tooltip for one state. A missing or empty flag URL simply
/// leaves the header without an image.
pub fn build_tooltip(record: &StateRecord, flag_url: Option<&str>) -> TooltipContent {
    let (dominant, _) = record.dominant();
    let total_volume = record.total_volume();

    TooltipContent {
        title: record.name.clone(),
        flag_url: flag_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        dominant,
        dominant_label: dominant.label(),
        dominant_color: dominant.color(),
        rows: Brand::PRIORITY.map(|brand| brand_row(record, brand)),
        total_volume,
        total_volume_label: format_total_volume(total_volume),
    }
}

fn brand_row(record: &StateRecord, brand: Brand) -> BrandRow {
    let percentage = record.share(brand);
    BrandRow {
        brand,
        label: brand.label(),
        color: brand.color(),
        percentage,
        share_label: format_share(percentage),
        volume_label: format_volume(record.volume(brand)),
        bar_width: format!("{}%", percentage.clamp(0.0, 100.0)),
    }
}

pub fn format_share(value: f64) -> String {
    format!("{value}%")
}

pub fn format_volume(value: f64) -> String {
    format!("{value}M units")
}

/// One decimal, with halves rounded away from zero.
pub fn format_total_volume(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}M units")
}
