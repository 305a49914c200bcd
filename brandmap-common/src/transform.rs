use crate::{is_aggregate_key, region_suffix, Brand, MarketData, StateRecord};
use std::cmp::Ordering;

/// One colored region on the choropleth.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionColorEntry {
    pub region_key: String,
    pub value: f64,
    pub brand: Brand,
    pub color: &'static str,
}

/// One bar in the volume ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub region_key: String,
    pub display_name: String,
    /// Axis label, e.g. `Aguascalientes (AG)`.
    pub label: String,
    pub total_volume: f64,
    pub source: StateRecord,
}

/// Colors every region by its dominant brand, keeping input order.
pub fn to_region_colors(data: &MarketData) -> Vec<RegionColorEntry> {
    data.iter()
        .map(|(key, record)| {
            let (brand, value) = record.dominant();
            RegionColorEntry {
                region_key: key.to_string(),
                value,
                brand,
                color: brand.color(),
            }
        })
        .collect()
}

/// States ordered by total volume, largest first.
///
/// Aggregate keys are dropped. `sort_by` is a stable sort, so states with
/// equal volume keep their input order.
pub fn to_rankings(data: &MarketData) -> Vec<RankingEntry> {
    let mut rankings: Vec<RankingEntry> = data
        .iter()
        .filter(|(key, _)| !is_aggregate_key(key))
        .map(|(key, record)| {
            let label = match region_suffix(key).filter(|s| !s.is_empty()) {
                Some(abbr) => format!("{} ({})", record.name, abbr.to_uppercase()),
                None => record.name.clone(),
            };
            RankingEntry {
                region_key: key.to_string(),
                display_name: record.name.clone(),
                label,
                total_volume: record.total_volume(),
                source: record.clone(),
            }
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.total_volume
            .partial_cmp(&a.total_volume)
            .unwrap_or(Ordering::Equal)
    });
    rankings
}
