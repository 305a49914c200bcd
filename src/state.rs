use crate::config::SITE;
use crate::services::market::MarketBundle;
use brandmap_common::{
    build_tooltip, map_options, ranking_options, to_rankings, to_region_colors, FlagTable,
    MarketData, RankingEntry, RegionColorEntry, TooltipContent,
};
use serde_json::Value;
use std::rc::Rc;

/// Loaded dataset together with everything derived from it. Rebuilt in full
/// on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketView {
    pub records: MarketData,
    pub flags: FlagTable,
    pub regions: Vec<RegionColorEntry>,
    pub rankings: Vec<RankingEntry>,
    pub map_options: Value,
    pub ranking_options: Value,
}

impl MarketView {
    pub fn new(bundle: MarketBundle) -> Self {
        let MarketBundle {
            records,
            topology,
            flags,
        } = bundle;

        let regions = to_region_colors(&records);
        let rankings = to_rankings(&records);
        tracing::debug!(
            "Derived {} map regions and {} ranking rows",
            regions.len(),
            rankings.len()
        );

        let map_options = map_options(&regions, &topology, &SITE.theme);
        let ranking_options = ranking_options(&rankings, &SITE.theme);

        Self {
            records,
            flags,
            regions,
            rankings,
            map_options,
            ranking_options,
        }
    }

    /// Tooltip for the region under the pointer, built fresh on every hover.
    pub fn tooltip_for(&self, key: &str) -> Option<TooltipContent> {
        let record = self.records.get(key)?;
        Some(build_tooltip(record, self.flags.lookup(&record.name)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Rc<MarketView>),
    Failed(String),
}
