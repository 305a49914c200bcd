use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub mod chart;
pub mod hover;
pub mod placement;
pub mod tooltip;
pub mod transform;

mod tests;

pub use chart::{map_options, ranking_chart_height, ranking_options, ChartTheme};
pub use hover::{HideTicket, HoverPhase, HoverTooltip};
pub use placement::{place_tooltip, Point, Size, Viewport, CURSOR_OFFSET};
pub use tooltip::{build_tooltip, BrandRow, TooltipContent};
pub use transform::{to_rankings, to_region_colors, RankingEntry, RegionColorEntry};

/// Geographic topology handed to the map engine untouched.
pub type Topology = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Pepsi,
    CocaCola,
    Others,
}

impl Brand {
    /// Tie-break order when two or more brands share the top percentage.
    pub const PRIORITY: [Brand; 3] = [Brand::Pepsi, Brand::CocaCola, Brand::Others];

    pub fn label(&self) -> &'static str {
        match self {
            Brand::Pepsi => "Pepsi",
            Brand::CocaCola => "Coca-Cola",
            Brand::Others => "Others",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Brand::Pepsi => "#1C52A2",
            Brand::CocaCola => "#F40000",
            Brand::Others => "#B0B0B0",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("state name is empty")]
    EmptyName,

    #[error("{brand} share {value} is outside 0-100")]
    ShareOutOfRange { brand: Brand, value: f64 },

    #[error("{brand} volume {value} is negative or not finite")]
    InvalidVolume { brand: Brand, value: f64 },
}

/// Market figures for one state, as published in `market-data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub name: String,
    pub pepsi: f64,
    pub coca_cola: f64,
    pub others: f64,
    pub pepsi_volume: f64,
    pub cola_volume: f64,
    pub others_volume: f64,
}

impl StateRecord {
    pub fn share(&self, brand: Brand) -> f64 {
        match brand {
            Brand::Pepsi => self.pepsi,
            Brand::CocaCola => self.coca_cola,
            Brand::Others => self.others,
        }
    }

    pub fn volume(&self, brand: Brand) -> f64 {
        match brand {
            Brand::Pepsi => self.pepsi_volume,
            Brand::CocaCola => self.cola_volume,
            Brand::Others => self.others_volume,
        }
    }

    pub fn total_volume(&self) -> f64 {
        self.pepsi_volume + self.cola_volume + self.others_volume
    }

    /// Brand holding the largest share together with that share.
    ///
    /// Shares are compared, never summed. On a tie the first brand in
    /// [`Brand::PRIORITY`] wins, so 40/40/20 resolves to Pepsi.
    pub fn dominant(&self) -> (Brand, f64) {
        let max = self.pepsi.max(self.coca_cola).max(self.others);
        let brand = Brand::PRIORITY
            .into_iter()
            .find(|brand| self.share(*brand) == max)
            .unwrap_or(Brand::Others);
        (brand, max)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::EmptyName);
        }
        for brand in Brand::PRIORITY {
            let share = self.share(brand);
            if !(0.0..=100.0).contains(&share) {
                return Err(RecordError::ShareOutOfRange { brand, value: share });
            }
            let volume = self.volume(brand);
            if !volume.is_finite() || volume < 0.0 {
                return Err(RecordError::InvalidVolume { brand, value: volume });
            }
        }
        Ok(())
    }
}

/// Second hyphen-delimited segment of a region key (`mx-ag` -> `ag`).
pub fn region_suffix(key: &str) -> Option<&str> {
    key.split('-').nth(1)
}

/// Keys like `mx-3622` are aggregate rows in the source data, not states.
pub fn is_aggregate_key(key: &str) -> bool {
    region_suffix(key)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}

/// Short on-map label for a region, `None` for aggregate codes.
pub fn region_label(key: &str) -> Option<String> {
    if is_aggregate_key(key) {
        return None;
    }
    region_suffix(key)
        .filter(|suffix| !suffix.is_empty())
        .map(str::to_uppercase)
}

/// Per-state records keyed by region code, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketData {
    entries: Vec<(String, StateRecord)>,
}

impl MarketData {
    pub fn get(&self, key: &str) -> Option<&StateRecord> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateRecord)> {
        self.entries.iter().map(|(k, record)| (k.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates every record, reporting the first offending key.
    pub fn validate(&self) -> Result<(), (String, RecordError)> {
        for (key, record) in &self.entries {
            record.validate().map_err(|e| (key.clone(), e))?;
        }
        Ok(())
    }

    fn insert(&mut self, key: String, record: StateRecord) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = record,
            None => self.entries.push((key, record)),
        }
    }
}

impl FromIterator<(String, StateRecord)> for MarketData {
    fn from_iter<I: IntoIterator<Item = (String, StateRecord)>>(iter: I) -> Self {
        let mut data = MarketData::default();
        for (key, record) in iter {
            data.insert(key, record);
        }
        data
    }
}

impl<'de> Deserialize<'de> for MarketData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarketDataVisitor;

        impl<'de> Visitor<'de> for MarketDataVisitor {
            type Value = MarketData;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of region keys to state records")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut data = MarketData {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((key, record)) = access.next_entry::<String, StateRecord>()? {
                    data.insert(key, record);
                }
                Ok(data)
            }
        }

        deserializer.deserialize_map(MarketDataVisitor)
    }
}

/// State display name to flag / coat-of-arms image URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FlagTable(HashMap<String, String>);

impl FlagTable {
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|url| !url.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for FlagTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
