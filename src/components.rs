pub mod insights;
pub mod legend;
pub mod map;
pub mod ranking;
pub mod tooltip;

pub use insights::Insights;
pub use legend::BrandLegend;
pub use map::BrandDominanceMap;
pub use ranking::StateRankingsChart;
pub use tooltip::{TooltipCard, TooltipLayer};
