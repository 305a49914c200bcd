use brandmap_common::{ChartTheme, Size};
use once_cell::sync::Lazy;
use std::time::Duration;

const DEFAULT_ASSET_BASE: &str = "http://127.0.0.1:8080";

/// Site-wide settings. Values are fixed at build time; there is no runtime
/// configuration source.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Origin the three JSON assets are served from.
    pub asset_base: String,
    pub engine_script: String,
    pub map_module_script: String,
    /// Fixed tooltip box; the layer is drawn at exactly this size.
    pub tooltip_width: f64,
    pub tooltip_height: f64,
    /// CSS fade applied before the tooltip is removed.
    pub fade_ms: u64,
    pub hide_delay_ms: u64,
    pub theme: ChartTheme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            engine_script: "https://code.highcharts.com/highcharts.js".to_string(),
            map_module_script: "https://code.highcharts.com/modules/map.js".to_string(),
            tooltip_width: 240.0,
            tooltip_height: 320.0,
            fade_ms: 150,
            hide_delay_ms: 200,
            theme: ChartTheme::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults, with the asset origin overridable through
    /// `BRANDMAP_ASSET_BASE` when the crate is compiled.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("BRANDMAP_ASSET_BASE").filter(|b| !b.trim().is_empty()) {
            config.asset_base = base.trim().to_string();
        }
        config
    }

    pub fn tooltip_size(&self) -> Size {
        Size::new(self.tooltip_width, self.tooltip_height)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

pub static SITE: Lazy<SiteConfig> = Lazy::new(SiteConfig::from_build_env);
