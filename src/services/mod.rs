pub mod market;

use crate::config::SITE;
use crate::error::LoadError;
use async_trait::async_trait;

/// The three static assets the page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    MarketData,
    Topology,
    Flags,
}

impl Asset {
    pub fn resource(&self) -> &'static str {
        match self {
            Asset::MarketData => "market data",
            Asset::Topology => "map topology",
            Asset::Flags => "state flags",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Asset::MarketData => "/data/market-data.json",
            Asset::Topology => "/data/mx-all.topo.json",
            Asset::Flags => "/mexico_state_flags/state_flags.json",
        }
    }
}

#[async_trait]
pub trait AssetService: Clone + Send + Sync + 'static {
    /// Fetches the raw body of `asset`.
    async fn fetch(&self, asset: Asset) -> Result<String, LoadError>;
}

#[derive(Clone)]
pub struct HttpAssetService {
    client: reqwest::Client,
    base: String,
}

impl HttpAssetService {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn url(&self, asset: Asset) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), asset.path())
    }
}

impl Default for HttpAssetService {
    fn default() -> Self {
        Self::new(SITE.asset_base.clone())
    }
}

impl PartialEq for HttpAssetService {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

#[async_trait]
impl AssetService for HttpAssetService {
    async fn fetch(&self, asset: Asset) -> Result<String, LoadError> {
        let url = self.url(asset);
        tracing::debug!("GET {}", url);

        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                resource: asset.resource(),
                source,
            })?;

        if !res.status().is_success() {
            return Err(LoadError::Fetch {
                resource: asset.resource(),
                status: res.status(),
            });
        }

        res.text().await.map_err(|source| LoadError::Transport {
            resource: asset.resource(),
            source,
        })
    }
}
