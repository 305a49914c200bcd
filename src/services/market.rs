use super::{Asset, AssetService};
use crate::error::LoadError;
use brandmap_common::{FlagTable, MarketData, Topology};
use futures_util::future;
use serde::de::DeserializeOwned;

/// Everything the page needs, available only as a complete set.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBundle {
    pub records: MarketData,
    pub topology: Topology,
    pub flags: FlagTable,
}

pub struct MarketLoader;

impl MarketLoader {
    /// Fetches the market figures, topology and flag table concurrently.
    ///
    /// Fails as soon as any one of them fails; nothing is returned for the
    /// others, and there is no retry.
    pub async fn load<S: AssetService>(service: &S) -> Result<MarketBundle, LoadError> {
        let result = Self::load_all(service).await;
        match &result {
            Ok(bundle) => tracing::info!(
                "Market data loaded: {} records, {} flags",
                bundle.records.len(),
                bundle.flags.len()
            ),
            Err(e) => tracing::error!("Failed to load map data: {}", e),
        }
        result
    }

    async fn load_all<S: AssetService>(service: &S) -> Result<MarketBundle, LoadError> {
        let (market_body, topology_body, flags_body) = future::try_join3(
            service.fetch(Asset::MarketData),
            service.fetch(Asset::Topology),
            service.fetch(Asset::Flags),
        )
        .await?;

        let records: MarketData = decode(Asset::MarketData, &market_body)?;
        records
            .validate()
            .map_err(|(key, source)| LoadError::InvalidRecord { key, source })?;
        let topology: Topology = decode(Asset::Topology, &topology_body)?;
        let flags: FlagTable = decode(Asset::Flags, &flags_body)?;

        Ok(MarketBundle {
            records,
            topology,
            flags,
        })
    }
}

fn decode<T: DeserializeOwned>(asset: Asset, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Decode {
        resource: asset.resource(),
        source,
    })
}
