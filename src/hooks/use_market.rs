use crate::services::market::MarketLoader;
use crate::services::{AssetService, HttpAssetService};
use crate::state::{LoadState, MarketView};
use dioxus::prelude::*;
use std::rc::Rc;

pub fn use_market_data() -> LoadState {
    let service = use_hook(HttpAssetService::default);
    use_market_internal(service)
}

pub fn use_market_data_with_service<S: AssetService>(service: S) -> LoadState {
    use_market_internal(service)
}

fn use_market_internal<S: AssetService>(service: S) -> LoadState {
    let resource = use_resource(move || {
        let service = service.clone();
        async move { MarketLoader::load(&service).await }
    });

    let state = use_memo(move || match &*resource.read() {
        None => LoadState::Loading,
        Some(Ok(bundle)) => LoadState::Ready(Rc::new(MarketView::new(bundle.clone()))),
        Some(Err(e)) => LoadState::Failed(e.user_friendly_message()),
    });

    state()
}
