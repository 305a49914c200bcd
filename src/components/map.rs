use crate::components::{BrandLegend, TooltipLayer};
use crate::engine::{ChartKind, ChartMount, PointerEvent};
use crate::hooks::{apply_pointer_event, use_chart, use_hover_tooltip};
use crate::state::MarketView;
use brandmap_common::chart::MAP_HEIGHT;
use dioxus::prelude::*;
use std::rc::Rc;

const CONTAINER_ID: &str = "brand-map";

/// Choropleth of the dominant brand per state. The tooltip stays where the
/// pointer entered the region.
#[component]
pub fn BrandDominanceMap(view: Rc<MarketView>) -> Element {
    let tooltip = use_hover_tooltip(false);

    let on_event = use_callback({
        let view = view.clone();
        move |event: PointerEvent| apply_pointer_event(&view, tooltip, event)
    });

    use_chart(
        || ChartMount {
            container_id: CONTAINER_ID.to_string(),
            kind: ChartKind::Map,
            options: view.map_options.clone(),
            track_moves: false,
        },
        on_event,
    );

    rsx! {
        div { class: "map-container",
            div { class: "map-title-bar",
                h3 { class: "map-title", "Brand Dominance Across Mexican States" }
            }
            div { class: "map-chart-wrapper",
                div {
                    id: CONTAINER_ID,
                    class: "map-chart-inner",
                    style: "height: {MAP_HEIGHT}px;",
                }
            }
            BrandLegend {}
            TooltipLayer { tooltip }
        }
    }
}
