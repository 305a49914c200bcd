use crate::components::TooltipLayer;
use crate::engine::{ChartKind, ChartMount, PointerEvent};
use crate::hooks::{apply_pointer_event, use_chart, use_hover_tooltip};
use crate::state::MarketView;
use brandmap_common::ranking_chart_height;
use dioxus::prelude::*;
use std::rc::Rc;

const CONTAINER_ID: &str = "ranking-chart";

#[component]
pub fn StateRankingsChart(view: Rc<MarketView>) -> Element {
    let tooltip = use_hover_tooltip(true);
    let height = ranking_chart_height(view.rankings.len());

    let on_event = use_callback({
        let view = view.clone();
        move |event: PointerEvent| apply_pointer_event(&view, tooltip, event)
    });

    use_chart(
        || ChartMount {
            container_id: CONTAINER_ID.to_string(),
            kind: ChartKind::Bar,
            options: view.ranking_options.clone(),
            track_moves: true,
        },
        on_event,
    );

    rsx! {
        div { class: "ranking-container",
            div { class: "ranking-title-bar",
                h3 { class: "ranking-title", "State Rankings by Total Market Volume" }
            }
            div { class: "ranking-chart-wrapper",
                div {
                    id: CONTAINER_ID,
                    class: "ranking-chart-inner",
                    style: "height: {height}px;",
                }
            }
            TooltipLayer { tooltip }
        }
    }
}
