use crate::config::SITE;
use crate::hooks::TooltipHandle;
use brandmap_common::{BrandRow, Point, Size, TooltipContent};
use dioxus::prelude::*;

#[component]
pub fn TooltipCard(content: TooltipContent) -> Element {
    rsx! {
        div { class: "tooltip-card",
            div { class: "tooltip-header",
                if let Some(url) = content.flag_url.as_deref() {
                    img {
                        class: "tooltip-flag",
                        src: "{url}",
                        alt: "{content.title} coat of arms",
                    }
                }
                span { "{content.title}" }
            }

            div { class: "tooltip-leader",
                strong { style: "color: {content.dominant_color};", "{content.dominant_label}" }
                " leads"
            }

            for row in content.rows.iter().cloned() {
                ShareRow { key: "{row.label}", row }
            }

            div { class: "tooltip-total",
                span { class: "tooltip-total-label", "Total Volume" }
                span { class: "tooltip-total-value", "{content.total_volume_label}" }
            }
        }
    }
}

#[component]
fn ShareRow(row: BrandRow) -> Element {
    rsx! {
        div { class: "share-row",
            div { class: "share-row-head",
                div { class: "share-row-brand",
                    span { class: "brand-dot", style: "background: {row.color};" }
                    span { "{row.label}" }
                }
                div { class: "share-row-figures",
                    div { class: "share-row-percent", "{row.share_label}" }
                    div { class: "share-row-volume", "{row.volume_label}" }
                }
            }
            div { class: "share-bar",
                div {
                    class: "share-bar-fill",
                    style: "width: {row.bar_width}; background: {row.color};",
                }
            }
        }
    }
}

/// Fixed-position layer that shows a chart's tooltip at its computed origin.
#[component]
pub fn TooltipLayer(tooltip: TooltipHandle) -> Element {
    let state = tooltip.state();
    let snapshot = state.read();
    let Some(content) = snapshot.content().cloned() else {
        return rsx! {};
    };
    let style = layer_style(snapshot.origin(), snapshot.size(), SITE.fade_ms);
    let fading = snapshot.is_fading();

    rsx! {
        div {
            class: "tooltip-layer",
            class: if fading { "opacity-0" },
            style,
            TooltipCard { content }
        }
    }
}

/// The layer is pinned to the size placement assumed, so the edge flip holds
/// for what is actually drawn.
fn layer_style(origin: Point, size: Size, fade_ms: u64) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px; overflow: hidden; transition: opacity {}ms ease;",
        origin.x, origin.y, size.width, size.height, fade_ms
    )
}
