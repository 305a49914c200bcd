use brandmap_common::Brand;
use dioxus::prelude::*;

#[component]
pub fn BrandLegend() -> Element {
    rsx! {
        div { class: "legend",
            div { class: "legend-title", "Dominant Brand" }
            for (label, color) in Brand::PRIORITY.map(|brand| (brand.label(), brand.color())) {
                div { key: "{label}", class: "brand-label",
                    span { class: "brand-dot", style: "background: {color};" }
                    span { "{label}" }
                }
            }
        }
    }
}
