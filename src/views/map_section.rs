use crate::components::{BrandDominanceMap, StateRankingsChart};
use crate::hooks::use_market_data;
use crate::icons::{CircleAlert, Loader};
use crate::state::LoadState;
use dioxus::prelude::*;

#[component]
pub fn MapSection() -> Element {
    let state = use_market_data();

    match state {
        LoadState::Loading => rsx! {
            section { class: "map-section",
                div { class: "loading",
                    Loader { size: 20, class: Some("spin".to_string()) }
                    span { "Loading map..." }
                }
            }
        },
        LoadState::Failed(message) => rsx! {
            section { class: "map-section",
                div { class: "load-error", role: "alert",
                    CircleAlert { size: 20 }
                    div {
                        p { class: "load-error-title", "The market map could not be loaded" }
                        p { class: "load-error-detail", "{message}" }
                    }
                }
            }
        },
        LoadState::Ready(view) => rsx! {
            section { class: "map-section",
                SectionIntro {}
                div { class: "charts-grid",
                    StateRankingsChart { view: view.clone() }
                    BrandDominanceMap { view }
                }
            }
        },
    }
}

#[component]
fn SectionIntro() -> Element {
    rsx! {
        div { class: "map-header",
            h2 { class: "section-title", "Mexico Beverage Industry" }
            h3 { class: "section-subtitle", "Market Share Analysis" }
            p { class: "section-description",
                "This comprehensive study examines the competitive landscape of Mexico's carbonated soft drink market, focusing on the strategic positioning and regional market penetration of the two dominant players: PepsiCo and The Coca-Cola Company. Through detailed geographic analysis across all 32 Mexican states, this research reveals significant regional variations in consumer preferences and brand loyalty patterns."
            }
            p { class: "section-description",
                "The Mexican beverage market represents one of the world's most competitive territories for soft drink manufacturers, with annual consumption rates among the highest globally. Understanding the nuanced state-by-state distribution of market share provides critical insights for strategic planning, distribution optimization, and targeted marketing initiatives. This interactive visualization synthesizes market data to illustrate territorial dominance, competitive dynamics, and opportunities for market expansion."
            }
        }
        div { class: "map-intro",
            h4 { class: "map-intro-title", "Geographic State-Level Analysis" }
            p { class: "map-intro-text",
                "The following interactive visualization presents market dominance patterns across Mexico's 32 states. Each region is color-coded by the leading brand, revealing distinct geographic preferences and competitive territories throughout the country."
            }
        }
    }
}
