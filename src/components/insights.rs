use crate::icons::{Compass, Layers, MousePointer};
use dioxus::prelude::*;

#[component]
pub fn Insights() -> Element {
    rsx! {
        section { class: "insights",
            div { class: "insight",
                Layers { size: 22, class: Some("insight-icon".to_string()) }
                h3 { class: "insight-title", "Market Segmentation" }
                p { class: "insight-text",
                    "States are color-coded based on market share dominance, with intensity representing the strength of brand preference in each region."
                }
            }
            div { class: "insight",
                MousePointer { size: 22, class: Some("insight-icon".to_string()) }
                h3 { class: "insight-title", "Interactive Analytics" }
                p { class: "insight-text",
                    "Hover over any state to access detailed market metrics including precise percentage breakdowns and regional competitive dynamics."
                }
            }
            div { class: "insight",
                Compass { size: 22, class: Some("insight-icon".to_string()) }
                h3 { class: "insight-title", "Regional Patterns" }
                p { class: "insight-text",
                    "Analysis reveals distinct geographic preferences, with northern states showing stronger Pepsi presence and southern regions favoring Coca-Cola."
                }
            }
        }
    }
}
