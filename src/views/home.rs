use crate::components::Insights;
use crate::layouts::PageLayout;
use crate::views::MapSection;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageLayout {
            MapSection {}
            Insights {}
        }
    }
}
