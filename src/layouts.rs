use dioxus::prelude::*;

#[component]
pub fn PageLayout(children: Element) -> Element {
    rsx! {
        div { class: "app-container",
            Header {}
            main { class: "main-content", {children} }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            div { class: "header-content",
                span { class: "wordmark", "Wizeline" }
                h1 { class: "header-title", "Market Research Study" }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                p { class: "footer-copyright", "© 2025 Wizeline. All rights reserved." }
                p { class: "footer-tagline", "Interactive Data Visualization Platform" }
            }
        }
    }
}
