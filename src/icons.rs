use dioxus::prelude::*;

#[component]
fn IconBase(
    size: u32,
    #[props(default)] class: Option<String>,
    #[props(default = 2)] stroke_width: u32,
    children: Element,
) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            class,
            {children}
        }
    }
}

#[component]
pub fn Loader(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M12 2v4" }
            path { d: "m16.2 7.8 2.9-2.9" }
            path { d: "M18 12h4" }
            path { d: "m16.2 16.2 2.9 2.9" }
            path { d: "M12 18v4" }
            path { d: "m4.9 19.1 2.9-2.9" }
            path { d: "M2 12h4" }
            path { d: "m4.9 4.9 2.9 2.9" }
        }
    }
}

#[component]
pub fn CircleAlert(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}

#[component]
pub fn Layers(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" }
            path { d: "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" }
            path { d: "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" }
        }
    }
}

#[component]
pub fn MousePointer(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            path { d: "M12.586 12.586 19 19" }
            path { d: "M3.688 3.037a.497.497 0 0 0-.651.651l6.5 15.999a.501.501 0 0 0 .947-.062l1.569-6.083a2 2 0 0 1 1.448-1.479l6.124-1.579a.5.5 0 0 0 .063-.947z" }
        }
    }
}

#[component]
pub fn Compass(size: u32, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconBase { size, class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m16.24 7.76-1.804 5.411a2 2 0 0 1-1.265 1.265L7.76 16.24l1.804-5.411a2 2 0 0 1 1.265-1.265z" }
        }
    }
}
