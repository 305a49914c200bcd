#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod services;
pub mod state;
pub mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use views::Home;

pub const WINDOW_TITLE: &str = "Mexico Beverage Industry | Market Research Study";

pub fn App() -> Element {
    rsx! {
        document::Title { "{WINDOW_TITLE}" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        Home {}
    }
}

pub fn run_app() {
    tracing_subscriber::fmt::init();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(1280.0, 900.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
