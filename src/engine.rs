//! Bridge to the JavaScript charting engine.
//!
//! Charts are mounted through `document::eval`. Point hover events and
//! pointer moves come back over the eval channel as [`PointerEvent`]s.

use crate::config::SITE;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use serde_json::Value;

const ENGINE_INIT_JS: &str = r#"
window.__brandmapEngine = window.__brandmapEngine || (async () => {
    const load = (src) => new Promise((resolve, reject) => {
        const script = document.createElement("script");
        script.src = src;
        script.onload = resolve;
        script.onerror = () => reject(new Error("failed to load " + src));
        document.head.appendChild(script);
    });
    if (!window.Highcharts) {
        await load("__ENGINE_SRC__");
    }
    if (typeof window.Highcharts.mapChart !== "function") {
        await load("__MAP_MODULE_SRC__");
    }
    window.Highcharts.setOptions({ accessibility: { enabled: false } });
})();
"#;

const MOUNT_JS: &str = r#"
(async () => {
    const id = "__ID__";
    const trackMoves = __TRACK__;
    if (!window.__brandmapEngine) {
        dioxus.send({ kind: "failed", reason: "chart engine not initialized" });
        return;
    }
    try {
        await window.__brandmapEngine;
    } catch (err) {
        dioxus.send({ kind: "failed", reason: String(err) });
        return;
    }
    let el = null;
    for (let frame = 0; frame < 120 && !el; frame++) {
        el = document.getElementById(id);
        if (!el) await new Promise((r) => requestAnimationFrame(r));
    }
    if (!el) {
        dioxus.send({ kind: "failed", reason: "missing container " + id });
        return;
    }
    window.__brandmapCharts = window.__brandmapCharts || {};
    if (window.__brandmapCharts[id]) window.__brandmapCharts[id].dispose();

    let hovering = false;
    let lastX = 0;
    let lastY = 0;
    const viewport = () => ({ vw: window.innerWidth, vh: window.innerHeight });
    const onMove = (e) => {
        lastX = e.clientX;
        lastY = e.clientY;
        if (hovering && trackMoves) {
            dioxus.send(Object.assign({ kind: "move", x: lastX, y: lastY }, viewport()));
        }
    };
    document.addEventListener("mousemove", onMove);

    const options = __OPTIONS__;
    options.plotOptions = options.plotOptions || {};
    options.plotOptions.series = Object.assign({}, options.plotOptions.series, {
        point: {
            events: {
                mouseOver: function () {
                    hovering = true;
                    const key = this.options.regionKey || this.options["hc-key"] || "";
                    dioxus.send(Object.assign({ kind: "enter", key, x: lastX, y: lastY }, viewport()));
                },
                mouseOut: function () {
                    hovering = false;
                    dioxus.send({ kind: "leave" });
                },
            },
        },
    });

    let chart;
    try {
        chart = window.Highcharts.__CTOR__(el, options);
    } catch (err) {
        document.removeEventListener("mousemove", onMove);
        dioxus.send({ kind: "failed", reason: String(err) });
        return;
    }
    window.__brandmapCharts[id] = {
        dispose: () => {
            document.removeEventListener("mousemove", onMove);
            chart.destroy();
            delete window.__brandmapCharts[id];
        },
    };
})();
"#;

const DISPOSE_JS: &str = r#"
if (window.__brandmapCharts && window.__brandmapCharts["__ID__"]) {
    window.__brandmapCharts["__ID__"].dispose();
}
"#;

/// Guard for work that must happen at most once per page lifetime.
#[derive(Debug, Default)]
pub struct OneShot(OnceCell<()>);

impl OneShot {
    pub const fn new() -> Self {
        Self(OnceCell::new())
    }

    /// Runs `init` unless it has already run. Returns whether it ran now.
    pub fn run(&self, init: impl FnOnce()) -> bool {
        let mut ran = false;
        self.0.get_or_init(|| {
            init();
            ran = true;
        });
        ran
    }

    pub fn is_done(&self) -> bool {
        self.0.get().is_some()
    }
}

static ENGINE: OneShot = OneShot::new();

/// Loads the engine and its map module into the page, once.
pub fn ensure_chart_engine() {
    let ran = ENGINE.run(|| {
        let script = engine_init_script(&SITE.engine_script, &SITE.map_module_script);
        let _ = document::eval(&script);
    });
    if ran {
        tracing::debug!("Chart engine initialization started");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Map,
    Bar,
}

impl ChartKind {
    fn constructor(&self) -> &'static str {
        match self {
            ChartKind::Map => "mapChart",
            ChartKind::Bar => "chart",
        }
    }
}

/// Everything needed to mount one chart into a container element.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMount {
    pub container_id: String,
    pub kind: ChartKind,
    pub options: Value,
    /// Forward pointer moves while a point is hovered.
    pub track_moves: bool,
}

impl ChartMount {
    pub fn mount_script(&self) -> String {
        MOUNT_JS
            .replace("__ID__", &self.container_id)
            .replace("__TRACK__", if self.track_moves { "true" } else { "false" })
            .replace("__CTOR__", self.kind.constructor())
            .replace("__OPTIONS__", &self.options.to_string())
    }

    pub fn dispose_script(&self) -> String {
        DISPOSE_JS.replace("__ID__", &self.container_id)
    }
}

fn engine_init_script(engine_src: &str, map_module_src: &str) -> String {
    ENGINE_INIT_JS
        .replace("__ENGINE_SRC__", engine_src)
        .replace("__MAP_MODULE_SRC__", map_module_src)
}

/// Messages sent from the chart's hover listeners.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Enter {
        key: String,
        x: f64,
        y: f64,
        vw: f64,
        vh: f64,
    },
    Move {
        x: f64,
        y: f64,
        vw: f64,
        vh: f64,
    },
    Leave,
    Failed {
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_shot_runs_once() {
        let guard = OneShot::new();
        let mut calls = 0;
        assert!(guard.run(|| calls += 1));
        assert!(!guard.run(|| calls += 1));
        assert!(!guard.run(|| calls += 1));
        assert_eq!(calls, 1);
        assert!(guard.is_done());
    }

    #[test]
    fn test_mount_script_fills_every_placeholder() {
        let mount = ChartMount {
            container_id: "ranking-chart".to_string(),
            kind: ChartKind::Bar,
            options: json!({ "chart": { "type": "bar" } }),
            track_moves: true,
        };
        let script = mount.mount_script();
        for placeholder in ["__ID__", "__TRACK__", "__CTOR__", "__OPTIONS__"] {
            assert!(!script.contains(placeholder), "{placeholder} left unfilled");
        }
        assert!(script.contains(r#"const id = "ranking-chart";"#));
        assert!(script.contains("const trackMoves = true;"));
        assert!(script.contains("window.Highcharts.chart(el, options)"));
        assert!(script.contains(r#"{"chart":{"type":"bar"}}"#));

    }

    #[test]
    fn test_mount_reports_every_failure() {
        let script = ChartMount {
            container_id: "brand-map".to_string(),
            kind: ChartKind::Map,
            options: json!({}),
            track_moves: false,
        }
        .mount_script();

        assert!(script.contains("if (!window.__brandmapEngine) {"));
        assert!(script.contains(r#"reason: "chart engine not initialized""#));
        assert!(script.contains("chart = window.Highcharts.mapChart(el, options);\n    } catch (err) {"));
        assert_eq!(script.matches(r#"kind: "failed""#).count(), 4);
    }

    #[test]
    fn test_dispose_releases_only_its_own_chart() {
        let map = ChartMount {
            container_id: "brand-map".to_string(),
            kind: ChartKind::Map,
            options: json!({}),
            track_moves: false,
        };
        let ranking = ChartMount {
            container_id: "ranking-chart".to_string(),
            kind: ChartKind::Bar,
            options: json!({}),
            track_moves: true,
        };

        let dispose = ranking.dispose_script();
        assert!(dispose.contains(r#"window.__brandmapCharts["ranking-chart"].dispose();"#));
        assert!(!dispose.contains("brand-map"));
        assert!(!dispose.contains("__ID__"));
        assert_ne!(map.dispose_script(), dispose);

        // The registered dispose handle undoes everything mount subscribed.
        let mount = ranking.mount_script();
        let registered = mount
            .split("window.__brandmapCharts[id] = {")
            .nth(1)
            .expect("mount registers a dispose handle");
        assert!(registered.contains(r#"document.removeEventListener("mousemove", onMove);"#));
        assert!(registered.contains("chart.destroy();"));
        assert!(registered.contains("delete window.__brandmapCharts[id];"));
        assert!(mount.contains(r#"document.addEventListener("mousemove", onMove);"#));
    }

    #[test]
    fn test_engine_script_loads_map_module() {
        let script = engine_init_script("https://cdn/highcharts.js", "https://cdn/map.js");
        assert!(script.contains("https://cdn/highcharts.js"));
        assert!(script.contains("https://cdn/map.js"));
        assert!(script.contains("accessibility: { enabled: false }"));
    }

    #[test]
    fn test_pointer_events_decode() {
        let enter: PointerEvent = serde_json::from_value(json!({
            "kind": "enter", "key": "mx-ag", "x": 10.0, "y": 20.0, "vw": 1280, "vh": 720
        }))
        .unwrap();
        assert_eq!(
            enter,
            PointerEvent::Enter {
                key: "mx-ag".to_string(),
                x: 10.0,
                y: 20.0,
                vw: 1280.0,
                vh: 720.0
            }
        );

        let leave: PointerEvent = serde_json::from_value(json!({ "kind": "leave" })).unwrap();
        assert_eq!(leave, PointerEvent::Leave);

        let moved: PointerEvent = serde_json::from_value(json!({
            "kind": "move", "x": 1, "y": 2, "vw": 3, "vh": 4
        }))
        .unwrap();
        assert!(matches!(moved, PointerEvent::Move { .. }));
    }
}
