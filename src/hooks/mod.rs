pub mod use_chart;
pub mod use_market;
pub mod use_tooltip;

pub use use_chart::use_chart;
pub use use_market::{use_market_data, use_market_data_with_service};
pub use use_tooltip::{use_hover_tooltip, TooltipHandle};

use crate::engine::PointerEvent;
use crate::state::MarketView;
use brandmap_common::{Point, Viewport};
use std::rc::Rc;

/// Routes chart pointer events into a tooltip. Keys with no record leave the
/// tooltip untouched.
pub fn apply_pointer_event(view: &Rc<MarketView>, tooltip: TooltipHandle, event: PointerEvent) {
    match event {
        PointerEvent::Enter { key, x, y, vw, vh } => match view.tooltip_for(&key) {
            Some(content) => tooltip.show(content, Point::new(x, y), Viewport::new(vw, vh)),
            None => tracing::debug!("No market record for hovered region {}", key),
        },
        PointerEvent::Move { x, y, vw, vh } => {
            tooltip.track(Point::new(x, y), Viewport::new(vw, vh))
        }
        PointerEvent::Leave => tooltip.hide(),
        PointerEvent::Failed { .. } => {}
    }
}
