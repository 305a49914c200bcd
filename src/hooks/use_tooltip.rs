use crate::config::SITE;
use brandmap_common::{HoverTooltip, Point, TooltipContent, Viewport};
use dioxus::prelude::*;

/// Tooltip state owned by one chart.
#[derive(Clone, Copy, PartialEq)]
pub struct TooltipHandle {
    state: Signal<HoverTooltip>,
}

impl TooltipHandle {
    pub fn state(&self) -> Signal<HoverTooltip> {
        self.state
    }

    pub fn show(&self, content: TooltipContent, cursor: Point, viewport: Viewport) {
        let mut state = self.state;
        state.write().enter(content, cursor, viewport);
    }

    /// Follows the cursor. Leaves the signal alone unless the tooltip moved.
    pub fn track(&self, cursor: Point, viewport: Viewport) {
        let mut state = self.state;
        let mut next = state.peek().clone();
        if next.pointer_move(cursor, viewport) {
            state.set(next);
        }
    }

    /// Fades the tooltip now and removes it after the hide delay, unless the
    /// pointer comes back first.
    pub fn hide(&self) {
        let mut state = self.state;
        let Some(ticket) = state.write().leave() else {
            return;
        };
        spawn(async move {
            tokio::time::sleep(SITE.hide_delay()).await;
            state.write().expire(ticket);
        });
    }
}

pub fn use_hover_tooltip(follow_cursor: bool) -> TooltipHandle {
    let state = use_signal(|| HoverTooltip::new(SITE.tooltip_size(), follow_cursor));
    TooltipHandle { state }
}
