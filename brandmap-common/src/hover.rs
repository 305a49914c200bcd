//! Show/fade/hide state for a cursor-driven tooltip.
//!
//! The owner runs the hide timer: `leave` hands out a [`HideTicket`] and the
//! timer later calls `expire` with it. Any `enter` in between bumps the
//! generation, which turns the outstanding ticket into a no-op.

use crate::placement::{place_tooltip, Point, Size, Viewport};
use crate::tooltip::TooltipContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    #[default]
    Hidden,
    Visible,
    FadingOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverTooltip {
    phase: HoverPhase,
    content: Option<TooltipContent>,
    origin: Point,
    size: Size,
    follow_cursor: bool,
    generation: u64,
}

impl HoverTooltip {
    pub fn new(size: Size, follow_cursor: bool) -> Self {
        Self {
            size,
            follow_cursor,
            ..Self::default()
        }
    }

    /// Shows `content` next to the cursor right away, cancelling any pending hide.
    pub fn enter(&mut self, content: TooltipContent, cursor: Point, viewport: Viewport) {
        self.generation = self.generation.wrapping_add(1);
        self.content = Some(content);
        self.origin = place_tooltip(cursor, self.size, viewport);
        self.phase = HoverPhase::Visible;
    }

    /// Repositions a visible, cursor-following tooltip. Returns whether it moved.
    pub fn pointer_move(&mut self, cursor: Point, viewport: Viewport) -> bool {
        if !self.follow_cursor || self.phase != HoverPhase::Visible {
            return false;
        }
        let origin = place_tooltip(cursor, self.size, viewport);
        if origin == self.origin {
            return false;
        }
        self.origin = origin;
        true
    }

    /// Starts fading out. `None` when there is nothing on screen.
    pub fn leave(&mut self) -> Option<HideTicket> {
        match self.phase {
            HoverPhase::Hidden => None,
            HoverPhase::Visible | HoverPhase::FadingOut => {
                self.phase = HoverPhase::FadingOut;
                Some(HideTicket(self.generation))
            }
        }
    }

    /// Completes a hide started by `leave`, unless a newer `enter` superseded it.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation || self.phase != HoverPhase::FadingOut {
            return false;
        }
        self.phase = HoverPhase::Hidden;
        self.content = None;
        true
    }

    pub fn phase(&self) -> HoverPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != HoverPhase::Hidden
    }

    pub fn is_fading(&self) -> bool {
        self.phase == HoverPhase::FadingOut
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }
}
