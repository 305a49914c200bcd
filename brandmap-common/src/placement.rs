/// Gap between the cursor and the tooltip's nearest corner, in CSS pixels.
pub const CURSOR_OFFSET: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner for a tooltip of `size` shown next to `cursor`.
///
/// The tooltip sits below-right of the cursor and flips to the opposite
/// side on any axis where it would cross the right or bottom edge. As long
/// as the tooltip fits the viewport, `origin + size` stays within it.
pub fn place_tooltip(cursor: Point, size: Size, viewport: Viewport) -> Point {
    Point {
        x: place_axis(cursor.x, size.width, viewport.width),
        y: place_axis(cursor.y, size.height, viewport.height),
    }
}

fn place_axis(cursor: f64, extent: f64, limit: f64) -> f64 {
    let after = cursor + CURSOR_OFFSET;
    if after + extent <= limit {
        return after;
    }
    (cursor - CURSOR_OFFSET - extent).max(0.0)
}
