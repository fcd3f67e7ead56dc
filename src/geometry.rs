/// Vertical extent of a page element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub bottom: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, bottom: top + height }
    }

    /// Scrolls the region by `offset` (positive moves it up the viewport).
    pub fn scrolled(self, offset: f32) -> Self {
        Self {
            top: self.top - offset,
            bottom: self.bottom - offset,
        }
    }

    /// True when any part of the region overlaps a viewport of `viewport_height`.
    pub fn is_in_view(&self, viewport_height: f32) -> bool {
        self.top < viewport_height && self.bottom >= 0.0
    }
}
