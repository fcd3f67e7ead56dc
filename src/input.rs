use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub(crate) fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

impl NavKey {
    pub fn direction(self) -> Direction {
        match self {
            NavKey::Left => Direction::Prev,
            NavKey::Right => Direction::Next,
        }
    }
}

/// Everything the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Control(Direction),
    Indicator(usize),
    PointerEnter,
    PointerLeave,
    /// `region_visible` is whether the carousel intersects the viewport when the key went down.
    Key { key: NavKey, region_visible: bool },
    Tick(Duration),
}

/// Turns per-frame "is the pointer over the region" samples into enter/leave edges.
#[derive(Debug, Default)]
pub struct HoverTracker {
    inside: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn update(&mut self, inside: bool) -> Option<CarouselEvent> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            CarouselEvent::PointerEnter
        } else {
            CarouselEvent::PointerLeave
        })
    }
}
