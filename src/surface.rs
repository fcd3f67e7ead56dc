//! Where the carousel's active marker is displayed.

/// A fixed set of slots with one indicator dot each.
pub trait DisplaySurface {
    fn slot_count(&self) -> usize;
    fn set_slot_active(&mut self, index: usize, active: bool);
    fn set_dot_active(&mut self, index: usize, active: bool);
}

/// In-memory markers, read back by whatever draws the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMarkers {
    slots: Vec<bool>,
    dots: Vec<bool>,
}

impl ActiveMarkers {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![false; count],
            dots: vec![false; count],
        }
    }

    pub fn is_slot_active(&self, index: usize) -> bool {
        self.slots.get(index).copied().unwrap_or(false)
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.dots.get(index).copied().unwrap_or(false)
    }

    pub fn active_slots(&self) -> Vec<usize> {
        active_indices(&self.slots)
    }

    pub fn active_dots(&self) -> Vec<usize> {
        active_indices(&self.dots)
    }
}

fn active_indices(markers: &[bool]) -> Vec<usize> {
    markers
        .iter()
        .enumerate()
        .filter_map(|(i, active)| active.then_some(i))
        .collect()
}

impl DisplaySurface for ActiveMarkers {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn set_slot_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = active;
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = active;
        }
    }
}
