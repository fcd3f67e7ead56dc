//! The testimonial carousel state machine.
//!
//! Every manual interaction follows the same stop, act, restart sequence
//! around the auto-advance timer, so a tick can never land right after a
//! manual jump and at most one timer is ever live.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::error::CarouselError;
use crate::input::{CarouselEvent, Direction, NavKey};
use crate::state::RotationState;
use crate::surface::DisplaySurface;
use crate::timer::{Scheduler, TimerId};

pub struct CarouselController<D, S> {
    surface: D,
    scheduler: S,
    len: usize,
    active_index: usize,
    timer: Option<TimerId>,
    period: Duration,
}

impl<D: DisplaySurface, S: Scheduler> CarouselController<D, S> {
    /// Shows the first item and starts auto-rotation.
    pub fn new(surface: D, scheduler: S, period: Duration) -> Result<Self, CarouselError> {
        let len = surface.slot_count();
        if len == 0 {
            return Err(CarouselError::Empty);
        }

        let mut controller = Self {
            surface,
            scheduler,
            len,
            active_index: 0,
            timer: None,
            period,
        };
        controller.show_item(0);
        controller.start_auto_rotate();
        Ok(controller)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_rotating(&self) -> bool {
        self.timer.is_some()
    }

    pub fn rotation_state(&self) -> RotationState {
        if self.is_rotating() {
            RotationState::Rotating
        } else {
            RotationState::Paused
        }
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Marks `index` as the only active slot and dot.
    ///
    /// `index` must be below [`len`](Self::len); every call site derives it
    /// from modular arithmetic or a checked indicator index.
    pub fn show_item(&mut self, index: usize) {
        debug_assert!(index < self.len, "item {index} out of range for {} items", self.len);

        for i in 0..self.len {
            self.surface.set_slot_active(i, false);
            self.surface.set_dot_active(i, false);
        }
        self.surface.set_slot_active(index, true);
        self.surface.set_dot_active(index, true);

        if index != self.active_index {
            debug!(from = self.active_index, to = index, "showing testimonial");
        }
        self.active_index = index;
    }

    /// Moves one item forward or back, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.len as isize;
        let next = (self.active_index as isize + direction.delta()).rem_euclid(len);
        self.show_item(next as usize);
    }

    pub fn select_item(&mut self, index: usize) {
        self.show_item(index);
    }

    /// Schedules `advance(Next)` every period. A live timer is cancelled first.
    pub fn start_auto_rotate(&mut self) {
        self.stop_auto_rotate();
        let id = self.scheduler.schedule_repeating(self.period);
        trace!(?id, "auto-rotate started");
        self.timer = Some(id);
    }

    pub fn stop_auto_rotate(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
            trace!(?id, "auto-rotate stopped");
        }
    }

    /// Next/previous control activated.
    pub fn on_control(&mut self, direction: Direction) {
        self.stop_auto_rotate();
        self.advance(direction);
        self.start_auto_rotate();
    }

    /// Indicator dot `index` activated.
    pub fn on_indicator(&mut self, index: usize) {
        if index >= self.len {
            warn!(index, len = self.len, "ignoring indicator outside the item set");
            return;
        }
        self.stop_auto_rotate();
        self.select_item(index);
        self.start_auto_rotate();
    }

    pub fn on_pointer_enter(&mut self) {
        self.stop_auto_rotate();
    }

    pub fn on_pointer_leave(&mut self) {
        self.start_auto_rotate();
    }

    /// Arrow keys only act while the carousel is on screen.
    pub fn on_key(&mut self, key: NavKey, region_visible: bool) {
        if region_visible {
            self.on_control(key.direction());
        }
    }

    /// Moves the scheduler clock forward, returning how many periods of the
    /// auto-advance timer elapsed.
    ///
    /// The active item lands where one advance per period would have put it,
    /// but whole cycles are skipped, so a long stall costs at most `len - 1` steps.
    pub fn tick(&mut self, elapsed: Duration) -> u64 {
        let mut periods: u64 = 0;
        for fired in self.scheduler.advance(elapsed) {
            if self.timer == Some(fired.id) {
                periods = periods.saturating_add(fired.count);
            }
        }

        let steps = periods % self.len as u64;
        for _ in 0..steps {
            self.advance(Direction::Next);
        }
        periods
    }

    pub fn handle(&mut self, event: CarouselEvent) {
        match event {
            CarouselEvent::Control(direction) => self.on_control(direction),
            CarouselEvent::Indicator(index) => self.on_indicator(index),
            CarouselEvent::PointerEnter => self.on_pointer_enter(),
            CarouselEvent::PointerLeave => self.on_pointer_leave(),
            CarouselEvent::Key { key, region_visible } => self.on_key(key, region_visible),
            CarouselEvent::Tick(elapsed) => {
                self.tick(elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::AUTO_ROTATE_PERIOD;
    use crate::surface::ActiveMarkers;
    use crate::timer::{Fired, IntervalScheduler};

    /// Counts schedule and cancel calls on top of a real scheduler.
    #[derive(Default)]
    struct CountingScheduler {
        inner: IntervalScheduler,
        scheduled: usize,
        cancelled: usize,
    }

    impl Scheduler for CountingScheduler {
        fn schedule_repeating(&mut self, period: Duration) -> TimerId {
            self.scheduled += 1;
            self.inner.schedule_repeating(period)
        }

        fn cancel(&mut self, id: TimerId) -> bool {
            self.cancelled += 1;
            self.inner.cancel(id)
        }

        fn advance(&mut self, elapsed: Duration) -> Vec<Fired> {
            self.inner.advance(elapsed)
        }

        fn live_count(&self) -> usize {
            self.inner.live_count()
        }
    }

    fn carousel(len: usize) -> CarouselController<ActiveMarkers, CountingScheduler> {
        CarouselController::new(
            ActiveMarkers::new(len),
            CountingScheduler::default(),
            AUTO_ROTATE_PERIOD,
        )
        .unwrap()
    }

    fn assert_single_active(c: &CarouselController<ActiveMarkers, CountingScheduler>) {
        assert_eq!(c.surface().active_slots(), vec![c.active_index()]);
        assert_eq!(c.surface().active_dots(), vec![c.active_index()]);
        assert!(c.scheduler().live_count() <= 1);
    }

    #[test]
    fn empty_carousel_is_rejected() {
        let result = CarouselController::new(
            ActiveMarkers::new(0),
            IntervalScheduler::new(),
            AUTO_ROTATE_PERIOD,
        );
        assert!(matches!(result, Err(CarouselError::Empty)));
    }

    #[test]
    fn initialization_shows_first_item_and_rotates() {
        let c = carousel(3);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.rotation_state(), RotationState::Rotating);
        assert_eq!(c.scheduler().live_count(), 1);
        assert_single_active(&c);
    }

    #[test]
    fn next_wraps_to_start() {
        let mut c = carousel(3);
        c.advance(Direction::Next);
        assert_eq!(c.active_index(), 1);
        c.advance(Direction::Next);
        assert_eq!(c.active_index(), 2);
        c.advance(Direction::Next);
        assert_eq!(c.active_index(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn prev_wraps_to_end() {
        let mut c = carousel(3);
        c.advance(Direction::Prev);
        assert_eq!(c.active_index(), 2);
        assert_single_active(&c);
    }

    #[test]
    fn single_item_is_a_fixed_point() {
        let mut c = carousel(1);
        c.advance(Direction::Next);
        c.advance(Direction::Prev);
        c.tick(AUTO_ROTATE_PERIOD * 3);
        assert_eq!(c.active_index(), 0);
        assert_single_active(&c);
    }

    #[test]
    fn show_item_is_idempotent() {
        let mut c = carousel(4);
        c.show_item(2);
        let before = c.surface().clone();
        c.show_item(2);
        assert_eq!(c.surface(), &before);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn indicator_jumps_and_restarts_timer_once() {
        let mut c = carousel(3);
        let scheduled = c.scheduler().scheduled;

        c.on_indicator(2);

        assert_eq!(c.active_index(), 2);
        assert_eq!(c.scheduler().scheduled, scheduled + 1);
        assert_eq!(c.scheduler().live_count(), 1);
        assert_single_active(&c);
    }

    #[test]
    fn out_of_range_indicator_is_ignored() {
        let mut c = carousel(3);
        let scheduled = c.scheduler().scheduled;

        c.on_indicator(3);

        assert_eq!(c.active_index(), 0);
        assert_eq!(c.scheduler().scheduled, scheduled);
    }

    #[test]
    fn hover_pauses_and_resumes_without_moving() {
        let mut c = carousel(3);
        let scheduled = c.scheduler().scheduled;

        c.on_pointer_enter();
        assert_eq!(c.rotation_state(), RotationState::Paused);
        assert_eq!(c.scheduler().live_count(), 0);
        assert_eq!(c.tick(AUTO_ROTATE_PERIOD * 2), 0);

        c.on_pointer_leave();
        assert_eq!(c.rotation_state(), RotationState::Rotating);
        assert_eq!(c.scheduler().scheduled, scheduled + 1);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn repeated_leave_never_stacks_timers() {
        let mut c = carousel(3);
        c.on_pointer_leave();
        c.on_pointer_leave();
        c.start_auto_rotate();
        assert_eq!(c.scheduler().live_count(), 1);

        assert_eq!(c.tick(AUTO_ROTATE_PERIOD), 1);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn stop_without_timer_is_a_noop() {
        let mut c = carousel(2);
        c.stop_auto_rotate();
        let cancelled = c.scheduler().cancelled;
        c.stop_auto_rotate();
        assert_eq!(c.scheduler().cancelled, cancelled);
        assert!(!c.is_rotating());
    }

    #[test]
    fn auto_rotation_advances_every_period() {
        let mut c = carousel(3);
        assert_eq!(c.tick(AUTO_ROTATE_PERIOD - Duration::from_millis(1)), 0);
        assert_eq!(c.tick(Duration::from_millis(1)), 1);
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.tick(AUTO_ROTATE_PERIOD * 2), 2);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn huge_tick_does_not_panic() {
        let mut c = carousel(3);
        c.handle(CarouselEvent::Tick(Duration::from_secs(1)));
        c.handle(CarouselEvent::Tick(Duration::MAX));

        assert!(c.active_index() < 3);
        assert_single_active(&c);
        assert!(c.is_rotating());

        // Rotation carries on normally afterwards.
        c.on_control(Direction::Next);
        let index = c.active_index();
        assert_eq!(c.tick(AUTO_ROTATE_PERIOD), 1);
        assert_eq!(c.active_index(), (index + 1) % 3);
    }

    #[test]
    fn long_stall_lands_on_wall_clock_position() {
        let mut c = carousel(4);
        // Six hours is 4320 periods, a multiple of four items.
        assert_eq!(c.tick(Duration::from_secs(6 * 60 * 60)), 4320);
        assert_eq!(c.active_index(), 0);

        assert_eq!(c.tick(AUTO_ROTATE_PERIOD * 7), 7);
        assert_eq!(c.active_index(), 3);
    }

    #[test]
    fn manual_action_resets_the_countdown() {
        let mut c = carousel(3);
        c.tick(AUTO_ROTATE_PERIOD - Duration::from_millis(10));

        c.on_control(Direction::Next);
        assert_eq!(c.active_index(), 1);

        // The old countdown would have fired here.
        assert_eq!(c.tick(Duration::from_millis(10)), 0);
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn manual_action_while_hovered_resumes_rotation() {
        let mut c = carousel(3);
        c.on_pointer_enter();
        c.on_control(Direction::Prev);
        assert_eq!(c.active_index(), 2);
        assert!(c.is_rotating());
    }

    #[test]
    fn keys_are_ignored_when_carousel_is_off_screen() {
        let mut c = carousel(3);
        c.on_key(NavKey::Right, false);
        assert_eq!(c.active_index(), 0);

        c.on_key(NavKey::Right, true);
        assert_eq!(c.active_index(), 1);
        c.on_key(NavKey::Left, true);
        c.on_key(NavKey::Left, true);
        assert_eq!(c.active_index(), 2);
        assert_single_active(&c);
    }

    #[test]
    fn events_dispatch_to_handlers() {
        let mut c = carousel(3);
        c.handle(CarouselEvent::Indicator(1));
        c.handle(CarouselEvent::PointerEnter);
        c.handle(CarouselEvent::Tick(AUTO_ROTATE_PERIOD));
        assert_eq!(c.active_index(), 1);

        c.handle(CarouselEvent::PointerLeave);
        c.handle(CarouselEvent::Tick(AUTO_ROTATE_PERIOD));
        assert_eq!(c.active_index(), 2);

        c.handle(CarouselEvent::Key { key: NavKey::Right, region_visible: true });
        assert_eq!(c.active_index(), 0);
        c.handle(CarouselEvent::Control(Direction::Prev));
        assert_eq!(c.active_index(), 2);
        assert_single_active(&c);
    }
}
