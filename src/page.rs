use std::time::Duration;

use anyhow::Result;
use carousel::constants::*;
use carousel::geometry::Region;
use carousel::{
    ActiveMarkers, CarouselConfig, CarouselController, CarouselEvent, Direction, HoverTracker,
    IntervalScheduler, NavKey,
};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::slide::{Slide, faded};
use crate::texture_loader::load_avatar;

const SECTION_TOP: f32 = 560.0;
const SECTION_HEIGHT: f32 = 520.0;
const CONTAINER_MAX_WIDTH: f32 = 1000.0;
const CARD_HEIGHT: f32 = 300.0;
const BUTTON_RADIUS: f32 = 24.0;
const DOT_RADIUS: f32 = 7.0;
const DOT_SPACING: f32 = 28.0;

const BRAND_BLUE: Color = Color { r: 0, g: 102, b: 204, a: 255 };
const PAGE_BACKGROUND: Color = Color { r: 244, g: 247, b: 251, a: 255 };

/// Screen-space rectangles of the carousel for the current frame.
struct Layout {
    section: Rectangle,
    container: Rectangle,
    card: Rectangle,
    prev: Option<Vector2>,
    next: Option<Vector2>,
    dots: Vec<Vector2>,
}

/// The landing page around the testimonial carousel. Polls raylib input
/// every frame and feeds it to the controller as events.
pub struct Page {
    controller: CarouselController<ActiveMarkers, IntervalScheduler>,
    slides: Vec<Slide>,
    hover: HoverTracker,
    with_controls: bool,
    scroll: f32,
}

impl Page {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: CarouselConfig,
        with_controls: bool,
    ) -> Result<Self> {
        let period = config.period();
        let mut slides = Vec::with_capacity(config.testimonials.len());
        for testimonial in config.testimonials {
            let avatar = match &testimonial.avatar {
                Some(path) => match load_avatar(rl, thread, path) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        warn!(author = %testimonial.author, "avatar skipped: {e:#}");
                        None
                    }
                },
                None => None,
            };
            slides.push(Slide::new(testimonial, avatar));
        }

        let controller =
            CarouselController::new(ActiveMarkers::new(slides.len()), IntervalScheduler::new(), period)?;
        info!(items = slides.len(), ?period, with_controls, "carousel initialized");

        let mut page = Self {
            controller,
            slides,
            hover: HoverTracker::new(),
            with_controls,
            scroll: 0.0,
        };
        page.sync_slides();
        Ok(page)
    }

    fn layout(&self, screen_width: f32) -> Layout {
        let top = SECTION_TOP - self.scroll;
        let section = Rectangle::new(0.0, top, screen_width, SECTION_HEIGHT);

        let container_width = CONTAINER_MAX_WIDTH.min(screen_width - 40.0);
        let container_x = (screen_width - container_width) * 0.5;
        let container = Rectangle::new(container_x, top + 90.0, container_width, CARD_HEIGHT + 80.0);

        let card_inset = if self.with_controls { BUTTON_RADIUS * 2.0 + 24.0 } else { 0.0 };
        let card = Rectangle::new(
            container.x + card_inset,
            container.y,
            container.width - card_inset * 2.0,
            CARD_HEIGHT,
        );

        let button_y = card.y + card.height * 0.5;
        let (prev, next) = if self.with_controls {
            (
                Some(Vector2::new(container.x + BUTTON_RADIUS, button_y)),
                Some(Vector2::new(container.x + container.width - BUTTON_RADIUS, button_y)),
            )
        } else {
            (None, None)
        };

        let count = self.slides.len() as f32;
        let dots_x = screen_width * 0.5 - (count - 1.0) * DOT_SPACING * 0.5;
        let dots_y = card.y + card.height + 40.0;
        let dots = (0..self.slides.len())
            .map(|i| Vector2::new(dots_x + i as f32 * DOT_SPACING, dots_y))
            .collect();

        Layout { section, container, card, prev, next, dots }
    }

    fn collect_events(&mut self, rl: &RaylibHandle, dt: f32) -> Vec<CarouselEvent> {
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let layout = self.layout(screen_width);
        let mouse = rl.get_mouse_position();

        // Time first, so a timer restarted by this frame's input starts from zero.
        let mut events = vec![CarouselEvent::Tick(Duration::from_secs_f32(dt.max(0.0)))];

        if let Some(event) = self.hover.update(contains(layout.container, mouse)) {
            events.push(event);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if layout.prev.is_some_and(|c| within(c, BUTTON_RADIUS, mouse)) {
                events.push(CarouselEvent::Control(Direction::Prev));
            } else if layout.next.is_some_and(|c| within(c, BUTTON_RADIUS, mouse)) {
                events.push(CarouselEvent::Control(Direction::Next));
            } else if let Some(i) = layout.dots.iter().position(|&c| within(c, DOT_RADIUS * 1.8, mouse)) {
                events.push(CarouselEvent::Indicator(i));
            }
        }

        let region_visible = Region::new(SECTION_TOP, SECTION_HEIGHT)
            .scrolled(self.scroll)
            .is_in_view(screen_height);
        for (raylib_key, key) in [
            (KeyboardKey::KEY_LEFT, NavKey::Left),
            (KeyboardKey::KEY_RIGHT, NavKey::Right),
        ] {
            if rl.is_key_pressed(raylib_key) {
                events.push(CarouselEvent::Key { key, region_visible });
            }
        }

        events
    }

    pub fn update(&mut self, rl: &RaylibHandle, dt: f32) {
        let max_scroll = (PAGE_HEIGHT - rl.get_screen_height() as f32).max(0.0);
        self.scroll = (self.scroll - rl.get_mouse_wheel_move() * SCROLL_STEP).clamp(0.0, max_scroll);

        for event in self.collect_events(rl, dt) {
            self.controller.handle(event);
        }
        self.sync_slides();

        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    fn sync_slides(&mut self) {
        let markers = self.controller.surface();
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(markers.is_slot_active(i));
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width();
        let layout = self.layout(screen_width as f32);
        d.clear_background(PAGE_BACKGROUND);

        // Hero
        let hero_top = -self.scroll as i32;
        d.draw_rectangle(0, hero_top, screen_width, 480, BRAND_BLUE);
        d.draw_text("Elevate Digital", 80, hero_top + 160, 64, Color::WHITE);
        d.draw_text("Growth marketing for ambitious brands", 84, hero_top + 240, 28, Color::WHITE);
        d.draw_text("Scroll down to read what our clients say", 84, hero_top + 400, 20, Color::LIGHTGRAY);

        // Testimonials
        d.draw_text(
            "What our clients say",
            layout.container.x as i32,
            (layout.section.y + 24.0) as i32,
            36,
            Color::DARKGRAY,
        );
        for slide in &self.slides {
            slide.draw(d, layout.card);
        }

        for (center, label) in [(layout.prev, "<"), (layout.next, ">")] {
            if let Some(center) = center {
                d.draw_circle_v(center, BUTTON_RADIUS, BRAND_BLUE);
                d.draw_text(label, center.x as i32 - 6, center.y as i32 - 12, 24, Color::WHITE);
            }
        }

        let markers = self.controller.surface();
        for (i, &center) in layout.dots.iter().enumerate() {
            let color = if markers.is_dot_active(i) { BRAND_BLUE } else { Color::LIGHTGRAY };
            d.draw_circle_v(center, DOT_RADIUS, color);
        }

        if !self.controller.is_rotating() {
            d.draw_text(
                "paused",
                (layout.container.x + layout.container.width - 70.0) as i32,
                (layout.section.y + 36.0) as i32,
                18,
                faded(Color::GRAY, 0.8),
            );
        }

        // Footer
        let footer_top = (PAGE_HEIGHT - 600.0 - self.scroll) as i32;
        d.draw_rectangle(0, footer_top, screen_width, 600, Color::DARKGRAY);
        d.draw_text("Ready to grow? hello@elevate.digital", 80, footer_top + 120, 28, Color::WHITE);
    }
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

fn within(center: Vector2, radius: f32, point: Vector2) -> bool {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    dx * dx + dy * dy <= radius * radius
}
