use carousel::Testimonial;
use carousel::constants::*;
use carousel::testimonial::wrap_text;
use raylib::prelude::*;

const QUOTE_FONT_SIZE: i32 = 26;
const AUTHOR_FONT_SIZE: i32 = 22;
const ROLE_FONT_SIZE: i32 = 18;
const PADDING: f32 = 36.0;

/// One testimonial card. All cards share the same rectangle and cross-fade
/// as the active marker moves between them.
pub struct Slide {
    testimonial: Testimonial,
    lines: Vec<String>,
    avatar: Option<Texture2D>,

    active: bool,
    alpha: f32,

    fade: Option<ease::Tween>,
    animation_timer: f32,
}

impl Slide {
    pub fn new(testimonial: Testimonial, avatar: Option<Texture2D>) -> Self {
        let lines = wrap_text(&testimonial.quote, QUOTE_WRAP_CHARS);
        Self {
            testimonial,
            lines,
            avatar,
            active: false,
            alpha: 0.0,
            fade: None,
            animation_timer: 0.0,
        }
    }

    /// Starts a fade towards the new state. Repeated calls with the same state do nothing.
    pub fn set_active(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;
        let target = if active { 1.0 } else { 0.0 };
        self.fade = Some(ease::Tween::new(ease::cubic_out, self.alpha, target, FADE_DURATION));
        self.animation_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        self.alpha = fade.apply(dt).clamp(0.0, 1.0);
        self.animation_timer += dt;

        if self.animation_timer >= FADE_DURATION {
            self.alpha = if self.active { 1.0 } else { 0.0 };
            self.fade = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, card: Rectangle) {
        if self.alpha <= 0.0 {
            return;
        }

        d.draw_rectangle_rounded(card, 0.08, 12, faded(Color::WHITE, self.alpha));

        let mut y = card.y + PADDING;
        for line in &self.lines {
            d.draw_text(
                line,
                (card.x + PADDING) as i32,
                y as i32,
                QUOTE_FONT_SIZE,
                faded(Color::DARKGRAY, self.alpha),
            );
            y += QUOTE_FONT_SIZE as f32 * 1.3;
        }

        let footer_y = card.y + card.height - PADDING - AVATAR_SIZE;
        let mut text_x = card.x + PADDING;

        if let Some(avatar) = &self.avatar {
            let (tex_width, tex_height) = (avatar.width() as f32, avatar.height() as f32);
            // Centered square crop
            let side = tex_width.min(tex_height);
            let source = Rectangle::new((tex_width - side) * 0.5, (tex_height - side) * 0.5, side, side);
            let dest = Rectangle::new(text_x, footer_y, AVATAR_SIZE, AVATAR_SIZE);

            d.draw_texture_pro(
                avatar,
                source,
                dest,
                Vector2::new(0.0, 0.0),
                0.0,
                faded(Color::WHITE, self.alpha),
            );
            text_x += AVATAR_SIZE + 20.0;
        }

        d.draw_text(
            &self.testimonial.author,
            text_x as i32,
            (footer_y + 12.0) as i32,
            AUTHOR_FONT_SIZE,
            faded(Color::DARKBLUE, self.alpha),
        );
        if !self.testimonial.role.is_empty() {
            d.draw_text(
                &self.testimonial.role,
                text_x as i32,
                (footer_y + 42.0) as i32,
                ROLE_FONT_SIZE,
                faded(Color::GRAY, self.alpha),
            );
        }
    }
}

pub fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha) as u8)
}
