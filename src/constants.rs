use std::time::Duration;

pub const AUTO_ROTATE_MS: u64 = 5000;         // Default auto-advance period (milliseconds)
pub const AUTO_ROTATE_PERIOD: Duration = Duration::from_millis(AUTO_ROTATE_MS);
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1); // Shortest interval the scheduler accepts

pub const QUOTE_WRAP_CHARS: usize = 56;       // Characters per line when wrapping a quote

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const PAGE_HEIGHT: f32 = 1800.0;          // Height of the scrollable landing page
pub const SCROLL_STEP: f32 = 60.0;            // Pixels scrolled per wheel notch

pub const FADE_DURATION: f32 = 0.4;           // Card cross-fade time (seconds)
pub const AVATAR_SIZE: f32 = 72.0;            // Avatar edge length on screen
