//! Testimonial carousel: auto-rotation, manual override, pause on hover and
//! keyboard control around a single cancellable timer.

pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod state;
pub mod surface;
pub mod testimonial;
pub mod timer;

pub use controller::CarouselController;
pub use error::{CarouselError, ConfigError};
pub use input::{CarouselEvent, Direction, HoverTracker, NavKey};
pub use state::RotationState;
pub use surface::{ActiveMarkers, DisplaySurface};
pub use testimonial::{CarouselConfig, Testimonial};
pub use timer::{Fired, IntervalScheduler, Scheduler, TimerId};
