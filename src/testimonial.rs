use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::debug;

use crate::constants::AUTO_ROTATE_MS;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: Option<PathBuf>,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, role: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            role: role.to_string(),
            avatar: None,
        }
    }
}

/// Contents of a testimonials file.
///
/// ```toml
/// auto_rotate_ms = 5000
///
/// [[testimonials]]
/// quote = "..."
/// author = "..."
/// role = "..."
/// avatar = "avatars/jane.jpg"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_auto_rotate_ms")]
    pub auto_rotate_ms: u64,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

fn default_auto_rotate_ms() -> u64 {
    AUTO_ROTATE_MS
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_rotate_ms: AUTO_ROTATE_MS,
            testimonials: default_testimonials(),
        }
    }
}

impl CarouselConfig {
    /// Reads a config file. Relative avatar paths are resolved against the file's directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            for testimonial in config.testimonials.iter_mut() {
                if let Some(avatar) = testimonial.avatar.as_mut() {
                    if avatar.is_relative() {
                        *avatar = base.join(&*avatar);
                    }
                }
            }
        }

        config.validate()?;
        debug!(path = %path.display(), count = config.testimonials.len(), "loaded testimonials");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.testimonials.is_empty() {
            return Err(ConfigError::NoTestimonials);
        }
        if self.auto_rotate_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        Ok(())
    }

    pub fn period(&self) -> Duration {
        Duration::from_millis(self.auto_rotate_ms)
    }

    pub fn shuffle(&mut self) {
        self.testimonials.shuffle(&mut rand::rng());
    }
}

pub fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Elevate Digital rebuilt our site in six weeks. Organic traffic doubled within a quarter and the team still answers every email within the hour.",
            "Sarah Mitchell",
            "CEO, Brightline Retail",
        ),
        Testimonial::new(
            "Their strategy sessions changed how we think about our funnel. We cut paid acquisition costs by a third without losing a single lead.",
            "Marcus Chen",
            "Head of Growth, Northwind Labs",
        ),
        Testimonial::new(
            "Clear reporting, honest advice and a campaign that actually shipped on time. We renewed for another two years.",
            "Priya Raman",
            "Marketing Director, Cobalt Health",
        ),
    ]
}

/// Greedy word wrap. Words longer than `max_chars` get a line of their own.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
