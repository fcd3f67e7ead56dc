use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("a carousel needs at least one item")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no testimonials configured")]
    NoTestimonials,
    #[error("auto_rotate_ms must be greater than zero")]
    ZeroPeriod,
}
