//! Configuration for the trivia service
//!
//! Centralized configuration with sensible defaults.

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Questions returned per list call unless configured otherwise
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => unreachable!(),
};

/// Main configuration for a trivia service instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Question Set Configuration
    // -------------------------------------------------------------------------
    /// JSON file holding the question set.
    /// `None` serves the built-in seed deck.
    pub questions_file: Option<PathBuf>,

    /// Seed for the random question source.
    /// `None` seeds from OS entropy.
    pub random_seed: Option<u64>,

    // -------------------------------------------------------------------------
    // Pagination Configuration
    // -------------------------------------------------------------------------
    /// Fixed number of questions per page
    pub page_size: NonZeroUsize,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Prefix for hypermedia links, e.g. `https://trivia.example.com`.
    /// Empty yields root-relative links.
    pub public_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: None,
            random_seed: None,
            page_size: DEFAULT_PAGE_SIZE,
            listen_addr: "127.0.0.1:8080".to_string(),
            public_base_url: String::new(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Load questions from a JSON file instead of the built-in deck
    pub fn questions_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.questions_file = Some(path.into());
        self
    }

    /// Fix the seed of the random question source
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set the page size
    pub fn page_size(mut self, size: NonZeroUsize) -> Self {
        self.config.page_size = size;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the prefix used for hypermedia links (trailing slashes are dropped)
    pub fn public_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.public_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
