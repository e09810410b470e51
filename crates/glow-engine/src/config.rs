//! # Storefront Configuration
//!
//! Configuration for the homepage pipeline and slideshow driver.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. TOML Config File                                                   │
//! │     ~/.config/glow-storefront/storefront.toml (Linux)                  │
//! │     ~/Library/Application Support/com.glow.storefront/... (macOS)      │
//! │                                                                         │
//! │  2. Default Values                                                     │
//! │     ./catalog.json, ./cart.json, 3 slides @ 5000 ms, 8/4/8 sections    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! path = "./catalog.json"
//!
//! [cart]
//! storage_path = "./cart.json"
//!
//! [slideshow]
//! slide_count = 3
//! interval_ms = 5000
//!
//! [sections]
//! trending = 8
//! special = 4
//! best_selling = 8
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use glow_core::{SectionLimits, BEST_SELLING_LIMIT, DEFAULT_SLIDE_COUNT, SPECIAL_LIMIT, TRENDING_LIMIT};

use crate::error::EngineResult;

/// Default auto-advance interval for the hero slideshow, in milliseconds.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Where the catalog document set lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog JSON document.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("./catalog.json")
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: default_catalog_path(),
        }
    }
}

// =============================================================================
// Cart Configuration
// =============================================================================

/// Where the persisted cart snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    /// Path of the cart storage slot.
    #[serde(default = "default_cart_path")]
    pub storage_path: PathBuf,
}

fn default_cart_path() -> PathBuf {
    PathBuf::from("./cart.json")
}

impl Default for CartConfig {
    fn default() -> Self {
        CartConfig {
            storage_path: default_cart_path(),
        }
    }
}

// =============================================================================
// Slideshow Configuration
// =============================================================================

/// Hero slideshow deck size and timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Number of slides in the deck (>= 1).
    #[serde(default = "default_slide_count")]
    pub slide_count: usize,

    /// Auto-advance interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_slide_count() -> usize {
    DEFAULT_SLIDE_COUNT
}

fn default_interval_ms() -> u64 {
    DEFAULT_SLIDE_INTERVAL_MS
}

impl SlideshowConfig {
    /// The auto-advance interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        SlideshowConfig {
            slide_count: default_slide_count(),
            interval_ms: default_interval_ms(),
        }
    }
}

// =============================================================================
// Sections Configuration
// =============================================================================

/// Upper bounds for the curated homepage rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default = "default_trending")]
    pub trending: usize,

    #[serde(default = "default_special")]
    pub special: usize,

    #[serde(default = "default_best_selling")]
    pub best_selling: usize,
}

fn default_trending() -> usize {
    TRENDING_LIMIT
}

fn default_special() -> usize {
    SPECIAL_LIMIT
}

fn default_best_selling() -> usize {
    BEST_SELLING_LIMIT
}

impl SectionsConfig {
    /// Converts to the core selector's limits.
    pub fn limits(&self) -> SectionLimits {
        SectionLimits {
            trending: self.trending,
            special: self.special,
            best_selling: self.best_selling,
        }
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        SectionsConfig {
            trending: default_trending(),
            special: default_special(),
            best_selling: default_best_selling(),
        }
    }
}

// =============================================================================
// Storefront Configuration
// =============================================================================

/// Top-level configuration for the storefront pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub cart: CartConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub sections: SectionsConfig,
}

impl StorefrontConfig {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        info!(path = %path.display(), "Loaded storefront config");
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is
    /// absent or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Using default storefront config"
                );
                StorefrontConfig::default()
            }
        }
    }

    /// The platform config file location
    /// (e.g. `~/.config/glow-storefront/storefront.toml` on Linux).
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "glow", "glow-storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.slideshow.slide_count, 3);
        assert_eq!(config.slideshow.interval(), Duration::from_millis(5000));
        assert_eq!(config.sections.limits().trending, 8);
        assert_eq!(config.sections.limits().special, 4);
        assert_eq!(config.sections.limits().best_selling, 8);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [slideshow]
            slide_count = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.slideshow.slide_count, 5);
        assert_eq!(config.slideshow.interval_ms, 5000);
        assert_eq!(config.catalog.path, PathBuf::from("./catalog.json"));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = StorefrontConfig::load_or_default(Path::new("/nonexistent/storefront.toml"));
        assert_eq!(config.slideshow.slide_count, 3);
    }
}
