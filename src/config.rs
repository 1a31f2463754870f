//! Browser configuration.
//!
//! Settings follow the builder convention used throughout the crate: `with_*`
//! methods consume and return the config, `set_*` methods mutate in place, and
//! both clamp out-of-range values instead of failing. `Config` also derives
//! `Deserialize`, so a host application can embed it in its own settings file;
//! missing fields fall back to the defaults.

use crate::paginator::DEFAULT_WINDOW_SIZE;
use serde::Deserialize;

/// Questions shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Label of the `all` category unless configured otherwise.
pub const DEFAULT_ALL_LABEL: &str = "All Questions";

/// Render width used before the terminal reports its size.
pub const DEFAULT_WIDTH: usize = 80;

/// Settings for a [`browser::Model`](crate::browser::Model).
///
/// # Examples
///
/// ```rust
/// use question_browser::config::Config;
///
/// let config = Config::default().with_page_size(0).with_window_size(7);
/// assert_eq!(config.page_size, 1); // clamped
/// assert_eq!(config.window_size, 7);
///
/// let parsed: Config = serde_json::from_str(r#"{"page_size": 20}"#).unwrap();
/// assert_eq!(parsed.page_size, 20);
/// assert_eq!(parsed.window_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Questions per page, at least 1.
    pub page_size: usize,
    /// Page tokens shown in the selector before ellipses, at least 3.
    pub window_size: usize,
    /// Display label of the `all` category.
    pub all_label: String,
    /// Render width in columns.
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            window_size: DEFAULT_WINDOW_SIZE,
            all_label: DEFAULT_ALL_LABEL.to_string(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets questions per page (builder pattern). Clamped to at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.set_page_size(page_size);
        self
    }

    /// Sets the selector window (builder pattern). Clamped to at least 3.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.set_window_size(window_size);
        self
    }

    /// Sets the `all` category label (builder pattern).
    pub fn with_all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = label.into();
        self
    }

    /// Sets the render width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets questions per page. Clamped to at least 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Sets the selector window. Clamped to at least 3.
    pub fn set_window_size(&mut self, window_size: usize) {
        self.window_size = window_size.max(3);
    }

    /// Returns a copy with every field clamped into range.
    ///
    /// Deserialized configs bypass the setters, so the browser normalizes them
    /// on construction.
    pub fn normalized(mut self) -> Self {
        self.set_page_size(self.page_size);
        self.set_window_size(self.window_size);
        self
    }
}
