//! Key bindings for the question browser.
//!
//! Page navigation belongs to the embedded paginator and is configured through
//! [`Model::page_keymap_mut`](super::Model::page_keymap_mut). Everything else
//! lives in [`BrowserKeyMap`].
//!
//! ## Default Bindings
//!
//! - **Pages** (paginator): `←/h/pgup` previous, `→/l/pgdn` next,
//!   `g/home` first, `G/end` last, plus `1`-`9` to jump to a page
//! - **Categories**: `tab` next, `shift+tab` previous
//! - **Search**: `/` start typing, `enter` or `esc` stop typing, `esc` clear
//! - **Random**: `r` pick (again), `esc/enter` close the panel
//! - **Quit**: `q`, `ctrl+c` (works in every mode)
//!
//! ## Customizing
//!
//! ```rust
//! use question_browser::browser::Model;
//! use question_browser::config::Config;
//! use question_browser::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let mut browser = Model::new(Config::default());
//! browser.keymap.random = Binding::new(vec![KeyCode::Char('x')]).with_help("x", "surprise me");
//! browser.keymap.quit.set_enabled(false);
//! ```

use crate::key::{self, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for categories, searching, random picks and quitting.
#[derive(Debug, Clone)]
pub struct BrowserKeyMap {
    /// Select the next category.
    pub next_category: key::Binding,
    /// Select the previous category.
    pub prev_category: key::Binding,
    /// Start editing the search term.
    pub search: key::Binding,
    /// Stop editing the search term.
    pub accept_search: key::Binding,
    /// Clear the search term.
    pub clear_search: key::Binding,
    /// Pick a random question.
    pub random: key::Binding,
    /// Close the random question panel.
    pub close_random: key::Binding,
    /// Quit.
    pub quit: key::Binding,
    /// Quit from any mode.
    pub force_quit: key::Binding,
}

impl Default for BrowserKeyMap {
    fn default() -> Self {
        Self {
            next_category: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "category"),
            prev_category: key::Binding::new(vec![
                KeyPress::from(KeyCode::BackTab),
                KeyPress::from((KeyCode::BackTab, KeyModifiers::SHIFT)),
            ])
            .with_help("shift+tab", "prev category"),
            search: key::Binding::new(vec![KeyCode::Char('/')]).with_help("/", "search"),
            accept_search: key::Binding::new(vec![KeyCode::Enter, KeyCode::Esc])
                .with_help("enter", "done"),
            clear_search: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear search"),
            random: key::Binding::new(vec![KeyCode::Char('r')]).with_help("r", "random"),
            close_random: key::Binding::new(vec![KeyCode::Esc, KeyCode::Enter])
                .with_help("esc", "close"),
            quit: key::Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
            force_quit: key::Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "force quit"),
        }
    }
}

impl key::KeyMap for BrowserKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_category, &self.search, &self.random, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![
                &self.next_category,
                &self.prev_category,
                &self.search,
                &self.clear_search,
            ],
            vec![&self.random, &self.close_random, &self.quit],
        ]
    }
}
