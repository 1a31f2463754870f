//! The question browser: session state controller plus its terminal view.
//!
//! [`Model`] owns the three fields that drive everything on screen (active
//! category, search term, current page) and recomputes the filtered set and
//! page count after every action. Actions return a [`RenderInstruction`], so
//! the controller can be driven directly by any front end:
//!
//! ```rust
//! use question_browser::browser::Model;
//! use question_browser::config::Config;
//! use question_browser::item::Question;
//!
//! let items = (0..14)
//!     .map(|i| Question::new(i, if i < 9 { "clean" } else { "funny" }, format!("q{}", i)))
//!     .collect();
//! let mut browser = Model::with_items(Config::default(), items);
//!
//! let render = browser.set_category("clean");
//! assert_eq!(render.total_count, 9);
//! assert_eq!(render.page_count, 1);
//! assert_eq!(render.plan.pages(), vec![1]);
//! assert!(!render.plan.prev_enabled && !render.plan.next_enabled);
//! ```
//!
//! `Model` also implements the bubbletea-rs `Model` trait. Return
//! [`load_items_cmd`] from your `init()` to read the question source; the
//! browser shows a loading state until the resulting [`ItemsLoadedMsg`]
//! arrives, and an empty state if the source is unreachable or malformed.
//!
//! ### Input modes
//! - `Browsing`: keys navigate pages and categories, `/` starts a search
//! - `Searching`: typed characters edit the term live, `enter`/`esc` stop
//!
//! A random pick opens a panel on top of the list; `r` picks again and
//! `esc` closes it.

mod actions;
pub mod keys;
mod model;
mod rendering;
pub mod style;

#[cfg(test)]
mod tests;

pub use actions::{Action, RenderInstruction};
pub use keys::BrowserKeyMap;
pub use model::{
    load_items_cmd, InputMode, ItemsLoadedMsg, LoadState, Model, RandomPick, SessionState,
};
pub use rendering::{truncate, NONE_AVAILABLE_TEXT, NONE_AVAILABLE_TITLE, NO_RESULTS, RANDOM_TITLE};
pub use style::BrowserStyles;

use crate::key;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};

impl key::KeyMap for Model {
    fn short_help(&self) -> Vec<&key::Binding> {
        match self.mode {
            InputMode::Searching => vec![&self.keymap.accept_search, &self.keymap.force_quit],
            InputMode::Browsing => {
                let mut bindings = key::KeyMap::short_help(&self.paginator.keymap);
                bindings.extend(key::KeyMap::short_help(&self.keymap));
                bindings
            }
        }
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut groups = key::KeyMap::full_help(&self.paginator.keymap);
        groups.extend(key::KeyMap::full_help(&self.keymap));
        groups
    }
}

impl Model {
    fn handle_search_key(&mut self, key_msg: &KeyMsg) {
        match key_msg.key {
            KeyCode::Backspace => {
                let mut input = self.search_input.clone();
                if input.pop().is_some() {
                    self.set_search(&input);
                }
            }
            KeyCode::Char(c) if !key_msg.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut input = self.search_input.clone();
                input.push(c);
                self.set_search(&input);
            }
            _ if self.keymap.accept_search.matches(key_msg) => {
                self.mode = InputMode::Browsing;
            }
            _ => {}
        }
    }

    fn handle_random_key(&mut self, key_msg: &KeyMsg) {
        if self.keymap.random.matches(key_msg) {
            self.random = Some(self.pick_random());
        } else if self.keymap.close_random.matches(key_msg) {
            self.close_random();
        }
    }

    fn handle_browse_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        } else if self.page_key(key_msg) {
            return None;
        } else if self.keymap.next_category.matches(key_msg) {
            self.next_category();
        } else if self.keymap.prev_category.matches(key_msg) {
            self.prev_category();
        } else if self.keymap.search.matches(key_msg) {
            self.mode = InputMode::Searching;
        } else if self.keymap.clear_search.matches(key_msg) {
            if !self.search_input.is_empty() {
                self.set_search("");
            }
        } else if self.keymap.random.matches(key_msg) {
            self.random = Some(self.pick_random());
        } else if let KeyCode::Char(c) = key_msg.key {
            if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                self.go_to_page(n as usize);
            }
        }
        None
    }
}

impl BubbleTeaModel for Model {
    /// Creates an empty browser with the default configuration.
    ///
    /// No command is returned: the host decides where questions come from and
    /// sends them with [`load_items_cmd`] or [`Model::load`].
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    /// Handles load results, resizes and key presses.
    ///
    /// Key handling depends on what is in front: the random panel takes
    /// priority, then search editing, then normal browsing. `ctrl+c` quits
    /// from every mode.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<ItemsLoadedMsg>() {
            Ok(loaded) => {
                let ItemsLoadedMsg(result) = *loaded;
                self.load_result(result);
                return None;
            }
            Err(other) => other,
        };

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.set_width(size.width as usize);
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.keymap.force_quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }
        if self.random.is_some() {
            self.handle_random_key(key_msg);
            return None;
        }
        match self.mode {
            InputMode::Searching => {
                self.handle_search_key(key_msg);
                None
            }
            InputMode::Browsing => self.handle_browse_key(key_msg),
        }
    }

    /// Renders header, search line, cards, counts, page selector, random
    /// panel and help, skipping empty sections.
    fn view(&self) -> String {
        let render = self.render();
        let sections = [
            self.view_header(),
            self.view_search(),
            self.view_items(&render),
            self.view_status(&render),
            self.view_pagination(&render),
            self.view_random(),
            self.view_help(),
        ];
        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
