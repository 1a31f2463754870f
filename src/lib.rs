#![warn(missing_docs)]

//! # question-browser
//!
//! A paginated, filterable browser for a fixed collection of categorized
//! conversation questions, built as a [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! component.
//!
//! ## Overview
//!
//! Questions are loaded once from a JSON source into an in-memory store. The
//! browser keeps three pieces of session state (active category, search term,
//! current page) and derives everything else from them on every action:
//!
//! - the **filtered set**: questions matching the category and containing the
//!   search term, case-insensitively, in load order
//! - the **page count** and the slice of questions for the current page
//! - the **pagination plan**: which page numbers, gaps and arrows to draw
//!
//! A random pick draws uniformly from the filtered set.
//!
//! ## Driving the browser directly
//!
//! ```rust
//! use question_browser::prelude::*;
//!
//! let items = (0..30)
//!     .map(|i| Question::new(i, "clean", format!("Question {}", i)))
//!     .collect();
//! let mut browser = Browser::with_items(Config::default(), items);
//!
//! let render = browser.go_to_page(3);
//! assert_eq!(render.shown_count, 6);
//! assert_eq!(render.plan.pages(), vec![1, 2, 3]);
//! assert!(!render.plan.next_enabled);
//!
//! let render = browser.set_search("zebra");
//! assert_eq!(render.total_count, 0);
//! assert!(render.plan.is_empty());
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use question_browser::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     browser: Browser,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let browser = Browser::new(Config::default().with_page_size(8));
//!         (Self { browser }, Some(load_items_cmd("questions.json")))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.browser.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.browser.view()
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`item`] | Question and category types, source document format |
//! | [`store`] | Loaded questions and distinct categories |
//! | [`filter`] | Category and search-term matching |
//! | [`paginator`] | Page arithmetic, pagination plan and a page-selector widget |
//! | [`picker`] | Uniform random selection |
//! | [`browser`] | Session state controller and terminal view |
//! | [`config`] | Browser settings |
//! | [`key`] | Key bindings |
//! | [`error`] | Load errors |

pub mod browser;
pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod key;
pub mod paginator;
pub mod picker;
pub mod store;

pub use browser::{
    load_items_cmd, Action, BrowserKeyMap, BrowserStyles, ItemsLoadedMsg, LoadState,
    Model as Browser, RandomPick, RenderInstruction, SessionState,
};
pub use config::Config;
pub use error::{Error, Result};
pub use item::{Category, Question};
pub use key::{Binding, KeyMap, KeyPress};
pub use paginator::{pagination_plan, Model as Paginator, PageToken, Plan};
pub use picker::Picker;
pub use store::Store;

/// Prelude module for convenient imports.
///
/// ```rust
/// use question_browser::prelude::*;
///
/// let mut browser = Browser::with_items(
///     Config::default(),
///     vec![Question::new(0, "deep-talk", "What would you change?")],
/// );
/// assert_eq!(browser.set_category("deep-talk").total_count, 1);
/// ```
pub mod prelude {
    pub use crate::browser::{
        load_items_cmd, Action, InputMode, ItemsLoadedMsg, LoadState, Model as Browser,
        RandomPick, RenderInstruction, SessionState,
    };
    pub use crate::config::Config;
    pub use crate::error::Error;
    pub use crate::filter::{filter, matches};
    pub use crate::item::{category_label, Category, Question};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{page_count, paginate, pagination_plan, PageToken, Plan};
    pub use crate::picker::{pick_random, Picker};
    pub use crate::store::Store;
}
