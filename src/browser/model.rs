//! The browser Model struct, its construction, loading and accessors.

use super::keys::BrowserKeyMap;
use super::style::BrowserStyles;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::item::{self, Category, Question};
use crate::paginator;
use crate::picker::Picker;
use crate::store::{self, Store};
use bubbletea_rs::{Cmd, Msg};
use std::path::PathBuf;

/// Where the one-time load of the question source stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The source has not been delivered yet.
    #[default]
    Loading,
    /// Questions are loaded (possibly zero of them).
    Ready,
    /// The source was unreachable or malformed; the store is empty.
    Failed(String),
}

/// Whether keystrokes navigate or edit the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate pages and categories.
    #[default]
    Browsing,
    /// Typed characters edit the search term.
    Searching,
}

/// A snapshot of the three fields that drive every derived view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Active category filter.
    pub category: Category,
    /// Lower-cased search term; empty means no text filter.
    pub search_term: String,
    /// Current page, 1-based.
    pub page: usize,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            category: Category::All,
            search_term: String::new(),
            page: 1,
        }
    }
}

/// Outcome of a random pick over the filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomPick {
    /// A question chosen uniformly from the filtered set.
    Picked(Question),
    /// The filtered set is empty.
    NoneAvailable,
}

impl RandomPick {
    /// Returns the picked question, if any.
    pub fn question(&self) -> Option<&Question> {
        match self {
            RandomPick::Picked(q) => Some(q),
            RandomPick::NoneAvailable => None,
        }
    }
}

/// Message carrying the result of [`load_items_cmd`].
#[derive(Debug)]
pub struct ItemsLoadedMsg(pub Result<Vec<Question>>);

/// Creates a command that reads a JSON question source and reports back with
/// an [`ItemsLoadedMsg`].
///
/// ```rust
/// use question_browser::browser::load_items_cmd;
///
/// // Returned from the host application's init().
/// let cmd = load_items_cmd("questions.json");
/// ```
pub fn load_items_cmd(path: impl Into<PathBuf>) -> Cmd {
    let path = path.into();
    Box::pin(async move {
        let result = store::read_questions(&path);
        Some(Box::new(ItemsLoadedMsg(result)) as Msg)
    })
}

/// The question browser: session state, derived results and view settings.
///
/// All mutation goes through the action methods (`set_category`,
/// `set_search`, `go_to_page`, `next_page`, `prev_page`), each of which
/// recomputes the filtered set and returns a
/// [`RenderInstruction`](super::RenderInstruction).
///
/// # Examples
///
/// ```rust
/// use question_browser::browser::Model;
/// use question_browser::config::Config;
/// use question_browser::item::Question;
///
/// let mut browser = Model::new(Config::default());
/// browser.load(vec![
///     Question::new(0, "clean", "Tea or coffee?"),
///     Question::new(1, "funny", "Worst haircut?"),
/// ]);
///
/// let render = browser.set_category("clean");
/// assert_eq!(render.total_count, 1);
/// assert_eq!(render.page_items[0].text, "Tea or coffee?");
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    pub(super) store: Store,
    pub(super) config: Config,
    pub(super) category: Category,
    pub(super) search_term: String,
    pub(super) search_input: String,
    pub(super) filtered: Vec<Question>,
    pub(super) paginator: paginator::Model,
    pub(super) picker: Picker,
    pub(super) load_state: LoadState,
    pub(super) mode: InputMode,
    pub(super) random: Option<RandomPick>,
    /// Key bindings.
    pub keymap: BrowserKeyMap,
    /// Visual styles for the terminal view.
    pub styles: BrowserStyles,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Model {
    /// Creates an empty browser in the [`LoadState::Loading`] state.
    pub fn new(config: Config) -> Self {
        let config = config.normalized();
        let paginator = paginator::Model::new()
            .with_per_page(config.page_size)
            .with_window_size(config.window_size);
        Self {
            store: Store::new(),
            config,
            category: Category::All,
            search_term: String::new(),
            search_input: String::new(),
            filtered: Vec::new(),
            paginator,
            picker: Picker::new(),
            load_state: LoadState::Loading,
            mode: InputMode::Browsing,
            random: None,
            keymap: BrowserKeyMap::default(),
            styles: BrowserStyles::default(),
        }
    }

    /// Creates a browser that is already loaded with `items`.
    pub fn with_items(config: Config, items: Vec<Question>) -> Self {
        let mut model = Self::new(config);
        model.load(items);
        model
    }

    /// Replaces the random source (builder pattern), e.g. with a seeded picker.
    pub fn with_picker(mut self, picker: Picker) -> Self {
        self.picker = picker;
        self
    }

    /// Loads `items`, moves to [`LoadState::Ready`] and resets to page 1.
    pub fn load(&mut self, items: Vec<Question>) -> super::RenderInstruction {
        self.load_result(Ok(items))
    }

    /// Records a failed load: the store is emptied and the state becomes
    /// [`LoadState::Failed`].
    pub fn load_failed(&mut self, err: Error) -> super::RenderInstruction {
        self.load_result(Err(err))
    }

    /// Applies the outcome of a load.
    ///
    /// A failure is logged and leaves the store empty with
    /// [`LoadState::Failed`]; the browser stays usable and renders an empty
    /// state.
    pub fn load_result(&mut self, result: Result<Vec<Question>>) -> super::RenderInstruction {
        self.load_state = match &result {
            Ok(_) => LoadState::Ready,
            Err(err) => LoadState::Failed(err.to_string()),
        };
        self.store.load_or_empty(result);
        self.random = None;
        self.paginator.reset();
        self.recompute();
        self.render()
    }

    /// Returns the load state.
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Returns true while waiting for the question source.
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Returns the item store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a snapshot of the session state.
    pub fn session(&self) -> SessionState {
        SessionState {
            category: self.category.clone(),
            search_term: self.search_term.clone(),
            page: self.paginator.page,
        }
    }

    /// Returns the active category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns the lower-cased search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the search text as typed.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Returns the current page, 1-based.
    pub fn page(&self) -> usize {
        self.paginator.page
    }

    /// Returns the number of pages of the filtered set.
    pub fn page_count(&self) -> usize {
        self.paginator.total_pages
    }

    /// Returns the page navigation bindings for customization.
    pub fn page_keymap_mut(&mut self) -> &mut paginator::PaginatorKeyMap {
        &mut self.paginator.keymap
    }

    /// Returns the filtered set in load order.
    pub fn filtered(&self) -> &[Question] {
        &self.filtered
    }

    /// Returns the category selector entries: `all` first, then every tag sorted.
    ///
    /// Questions tagged `all` are reachable only through the `all` entry.
    pub fn categories(&self) -> Vec<Category> {
        std::iter::once(Category::All)
            .chain(
                self.store
                    .categories()
                    .into_iter()
                    .filter(|tag| *tag != item::ALL)
                    .map(Category::from),
            )
            .collect()
    }

    /// Returns the input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns the random pick currently on display, if any.
    pub fn random(&self) -> Option<&RandomPick> {
        self.random.as_ref()
    }

    /// Dismisses the random pick panel.
    pub fn close_random(&mut self) {
        self.random = None;
    }

    /// Sets the render width.
    pub fn set_width(&mut self, width: usize) {
        self.config.width = width;
    }
}
