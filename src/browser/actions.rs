//! User actions and derived-state recomputation.
//!
//! Every action updates exactly one piece of session state, recomputes the
//! filtered set and the page count, and returns the resulting
//! [`RenderInstruction`]. Changing the category or the search term always
//! returns to page 1; page navigation outside `[1, page_count]` is ignored.

use super::model::{Model, RandomPick};
use crate::filter;
use crate::item::{Category, Question};
use crate::paginator::{self, Plan};
use bubbletea_rs::KeyMsg;

/// A user action understood by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Select a category filter.
    SetCategory(Category),
    /// Replace the search term.
    SetSearch(String),
    /// Jump to a specific page.
    GoToPage(usize),
    /// Advance one page.
    NextPage,
    /// Go back one page.
    PrevPage,
}

/// Everything a render sink needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    /// Questions on the current page.
    pub page_items: Vec<Question>,
    /// Page selector plan.
    pub plan: Plan,
    /// Number of questions on the current page.
    pub shown_count: usize,
    /// Size of the filtered set.
    pub total_count: usize,
    /// Current page, 1-based.
    pub page: usize,
    /// Number of pages of the filtered set.
    pub page_count: usize,
}

impl RenderInstruction {
    /// Returns true when there is nothing to show ("no results").
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }
}

impl Model {
    /// Applies `action` and returns the new render instruction.
    ///
    /// ```rust
    /// use question_browser::browser::{Action, Model};
    /// use question_browser::config::Config;
    /// use question_browser::item::Question;
    ///
    /// let items = (0..30).map(|i| Question::new(i, "clean", format!("q{}", i))).collect();
    /// let mut browser = Model::with_items(Config::default(), items);
    ///
    /// let render = browser.apply(Action::GoToPage(3));
    /// assert_eq!(render.shown_count, 6);
    /// assert!(!render.plan.next_enabled);
    /// ```
    pub fn apply(&mut self, action: Action) -> RenderInstruction {
        match action {
            Action::SetCategory(category) => self.set_category(category),
            Action::SetSearch(term) => self.set_search(&term),
            Action::GoToPage(n) => self.go_to_page(n),
            Action::NextPage => self.next_page(),
            Action::PrevPage => self.prev_page(),
        }
    }

    /// Selects a category and returns to page 1.
    ///
    /// A category named `all` selects [`Category::All`].
    pub fn set_category(&mut self, category: impl Into<Category>) -> RenderInstruction {
        self.category = category.into().normalized();
        tracing::debug!(category = %self.category, "category selected");
        self.paginator.reset();
        self.recompute();
        self.render()
    }

    /// Replaces the search term and returns to page 1.
    ///
    /// The term is lower-cased here; the typed text is kept for display.
    pub fn set_search(&mut self, term: &str) -> RenderInstruction {
        self.search_input = term.to_string();
        self.search_term = term.to_lowercase();
        tracing::debug!(term = %self.search_term, "search term changed");
        self.paginator.reset();
        self.recompute();
        self.render()
    }

    /// Jumps to page `n` if it exists; otherwise nothing changes.
    pub fn go_to_page(&mut self, n: usize) -> RenderInstruction {
        self.recompute();
        if self.paginator.go_to_page(n) {
            tracing::debug!(page = n, "page changed");
        } else {
            tracing::trace!(page = n, pages = self.paginator.total_pages, "page request ignored");
        }
        self.render()
    }

    /// Advances one page; no-op on the last page.
    pub fn next_page(&mut self) -> RenderInstruction {
        self.recompute();
        self.paginator.next_page();
        self.render()
    }

    /// Goes back one page; no-op on the first page.
    pub fn prev_page(&mut self) -> RenderInstruction {
        self.recompute();
        self.paginator.prev_page();
        self.render()
    }

    /// Routes a key to the paginator's bindings; returns false if it is not a
    /// page key.
    pub(super) fn page_key(&mut self, key_msg: &KeyMsg) -> bool {
        self.recompute();
        let before = self.paginator.page;
        if !self.paginator.handle_key(key_msg) {
            return false;
        }
        if self.paginator.page != before {
            tracing::debug!(page = self.paginator.page, "page changed");
        }
        true
    }

    /// Selects the next category in selector order, wrapping around.
    pub fn next_category(&mut self) -> RenderInstruction {
        let categories = self.categories();
        let index = self.category_index(&categories);
        let next = categories[(index + 1) % categories.len()].clone();
        self.set_category(next)
    }

    /// Selects the previous category in selector order, wrapping around.
    pub fn prev_category(&mut self) -> RenderInstruction {
        let categories = self.categories();
        let index = self.category_index(&categories);
        let prev = categories[(index + categories.len() - 1) % categories.len()].clone();
        self.set_category(prev)
    }

    /// Picks a question uniformly from the filtered set.
    pub fn pick_random(&mut self) -> RandomPick {
        match self.picker.pick(&self.filtered) {
            Some(question) => {
                tracing::debug!(id = question.id, "random question picked");
                RandomPick::Picked(question.clone())
            }
            None => RandomPick::NoneAvailable,
        }
    }

    /// Returns the render instruction for the current state without changing it.
    pub fn render(&self) -> RenderInstruction {
        let page_items =
            paginator::paginate(&self.filtered, self.paginator.per_page, self.paginator.page)
                .to_vec();
        RenderInstruction {
            shown_count: page_items.len(),
            total_count: self.filtered.len(),
            page_items,
            plan: self.paginator.plan(),
            page: self.paginator.page,
            page_count: self.paginator.total_pages,
        }
    }

    /// Recomputes the filtered set and page count, clamping the current page.
    pub(super) fn recompute(&mut self) {
        self.filtered = filter::filter(self.store.items(), &self.category, &self.search_term)
            .into_iter()
            .cloned()
            .collect();
        self.paginator.set_total_items(self.filtered.len());
        tracing::trace!(
            filtered = self.filtered.len(),
            pages = self.paginator.total_pages,
            page = self.paginator.page,
            "derived state recomputed"
        );
    }

    // Position of the active category in the selector; unknown tags count as `all`.
    fn category_index(&self, categories: &[Category]) -> usize {
        categories
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0)
    }
}
