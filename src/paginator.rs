//! Pagination: page slicing, page counts and the compact page-selector plan.
//!
//! Pages are 1-based throughout. The free functions are pure and never fail;
//! [`Model`] wraps them with navigation state and key handling for use inside
//! a bubbletea-rs application.
//!
//! The page-selector plan always shows the first and last page and a small
//! window around the current one, with an ellipsis standing in for each gap:
//!
//! ```text
//! ‹ 1 … 4 [5] 6 … 10 ›
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// Default number of page tokens shown before ellipses kick in.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Smallest usable window: first page, current page, last page.
const MIN_WINDOW_SIZE: usize = 3;

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A selectable page number (1-based).
    Page(usize),
    /// A gap of one or more pages.
    Ellipsis,
}

/// The page selector to render: page tokens plus previous/next state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    /// Page numbers and ellipses in display order.
    pub tokens: Vec<PageToken>,
    /// The page the plan was built for.
    pub current: usize,
    /// Whether "previous" can be used.
    pub prev_enabled: bool,
    /// Whether "next" can be used.
    pub next_enabled: bool,
}

impl Plan {
    /// Returns only the page numbers, in order.
    pub fn pages(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter_map(|t| match t {
                PageToken::Page(n) => Some(*n),
                PageToken::Ellipsis => None,
            })
            .collect()
    }

    /// Returns true if the plan has no tokens (no pages at all).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Returns the number of pages needed for `len` items, 0 for no items.
///
/// ```rust
/// use question_browser::paginator::page_count;
///
/// assert_eq!(page_count(0, 12), 0);
/// assert_eq!(page_count(9, 12), 1);
/// assert_eq!(page_count(30, 12), 3);
/// ```
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Returns the `[start, end)` bounds of `page` within `len` items.
///
/// Out-of-range pages (including 0) yield an empty range at `len`.
pub fn slice_bounds(len: usize, page_size: usize, page: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    if page == 0 {
        return (len, len);
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

/// Returns the items on `page`, or an empty slice if the page does not exist.
///
/// ```rust
/// use question_browser::paginator::paginate;
///
/// let items: Vec<u32> = (0..30).collect();
/// assert_eq!(paginate(&items, 12, 3), &items[24..30]);
/// assert!(paginate(&items, 12, 4).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let (start, end) = slice_bounds(items.len(), page_size, page);
    &items[start..end]
}

/// Builds the page-selector plan for `current` out of `page_count` pages.
///
/// With `page_count <= window_size` every page is listed. Otherwise the plan
/// holds page 1, a window around `current`, the last page, and an ellipsis
/// for each gap. `window_size` below 3 is treated as 3.
///
/// ```rust
/// use question_browser::paginator::{pagination_plan, PageToken::{Ellipsis, Page}};
///
/// let plan = pagination_plan(5, 10, 5);
/// assert_eq!(plan.tokens, vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]);
/// assert!(plan.prev_enabled && plan.next_enabled);
///
/// let plan = pagination_plan(3, 3, 5);
/// assert_eq!(plan.pages(), vec![1, 2, 3]);
/// assert!(!plan.next_enabled);
/// ```
pub fn pagination_plan(current: usize, page_count: usize, window_size: usize) -> Plan {
    let window_size = window_size.max(MIN_WINDOW_SIZE);
    let mut plan = Plan {
        tokens: Vec::new(),
        current,
        prev_enabled: current > 1,
        next_enabled: current < page_count,
    };
    if page_count == 0 {
        return plan;
    }

    if page_count <= window_size {
        plan.tokens = (1..=page_count).map(PageToken::Page).collect();
        return plan;
    }

    let current = current.clamp(1, page_count);
    let interior = window_size - MIN_WINDOW_SIZE;
    let before = interior / 2;
    let after = interior - before;
    let start = current.saturating_sub(before).max(2);
    let end = (current + after).min(page_count - 1);

    plan.tokens.push(PageToken::Page(1));
    if start > 2 {
        plan.tokens.push(PageToken::Ellipsis);
    }
    plan.tokens.extend((start..=end).map(PageToken::Page));
    if end < page_count - 1 {
        plan.tokens.push(PageToken::Ellipsis);
    }
    plan.tokens.push(PageToken::Page(page_count));
    plan
}

/// One drawn element of the page selector, handed to [`Model::view_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part<'a> {
    /// The previous-page arrow.
    Prev {
        /// Arrow label.
        label: &'a str,
        /// Whether there is a previous page.
        enabled: bool,
    },
    /// A page number.
    Page {
        /// The page, 1-based.
        number: usize,
        /// Whether this is the current page.
        current: bool,
    },
    /// A gap marker.
    Ellipsis(&'a str),
    /// The next-page arrow.
    Next {
        /// Arrow label.
        label: &'a str,
        /// Whether there is a next page.
        enabled: bool,
    },
}

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Jump to the first page.
    pub first_page: key::Binding,
    /// Jump to the last page.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// A paginator holding the current page and the page count.
///
/// The current page stays within `[1, max(1, total_pages)]`: recounting the
/// items clamps it, and navigation outside the range is ignored.
///
/// # Examples
///
/// ```rust
/// use question_browser::paginator::Model;
///
/// let mut paginator = Model::new().with_per_page(12).with_total_items(30);
/// assert_eq!(paginator.total_pages, 3);
/// assert!(paginator.on_first_page());
///
/// paginator.next_page();
/// assert_eq!(paginator.page, 2);
///
/// assert!(!paginator.go_to_page(7));
/// assert_eq!(paginator.page, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The current page, 1-based.
    pub page: usize,
    /// Items per page, at least 1.
    pub per_page: usize,
    /// Number of pages; 0 when there are no items.
    pub total_pages: usize,
    /// Page tokens shown before ellipses are used, at least 3.
    pub window_size: usize,
    /// Label for the previous-page control.
    pub prev_label: String,
    /// Label for the next-page control.
    pub next_label: String,
    /// Label for a gap in the page list.
    pub ellipsis: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1,
            total_pages: 0,
            window_size: DEFAULT_WINDOW_SIZE,
            prev_label: "‹".to_string(),
            next_label: "›".to_string(),
            ellipsis: "…".to_string(),
            keymap: PaginatorKeyMap::default(),
        }
    }
}

impl Model {
    /// Creates a paginator with default settings and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items per page (builder pattern). Clamped to at least 1.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.set_per_page(per_page);
        self
    }

    /// Sets the total number of items (builder pattern).
    pub fn with_total_items(mut self, items: usize) -> Self {
        self.set_total_items(items);
        self
    }

    /// Sets the page window size (builder pattern). Clamped to at least 3.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size.max(MIN_WINDOW_SIZE);
        self
    }

    /// Sets the number of items per page. Clamped to at least 1.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    /// Recomputes the page count for `items` and clamps the current page.
    pub fn set_total_items(&mut self, items: usize) {
        self.total_pages = page_count(items, self.per_page);
        self.page = self.page.clamp(1, self.last_page());
    }

    /// Returns the last valid page: `max(1, total_pages)`.
    pub fn last_page(&self) -> usize {
        self.total_pages.max(1)
    }

    /// Returns the `[start, end)` bounds of the current page within `length` items.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        slice_bounds(length, self.per_page, self.page)
    }

    /// Returns how many of `total_items` fall on the current page.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Moves to the previous page. No-op on the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Moves to the next page. No-op on the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Moves to page `n` if it exists and returns whether the page changed.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        if n >= 1 && n <= self.total_pages && n != self.page {
            self.page = n;
            true
        } else {
            false
        }
    }

    /// Resets to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Returns true on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Returns true on the last page, or when there are no pages.
    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Builds the page-selector plan for the current state.
    pub fn plan(&self) -> Plan {
        pagination_plan(self.page, self.total_pages, self.window_size)
    }

    /// Handles a navigation key and returns whether it was one of the page
    /// bindings. Bound keys are consumed even when the page cannot move.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> bool {
        if self.keymap.next_page.matches(key_msg) {
            self.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page();
        } else if self.keymap.first_page.matches(key_msg) {
            self.go_to_page(1);
        } else if self.keymap.last_page.matches(key_msg) {
            self.go_to_page(self.total_pages);
        } else {
            return false;
        }
        true
    }

    /// Handles navigation keys.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
    }

    /// Renders the page selector as plain text, e.g. `‹ 1 … 4 [5] 6 … 10 ›`.
    /// Empty when there are no pages.
    pub fn view(&self) -> String {
        self.view_with(|part| match part {
            Part::Prev { label, .. } | Part::Next { label, .. } => label.to_string(),
            Part::Page { number, current: true } => format!("[{}]", number),
            Part::Page { number, .. } => number.to_string(),
            Part::Ellipsis(label) => label.to_string(),
        })
    }

    /// Renders the page selector, drawing each [`Part`] with `draw` and
    /// joining them with spaces. Empty when there are no pages.
    ///
    /// ```rust
    /// use question_browser::paginator::{Model, Part};
    ///
    /// let mut paginator = Model::new().with_per_page(1).with_total_items(3);
    /// paginator.go_to_page(3);
    /// let line = paginator.view_with(|part| match part {
    ///     Part::Page { number, current: true } => format!("<{}>", number),
    ///     Part::Page { number, .. } => number.to_string(),
    ///     Part::Next { enabled: false, .. } => "-".to_string(),
    ///     Part::Prev { label, .. } | Part::Next { label, .. } => label.to_string(),
    ///     Part::Ellipsis(label) => label.to_string(),
    /// });
    /// assert_eq!(line, "‹ 1 2 <3> -");
    /// ```
    pub fn view_with<F>(&self, mut draw: F) -> String
    where
        F: FnMut(Part<'_>) -> String,
    {
        if self.total_pages == 0 {
            return String::new();
        }
        let plan = self.plan();
        let mut parts = Vec::with_capacity(plan.tokens.len() + 2);
        parts.push(draw(Part::Prev {
            label: &self.prev_label,
            enabled: plan.prev_enabled,
        }));
        for token in &plan.tokens {
            parts.push(match *token {
                PageToken::Page(number) => draw(Part::Page {
                    number,
                    current: number == self.page,
                }),
                PageToken::Ellipsis => draw(Part::Ellipsis(&self.ellipsis)),
            });
        }
        parts.push(draw(Part::Next {
            label: &self.next_label,
            enabled: plan.next_enabled,
        }));
        parts.join(" ")
    }
}
