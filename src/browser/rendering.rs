//! Terminal rendering of the browser state.
//!
//! The view is one consumer of [`RenderInstruction`]: it draws whatever the
//! controller computed and never filters or paginates on its own.
//!
//! ## Layout
//!
//! Sections are stacked top to bottom and separated by a blank line; empty
//! sections are skipped:
//!
//! ```text
//!  Questions
//! [All Questions] Clean Deep talk Funny
//!
//! Funny
//!   Best dog name?
//! ...
//!
//! Showing 12 of 30 questions
//!
//!   ‹ [1] 2 3 ›
//!
//! ←/h prev page • →/l next page • tab category • / search • r random • q quit
//! ```
//!
//! Card text is cut to the configured width with [`truncate`]. The page
//! selector line comes from the paginator's [`view_with`] and is hidden when
//! there is at most one page.
//!
//! [`view_with`]: crate::paginator::Model::view_with

use super::actions::RenderInstruction;
use super::model::{InputMode, LoadState, Model, RandomPick};
use super::style::{ELLIPSIS, HELP_SEPARATOR};
use crate::item::Question;
use crate::key::{self, KeyMap as _};
use crate::paginator::Part;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown when the filtered set is empty.
pub const NO_RESULTS: &str = "No questions found. Try a different search or category.";

/// Heading of the random panel when a question was picked.
pub const RANDOM_TITLE: &str = "Random Question";

/// Heading of the random panel when nothing can be picked.
pub const NONE_AVAILABLE_TITLE: &str = "No Questions Available";

/// Body of the random panel when nothing can be picked.
pub const NONE_AVAILABLE_TEXT: &str =
    "There are no questions that match your current filter or search criteria.";

// Indent of card text under its category tag.
const CARD_INDENT: usize = 2;

impl Model {
    /// Renders the title and the category selector.
    pub(super) fn view_header(&self) -> String {
        let title = self.styles.title.clone().render("Questions");
        let tabs = self
            .categories()
            .iter()
            .map(|category| {
                let label = category.label(&self.config.all_label);
                if *category == self.category {
                    self.styles.active_tab.clone().inline(true).render(&format!("[{}]", label))
                } else {
                    self.styles.tab.clone().inline(true).render(&label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}\n{}", title, tabs)
    }

    /// Renders the search line; empty when no search is active or being typed.
    pub(super) fn view_search(&self) -> String {
        let prompt = self.styles.search_prompt.clone().inline(true).render("Search:");
        match self.mode {
            InputMode::Searching => format!("{} {}_", prompt, self.search_input),
            InputMode::Browsing if !self.search_term.is_empty() => {
                format!("{} {}", prompt, self.search_input)
            }
            InputMode::Browsing => String::new(),
        }
    }

    /// Renders the question cards, or the loading/failure/empty message.
    pub(super) fn view_items(&self, render: &RenderInstruction) -> String {
        let mut sections = Vec::new();
        match &self.load_state {
            LoadState::Loading => {
                return self.styles.loading.clone().render("Loading questions…");
            }
            LoadState::Failed(reason) => {
                sections.push(
                    self.styles
                        .error
                        .clone()
                        .render(&format!("Could not load questions: {}", reason)),
                );
            }
            LoadState::Ready => {}
        }

        if render.is_empty() {
            sections.push(self.styles.no_items.clone().render(NO_RESULTS));
        } else {
            let width = self.config.width.saturating_sub(CARD_INDENT);
            sections.extend(render.page_items.iter().map(|q| self.view_card(q, width)));
        }
        sections.join("\n")
    }

    fn view_card(&self, question: &Question, width: usize) -> String {
        let tag = self.styles.card_category.clone().render(&question.label());
        let text = self
            .styles
            .card_text
            .clone()
            .render(&truncate(&question.text, width));
        format!("{}\n{}{}", tag, " ".repeat(CARD_INDENT), text)
    }

    /// Renders "Showing X of Y questions".
    pub(super) fn view_status(&self, render: &RenderInstruction) -> String {
        self.styles.status.clone().render(&format!(
            "Showing {} of {} questions",
            render.shown_count, render.total_count
        ))
    }

    /// Renders the page selector; empty for a single page or none.
    pub(super) fn view_pagination(&self, render: &RenderInstruction) -> String {
        if render.page_count <= 1 {
            return String::new();
        }
        let styles = &self.styles;
        let line = self.paginator.view_with(|part| match part {
            Part::Prev { label, enabled } | Part::Next { label, enabled } => {
                let style = if enabled {
                    &styles.arrow
                } else {
                    &styles.disabled_arrow
                };
                style.clone().inline(true).render(label)
            }
            Part::Page {
                number,
                current: true,
            } => styles
                .active_page
                .clone()
                .inline(true)
                .render(&format!("[{}]", number)),
            Part::Page { number, .. } => styles.page.clone().inline(true).render(&number.to_string()),
            Part::Ellipsis(label) => styles.ellipsis.clone().inline(true).render(label),
        });
        styles.pagination.clone().render(&line)
    }

    /// Renders the random question panel; empty when it is closed.
    pub(super) fn view_random(&self) -> String {
        let Some(pick) = &self.random else {
            return String::new();
        };
        let hint_bindings: Vec<&key::Binding> = match pick {
            RandomPick::Picked(_) => vec![&self.keymap.random, &self.keymap.close_random],
            RandomPick::NoneAvailable => vec![&self.keymap.close_random],
        };
        let hint = self
            .styles
            .help
            .clone()
            .render(&key::short_help_line(&hint_bindings, HELP_SEPARATOR));
        let (title, body) = match pick {
            RandomPick::Picked(q) => (RANDOM_TITLE, q.text.as_str()),
            RandomPick::NoneAvailable => (NONE_AVAILABLE_TITLE, NONE_AVAILABLE_TEXT),
        };
        format!(
            "{}\n{}\n{}",
            self.styles.random_title.clone().render(title),
            self.styles.random_text.clone().render(body),
            hint
        )
    }

    /// Renders the contextual help line.
    pub(super) fn view_help(&self) -> String {
        let bindings = self.short_help();
        self.styles
            .help
            .clone()
            .render(&key::short_help_line(&bindings, HELP_SEPARATOR))
    }
}

/// Cuts `text` to at most `width` display columns, ending in an ellipsis when cut.
///
/// ```rust
/// use question_browser::browser::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("a longer question", 8), "a longe…");
/// assert_eq!(truncate("日本語のテキスト", 7), "日本語…");
/// ```
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let limit = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out
}
