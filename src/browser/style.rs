//! Styles for the terminal view of the question browser.
//!
//! Every visible element of the browser has its own lipgloss [`Style`] in
//! [`BrowserStyles`]. Replace individual fields to restyle one element.
//!
//! ## Style Groups
//!
//! - **Header**: title bar, inactive and active category tabs, search prompt
//! - **Cards**: category tag and question text
//! - **States**: loading, load failure and empty-result messages
//! - **Pagination**: container, page numbers, current page, gaps and arrows
//! - **Random panel**: heading and body
//! - **Footer**: status count and help line
//!
//! ## Adaptive Colors
//!
//! The defaults use `AdaptiveColor`, so the same styles read well on light
//! and dark terminals. Disabled arrows and gap markers share the dimmest
//! color; the current page and active tab share the highlight.
//!
//! ```rust
//! use question_browser::browser::BrowserStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = BrowserStyles::default();
//! styles.active_page = Style::new().foreground(Color::from("205")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Unicode ellipsis (…) used for truncated question text.
pub const ELLIPSIS: &str = "…";

/// Separator between entries of the help line.
pub const HELP_SEPARATOR: &str = " • ";

/// Styling for every element of the browser view.
#[derive(Debug, Clone)]
pub struct BrowserStyles {
    /// Widget title.
    pub title: Style,
    /// Inactive category tab.
    pub tab: Style,
    /// Selected category tab.
    pub active_tab: Style,
    /// "Search:" prompt.
    pub search_prompt: Style,
    /// Category tag on a question card.
    pub card_category: Style,
    /// Question text on a card.
    pub card_text: Style,
    /// Empty-state message.
    pub no_items: Style,
    /// Loading message.
    pub loading: Style,
    /// Load failure message.
    pub error: Style,
    /// "Showing X of Y" line.
    pub status: Style,
    /// Container of the page selector.
    pub pagination: Style,
    /// Selectable page number.
    pub page: Style,
    /// Current page number.
    pub active_page: Style,
    /// Gap marker in the page selector.
    pub ellipsis: Style,
    /// Enabled previous/next arrow.
    pub arrow: Style,
    /// Disabled previous/next arrow.
    pub disabled_arrow: Style,
    /// Random panel heading.
    pub random_title: Style,
    /// Random panel body.
    pub random_text: Style,
    /// Help line.
    pub help: Style,
}

impl Default for BrowserStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let very_subdued_color = AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        };
        let highlight = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            tab: Style::new().foreground(subdued_color.clone()),
            active_tab: Style::new().foreground(highlight.clone()).bold(true),
            search_prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            card_category: Style::new().foreground(AdaptiveColor {
                Light: "#847A85",
                Dark: "#979797",
            }),
            card_text: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            loading: Style::new().foreground(AdaptiveColor {
                Light: "#8E8E8E",
                Dark: "#747373",
            }),
            error: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
            status: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            pagination: Style::new().padding_left(2),
            page: Style::new().foreground(subdued_color.clone()),
            active_page: Style::new().foreground(highlight).bold(true),
            ellipsis: Style::new().foreground(very_subdued_color.clone()),
            arrow: Style::new().foreground(subdued_color.clone()),
            disabled_arrow: Style::new().foreground(very_subdued_color),
            random_title: Style::new().bold(true),
            random_text: Style::new().padding_left(2),
            help: Style::new().foreground(subdued_color),
        }
    }
}
