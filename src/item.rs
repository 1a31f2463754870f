//! Question and category types, plus the JSON wire format they load from.
//!
//! A source document looks like this:
//!
//! ```json
//! { "items": [ { "category": "deep-talk", "text": "What are you grateful for?" } ] }
//! ```
//!
//! The array may also be named `questions`. Each record may carry an explicit
//! `id`; records without one are numbered by their position in the array.

use serde::Deserialize;
use std::fmt;

/// Sentinel category tag meaning "no filter".
pub const ALL: &str = "all";

/// A single question tagged with a category.
///
/// Questions are immutable once loaded and are owned by the
/// [`Store`](crate::store::Store) for the lifetime of the session.
///
/// # Examples
///
/// ```rust
/// use question_browser::item::Question;
///
/// let q = Question::new(0, "deep-talk", "What are you grateful for?");
/// assert_eq!(q.category, "deep-talk");
/// assert_eq!(q.label(), "Deep talk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Positional or explicit identifier.
    pub id: usize,
    /// Category tag.
    pub category: String,
    /// The question text.
    pub text: String,
}

impl Question {
    /// Creates a question.
    pub fn new(id: usize, category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            text: text.into(),
        }
    }

    /// Returns the display label of this question's category.
    pub fn label(&self) -> String {
        category_label(&self.category)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A category filter: either the `all` sentinel or a concrete tag.
///
/// Parsing the string `"all"` always yields [`Category::All`], so a tag
/// literally named `all` cannot be selected on its own.
///
/// # Examples
///
/// ```rust
/// use question_browser::item::Category;
///
/// assert_eq!(Category::from("all"), Category::All);
/// assert_eq!(Category::from("clean"), Category::Named("clean".to_string()));
/// assert_eq!(Category::from("clean").to_string(), "clean");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No category constraint.
    #[default]
    All,
    /// Only questions with exactly this tag.
    ///
    /// The tag must not be `all`. Build categories with [`Category::from`],
    /// or pass hand-built values through [`Category::normalized`], to keep
    /// that reserved name mapped to [`Category::All`].
    Named(String),
}

impl Category {
    /// Maps `Named("all")` to [`Category::All`]; any other value is unchanged.
    ///
    /// ```rust
    /// use question_browser::item::Category;
    ///
    /// assert_eq!(Category::Named("all".to_string()).normalized(), Category::All);
    /// assert_eq!(Category::from("deep").normalized(), Category::from("deep"));
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            Category::Named(tag) => Category::from(tag),
            Category::All => Category::All,
        }
    }

    /// Returns true for the `all` sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Returns true if a question tagged `tag` passes this filter.
    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => name == tag,
        }
    }

    /// Returns the display label, using `all_label` for the sentinel.
    pub fn label(&self, all_label: &str) -> String {
        match self {
            Category::All => all_label.to_string(),
            Category::Named(name) => category_label(name),
        }
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        if tag == ALL {
            Category::All
        } else {
            Category::Named(tag.to_string())
        }
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        if tag == ALL {
            Category::All
        } else {
            Category::Named(tag)
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str(ALL),
            Category::Named(name) => f.write_str(name),
        }
    }
}

/// Turns a category tag into a display label.
///
/// The first character is upper-cased and the first hyphen becomes a space.
///
/// ```rust
/// use question_browser::item::category_label;
///
/// assert_eq!(category_label("clean"), "Clean");
/// assert_eq!(category_label("deep-talk"), "Deep talk");
/// assert_eq!(category_label("would-you-rather"), "Would you-rather");
/// assert_eq!(category_label(""), "");
/// ```
pub fn category_label(tag: &str) -> String {
    let mut chars = tag.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut label: String = first.to_uppercase().collect();
    label.push_str(&chars.as_str().replacen('-', " ", 1));
    label
}

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(default)]
    id: Option<usize>,
    category: String,
    text: String,
}

/// The top-level shape of a question source document.
#[derive(Debug, Deserialize)]
pub(crate) struct Collection {
    #[serde(alias = "questions")]
    items: Vec<Record>,
}

impl Collection {
    /// Converts the records into questions, numbering unlabelled ones by position.
    pub(crate) fn into_questions(self) -> Vec<Question> {
        self.items
            .into_iter()
            .enumerate()
            .map(|(index, record)| Question {
                id: record.id.unwrap_or(index),
                category: record.category,
                text: record.text,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_sentinel() {
        assert_eq!(Category::from("all"), Category::All);
        assert_eq!(Category::from(String::from("all")), Category::All);
        assert!(Category::default().is_all());
    }

    #[test]
    fn test_normalized_maps_reserved_tag() {
        assert_eq!(Category::Named(ALL.to_string()).normalized(), Category::All);
        assert_eq!(Category::All.normalized(), Category::All);
        assert_eq!(
            Category::Named("funny".to_string()).normalized(),
            Category::Named("funny".to_string())
        );
    }

    #[test]
    fn test_category_accepts() {
        let clean = Category::from("clean");
        assert!(clean.accepts("clean"));
        assert!(!clean.accepts("Clean"));
        assert!(!clean.accepts("deep"));
        assert!(Category::All.accepts("anything"));
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::All.label("All Questions"), "All Questions");
        assert_eq!(Category::from("funny").label("All"), "Funny");
        assert_eq!(category_label("ünicode-tag"), "Ünicode tag");
    }

    #[test]
    fn test_collection_items_key() {
        let json = r#"{"items":[{"category":"a","text":"one"},{"category":"b","text":"two"}]}"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        let questions = collection.into_questions();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0], Question::new(0, "a", "one"));
        assert_eq!(questions[1], Question::new(1, "b", "two"));
    }

    #[test]
    fn test_collection_questions_alias_and_explicit_ids() {
        let json = r#"{"questions":[{"id":42,"category":"a","text":"one","extra":true},{"category":"b","text":"two"}]}"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        let questions = collection.into_questions();
        assert_eq!(questions[0].id, 42);
        assert_eq!(questions[1].id, 1);
    }

    #[test]
    fn test_collection_rejects_missing_text() {
        let json = r#"{"items":[{"category":"a"}]}"#;
        assert!(serde_json::from_str::<Collection>(json).is_err());
    }
}
