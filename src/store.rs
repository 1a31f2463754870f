//! The item store: the full loaded question set and its category list.
//!
//! The store is filled once at startup. Loading from JSON is fallible, but the
//! store never ends up half-filled: a failed load leaves it empty.

use crate::error::{Error, Result};
use crate::item::{Collection, Question};
use std::collections::BTreeSet;
use std::path::Path;

/// Holds every loaded question for the session.
///
/// # Examples
///
/// ```rust
/// use question_browser::store::Store;
/// use question_browser::item::Question;
///
/// let mut store = Store::new();
/// store.load(vec![
///     Question::new(0, "funny", "Cats or dogs?"),
///     Question::new(1, "clean", "Favourite season?"),
///     Question::new(2, "funny", "Worst pun you know?"),
/// ]);
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.categories(), vec!["clean", "funny"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Store {
    items: Vec<Question>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `items`.
    pub fn with_items(items: Vec<Question>) -> Self {
        Self { items }
    }

    /// Replaces the store's contents with `items`.
    pub fn load(&mut self, items: Vec<Question>) {
        self.items = items;
    }

    /// Parses a JSON question source and replaces the store's contents.
    ///
    /// On error the store is left empty.
    ///
    /// ```rust
    /// use question_browser::store::Store;
    ///
    /// let mut store = Store::new();
    /// let n = store.load_json(r#"{"items":[{"category":"clean","text":"Tea or coffee?"}]}"#).unwrap();
    /// assert_eq!(n, 1);
    ///
    /// assert!(store.load_json("not json").is_err());
    /// assert!(store.is_empty());
    /// ```
    pub fn load_json(&mut self, source: &str) -> Result<usize> {
        self.items.clear();
        let collection: Collection = serde_json::from_str(source)?;
        self.items = collection.into_questions();
        Ok(self.items.len())
    }

    /// Reads and parses a JSON question source from disk.
    ///
    /// On error the store is left empty.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        self.items.clear();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        self.load_json(&source)
    }

    /// Loads from a fallible source, logging and keeping an empty store on failure.
    ///
    /// This is the recovery boundary for load failures: the caller always gets
    /// a usable store, possibly empty.
    pub fn load_or_empty(&mut self, result: Result<Vec<Question>>) -> usize {
        match result {
            Ok(items) => {
                self.load(items);
                tracing::info!(count = self.items.len(), "questions loaded");
            }
            Err(err) => {
                self.items.clear();
                tracing::warn!(error = %err, "failed to load questions; continuing with an empty set");
            }
        }
        self.items.len()
    }

    /// Returns the distinct category tags present, sorted lexicographically.
    pub fn categories(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|q| q.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Returns every loaded question in load order.
    pub fn items(&self) -> &[Question] {
        &self.items
    }

    /// Looks up a question by id.
    pub fn get(&self, id: usize) -> Option<&Question> {
        self.items.iter().find(|q| q.id == id)
    }

    /// Number of loaded questions.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reads a JSON question source from disk without touching any store.
pub fn read_questions(path: impl AsRef<Path>) -> Result<Vec<Question>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let collection: Collection = serde_json::from_str(&source)?;
    Ok(collection.into_questions())
}
