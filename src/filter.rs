//! The filter engine: category and free-text constraints over the question set.
//!
//! Both constraints are conjunctive. The result keeps the input order; nothing
//! is sorted or ranked.

use crate::item::{Category, Question};

/// Returns true if `item` passes both the category and the search constraint.
///
/// An empty `search_term` places no text constraint. Otherwise the term must
/// occur in the item's text, ignoring case.
pub fn matches(item: &Question, category: &Category, search_term: &str) -> bool {
    category.accepts(&item.category) && contains_ignore_case(&item.text, search_term)
}

/// Filters `items` by category and search term, preserving their order.
///
/// # Examples
///
/// ```rust
/// use question_browser::filter::filter;
/// use question_browser::item::{Category, Question};
///
/// let items = vec![
///     Question::new(0, "funny", "Cats or dogs?"),
///     Question::new(1, "clean", "Dogs in sweaters: yes or no?"),
///     Question::new(2, "funny", "Best dog name?"),
/// ];
///
/// let dogs: Vec<usize> = filter(&items, &Category::from("funny"), "DOG")
///     .iter()
///     .map(|q| q.id)
///     .collect();
/// assert_eq!(dogs, vec![0, 2]);
///
/// assert_eq!(filter(&items, &Category::All, "").len(), 3);
/// ```
pub fn filter<'a>(items: &'a [Question], category: &Category, search_term: &str) -> Vec<&'a Question> {
    let needle = search_term.to_lowercase();
    items
        .iter()
        .filter(|item| category.accepts(&item.category) && contains_lowered(&item.text, &needle))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    contains_lowered(haystack, &needle.to_lowercase())
}

fn contains_lowered(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Question> {
        vec![
            Question::new(0, "clean", "What is your favourite Zebra fact?"),
            Question::new(1, "funny", "Would you rather fight a duck?"),
            Question::new(2, "clean", "Tea or coffee?"),
            Question::new(3, "deep", "What are you afraid of?"),
            Question::new(4, "funny", "What is the funniest word?"),
        ]
    }

    #[test]
    fn test_no_constraints_returns_everything_in_order() {
        let items = items();
        let ids: Vec<usize> = filter(&items, &Category::All, "").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_category_exact_match() {
        let items = items();
        let ids: Vec<usize> = filter(&items, &Category::from("clean"), "")
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(filter(&items, &Category::from("Clean"), "").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = items();
        let ids: Vec<usize> = filter(&items, &Category::All, "wHaT").iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 3, 4]);
    }

    #[test]
    fn test_constraints_are_conjunctive() {
        let items = items();
        let ids: Vec<usize> = filter(&items, &Category::from("funny"), "what")
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_no_match() {
        let items = items();
        assert!(filter(&items, &Category::All, "walrus").is_empty());
        assert!(filter(&items, &Category::from("missing"), "").is_empty());
        assert!(filter(&[], &Category::All, "").is_empty());
    }

    #[test]
    fn test_result_agrees_with_predicate() {
        let items = items();
        let categories = [
            Category::All,
            Category::from("clean"),
            Category::from("funny"),
            Category::from("deep"),
            Category::from("nope"),
        ];
        let terms = ["", "what", "ZEBRA", "o", "?", "xyz"];

        for category in &categories {
            for term in terms {
                let result = filter(&items, category, term);
                for item in &items {
                    let included = result.iter().any(|q| q.id == item.id);
                    assert_eq!(
                        included,
                        matches(item, category, term),
                        "item {} category {:?} term {:?}",
                        item.id,
                        category,
                        term
                    );
                }
                let ids: Vec<usize> = result.iter().map(|q| q.id).collect();
                let mut sorted = ids.clone();
                sorted.sort_unstable();
                assert_eq!(ids, sorted, "order must be preserved");
            }
        }
    }
}
