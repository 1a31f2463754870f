use super::*;
use crate::config::Config;
use crate::error::Error;
use crate::item::{Category, Question};
use crate::paginator::PageToken;
use crate::picker::Picker;
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::io::Write;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn numbered(count: usize, category: &str) -> Vec<Question> {
    (0..count)
        .map(|i| Question::new(i, category, format!("question number {}", i)))
        .collect()
}

// 9 clean, 5 funny.
fn mixed() -> Vec<Question> {
    (0..14)
        .map(|i| {
            let category = if i < 9 { "clean" } else { "funny" };
            Question::new(i, category, format!("{} question {}", category, i))
        })
        .collect()
}

fn plain(model: &Model) -> String {
    strip_ansi_escapes::strip_str(model.view())
}

#[test]
fn test_single_page_category() {
    let mut browser = Model::with_items(Config::default(), mixed());
    let render = browser.set_category("clean");

    assert_eq!(render.total_count, 9);
    assert_eq!(render.shown_count, 9);
    assert_eq!(render.page_count, 1);
    assert_eq!(render.plan.pages(), vec![1]);
    assert!(!render.plan.prev_enabled);
    assert!(!render.plan.next_enabled);
    assert!(render.page_items.iter().all(|q| q.category == "clean"));
}

#[test]
fn test_last_page_of_thirty() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));
    let render = browser.go_to_page(3);

    assert_eq!(render.page, 3);
    assert_eq!(render.shown_count, 6);
    assert_eq!(
        render.page_items.iter().map(|q| q.id).collect::<Vec<_>>(),
        (24..30).collect::<Vec<_>>()
    );
    assert_eq!(render.plan.pages(), vec![1, 2, 3]);
    assert!(render.plan.prev_enabled);
    assert!(!render.plan.next_enabled);
}

#[test]
fn test_empty_store() {
    let mut browser = Model::with_items(Config::default(), Vec::new());

    let render = browser.render();
    assert!(render.is_empty());
    assert_eq!(render.page_count, 0);
    assert!(render.plan.is_empty());
    assert_eq!(browser.pick_random(), RandomPick::NoneAvailable);
    assert!(plain(&browser).contains(NO_RESULTS));
    assert!(plain(&browser).contains("Showing 0 of 0 questions"));
}

#[test]
fn test_search_without_matches() {
    let mut browser = Model::with_items(Config::default(), mixed());
    let render = browser.set_search("zebra");

    assert_eq!(render.total_count, 0);
    assert_eq!(render.page_count, 0);
    assert!(render.plan.tokens.is_empty());
    assert!(!render.plan.prev_enabled && !render.plan.next_enabled);
}

#[test]
fn test_search_is_case_insensitive() {
    let mut browser = Model::with_items(Config::default(), mixed());
    let render = browser.set_search("FUNNY Question");

    assert_eq!(render.total_count, 5);
    assert_eq!(browser.search_term(), "funny question");
    assert_eq!(browser.search_input(), "FUNNY Question");
}

#[test]
fn test_category_and_search_combine() {
    let mut browser = Model::with_items(Config::default(), mixed());
    browser.set_category("clean");
    let render = browser.set_search("question 1");

    // "question 1" in the clean set matches only id 1.
    assert_eq!(
        render.page_items.iter().map(|q| q.id).collect::<Vec<_>>(),
        vec![1]
    );
}

#[test]
fn test_filter_changes_reset_page() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));
    browser.go_to_page(3);
    assert_eq!(browser.page(), 3);

    browser.set_search("number");
    assert_eq!(browser.page(), 1);

    browser.go_to_page(2);
    browser.set_category("clean");
    assert_eq!(browser.page(), 1);
}

#[test]
fn test_invalid_page_requests_are_ignored() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));
    browser.go_to_page(2);

    assert_eq!(browser.go_to_page(0).page, 2);
    assert_eq!(browser.go_to_page(4).page, 2);

    browser.go_to_page(3);
    assert_eq!(browser.next_page().page, 3);
    browser.go_to_page(1);
    assert_eq!(browser.prev_page().page, 1);
}

#[test]
fn test_apply_dispatches_actions() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));

    assert_eq!(browser.apply(Action::NextPage).page, 2);
    assert_eq!(browser.apply(Action::PrevPage).page, 1);
    assert_eq!(browser.apply(Action::GoToPage(3)).page, 3);
    assert_eq!(
        browser
            .apply(Action::SetCategory(Category::from("funny")))
            .total_count,
        0
    );
    assert_eq!(
        browser
            .apply(Action::SetSearch(String::from("number 2")))
            .page,
        1
    );
}

#[test]
fn test_session_snapshot() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));
    assert_eq!(browser.session(), SessionState::default());

    browser.set_search("Number");
    browser.go_to_page(2);
    assert_eq!(
        browser.session(),
        SessionState {
            category: Category::All,
            search_term: String::from("number"),
            page: 2,
        }
    );
}

#[test]
fn test_plan_with_ellipsis() {
    let config = Config::default().with_page_size(1);
    let mut browser = Model::with_items(config, numbered(10, "clean"));
    let render = browser.go_to_page(5);

    assert_eq!(
        render.plan.tokens,
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(4),
            PageToken::Page(5),
            PageToken::Page(6),
            PageToken::Ellipsis,
            PageToken::Page(10),
        ]
    );
    assert!(plain(&browser).contains("‹ 1 … 4 [5] 6 … 10 ›"));
}

#[test]
fn test_categories_all_first() {
    let browser = Model::with_items(Config::default(), mixed());
    assert_eq!(
        browser.categories(),
        vec![
            Category::All,
            Category::Named(String::from("clean")),
            Category::Named(String::from("funny")),
        ]
    );
}

#[test]
fn test_all_tag_is_not_a_separate_category() {
    let items = vec![
        Question::new(0, "all", "tagged with the reserved name"),
        Question::new(1, "clean", "an ordinary question"),
    ];
    let mut browser = Model::with_items(Config::default(), items);

    assert_eq!(
        browser.categories(),
        vec![Category::All, Category::Named(String::from("clean"))]
    );

    for _ in 0..4 {
        browser.next_category();
        assert_ne!(browser.category(), &Category::Named(String::from("all")));
    }
    browser.prev_category();
    assert_ne!(browser.category(), &Category::Named(String::from("all")));

    let header = plain(&browser);
    assert_eq!(header.matches("All Questions").count(), 1);
    assert!(!header.contains("[All]") && !header.contains(" All "));
}

#[test]
fn test_named_all_selects_everything() {
    let items = vec![
        Question::new(0, "all", "tagged with the reserved name"),
        Question::new(1, "clean", "an ordinary question"),
    ];
    let mut browser = Model::with_items(Config::default(), items);

    let render = browser.set_category(Category::Named(String::from("all")));
    assert!(browser.category().is_all());
    assert_eq!(render.total_count, 2);
}

#[test]
fn test_category_cycling_wraps() {
    let mut browser = Model::with_items(Config::default(), mixed());

    browser.next_category();
    assert_eq!(browser.category(), &Category::from("clean"));
    browser.next_category();
    assert_eq!(browser.category(), &Category::from("funny"));
    browser.next_category();
    assert!(browser.category().is_all());

    browser.prev_category();
    assert_eq!(browser.category(), &Category::from("funny"));
}

#[test]
fn test_random_pick_respects_filter() {
    let mut browser =
        Model::with_items(Config::default(), mixed()).with_picker(Picker::with_seed(7));
    browser.set_category("funny");

    for _ in 0..20 {
        let pick = browser.pick_random();
        let question = pick.question().expect("funny set is not empty");
        assert_eq!(question.category, "funny");
    }

    browser.set_search("zebra");
    assert_eq!(browser.pick_random(), RandomPick::NoneAvailable);
}

#[test]
fn test_load_failure_renders_empty_state() {
    let mut browser = Model::with_items(Config::default(), mixed());
    let render = browser.load_failed(Error::io(
        "questions.json",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    ));

    assert!(matches!(browser.load_state(), LoadState::Failed(_)));
    assert!(browser.store().is_empty());
    assert!(render.is_empty());
    assert_eq!(render.page_count, 0);

    let view = plain(&browser);
    assert!(view.contains("Could not load questions"));
    assert!(view.contains(NO_RESULTS));
}

#[test]
fn test_loading_view() {
    let browser = Model::default();
    assert!(browser.is_loading());
    assert!(plain(&browser).contains("Loading questions…"));
}

#[test]
fn test_view_shows_cards_and_tabs() {
    let browser = Model::with_items(Config::default(), mixed());
    let view = plain(&browser);

    assert!(view.contains("[All Questions]"));
    assert!(view.contains("Clean"));
    assert!(view.contains("Funny"));
    assert!(view.contains("clean question 0"));
    assert!(view.contains("Showing 12 of 14 questions"));
    assert!(view.contains("‹ [1] 2 ›"));
}

#[test]
fn test_view_hides_pagination_for_single_page() {
    let mut browser = Model::with_items(Config::default(), mixed());
    browser.set_category("clean");
    let view = plain(&browser);

    assert!(view.contains("Showing 9 of 9 questions"));
    assert!(!view.contains('‹'));
}

#[test]
fn test_keys_navigate_pages() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));

    browser.update(key(KeyCode::Right));
    assert_eq!(browser.page(), 2);
    browser.update(key(KeyCode::Left));
    assert_eq!(browser.page(), 1);
    browser.update(key(KeyCode::End));
    assert_eq!(browser.page(), 3);
    browser.update(key(KeyCode::Home));
    assert_eq!(browser.page(), 1);
    browser.update(key(KeyCode::Char('2')));
    assert_eq!(browser.page(), 2);
    browser.update(key(KeyCode::Char('9')));
    assert_eq!(browser.page(), 2);
}

#[test]
fn test_page_keys_follow_paginator_bindings() {
    let mut browser = Model::with_items(Config::default(), numbered(30, "clean"));
    *browser.page_keymap_mut() = crate::paginator::PaginatorKeyMap {
        next_page: crate::key::Binding::new(vec![KeyCode::Char('n')]).with_help("n", "next"),
        ..Default::default()
    };

    browser.update(key(KeyCode::Char('n')));
    assert_eq!(browser.page(), 2);
    // 'l' is no longer bound to the next page.
    browser.update(key(KeyCode::Char('l')));
    assert_eq!(browser.page(), 2);
    assert!(plain(&browser).contains("n next"));
}

#[test]
fn test_keys_cycle_categories() {
    let mut browser = Model::with_items(Config::default(), mixed());

    browser.update(key(KeyCode::Tab));
    assert_eq!(browser.category(), &Category::from("clean"));
    browser.update(key(KeyCode::BackTab));
    assert!(browser.category().is_all());
}

#[test]
fn test_typing_a_search() {
    let mut browser = Model::with_items(Config::default(), mixed());

    browser.update(key(KeyCode::Char('/')));
    assert_eq!(browser.mode(), InputMode::Searching);

    for c in "Funnyx".chars() {
        browser.update(key(KeyCode::Char(c)));
    }
    assert_eq!(browser.render().total_count, 0);

    browser.update(key(KeyCode::Backspace));
    assert_eq!(browser.search_term(), "funny");
    assert_eq!(browser.render().total_count, 5);
    assert!(plain(&browser).contains("Search: Funny_"));

    // 'q' is text while searching.
    assert!(browser.update(key(KeyCode::Char('q'))).is_none());
    browser.update(key(KeyCode::Backspace));

    browser.update(key(KeyCode::Enter));
    assert_eq!(browser.mode(), InputMode::Browsing);
    assert_eq!(browser.search_term(), "funny");

    browser.update(key(KeyCode::Esc));
    assert_eq!(browser.search_term(), "");
    assert_eq!(browser.render().total_count, 14);
}

#[test]
fn test_random_panel_keys() {
    let mut browser =
        Model::with_items(Config::default(), mixed()).with_picker(Picker::with_seed(1));

    browser.update(key(KeyCode::Char('r')));
    assert!(matches!(browser.random(), Some(RandomPick::Picked(_))));
    assert!(plain(&browser).contains(RANDOM_TITLE));

    // Navigation is suspended while the panel is open.
    browser.update(key(KeyCode::Tab));
    assert!(browser.category().is_all());

    browser.update(key(KeyCode::Esc));
    assert!(browser.random().is_none());
}

#[test]
fn test_random_panel_when_nothing_matches() {
    let mut browser = Model::with_items(Config::default(), mixed());
    browser.set_search("zebra");

    browser.update(key(KeyCode::Char('r')));
    assert_eq!(browser.random(), Some(&RandomPick::NoneAvailable));

    let view = plain(&browser);
    assert!(view.contains(NONE_AVAILABLE_TITLE));
    assert!(view.contains(NONE_AVAILABLE_TEXT));
}

#[test]
fn test_quit_keys() {
    let mut browser = Model::with_items(Config::default(), mixed());
    assert!(browser.update(key(KeyCode::Char('q'))).is_some());

    browser.update(key(KeyCode::Char('/')));
    assert!(browser.update(ctrl('c')).is_some());
}

#[test]
fn test_long_text_is_truncated() {
    let long = "x".repeat(200);
    let config = Config::default().with_width(40);
    let browser = Model::with_items(config, vec![Question::new(0, "clean", long)]);
    let view = plain(&browser);

    let card_line = view
        .lines()
        .find(|line| line.contains("xxx"))
        .expect("card rendered");
    assert!(card_line.trim_end().ends_with('…'));
    assert!(card_line.trim().chars().count() <= 38);
}

#[tokio::test]
async fn test_load_items_cmd_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"items":[{{"id":4,"category":"deep-talk","text":"What matters?"}}]}}"#
    )
    .unwrap();

    let (mut browser, cmd) = Model::init();
    assert!(cmd.is_none());
    assert!(browser.is_loading());

    let msg = load_items_cmd(file.path()).await.expect("load message");
    assert!(browser.update(msg).is_none());

    assert_eq!(browser.load_state(), &LoadState::Ready);
    assert_eq!(browser.filtered()[0].id, 4);
    assert!(plain(&browser).contains("Deep talk"));
}

#[tokio::test]
async fn test_load_items_cmd_missing_file() {
    let (mut browser, _) = Model::init();
    let msg = load_items_cmd("/definitely/not/here.json")
        .await
        .expect("load message");
    browser.update(msg);

    assert!(matches!(browser.load_state(), LoadState::Failed(_)));
    assert_eq!(browser.page_count(), 0);
    assert!(plain(&browser).contains(NO_RESULTS));
}
