use super::*;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ranka_types::Profile;

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    let mut event = KeyEvent::new(code, KeyModifiers::empty());
    event.kind = KeyEventKind::Press;
    event
}

fn profile(username: &str, display_name: &str, followers: i64) -> Profile {
    Profile {
        username: username.to_string(),
        display_name: display_name.to_string(),
        followers,
        following: 10,
        posts: 5,
        latest_post_likes: 1_000,
        latest_post_views: Some(2_000),
    }
}

fn test_app() -> App {
    App::with_profiles(vec![
        profile("a", "Alice Anvil", 100),
        profile("b", "Bob Breaker", 300),
        profile("anna", "Anna Atlas", 200),
    ])
}

#[test]
fn test_escape_closes_help_modal_first() {
    let mut app = test_app();
    app.show_help = true;
    app.running = true;

    // Escape should close help, not exit app
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.show_help, "Help modal should be closed");
    assert!(app.running, "App should still be running");
}

#[test]
fn test_question_mark_toggles_help() {
    let mut app = test_app();
    app.input_mode = InputMode::Navigation;
    app.show_help = false;

    // '?' should open help modal
    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(app.show_help, "Help modal should be open");

    // '?' should close help modal when it's already open
    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(!app.show_help, "Help modal should be closed");
}

#[test]
fn test_escape_exits_app_when_no_modals() {
    let mut app = test_app();
    app.running = true;

    // Escape should exit app when no modals are open
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.running, "App should stop running");
}

#[test]
fn test_tab_switches_to_search_and_focuses_input() {
    let mut app = test_app();
    assert_eq!(app.current_tab, Tab::Leaderboard);

    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();

    assert_eq!(app.current_tab, Tab::Search);
    assert_eq!(
        app.input_mode,
        InputMode::Typing,
        "Search input should have focus"
    );

    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    assert_eq!(app.current_tab, Tab::Leaderboard);
    assert_eq!(app.input_mode, InputMode::Navigation);
}

#[test]
fn test_typing_builds_query_and_refilters_every_keystroke() {
    let mut app = test_app();
    app.next_tab(); // Search tab, typing mode

    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.search_state.query, "a");
    // Every fixture profile matches: "Breaker" contains an 'a' too
    assert_eq!(app.search_state.results.len(), 3);

    app.handle_key_event(key_event(KeyCode::Char('n'))).unwrap();
    assert_eq!(app.search_state.query, "an");
    let usernames: Vec<&str> = app
        .search_state
        .results
        .iter()
        .map(|p| p.username.as_str())
        .collect();
    assert_eq!(usernames, vec!["a", "anna"]);

    // Backspace refilters too
    app.handle_key_event(key_event(KeyCode::Backspace)).unwrap();
    assert_eq!(app.search_state.query, "a");
    assert_eq!(app.search_state.results.len(), 3);
}

#[test]
fn test_q_types_into_query_instead_of_quitting() {
    let mut app = test_app();
    app.next_tab(); // typing mode

    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();

    assert!(app.running, "App should still be running");
    assert_eq!(app.search_state.query, "q");
}

#[test]
fn test_enter_selects_highlighted_result_and_clears_query() {
    let mut app = test_app();
    app.next_tab();

    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char('n'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Down)).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    let selected = app.search_state.selected_profile.as_ref().unwrap();
    assert_eq!(selected.username, "anna");
    assert_eq!(app.search_state.query, "", "Query should be cleared");
    assert!(app.search_state.results.is_empty());
    assert_eq!(
        app.input_mode,
        InputMode::Navigation,
        "Selection should unfocus the input"
    );
}

#[test]
fn test_highlight_clamps_at_list_edges() {
    let mut app = test_app();
    app.next_tab();
    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();
    assert_eq!(app.search_state.list_state.selected(), Some(0));

    app.handle_key_event(key_event(KeyCode::Up)).unwrap();
    assert_eq!(app.search_state.list_state.selected(), Some(0));

    for _ in 0..10 {
        app.handle_key_event(key_event(KeyCode::Down)).unwrap();
    }
    assert_eq!(app.search_state.list_state.selected(), Some(2));
}

#[test]
fn test_escape_clears_query_then_unfocuses_then_quits() {
    let mut app = test_app();
    app.next_tab();
    app.handle_key_event(key_event(KeyCode::Char('a'))).unwrap();

    // First Esc: clear the query, stay focused
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert_eq!(app.search_state.query, "");
    assert_eq!(app.input_mode, InputMode::Typing);
    assert!(app.running);

    // Second Esc: unfocus the input
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert!(app.running);

    // Third Esc: quit
    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(!app.running);
}

#[test]
fn test_r_on_leaderboard_refreshes_all_and_stamps_time() {
    let mut app = test_app();
    let before = app.last_refresh;

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();

    assert!(app.last_refresh >= before, "Timestamp should advance");
    // Every profile moved by at most the documented offset ranges
    assert_eq!(app.store.len(), 3);
    let followers_a = app.store.get("a").unwrap().followers;
    assert!((100 - 500_000..100 + 500_000).contains(&followers_a));
}

#[test]
fn test_r_on_search_tab_refreshes_selection_from_store() {
    let mut app = test_app();
    app.next_tab();
    app.handle_key_event(key_event(KeyCode::Char('b'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();

    let selected = app.search_state.selected_profile.as_ref().unwrap();
    assert_eq!(selected.username, "b");
    // The snapshot was re-derived from the canonical entry (300 followers)
    assert!((300 - 500_000..300 + 500_000).contains(&selected.followers));
    // The store entry itself is untouched by a single refresh
    assert_eq!(app.store.get("b").unwrap().followers, 300);
}

#[test]
fn test_refresh_with_stale_selection_is_a_silent_noop() {
    let mut app = test_app();
    app.next_tab();
    app.input_mode = InputMode::Navigation;
    app.search_state.selected_profile = Some(profile("ghost", "Not In Store", 42));
    let before = app.last_refresh;

    app.handle_key_event(key_event(KeyCode::Char('r'))).unwrap();

    let selected = app.search_state.selected_profile.as_ref().unwrap();
    assert_eq!(selected.followers, 42, "Stale selection should be untouched");
    assert!(
        app.last_refresh >= before,
        "Timestamp still advances on a no-op refresh"
    );
    assert!(app.running);
}

#[test]
fn test_slash_refocuses_search_input() {
    let mut app = test_app();
    app.next_tab();
    app.handle_key_event(key_event(KeyCode::Char('b'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();
    assert_eq!(app.input_mode, InputMode::Navigation);

    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();

    assert_eq!(app.input_mode, InputMode::Typing);
    // The previous selection stays while a new search is typed
    assert!(app.search_state.selected_profile.is_some());
}
