//! `@` mention panel driven through the key handlers.

use super::helpers::*;
use crate::composer::{Panel, Trigger};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

#[test]
fn typing_mention_opens_filtered_panel() {
    let mut app = create_test_app();
    type_str(&mut app, "hello @jo");

    assert!(app.should_show_suggestion_popup());
    assert_eq!(app.composer.trigger(), &Trigger::Mention("jo".to_string()));
    assert_eq!(app.composer.popup().panel(), Some(Panel::Assistants));
    assert_eq!(app.composer.popup().candidate_count(), 1);
    assert_eq!(app.composer.popup().item_count(), 2);
    assert_eq!(app.composer.popup().selected_index(), Some(0));
}

#[test]
fn enter_commits_mention_and_clears_input() {
    let mut app = create_test_app();
    type_str(&mut app, "hello @jo");
    app.handle_key(enter_key(KeyModifiers::NONE));

    assert!(!app.should_show_suggestion_popup());
    assert_eq!(app.text_input.collect_text(), "");
    assert_eq!(app.composer.buffer(), "");
    assert_eq!(
        app.composer.alternative_assistant().map(|a| a.name.as_str()),
        Some("John")
    );
    assert!(transcript_texts(&app).iter().any(|t| t.contains("@John")));
}

#[test]
fn tab_commits_like_enter() {
    let mut app = create_test_app();
    type_str(&mut app, "@ja");
    app.handle_key(key(KeyCode::Tab, KeyModifiers::NONE));

    assert_eq!(
        app.composer.alternative_assistant().map(|a| a.id),
        Some(2)
    );
    assert_eq!(app.text_input.collect_text(), "");
}

#[test]
fn arrows_are_clamped_to_panel_rows() {
    let mut app = create_test_app();
    type_str(&mut app, "@");
    // John, Jane, Bob, create-new
    for _ in 0..10 {
        app.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
    }
    assert_eq!(app.composer.popup().selected_index(), Some(3));
    assert!(app.composer.popup().is_create_new_selected());

    for _ in 0..10 {
        app.handle_key(key(KeyCode::Up, KeyModifiers::NONE));
    }
    assert_eq!(app.composer.popup().selected_index(), Some(0));
}

#[test]
fn arrows_do_not_move_the_text_cursor_while_panel_shows() {
    let mut app = create_test_app();
    type_str(&mut app, "ab @");
    let cursor = app.text_input.cursor();
    app.handle_key(key(KeyCode::Up, KeyModifiers::NONE));
    app.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
    assert_eq!(app.text_input.cursor(), cursor);
}

#[test]
fn changing_fragment_resets_selection() {
    let mut app = create_test_app();
    type_str(&mut app, "@j");
    app.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
    assert_eq!(app.composer.popup().selected_index(), Some(1));

    app.handle_key(char_key('a'));
    assert_eq!(app.composer.popup().selected_index(), Some(0));
    assert_eq!(app.composer.popup().candidate_count(), 1);
}

#[test]
fn confirming_create_new_requests_navigation_and_keeps_text() {
    let mut app = create_test_app();
    type_str(&mut app, "hello @jo");
    app.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
    app.handle_key(enter_key(KeyModifiers::NONE));

    assert!(!app.should_show_suggestion_popup());
    assert_eq!(app.text_input.collect_text(), "hello @jo");
    assert!(app.composer.alternative_assistant().is_none());
    assert_eq!(
        transcript_texts(&app).last().map(String::as_str),
        Some("+ Open http://localhost:3000/assistants/new")
    );
}

#[test]
fn navigation_uses_configured_base_url() {
    let mut app = create_test_app();
    app.settings.base_url = "https://chat.example.com/".to_string();
    type_str(&mut app, "@zed");
    app.handle_key(enter_key(KeyModifiers::NONE));

    assert!(
        transcript_texts(&app)
            .iter()
            .any(|t| t == "+ Open https://chat.example.com/assistants/new")
    );
}

#[test]
fn escape_dismisses_and_next_edit_rearms() {
    let mut app = create_test_app();
    type_str(&mut app, "@j");
    app.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
    app.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));

    assert!(!app.should_show_suggestion_popup());
    assert_eq!(app.composer.trigger(), &Trigger::None);
    assert_eq!(app.text_input.collect_text(), "@j");

    app.handle_key(char_key('o'));
    assert!(app.should_show_suggestion_popup());
    assert_eq!(app.composer.popup().selected_index(), Some(0));
}

#[test]
fn enter_after_dismiss_submits_text() {
    let mut app = create_test_app();
    type_str(&mut app, "ask @jo");
    app.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));
    app.handle_key(enter_key(KeyModifiers::NONE));

    assert_eq!(app.text_input.collect_text(), "");
    assert!(transcript_texts(&app).iter().any(|t| t == "  ask @jo"));
}

#[test]
fn focus_loss_dismisses_panel() {
    let mut app = create_test_app();
    type_str(&mut app, "@");
    app.handle_focus_lost();

    assert!(!app.should_show_suggestion_popup());
    assert_eq!(app.text_input.collect_text(), "@");
}

#[test]
fn at_inside_word_does_not_open_panel() {
    let mut app = create_test_app();
    type_str(&mut app, "mail foo@bar");
    assert!(!app.should_show_suggestion_popup());
}

#[test]
fn ctrl_enter_does_not_submit_while_panel_shows() {
    let mut app = create_test_app();
    type_str(&mut app, "@jo");
    app.handle_key(enter_key(KeyModifiers::CONTROL));

    assert!(app.should_show_suggestion_popup());
    assert_eq!(app.text_input.collect_text(), "@jo");
    assert!(app.transcript.lines.is_empty());
}

#[test]
fn mentioning_default_assistant_clears_override() {
    let mut app = create_test_app();
    app.composer.set_default_assistant(Some(1));

    type_str(&mut app, "@ja");
    app.handle_key(enter_key(KeyModifiers::NONE));
    assert_eq!(app.composer.alternative_assistant().map(|a| a.id), Some(2));

    type_str(&mut app, "@jo");
    app.handle_key(enter_key(KeyModifiers::NONE));
    assert!(app.composer.alternative_assistant().is_none());
}

#[test]
fn submission_goes_to_override_until_cleared() {
    let mut app = create_test_app();
    app.composer.set_default_assistant(Some(3));

    type_str(&mut app, "@jane");
    app.handle_key(enter_key(KeyModifiers::NONE));
    type_str(&mut app, "first");
    app.handle_key(enter_key(KeyModifiers::NONE));

    let texts = transcript_texts(&app);
    assert!(texts.iter().any(|t| t.ends_with("You → Jane")));
    assert_eq!(texts.last().map(String::as_str), Some("  first"));
    assert!(app.composer.alternative_assistant().is_some());

    app.handle_key(ctrl_key('x'));
    assert!(app.composer.alternative_assistant().is_none());
    assert_eq!(
        transcript_texts(&app).last().map(String::as_str),
        Some("  Assistant override cleared")
    );

    type_str(&mut app, "second");
    app.handle_key(enter_key(KeyModifiers::NONE));
    let texts = transcript_texts(&app);
    assert!(texts.iter().rev().nth(1).is_some_and(|t| t.ends_with("You → Bob")));
}

#[test]
fn ctrl_x_without_override_adds_nothing() {
    let mut app = create_test_app();
    app.handle_key(ctrl_key('x'));
    assert!(app.transcript.lines.is_empty());
}

#[test]
fn paste_opens_panel_once() {
    let mut app = create_test_app();
    app.handle_paste("note for @ja");

    assert!(app.should_show_suggestion_popup());
    assert_eq!(app.composer.trigger(), &Trigger::Mention("ja".to_string()));
}
