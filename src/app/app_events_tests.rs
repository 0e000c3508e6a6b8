//! Key, paste and lookup-completion handling at the application level

use crossterm::event::{KeyCode, KeyModifiers};
use tui_textarea::CursorMove;

use super::App;
use crate::config::{Config, KeyEventMode};
use crate::lookup::{LookupKind, LookupResponse, ResponseStatus};
use crate::test_utils::test_helpers::{
    app_with_inputs, key, key_with_mods, test_app, type_text, wire_lookups,
};

fn app_in_mode(mode: KeyEventMode) -> App {
    let mut config = Config::default();
    config.tooltip.key_events = mode;
    App::new(&config)
}

fn reply(uid: &str, status: ResponseStatus, body: &str) -> LookupResponse {
    LookupResponse {
        kind: LookupKind::Doc,
        uid: uid.to_string(),
        status,
        body: body.to_string(),
    }
}

// Lookup triggers

#[test]
fn test_period_after_obj_sends_obj_period_in_every_mode() {
    for mode in [
        KeyEventMode::Keyup,
        KeyEventMode::Keypress,
        KeyEventMode::Charcode,
    ] {
        let mut app = app_in_mode(mode);
        let (mut rx, _tx) = wire_lookups(&mut app);

        type_text(&mut app, "obj.");

        let request = rx.try_recv().unwrap();
        assert_eq!(request.kind, LookupKind::Dir, "mode {:?}", mode);
        assert_eq!(request.body, "obj.", "mode {:?}", mode);
        assert_eq!(request.path, "/dir?uid=1");
        assert!(rx.try_recv().is_err());
        assert_eq!(app.focused_input().text(), "obj.");
    }
}

#[test]
fn test_open_paren_sends_text_up_to_cursor() {
    let mut app = test_app();
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "sin2");
    app.focused_input_mut().textarea.move_cursor(CursorMove::Back);
    app.handle_key_event(key(KeyCode::Char('(')));

    assert_eq!(app.focused_input().text(), "sin(2");
    let request = rx.try_recv().unwrap();
    assert_eq!(request.kind, LookupKind::Doc);
    assert_eq!(request.body, "sin(");
}

#[test]
fn test_keypress_mode_appends_to_full_text() {
    let mut app = app_in_mode(KeyEventMode::Keypress);
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "sin2");
    app.focused_input_mut().textarea.move_cursor(CursorMove::Back);
    app.handle_key_event(key(KeyCode::Char('(')));

    // Appends to the whole line regardless of the cursor
    assert_eq!(rx.try_recv().unwrap().body, "sin2(");
}

#[test]
fn test_ordinary_characters_send_nothing() {
    let mut app = test_app();
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "x = 90 + y");

    assert!(rx.try_recv().is_err());
    assert_eq!(app.focused_input().text(), "x = 90 + y");
}

#[test]
fn test_request_carries_session_and_uid() {
    let mut config = Config::default();
    config.server.session = "_abc".to_string();
    config.inputs.ids = vec!["7".to_string()];
    let mut app = App::new(&config);
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "os.");

    let request = rx.try_recv().unwrap();
    assert_eq!(request.path, "/dir_abc?uid=7");
    assert_eq!(request.uid, "7");
}

#[test]
fn test_query_text_is_percent_encoded() {
    let mut app = test_app();
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "d['a b'].");

    assert_eq!(rx.try_recv().unwrap().body, "d%5B'a%20b'%5D.");
}

#[test]
fn test_lookup_hides_visible_tooltip_immediately() {
    let mut app = test_app();
    let (_rx, _tx) = wire_lookups(&mut app);
    app.tooltip.show("old doc");

    type_text(&mut app, "f(");

    assert!(!app.tooltip.state.is_visible());
    assert_eq!(app.tooltip.state.content(), " ");
}

#[test]
fn test_disabled_kind_notifies_and_sends_nothing() {
    let mut config = Config::default();
    config.tooltip.dir_help = false;
    let mut app = App::new(&config);
    let (mut rx, _tx) = wire_lookups(&mut app);

    type_text(&mut app, "obj.");

    assert!(rx.try_recv().is_err());
    assert_eq!(
        app.notification.current().map(|n| n.message.as_str()),
        Some("dir lookups are disabled in config")
    );
}

// Completions

#[test]
fn test_ok_shows_tooltip_and_returns_focus() {
    let mut app = app_with_inputs(&["1", "2"]);
    let (mut rx, tx) = wire_lookups(&mut app);

    type_text(&mut app, "len(");
    let request = rx.try_recv().unwrap();
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focused, 1);

    tx.send(reply(&request.uid, ResponseStatus::Code(200), "foo"))
        .unwrap();
    app.poll_lookups();

    assert!(app.tooltip.state.is_visible());
    assert!(app.tooltip.state.close_visible());
    assert_eq!(app.tooltip.state.text(), "foo");
    assert_eq!(app.focused, 0);
    assert!(!app.alert.is_visible());
}

#[test]
fn test_no_content_statuses_stay_silent() {
    for status in [ResponseStatus::Code(204), ResponseStatus::Code(1223)] {
        let mut app = test_app();
        let (_rx, tx) = wire_lookups(&mut app);

        tx.send(reply("1", status, "")).unwrap();
        app.poll_lookups();

        assert!(!app.tooltip.state.is_visible());
        assert!(!app.alert.is_visible());
    }
}

#[test]
fn test_server_error_raises_alert() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);

    tx.send(reply("1", ResponseStatus::Code(500), "server error"))
        .unwrap();
    app.poll_lookups();

    assert_eq!(app.alert.message(), Some("500\nserver error"));
    assert!(!app.tooltip.state.is_visible());
}

#[test]
fn test_could_not_connect_alias_reports_no_response() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);

    tx.send(reply("1", ResponseStatus::Code(12029), "")).unwrap();
    app.poll_lookups();

    assert_eq!(app.alert.message(), Some("NO HTTP RESPONSE\n"));
}

#[test]
fn test_missing_worker_reports_no_response() {
    let mut app = test_app();

    type_text(&mut app, "obj.");
    app.poll_lookups();

    assert_eq!(app.alert.message(), Some("NO HTTP RESPONSE\n"));
}

#[test]
fn test_successive_bodies_accumulate() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);

    tx.send(reply("1", ResponseStatus::Code(200), "a")).unwrap();
    tx.send(reply("1", ResponseStatus::Code(200), "b")).unwrap();
    app.poll_lookups();

    assert_eq!(app.tooltip.state.text(), "ab");
}

// Alert modality

#[test]
fn test_alert_swallows_keys_until_dismissed() {
    let mut app = test_app();
    let (mut rx, _tx) = wire_lookups(&mut app);
    app.alert.show("500\nboom");

    type_text(&mut app, "obj.");
    assert_eq!(app.focused_input().text(), "");
    assert!(rx.try_recv().is_err());
    assert!(app.alert.is_visible());

    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.alert.is_visible());
}

#[test]
fn test_every_failed_lookup_gets_its_own_alert() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);

    tx.send(reply("1", ResponseStatus::Code(500), "server error"))
        .unwrap();
    tx.send(reply("1", ResponseStatus::Code(404), "not found"))
        .unwrap();
    app.poll_lookups();

    assert_eq!(app.alert.message(), Some("500\nserver error"));
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.alert.message(), Some("404\nnot found"));
    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.alert.is_visible());
}

#[test]
fn test_failure_while_alert_open_waits_its_turn() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);

    tx.send(reply("1", ResponseStatus::Code(500), "first")).unwrap();
    app.poll_lookups();
    tx.send(reply("1", ResponseStatus::NoResponse, "")).unwrap();
    app.poll_lookups();

    assert_eq!(app.alert.message(), Some("500\nfirst"));
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.alert.message(), Some("NO HTTP RESPONSE\n"));
}

#[test]
fn test_alert_dismiss_keys() {
    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
        let mut app = test_app();
        app.alert.show("x");
        app.handle_key_event(key(code));
        assert!(!app.alert.is_visible(), "{:?}", code);
    }
}

// Help overlay

#[test]
fn test_f1_opens_help_and_hides_tooltip() {
    let mut app = test_app();
    app.tooltip.show("doc");

    app.handle_key_event(key(KeyCode::F(1)));

    assert!(app.tooltip.help.visible);
    assert!(!app.tooltip.state.is_visible());
}

#[test]
fn test_help_open_blocks_input_and_lookups() {
    let mut app = test_app();
    let (mut rx, _tx) = wire_lookups(&mut app);
    app.handle_key_event(key(KeyCode::F(1)));

    type_text(&mut app, "a(.");

    assert!(rx.try_recv().is_err());
    assert_eq!(app.focused_input().text(), "");
    assert!(app.tooltip.help.visible);
}

#[test]
fn test_help_close_keys_hide_help_and_tooltip() {
    for code in [KeyCode::Esc, KeyCode::F(1), KeyCode::Char('q')] {
        let mut app = test_app();
        app.tooltip.show_help();
        app.handle_key_event(key(code));
        assert!(!app.tooltip.help.visible, "{:?}", code);
        assert!(!app.tooltip.state.is_visible());
    }
}

#[test]
fn test_tooltip_show_closes_help() {
    let mut app = test_app();
    let (_rx, tx) = wire_lookups(&mut app);
    app.tooltip.show_help();

    tx.send(reply("1", ResponseStatus::Code(200), "doc"))
        .unwrap();
    app.poll_lookups();

    assert!(!app.tooltip.help.visible);
    assert!(app.tooltip.state.is_visible());
}

// Editing and global keys

#[test]
fn test_enter_commits_line_and_hides_tooltip() {
    let mut app = test_app();
    app.tooltip.show("doc");
    type_text(&mut app, "x = 1");

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.focused_input().transcript, vec!["x = 1".to_string()]);
    assert_eq!(app.focused_input().text(), "");
    assert!(!app.tooltip.state.is_visible());
}

#[test]
fn test_escape_hides_tooltip_without_editing() {
    let mut app = test_app();
    type_text(&mut app, "abc");
    app.tooltip.show("doc");

    app.handle_key_event(key(KeyCode::Esc));

    assert!(!app.tooltip.state.is_visible());
    assert_eq!(app.focused_input().text(), "abc");
}

#[test]
fn test_close_paren_hides_tooltip() {
    let mut app = test_app();
    app.tooltip.show("doc");
    type_text(&mut app, ")");
    assert!(!app.tooltip.state.is_visible());
}

#[test]
fn test_ctrl_t_hides_tooltip() {
    let mut app = test_app();
    app.tooltip.show("doc");
    app.handle_key_event(key_with_mods(KeyCode::Char('t'), KeyModifiers::CONTROL));
    assert!(!app.tooltip.state.is_visible());
    assert_eq!(app.focused_input().text(), "");
}

#[test]
fn test_ctrl_c_and_ctrl_d_quit() {
    for c in ['c', 'd'] {
        let mut app = test_app();
        app.handle_key_event(key_with_mods(KeyCode::Char(c), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }
}

#[test]
fn test_tab_and_backtab_cycle_focus() {
    let mut app = app_with_inputs(&["1", "2", "3"]);
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.focused, 1);
    app.handle_key_event(key(KeyCode::BackTab));
    app.handle_key_event(key(KeyCode::BackTab));
    assert_eq!(app.focused, 2);
}

#[test]
fn test_typing_goes_to_focused_input_only() {
    let mut app = app_with_inputs(&["1", "2"]);
    app.handle_key_event(key(KeyCode::Tab));
    type_text(&mut app, "hi");
    assert_eq!(app.inputs[0].text(), "");
    assert_eq!(app.inputs[1].text(), "hi");
}

#[test]
fn test_lookup_from_second_input_uses_its_uid() {
    let mut app = app_with_inputs(&["1", "2"]);
    let (mut rx, _tx) = wire_lookups(&mut app);
    app.handle_key_event(key(KeyCode::Tab));

    type_text(&mut app, "x.");

    let request = rx.try_recv().unwrap();
    assert_eq!(request.uid, "2");
    assert_eq!(request.path, "/dir?uid=2");
}

#[test]
fn test_paste_inserts_into_focused_input() {
    let mut app = test_app();
    app.handle_paste_event("print(1)\n");
    assert_eq!(app.focused_input().text(), "print(1) ");
}

#[test]
fn test_paste_ignored_while_help_open() {
    let mut app = test_app();
    app.tooltip.show_help();
    app.handle_paste_event("abc");
    assert_eq!(app.focused_input().text(), "");
}
