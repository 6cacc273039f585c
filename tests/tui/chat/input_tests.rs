//! Input handling tests

use counsel_chat::ChatSession;
use counsel_chat::application::Focus;
use counsel_chat::tui::screens::chat::{InputAction, handle_input};
use counsel_chat::types::Vote;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn type_text(state: &mut ChatSession, text: &str) {
    for c in text.chars() {
        handle_input(state, key(KeyCode::Char(c)));
    }
}

fn session_with_reply() -> ChatSession {
    let mut state = ChatSession::new();
    state.input.set_draft("Hello");
    let pending = state.begin_send().expect("send");
    state.complete_send(pending, Ok("Hi there".to_string()));
    state
}

#[test]
fn test_typing_edits_the_draft() {
    let mut state = ChatSession::new();

    type_text(&mut state, "Hi");
    assert_eq!(state.input.draft(), "Hi");

    handle_input(&mut state, key(KeyCode::Backspace));
    assert_eq!(state.input.draft(), "H");
    assert_eq!(state.input.cursor(), 1);
}

#[test]
fn test_enter_submits() {
    let mut state = ChatSession::new();
    type_text(&mut state, "Hello");

    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
    // the runner owns the send, the key handler leaves the draft alone
    assert_eq!(state.input.draft(), "Hello");
}

#[test]
fn test_alt_enter_inserts_newline() {
    let mut state = ChatSession::new();
    type_text(&mut state, "line one");

    let action = handle_input(&mut state, key_with(KeyCode::Enter, KeyModifiers::ALT));
    type_text(&mut state, "line two");

    assert_eq!(action, InputAction::None);
    assert_eq!(state.input.draft(), "line one\nline two");
}

#[test]
fn test_esc_clears_the_draft() {
    let mut state = ChatSession::new();
    type_text(&mut state, "discard me");

    handle_input(&mut state, key(KeyCode::Esc));
    assert!(state.input.is_empty());
}

#[test]
fn test_control_chars_are_not_typed() {
    let mut state = ChatSession::new();
    handle_input(&mut state, key_with(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert!(state.input.is_empty());
}

#[test]
fn test_locked_input_ignores_typing_and_submit() {
    let mut state = ChatSession::new();
    state.input.set_draft("first");
    let _pending = state.begin_send().expect("send");

    type_text(&mut state, "more");
    let action = handle_input(&mut state, key(KeyCode::Enter));

    assert_eq!(action, InputAction::None);
    assert!(state.input.is_empty());
    assert_eq!(handle_input(&mut state, key(KeyCode::Up)), InputAction::ScrollUp);
}

#[test]
fn test_function_keys_pick_quick_questions_while_welcome_visible() {
    let mut state = ChatSession::new();

    assert_eq!(
        handle_input(&mut state, key(KeyCode::F(1))),
        InputAction::QuickQuestion(0)
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::F(3))),
        InputAction::QuickQuestion(2)
    );

    state.hide_welcome();
    assert_eq!(handle_input(&mut state, key(KeyCode::F(1))), InputAction::None);
}

#[test]
fn test_tab_toggles_focus() {
    let mut state = ChatSession::new();

    handle_input(&mut state, key(KeyCode::Tab));
    assert_eq!(state.focus(), Focus::Transcript);

    handle_input(&mut state, key(KeyCode::Tab));
    assert_eq!(state.focus(), Focus::Input);
}

#[test]
fn test_votes_only_in_transcript_focus() {
    let mut state = session_with_reply();

    // in the input pane `y` is just a letter
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('y'))), InputAction::None);
    assert_eq!(state.input.draft(), "y");

    state.focus_transcript();
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char('y'))),
        InputAction::Vote(Vote::Yes)
    );
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Char('N'))),
        InputAction::Vote(Vote::No)
    );
}

#[test]
fn test_transcript_navigation_moves_selection() {
    let mut state = session_with_reply();
    let first = state.selected_feedback().expect("selection");
    state.input.set_draft("again");
    let pending = state.begin_send().expect("send");
    let second = state
        .complete_send(pending, Ok("another reply".to_string()))
        .bot_message;
    state.focus_transcript();

    assert_eq!(state.selected_feedback(), Some(second));
    handle_input(&mut state, key(KeyCode::Char('k')));
    assert_eq!(state.selected_feedback(), Some(first));
    handle_input(&mut state, key(KeyCode::Down));
    assert_eq!(state.selected_feedback(), Some(second));

    handle_input(&mut state, key(KeyCode::Esc));
    assert_eq!(state.focus(), Focus::Input);
}

#[test]
fn test_ctrl_q_exits_from_any_pane() {
    let mut state = ChatSession::new();
    let exit = key_with(KeyCode::Char('q'), KeyModifiers::CONTROL);

    assert_eq!(handle_input(&mut state, exit.clone()), InputAction::Exit);
    state.focus_transcript();
    assert_eq!(handle_input(&mut state, exit), InputAction::Exit);
}

#[test]
fn test_scroll_keys() {
    let mut state = ChatSession::new();

    assert_eq!(handle_input(&mut state, key(KeyCode::PageUp)), InputAction::PageUp);
    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageDown)),
        InputAction::PageDown
    );
    assert_eq!(handle_input(&mut state, key(KeyCode::Up)), InputAction::ScrollUp);
    assert_eq!(handle_input(&mut state, key(KeyCode::Down)), InputAction::ScrollDown);
    assert_eq!(
        handle_input(&mut state, key_with(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        InputAction::ScrollTop
    );
    assert_eq!(
        handle_input(&mut state, key_with(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        InputAction::ScrollBottom
    );
}

#[test]
fn test_key_release_is_ignored() {
    let mut state = ChatSession::new();
    let release = Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char('a'),
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));

    assert_eq!(handle_input(&mut state, release), InputAction::None);
    assert!(state.input.is_empty());
}

#[test]
fn test_non_key_events_are_ignored() {
    let mut state = ChatSession::new();
    assert_eq!(handle_input(&mut state, Event::Resize(80, 24)), InputAction::None);
}
