//! Chat input handling

use crate::application::{ChatSession, Focus};
use crate::domain::Vote;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Send the current draft
    Submit,
    /// Send the quick question at this index
    QuickQuestion(usize),
    /// Vote on the selected feedback affordance
    Vote(Vote),
    /// Exit the chat
    Exit,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
    /// Scroll to top
    ScrollTop,
    /// Scroll to bottom
    ScrollBottom,
}

/// Handle terminal input and update state
pub fn handle_input(state: &mut ChatSession, event: Event) -> InputAction {
    match event {
        Event::Key(key) => handle_key(state, key),
        _ => InputAction::None,
    }
}

fn handle_key(state: &mut ChatSession, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    match key.code {
        KeyCode::PageUp => return InputAction::PageUp,
        KeyCode::PageDown => return InputAction::PageDown,
        KeyCode::Char('u') if ctrl => return InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => return InputAction::ScrollBottom,
        KeyCode::Tab | KeyCode::BackTab => {
            state.toggle_focus();
            return InputAction::None;
        }
        _ => {}
    }

    match state.focus() {
        Focus::Transcript => handle_transcript_key(state, key),
        Focus::Input => handle_draft_key(state, key),
    }
}

fn handle_transcript_key(state: &mut ChatSession, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => {
            state.focus_input();
            InputAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_previous_feedback();
            InputAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_feedback();
            InputAction::None
        }
        KeyCode::Char('y') | KeyCode::Char('Y') => InputAction::Vote(Vote::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') => InputAction::Vote(Vote::No),
        _ => InputAction::None,
    }
}

fn handle_draft_key(state: &mut ChatSession, key: KeyEvent) -> InputAction {
    // the draft is disabled while a send is in flight
    if state.is_busy() {
        return match key.code {
            KeyCode::Up => InputAction::ScrollUp,
            KeyCode::Down => InputAction::ScrollDown,
            _ => InputAction::None,
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            state.input.insert_newline();
            InputAction::None
        }
        KeyCode::Enter => InputAction::Submit,
        KeyCode::F(n @ 1..=9) if state.welcome_visible() => {
            InputAction::QuickQuestion(usize::from(n - 1))
        }
        KeyCode::Char('c') if ctrl => {
            state.input.clear();
            InputAction::None
        }
        KeyCode::Esc => {
            state.input.clear();
            InputAction::None
        }
        KeyCode::Backspace => {
            state.input.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            state.input.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            state.input.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            state.input.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            state.input.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            state.input.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up => InputAction::ScrollUp,
        KeyCode::Down => InputAction::ScrollDown,
        KeyCode::Char(_) if ctrl => InputAction::None,
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}
