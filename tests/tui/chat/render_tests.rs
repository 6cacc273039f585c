//! Chat screen rendering tests

use counsel_chat::ChatSession;
use counsel_chat::backend::BackendError;
use counsel_chat::config::AppConfig;
use counsel_chat::constants::{CHAT_FALLBACK_TEXT, FEEDBACK_PROMPT_TEXT, MAX_INPUT_ROWS};
use counsel_chat::tui::screens::chat::ChatUI;
use counsel_chat::types::{MessageId, Vote};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use reqwest::StatusCode;

fn render(state: &mut ChatSession, config: &AppConfig) -> String {
    render_sized(state, config, 100, 40)
}

fn render_sized(state: &mut ChatSession, config: &AppConfig, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal
        .draw(|frame| ChatUI::render(frame, state, config))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Height of the bordered input box, corners included
fn input_box_height(screen: &str) -> usize {
    let rows: Vec<&str> = screen.lines().collect();
    let top = rows.iter().position(|r| r.starts_with('┌')).expect("input top border");
    let bottom = rows.iter().position(|r| r.starts_with('└')).expect("input bottom border");
    bottom - top + 1
}

fn long_text(words: usize, tail: &str) -> String {
    let mut text: Vec<String> = (0..words).map(|i| format!("word{i:02}")).collect();
    text.push(tail.to_string());
    text.join(" ")
}

fn reply(state: &mut ChatSession, text: &str, answer: &str) -> MessageId {
    state.input.set_draft(text);
    let pending = state.begin_send().expect("send");
    state
        .complete_send(pending, Ok(answer.to_string()))
        .bot_message
}

#[test]
fn test_welcome_panel_lists_quick_questions() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();

    let screen = render(&mut state, &config);

    assert!(screen.contains(&config.welcome.title));
    assert!(screen.contains("Quick questions:"));
    assert!(screen.contains("F1"));
    assert!(screen.contains(&config.welcome.quick_questions[0]));
    assert!(screen.contains("Type your message..."));
}

#[test]
fn test_welcome_panel_hidden_after_first_send() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", "Hi there");

    let screen = render(&mut state, &config);

    assert!(!screen.contains("Quick questions:"));
    assert!(screen.contains("You: Hello"));
    assert!(screen.contains("Bot: Hi there"));
}

#[test]
fn test_typing_indicator_and_locked_input_while_waiting() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    state.input.set_draft("Hello");
    let pending = state.begin_send().expect("send");

    let screen = render(&mut state, &config);
    assert!(screen.contains("Typing..."));
    assert!(screen.contains("Waiting for response..."));

    state.complete_send(pending, Ok("Hi there".to_string()));
    let screen = render(&mut state, &config);
    assert!(!screen.contains("Typing..."));
    assert!(!screen.contains("Waiting for response..."));
}

#[test]
fn test_reply_shows_feedback_prompt() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", "Hi there");

    let screen = render(&mut state, &config);

    assert!(screen.contains(FEEDBACK_PROMPT_TEXT));
    assert!(screen.contains("[y] Yes"));
    assert!(screen.contains("[n] No"));
}

#[test]
fn test_fallback_reply_has_no_feedback_prompt() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    state.input.set_draft("Test");
    let pending = state.begin_send().expect("send");
    state.complete_send(
        pending,
        Err(BackendError::status(
            "http://127.0.0.1:5000/chat",
            StatusCode::INTERNAL_SERVER_ERROR,
        )),
    );

    let screen = render(&mut state, &config);

    assert!(screen.contains(CHAT_FALLBACK_TEXT));
    assert!(!screen.contains(FEEDBACK_PROMPT_TEXT));
}

#[test]
fn test_feedback_notices_replace_the_prompt() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    let first = reply(&mut state, "one", "first reply");
    let second = reply(&mut state, "two", "second reply");

    let pending = state.begin_feedback(first, Vote::Yes).expect("vote");
    let screen = render(&mut state, &config);
    assert!(screen.contains("Sending feedback..."));

    state.complete_feedback(pending, Ok(()));
    let pending = state.begin_feedback(second, Vote::No).expect("vote");
    state.complete_feedback(
        pending,
        Err(BackendError::status(
            "http://127.0.0.1:5000/feedback",
            StatusCode::BAD_GATEWAY,
        )),
    );

    let screen = render(&mut state, &config);
    assert!(screen.contains("Thank you for your feedback!"));
    assert!(screen.contains("Unable to submit feedback. Please try again."));
    assert!(!screen.contains(FEEDBACK_PROMPT_TEXT));
}

#[test]
fn test_selected_affordance_is_marked_in_transcript_focus() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", "Hi there");

    assert!(!render(&mut state, &config).contains('▶'));

    state.focus_transcript();
    let screen = render(&mut state, &config);
    assert!(screen.contains(&format!("▶ {FEEDBACK_PROMPT_TEXT}")));
    assert!(screen.contains("y/n"));
}

#[test]
fn test_draft_is_rendered_with_cursor() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    state.input.set_draft("draft text");

    let screen = render(&mut state, &config);
    assert!(screen.contains("> draft text_"));
}

#[test]
fn test_render_measures_scroll_bound() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    for i in 0..20 {
        reply(&mut state, &format!("question {i}"), &format!("answer {i}"));
    }

    let screen = render(&mut state, &config);

    assert!(state.max_scroll > 0);
    // following the newest entry keeps the last reply on screen
    assert!(screen.contains("answer 19"));
    assert!(!screen.contains("question 0 "));
}

#[test]
fn test_long_reply_is_scrolled_into_view() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", &long_text(60, "THE_END"));

    let screen = render_sized(&mut state, &config, 40, 20);

    assert!(state.max_scroll > 0);
    assert!(screen.contains("THE_END"));
}

#[test]
fn test_long_reply_tail_returns_after_scrolling_back() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", &long_text(60, "THE_END"));
    render_sized(&mut state, &config, 40, 20);

    state.scroll_offset = 0;
    let screen = render_sized(&mut state, &config, 40, 20);
    assert!(screen.contains("You: Hello"));
    assert!(!screen.contains("THE_END"));

    for _ in 0..state.max_scroll {
        state.scroll_down();
    }
    let screen = render_sized(&mut state, &config, 40, 20);
    assert!(screen.contains("THE_END"));

    state.scroll_offset = 0;
    state.scroll_to_bottom();
    let screen = render_sized(&mut state, &config, 40, 20);
    assert!(screen.contains("THE_END"));
}

#[test]
fn test_render_records_viewport_for_paging() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    reply(&mut state, "Hello", "Hi there");

    render_sized(&mut state, &config, 40, 20);

    // 20 rows less the status bar, a one-row input box and the help bar
    assert_eq!(state.viewport_rows, 13);
}

#[test]
fn test_input_box_grows_with_draft_lines() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    assert_eq!(input_box_height(&render(&mut state, &config)), 3);

    state.input.set_draft("a\nb\nc");
    assert_eq!(input_box_height(&render(&mut state, &config)), 5);

    state.input.set_draft("1\n2\n3\n4\n5\n6\n7\n8");
    let screen = render(&mut state, &config);
    assert_eq!(input_box_height(&screen), MAX_INPUT_ROWS + 2);
    // the newest rows stay visible
    assert!(screen.contains("  8_"));
}

#[test]
fn test_wide_draft_wraps_inside_the_input_box() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    state.input.set_draft(long_text(10, "TAIL"));

    let screen = render_sized(&mut state, &config, 40, 20);

    assert!(input_box_height(&screen) > 3);
    assert!(screen.contains("TAIL_"));
}

#[test]
fn test_input_box_follows_the_cursor() {
    let config = AppConfig::default();
    let mut state = ChatSession::new();
    state.input.set_draft(long_text(40, "TAIL"));

    let screen = render_sized(&mut state, &config, 40, 20);
    assert_eq!(input_box_height(&screen), MAX_INPUT_ROWS + 2);
    assert!(screen.contains("TAIL_"));
    assert!(!screen.contains("> word00"));

    state.input.move_cursor_home();
    let screen = render_sized(&mut state, &config, 40, 20);
    assert!(screen.contains("> |word00"));
    assert!(!screen.contains("TAIL"));
}
