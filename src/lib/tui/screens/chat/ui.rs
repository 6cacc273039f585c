//! Chat UI rendering components

use crate::application::{ChatSession, Focus};
use crate::config::AppConfig;
use crate::constants::{FEEDBACK_PROMPT_TEXT, MAX_INPUT_ROWS};
use crate::domain::{FeedbackNotice, FeedbackState, Message, Sender};
use crate::tui::theme;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Main chat UI renderer
pub struct ChatUI;

impl ChatUI {
    /// Render the complete chat interface
    pub fn render(frame: &mut Frame, state: &mut ChatSession, config: &AppConfig) {
        let area = frame.area();
        let input_height = Self::input_rows(state, area.width.saturating_sub(2)) as u16 + 2;

        // Layout: Status bar, Messages, Input, Help bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Status bar
                Constraint::Min(5),               // Messages area
                Constraint::Length(input_height), // Input area
                Constraint::Length(1),            // Help bar
            ])
            .split(area);

        Self::render_status_bar(frame, chunks[0], state, config);
        Self::render_messages(frame, chunks[1], state, config);
        Self::render_input(frame, chunks[2], state);
        Self::render_help_bar(frame, chunks[3], state);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &ChatSession, config: &AppConfig) {
        let typing_indicator = if state.typing_visible() {
            Span::styled(
                format!(" {} ", SPINNER[state.typing_frame % SPINNER.len()]),
                theme::typing(),
            )
        } else {
            Span::raw("")
        };

        let status_msg = state
            .status_message
            .as_ref()
            .map(|s| Span::styled(format!(" │ {} ", s), theme::feedback_failed()))
            .unwrap_or_else(|| Span::raw(""));

        let status_line = Line::from(vec![
            Span::styled(" 💬 ", theme::title()),
            Span::styled(format!("{} ", config.welcome.title), theme::title()),
            Span::styled("│ ", theme::border()),
            Span::styled(config.backend_url.clone(), theme::subtitle()),
            typing_indicator,
            status_msg,
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme::border());

        frame.render_widget(Paragraph::new(status_line).block(block), area);
    }

    /// Render messages area
    fn render_messages(frame: &mut Frame, area: Rect, state: &mut ChatSession, config: &AppConfig) {
        let inner_height = area.height as usize;
        let mut lines: Vec<Line> = Vec::new();

        if state.welcome_visible() {
            Self::push_welcome(&mut lines, config);
        }

        let selected = match state.focus() {
            Focus::Transcript => state.selected_feedback(),
            Focus::Input => None,
        };

        for msg in state.transcript() {
            Self::push_message(&mut lines, msg);
            if let Some(feedback) = state.feedback_state(msg.id()) {
                lines.push(Self::feedback_line(feedback, selected == Some(msg.id())));
            }
            // Empty line between messages
            lines.push(Line::from(""));
        }

        if state.typing_visible() {
            lines.push(Line::from(vec![
                Span::styled("Bot: ", theme::bot_prefix()),
                Span::styled(
                    format!("{} Typing...", SPINNER[state.typing_frame % SPINNER.len()]),
                    theme::typing(),
                ),
            ]));
        }

        // long replies wrap, so the bound is measured in screen rows
        let inner_width = area.width.saturating_sub(2);
        let content_rows = wrapped_rows(lines.clone(), inner_width);
        let max_scroll = content_rows
            .saturating_sub(inner_height)
            .min(usize::from(u16::MAX - 1)) as u16;
        state.max_scroll = max_scroll;
        state.viewport_rows = area.height;
        let scroll = state.scroll_offset.min(max_scroll);

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(if state.focus() == Focus::Transcript {
                theme::border_active()
            } else {
                theme::border()
            });

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));

        frame.render_widget(para, area);
    }

    fn push_welcome(lines: &mut Vec<Line<'_>>, config: &AppConfig) {
        let welcome = &config.welcome;
        lines.push(Line::from(Span::styled(welcome.title.clone(), theme::title())));
        lines.push(Line::from(Span::styled(welcome.text.clone(), theme::text())));
        lines.push(Line::from(""));
        if !welcome.quick_questions.is_empty() {
            lines.push(Line::from(Span::styled("Quick questions:", theme::subtitle())));
            for (idx, question) in welcome.quick_questions.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  F{} ", idx + 1), theme::key_hint()),
                    Span::styled(question.clone(), theme::text()),
                ]));
            }
            lines.push(Line::from(""));
        }
    }

    fn push_message(lines: &mut Vec<Line<'_>>, msg: &Message) {
        let (prefix, style) = match msg.sender() {
            Sender::User => ("You: ", theme::user_prefix()),
            Sender::Bot => ("Bot: ", theme::bot_prefix()),
        };
        let time = msg.created_at().format("%H:%M").to_string();

        let mut content_lines = msg.content().lines();
        let first_line = content_lines.next().unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(first_line.to_string(), theme::text()),
            Span::styled(format!("  {time}"), theme::subtitle()),
        ]));

        // Continuation lines with indent
        let indent = " ".repeat(prefix.len());
        for line in content_lines {
            lines.push(Line::from(format!("{}{}", indent, line)));
        }
    }

    fn feedback_line(feedback: FeedbackState, selected: bool) -> Line<'static> {
        let marker = if selected { "▶ " } else { "  " };
        match feedback {
            FeedbackState::Active => {
                let prompt_style = if selected {
                    theme::selected()
                } else {
                    theme::feedback_prompt()
                };
                Line::from(vec![
                    Span::styled(marker, theme::key_hint()),
                    Span::styled(FEEDBACK_PROMPT_TEXT, prompt_style),
                    Span::styled("  [y]", theme::key_hint()),
                    Span::raw(" Yes  "),
                    Span::styled("[n]", theme::key_destructive()),
                    Span::raw(" No"),
                ])
            }
            FeedbackState::Pending(_) => Line::from(vec![
                Span::raw(marker),
                Span::styled("Sending feedback...", theme::typing()),
            ]),
            FeedbackState::Resolved(FeedbackNotice::Thanks) => Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("✓ {}", FeedbackNotice::Thanks.text()),
                    theme::feedback_thanks(),
                ),
            ]),
            FeedbackState::Resolved(FeedbackNotice::Failed) => Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("! {}", FeedbackNotice::Failed.text()),
                    theme::feedback_failed(),
                ),
            ]),
        }
    }

    /// Rows the input box needs at this inner width
    fn input_rows(state: &ChatSession, width: u16) -> usize {
        wrapped_rows(Self::input_lines(state), width).clamp(1, MAX_INPUT_ROWS)
    }

    fn input_lines(state: &ChatSession) -> Vec<Line<'static>> {
        let prompt = Span::styled("> ", theme::user_prefix());
        if state.input.is_locked() {
            vec![Line::from(vec![
                prompt,
                Span::styled("Waiting for response...", theme::footer()),
            ])]
        } else if state.input.is_empty() {
            vec![Line::from(vec![
                prompt,
                Span::styled("Type your message...", theme::footer()),
            ])]
        } else {
            draft_lines(&draft_with_cursor(state).0)
        }
    }

    /// Render input area
    fn render_input(frame: &mut Frame, area: Rect, state: &ChatSession) {
        let locked = state.input.is_locked();
        let lines = Self::input_lines(state);

        // keep the cursor row visible once the draft outgrows the box
        let inner_width = area.width.saturating_sub(2);
        let visible_rows = area.height.saturating_sub(2) as usize;
        let cursor_row = if locked || state.input.is_empty() {
            1
        } else {
            wrapped_rows(draft_lines(&draft_with_cursor(state).1), inner_width)
        };
        let scroll = cursor_row.saturating_sub(visible_rows) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if locked || state.focus() != Focus::Input {
                theme::border()
            } else {
                theme::border_active()
            })
            .title(" Message ");

        let para = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(para, area);
    }

    /// Render help bar
    fn render_help_bar(frame: &mut Frame, area: Rect, state: &ChatSession) {
        let help_text = match state.focus() {
            Focus::Transcript => Line::from(vec![
                Span::styled(" ↑/↓", theme::key_hint()),
                Span::styled(": Select reply │ ", theme::footer()),
                Span::styled("y/n", theme::key_hint()),
                Span::styled(": Vote │ ", theme::footer()),
                Span::styled("Tab", theme::key_hint()),
                Span::styled(": Back to input │ ", theme::footer()),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::styled(": Exit ", theme::footer()),
            ]),
            Focus::Input if state.is_busy() => Line::from(vec![
                Span::styled(" Waiting for the assistant... ", theme::typing()),
                Span::styled("Tab", theme::key_hint()),
                Span::styled(": Feedback │ ", theme::footer()),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::styled(": Exit ", theme::footer()),
            ]),
            Focus::Input => Line::from(vec![
                Span::styled(" Enter", theme::key_hint()),
                Span::styled(": Send │ ", theme::footer()),
                Span::styled("Alt+Enter", theme::key_hint()),
                Span::styled(": Newline │ ", theme::footer()),
                Span::styled("Tab", theme::key_hint()),
                Span::styled(": Feedback │ ", theme::footer()),
                Span::styled("PageUp/Down", theme::key_hint()),
                Span::styled(": Scroll │ ", theme::footer()),
                Span::styled("Ctrl+Q", theme::key_destructive()),
                Span::styled(": Exit ", theme::footer()),
            ]),
        };

        frame.render_widget(Paragraph::new(help_text), area);
    }
}

/// Screen rows `lines` occupy when wrapped to `width` columns
fn wrapped_rows(lines: Vec<Line<'_>>, width: u16) -> usize {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// The draft with a cursor marker, and the same text cut just after the marker
fn draft_with_cursor(state: &ChatSession) -> (String, String) {
    let mut chars: Vec<char> = state.input.draft().chars().collect();
    let cursor = state.input.cursor().min(chars.len());
    if cursor == chars.len() {
        chars.push('_');
    } else {
        chars.insert(cursor, '|');
    }
    let upto_cursor: String = chars[..=cursor].iter().collect();
    (chars.into_iter().collect(), upto_cursor)
}

fn draft_lines(display: &str) -> Vec<Line<'static>> {
    display
        .split('\n')
        .enumerate()
        .map(|(idx, row)| {
            let lead = if idx == 0 { "> " } else { "  " };
            Line::from(vec![
                Span::styled(lead, theme::user_prefix()),
                Span::styled(row.to_string(), theme::text()),
            ])
        })
        .collect()
}
