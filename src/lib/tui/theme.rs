//! TUI Theme - Consistent, elegant styling
//!
//! Soft cyan for the user and interactive elements, green for the assistant,
//! amber for transient states.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent color - soft cyan blue
pub const ACCENT: Color = Color::Rgb(100, 180, 220);

/// Secondary accent - warm amber for highlights
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Success indicator - soft green
pub const SUCCESS: Color = Color::Rgb(130, 200, 130);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Muted text - for secondary information
pub const MUTED: Color = Color::Rgb(100, 100, 110);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Selected item background
pub const SELECTED_BG: Color = Color::Rgb(50, 60, 80);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Subtitle/secondary text style
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Highlighted/selected item style
pub fn selected() -> Style {
    Style::default()
        .bg(SELECTED_BG)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Typing indicator style
pub fn typing() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Bot message prefix style
pub fn bot_prefix() -> Style {
    Style::default().fg(SUCCESS)
}

/// Feedback prompt style
pub fn feedback_prompt() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::BOLD)
}

/// Feedback confirmation style
pub fn feedback_thanks() -> Style {
    Style::default().fg(SUCCESS)
}

/// Feedback failure style
pub fn feedback_failed() -> Style {
    Style::default().fg(ERROR)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(SUCCESS)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
