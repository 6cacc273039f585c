//! Chat runner - main event loop coordinator

use super::input::{InputAction, handle_input};
use super::ui::ChatUI;
use crate::application::{ChatSession, PendingFeedback, PendingSend};
use crate::config::AppConfig;
use crate::domain::Vote;
use crate::infrastructure::backend::{Backend, BackendError};
use crate::tui::terminal::{Tui, init_terminal, install_panic_hook, restore_terminal};
use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Result of chat session
pub enum ChatResult {
    Exit,
}

/// Settled backend calls, carrying the token of the transition they complete
enum ResponseEvent {
    Chat {
        pending: PendingSend,
        outcome: Result<String, BackendError>,
    },
    Feedback {
        pending: PendingFeedback,
        outcome: Result<(), BackendError>,
    },
}

/// Run the TUI chat interface
pub async fn run_chat<B>(backend: Arc<B>, config: &AppConfig) -> Result<ChatResult, Box<dyn Error>>
where
    B: Backend + 'static,
{
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut state = ChatSession::new();

    let result = run_chat_loop(&mut terminal, &mut state, backend, config).await;

    restore_terminal()?;
    info!(messages = state.transcript().len(), "Chat closed");
    result
}

/// Internal chat loop
async fn run_chat_loop<B>(
    terminal: &mut Tui,
    state: &mut ChatSession,
    backend: Arc<B>,
    config: &AppConfig,
) -> Result<ChatResult, Box<dyn Error>>
where
    B: Backend + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, config);
        })?;
        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Chat { pending, outcome } => {
                    state.complete_send(pending, outcome);
                }
                ResponseEvent::Feedback { pending, outcome } => {
                    state.complete_feedback(pending, outcome);
                }
            }
        }
        let timeout = if state.typing_visible() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(ChatResult::Exit);
                }

                InputAction::Submit => {
                    if let Some(pending) = state.begin_send() {
                        spawn_chat(backend.clone(), pending, response_tx.clone());
                    }
                }

                InputAction::QuickQuestion(idx) => {
                    let Some(question) = config.welcome.quick_questions.get(idx) else {
                        debug!(idx, "No quick question bound to this key");
                        continue;
                    };
                    if let Some(pending) = state.submit_quick_question(question) {
                        spawn_chat(backend.clone(), pending, response_tx.clone());
                    }
                }

                InputAction::Vote(vote) => {
                    vote_on_selected(state, vote, &backend, &response_tx);
                }

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    state.scroll_down();
                }

                InputAction::PageUp => {
                    state.page_up();
                }

                InputAction::PageDown => {
                    state.page_down();
                }

                InputAction::ScrollTop => {
                    state.scroll_offset = 0;
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else {
            state.tick_typing();
        }
    }
}

fn vote_on_selected<B>(
    state: &mut ChatSession,
    vote: Vote,
    backend: &Arc<B>,
    tx: &mpsc::Sender<ResponseEvent>,
) where
    B: Backend + 'static,
{
    let Some(target) = state.selected_feedback() else {
        debug!("Vote ignored: no reply is awaiting feedback");
        return;
    };
    let Some(pending) = state.begin_feedback(target, vote) else {
        return;
    };

    let backend = backend.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = backend.feedback(pending.record()).await;
        let _ = tx.send(ResponseEvent::Feedback { pending, outcome }).await;
    });
}

fn spawn_chat<B>(backend: Arc<B>, pending: PendingSend, tx: mpsc::Sender<ResponseEvent>)
where
    B: Backend + 'static,
{
    tokio::spawn(async move {
        let outcome = backend.chat(pending.text()).await;
        let _ = tx.send(ResponseEvent::Chat { pending, outcome }).await;
    });
}
