use clap::{Parser, ValueEnum};

use crate::domain::Vote;

#[derive(Parser, Debug)]
#[command(
    name = "counsel-chat",
    version,
    about = "Terminal chat client for the EduCounselor assistant"
)]
pub struct Cli {
    /// Backend base URL, overrides config and environment
    #[arg(long)]
    pub backend_url: Option<String>,
    #[arg(long)]
    pub config: Option<String>,
    #[arg(long, short, value_enum, default_value_t = RunMode::Tui)]
    pub mode: RunMode,
    /// Vote on the reply in ask mode
    #[arg(long, value_enum)]
    pub feedback: Option<FeedbackArg>,
    #[arg(long)]
    pub prompt_file: Option<String>,
    /// Write logs to this file (the TUI is otherwise silent)
    #[arg(long)]
    pub log_file: Option<String>,
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RunMode {
    /// Interactive terminal chat
    Tui,
    /// Send one message, print the reply as JSON and exit
    Ask,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FeedbackArg {
    Yes,
    No,
}

impl From<FeedbackArg> for Vote {
    fn from(arg: FeedbackArg) -> Self {
        match arg {
            FeedbackArg::Yes => Vote::Yes,
            FeedbackArg::No => Vote::No,
        }
    }
}
