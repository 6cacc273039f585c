pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::{ChatClient, ChatSession, client, session};
pub use cli::{Cli, FeedbackArg, RunMode};
pub use config::{AppConfig, ConfigError};
pub use domain::types;
pub use infrastructure::backend;

use backend::HttpBackend;
use serde_json::json;
use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let log_file = match cli.log_file.as_deref() {
        Some(path) => Some(open_log_file(&expand_path(path)?)?),
        None => None,
    };
    // the TUI owns the screen, so it only logs to an explicit file
    let quiet = cli.mode == RunMode::Tui && log_file.is_none();
    init_tracing(quiet, log_file);
    info!("Starting counsel-chat");
    debug!(mode = ?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(expand_path).transpose()?;
    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    config.apply_env_overrides(|key| std::env::var(key).ok())?;
    if let Some(url) = &cli.backend_url {
        info!(url = %url, "Overriding backend url from CLI flag");
        config.set_backend_url(url.clone())?;
    }

    let backend = Arc::new(HttpBackend::with_timeout(
        config.backend_url.clone(),
        config.request_timeout,
    )?);

    info!(mode = ?cli.mode, backend = %config.backend_url, "Running client in selected mode");
    match cli.mode {
        RunMode::Tui => {
            tui::screens::run_chat(backend, &config).await?;
        }
        RunMode::Ask => {
            run_ask(&cli, backend).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

async fn run_ask(cli: &Cli, backend: Arc<HttpBackend>) -> Result<(), Box<dyn Error>> {
    let prompt = load_prompt(cli)?;
    let mut client = ChatClient::new(backend);
    client.set_draft(prompt.clone());

    let Some(report) = client.send_message().await else {
        return Err("prompt must not be blank".into());
    };
    let reply = client
        .session()
        .message(report.bot_message)
        .map(|m| m.content().to_string())
        .unwrap_or_default();

    let feedback = match cli.feedback {
        Some(vote) if report.delivered => client
            .submit_feedback(report.bot_message, vote.into())
            .await
            .map(|notice| notice.text()),
        Some(_) => {
            warn!("Skipping feedback: the reply was not delivered");
            None
        }
        None => None,
    };

    let output = json!({
        "message": prompt,
        "reply": reply,
        "delivered": report.delivered,
        "feedback": feedback,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if let Some(path) = &cli.prompt_file {
        info!(path = %path, "Loading prompt from file");
        let content = fs::read_to_string(expand_path(path)?)?;
        return Ok(content.trim().to_string());
    }

    if !cli.prompt.is_empty() {
        info!("Using prompt provided through CLI arguments");
        return Ok(cli.prompt.join(" ").trim().to_string());
    }

    if !io::stdin().is_terminal() {
        info!("Reading prompt from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer.trim().to_string());
    }

    warn!("Prompt not provided via arguments, file, or stdin");
    Err("prompt required via arguments, file, or stdin".into())
}

fn expand_path(path: &str) -> Result<PathBuf, Box<dyn Error>> {
    Ok(PathBuf::from(shellexpand::full(path)?.into_owned()))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn init_tracing(quiet: bool, log_file: Option<File>) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        let builder = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true);
        match log_file {
            Some(file) => builder.with_writer(Mutex::new(file)).with_ansi(false).init(),
            None => builder.with_writer(io::stderr).init(),
        }
    });
}
