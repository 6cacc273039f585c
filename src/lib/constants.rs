//! Application constants
//!
//! Single source of truth for paths and fixed user-facing texts.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/client.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable overriding the backend base URL
pub const BACKEND_URL_ENV: &str = "COUNSEL_CHAT_BACKEND_URL";

/// Bot reply rendered whenever a chat request fails
pub const CHAT_FALLBACK_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// Question shown above the vote buttons
pub const FEEDBACK_PROMPT_TEXT: &str = "Was this answer helpful?";

pub const FEEDBACK_THANKS_TEXT: &str =
    "Thank you for your feedback! It helps us improve our service.";

pub const FEEDBACK_FAILED_TEXT: &str = "Unable to submit feedback. Please try again.";

/// Maximum number of draft rows before the input box stops growing
pub const MAX_INPUT_ROWS: usize = 5;
