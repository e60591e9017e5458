//! Core types and traits: Bot, Chat, FormattedResponse, error, logger.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::{init_cli_tracing, init_tracing};
pub use types::{Chat, FormattedResponse, ResponseField, ResponseStatus};
