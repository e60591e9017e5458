//! Core types: chat identity and the formatted response handed to the presentation layer.

mod chat;
mod response;

pub use chat::Chat;
pub use response::{FormattedResponse, ResponseField, ResponseStatus};
