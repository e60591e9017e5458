//! Failure taxonomy of the query flows and its mapping to user-facing responses.

use thiserror::Error;
use wiki_client::WikiError;

use crate::core::{FormattedResponse, ResponseStatus};

/// Which flow a failure happened in; each flow words its messages differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Search,
    Info,
    Random,
    RecentChanges,
    Ai,
}

impl Flow {
    fn action(self) -> &'static str {
        match self {
            Flow::Search => "searching",
            Flow::Info => "getting information",
            Flow::Random => "getting a random page",
            Flow::RecentChanges => "getting recent changes",
            Flow::Ai => "getting AI information",
        }
    }
}

/// Why a flow could not produce its normal response.
#[derive(Error, Debug)]
pub enum QueryError {
    /// Search, random pick, or recent-changes listing came back empty.
    #[error("nothing found for '{subject}'")]
    NotFound { subject: String },

    /// A title was resolved but its content could not be fetched or parsed.
    #[error("content unavailable for '{title}'")]
    ContentUnavailable { title: String },

    #[error(transparent)]
    Transport(#[from] WikiError),

    /// The AI flow was invoked without a summarization credential.
    #[error("summarization credential is not configured")]
    ConfigurationMissing,

    /// The summarization service call failed.
    #[error("summarization failed: {0}")]
    Upstream(String),
}

impl QueryError {
    pub fn status(&self) -> ResponseStatus {
        match self {
            QueryError::NotFound { .. } => ResponseStatus::NotFound,
            QueryError::ContentUnavailable { .. } => ResponseStatus::ContentUnavailable,
            QueryError::Transport(_) => ResponseStatus::TransportFailure,
            QueryError::ConfigurationMissing => ResponseStatus::ConfigurationMissing,
            QueryError::Upstream(_) => ResponseStatus::UpstreamFailure,
        }
    }

    /// The single message the user sees for this failure in `flow`.
    pub fn into_response(self, flow: Flow) -> FormattedResponse {
        let status = self.status();
        let (title, description) = match (&self, flow) {
            (QueryError::NotFound { subject }, Flow::Search) => (
                "No Results Found".to_string(),
                format!("No results found for '{}' on the OSRS Wiki.", subject),
            ),
            (QueryError::NotFound { subject }, Flow::Info | Flow::Ai) => (
                "Topic Not Found".to_string(),
                format!(
                    "Could not find information about '{}' on the OSRS Wiki.",
                    subject
                ),
            ),
            (QueryError::NotFound { .. }, Flow::Random) => (
                "No Random Page".to_string(),
                "Could not retrieve a random page from the OSRS Wiki.".to_string(),
            ),
            (QueryError::NotFound { .. }, Flow::RecentChanges) => (
                "No Recent Changes".to_string(),
                "Could not retrieve recent changes from the OSRS Wiki.".to_string(),
            ),
            (QueryError::ContentUnavailable { title }, _) => (
                "Content Error".to_string(),
                format!("Could not retrieve content for '{}'.", title),
            ),
            (QueryError::ConfigurationMissing, _) => (
                "OpenAI API Key Required".to_string(),
                "This command requires an OpenAI API key to be configured.".to_string(),
            ),
            (QueryError::Transport(_) | QueryError::Upstream(_), _) => (
                "Error".to_string(),
                format!(
                    "An error occurred while {}. Please try again later.",
                    flow.action()
                ),
            ),
        };
        FormattedResponse::failure(status, title, description)
    }
}
