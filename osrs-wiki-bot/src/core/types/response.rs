//! The unit a query flow hands to the presentation layer.
//!
//! Plain data only: title, body text, link, and an ordered list of named fields. How it is drawn
//! (Telegram text, terminal output, JSON) is up to the caller.

use serde::Serialize;

/// Outcome class of a flow; every failure maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    /// Search or lookup matched nothing.
    NotFound,
    /// A title was found but its content could not be fetched.
    ContentUnavailable,
    /// The wiki could not be reached or answered garbage.
    TransportFailure,
    /// A feature needs a credential that is not configured.
    ConfigurationMissing,
    /// The summarization service failed.
    UpstreamFailure,
}

/// One named entry below the main body (a search hit, a recent change, the section list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ResponseField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A complete reply to one user request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResponse {
    pub status: ResponseStatus,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<ResponseField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl FormattedResponse {
    pub fn ok(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_status(ResponseStatus::Ok, title, description)
    }

    pub fn failure(
        status: ResponseStatus,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::with_status(status, title, description)
    }

    fn with_status(
        status: ResponseStatus,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
            url: None,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_field(mut self, field: ResponseField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}
