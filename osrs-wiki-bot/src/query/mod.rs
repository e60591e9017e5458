//! Query orchestration: composes wiki client calls into the user-facing flows (search, info,
//! random, recent changes, AI-enhanced info) and maps every failure to a response.

mod error;
mod limits;
mod service;

pub use error::{Flow, QueryError};
pub use limits::{
    clamp_recent_limit, AI_WIKI_TEXT_CAP, COMMENT_CAP, INFO_SECTION_LIMIT, INFO_TEXT_CAP,
    RANDOM_TEXT_CAP, RECENT_DEFAULT_LIMIT, RECENT_MAX_LIMIT, SEARCH_DISPLAY_LIMIT, SNIPPET_CAP,
};
pub use service::WikiQueryService;
