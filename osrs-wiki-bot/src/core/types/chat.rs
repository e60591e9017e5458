//! Chat identity type for outgoing messages.

use serde::{Deserialize, Serialize};

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}
