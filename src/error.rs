use thiserror::Error;

use crate::entity::{EntityKind, ScopeKind};

#[derive(Debug, Error)]
pub enum CrmfindError {
    #[error("Unknown entity '{0}'. Expected one of: lead, task, account")]
    UnknownEntity(String),

    #[error("Search event receiver is gone; request for {0} was dropped")]
    EventChannelClosed(String),

    #[error("No saved filter named '{0}'")]
    UnknownSavedFilter(String),

    #[error(
        "No current {} id: set [session] {}_id in the config or pass --scope",
        .0.label(),
        .0.label()
    )]
    MissingScope(ScopeKind),

    #[error("{0}")]
    InvalidConfig(String),

    #[error("No {0} search was dispatched")]
    NothingSubmitted(EntityKind),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize criteria: {0}")]
    Json(#[from] serde_json::Error),
}
