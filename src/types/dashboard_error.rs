use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("unknown filter field: {0}")]
    UnknownFilterField(String),
    #[error("invalid health value: {0}")]
    InvalidHealth(String),
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("a load is already in progress")]
    LoadInProgress,
}
