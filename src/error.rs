use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store data in {path}: {source}")]
    MalformedStore {
        path: String,
        source: serde_json::Error,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown transaction kind: {0} (expected income or expense)")]
    UnknownKind(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    BadDate(String),

    #[error("Invalid amount: {0}")]
    BadAmount(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ResumoError>;
