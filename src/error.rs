use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuickdeskError {
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("no ticket '{0}' on this page")]
    UnknownTicket(String),

    #[error("server rejected update: HTTP {0}")]
    Rejected(reqwest::StatusCode),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),
}

impl QuickdeskError {
    /// True for application-level failures, i.e. the server answered with a
    /// non-2xx status. Transport failures return false.
    pub fn is_rejection(&self) -> bool {
        matches!(self, QuickdeskError::Rejected(_))
    }
}

pub type Result<T> = std::result::Result<T, QuickdeskError>;
