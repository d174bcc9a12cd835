use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Store errors
    #[error("invalid ID provided: {0}")]
    InvalidArgument(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("could not find provided cursor: {0}")]
    CursorNotFound(String),

    #[error("store lock poisoned")]
    LockPoisoned,

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsError {
    /// Errors raised while talking to a feed provider rather than by the stores.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            NewsError::Http(_) | NewsError::FeedParse(_) | NewsError::InvalidUrl(_)
        )
    }
}

pub type NewsResult<T> = Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_messages_name_the_failure() {
        assert_eq!(
            NewsError::InvalidArgument("empty".to_string()).to_string(),
            "invalid ID provided: empty"
        );
        assert_eq!(
            NewsError::NotFound("abc".to_string()).to_string(),
            "resource not found: abc"
        );
        assert!(NewsError::CursorNotFound("c".to_string())
            .to_string()
            .contains("could not find provided cursor"));
    }

    #[test]
    fn test_upstream_classification() {
        assert!(NewsError::FeedParse("bad xml".to_string()).is_upstream());
        assert!(NewsError::InvalidUrl("nope".to_string()).is_upstream());
        assert!(!NewsError::NotFound("x".to_string()).is_upstream());
        assert!(!NewsError::LockPoisoned.is_upstream());
    }
}
