use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse content fixture {fixture}: {source}")]
    Parse {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),
    #[error("Difficulty must be between 1 and 5, got {0}")]
    InvalidDifficulty(u8),
}
