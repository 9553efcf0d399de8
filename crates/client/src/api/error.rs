use reqwest::StatusCode;

use super::paths::PathError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("HTTP status {0}: {1}")]
    HttpStatus(StatusCode, String),
}
