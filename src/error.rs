use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeroScoutError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<HeroScoutError> for String {
    fn from(err: HeroScoutError) -> Self {
        err.to_string()
    }
}
