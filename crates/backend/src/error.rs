use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("content backend request failed")]
    Http(#[from] reqwest::Error),

    #[error("content backend rejected the request (status {status})")]
    Rejected { status: u16, body: String },
}
