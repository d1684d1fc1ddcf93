use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The server answered, but not with a success status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(String),
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> LoadError {
        LoadError::Csv(error.to_string())
    }
}
