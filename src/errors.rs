use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("http error: {0}")]
    Http(String),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    IO(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self { AppError::IO(format!("{}", e)) }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self { AppError::Http(format!("{}", e)) }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self { AppError::Decode(format!("{}", e)) }
}
