use thiserror::Error;

#[derive(Error, Debug)]
pub enum SesameError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),
}

pub type Result<T> = std::result::Result<T, SesameError>;
