pub mod quiz_service;
pub mod set_service;

pub use quiz_service::QuizService;
pub use set_service::get_available_sets;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    Storage(word_deck::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<word_deck::Error> for ServiceError {
    fn from(err: word_deck::Error) -> Self {
        match err {
            word_deck::Error::UnknownSession(name) => {
                ServiceError::NotFound(format!("Session '{}' not found", name))
            }
            word_deck::Error::InvalidSession(name) => {
                ServiceError::InvalidInput(format!("Invalid session name '{}'", name))
            }
            other => ServiceError::Storage(other),
        }
    }
}
