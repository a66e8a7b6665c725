//! Word loading and result logging for the vocabulary quiz.
//!
//! Source vocabulary lives in plain CSV files (`word, meaning, ...`), and
//! each quiz run writes its verdicts into a session directory holding a
//! `right.csv` and a `wrong.csv` log.

pub mod loader;
pub mod results;
pub mod session;

pub use loader::{Selection, WordEntry, WordLoader};
pub use results::{ResultLog, ResultRecord, Verdict};
pub use session::SessionStore;

/// Errors surfaced by the result and session side of the crate.
///
/// The loader never returns these; unreadable sources degrade to fewer words.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid session name '{0}'")]
    InvalidSession(String),

    #[error("session '{0}' not found")]
    UnknownSession(String),
}

pub type Result<T> = std::result::Result<T, Error>;
