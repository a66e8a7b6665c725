use tokio::task;
use tracing::info;
use word_deck::{ResultLog, ResultRecord, Selection, SessionStore, Verdict, WordEntry, WordLoader};

use crate::{config::Config, services::ServiceError};

/// A freshly started quiz run.
#[derive(Debug)]
pub struct StartedQuiz {
    pub words: Vec<WordEntry>,
    pub session: String,
}

/// Runs the quiz flow against the configured words and results directories.
///
/// All file work happens on the blocking pool.
pub struct QuizService {
    loader: WordLoader,
    sessions: SessionStore,
}

impl QuizService {
    pub fn new(config: &Config) -> Self {
        Self {
            loader: config.word_loader(),
            sessions: config.session_store(),
        }
    }

    /// Load the selected sets and open a new session for their results.
    pub async fn start(&self, raw_files: &str) -> Result<StartedQuiz, ServiceError> {
        let selection = Selection::parse(raw_files);
        let loader = self.loader.clone();
        let sessions = self.sessions.clone();

        let (words, session) = task::spawn_blocking(move || {
            let words = loader.load(&selection);
            sessions.create().map(|session| (words, session))
        })
        .await??;

        info!(session = %session, total = words.len(), "quiz started");
        Ok(StartedQuiz { words, session })
    }

    /// Append one verdict to the session's right or wrong log.
    pub async fn save_result(
        &self,
        session: &str,
        word: String,
        meaning: String,
        status: &str,
    ) -> Result<Verdict, ServiceError> {
        let verdict = Verdict::from_status(status);
        let sessions = self.sessions.clone();
        let session = session.to_string();

        task::spawn_blocking(move || {
            let session_dir = sessions.resolve(&session)?;
            ResultLog::for_verdict(&session_dir, verdict).append(&word, &meaning)
        })
        .await??;

        Ok(verdict)
    }

    /// Everything recorded in one of a session's logs, in append order.
    pub async fn read_results(
        &self,
        session: &str,
        file: &str,
    ) -> Result<Vec<ResultRecord>, ServiceError> {
        let verdict = Verdict::parse_log(file).ok_or_else(|| {
            ServiceError::InvalidInput(format!(
                "Unknown results file '{}', expected 'right' or 'wrong'",
                file
            ))
        })?;
        let sessions = self.sessions.clone();
        let session = session.to_string();

        let records = task::spawn_blocking(move || {
            let session_dir = sessions.resolve(&session)?;
            ResultLog::for_verdict(&session_dir, verdict).read_all()
        })
        .await??;
        Ok(records)
    }

    pub async fn list_sessions(&self) -> Result<Vec<String>, ServiceError> {
        let sessions = self.sessions.clone();
        let names = task::spawn_blocking(move || sessions.list()).await??;
        Ok(names)
    }
}
