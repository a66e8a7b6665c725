use std::path::PathBuf;

use word_deck::{SessionStore, WordLoader};

#[derive(Clone, Debug)]
pub struct Config {
    pub words_path: String,
    pub results_path: String,
    pub bind_address: String,
}

impl Config {
    pub fn new(
        words_path: impl Into<String>,
        results_path: impl Into<String>,
        bind_address: impl Into<String>,
    ) -> Self {
        Self {
            words_path: words_path.into(),
            results_path: results_path.into(),
            bind_address: bind_address.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            words_path: std::env::var("WORDS_PATH")
                .unwrap_or_else(|_| "./GRE".to_string()),
            results_path: std::env::var("RESULTS_PATH")
                .unwrap_or_else(|_| "./results".to_string()),
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "127.0.0.1:5000".to_string()),
        }
    }

    pub fn words_dir(&self) -> PathBuf {
        PathBuf::from(&self.words_path)
    }

    pub fn results_dir(&self) -> PathBuf {
        PathBuf::from(&self.results_path)
    }

    pub fn word_loader(&self) -> WordLoader {
        WordLoader::new(self.words_dir())
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.results_dir())
    }
}
