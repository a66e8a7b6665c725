use word_deck::WordEntry;

#[derive(serde::Deserialize)]
pub struct StartForm {
    pub files: String,
}

#[derive(serde::Serialize)]
pub struct StartResponse {
    pub words: Vec<WordEntry>,
    pub total: usize,
    pub session: String,
}

#[derive(serde::Deserialize)]
pub struct SaveResultForm {
    pub session: String,
    pub word: String,
    pub meaning: String,
    pub status: String,
}

#[derive(serde::Deserialize)]
pub struct ResultsQuery {
    pub session: String,
    pub file: String,
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
