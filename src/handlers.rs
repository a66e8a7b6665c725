use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use word_deck::ResultRecord;

use crate::{
    config::Config,
    services::{get_available_sets, QuizService, ServiceError},
    types::{ErrorResponse, ResultsQuery, SaveResultForm, StartForm, StartResponse},
};

pub async fn list_sets(
    State(config): State<Arc<Config>>,
) -> Result<Json<Vec<String>>, ServiceError> {
    let sets = get_available_sets(&config).await?;
    Ok(Json(sets))
}

pub async fn start(
    State(config): State<Arc<Config>>,
    Form(form): Form<StartForm>,
) -> Result<Json<StartResponse>, ServiceError> {
    let quiz = QuizService::new(&config).start(&form.files).await?;

    Ok(Json(StartResponse {
        total: quiz.words.len(),
        words: quiz.words,
        session: quiz.session,
    }))
}

pub async fn save_result(
    State(config): State<Arc<Config>>,
    Form(form): Form<SaveResultForm>,
) -> Result<&'static str, ServiceError> {
    QuizService::new(&config)
        .save_result(&form.session, form.word, form.meaning, &form.status)
        .await?;
    Ok("OK")
}

pub async fn get_results(
    State(config): State<Arc<Config>>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Vec<ResultRecord>>, ServiceError> {
    let records = QuizService::new(&config)
        .read_results(&query.session, &query.file)
        .await?;
    Ok(Json(records))
}

pub async fn list_sessions(
    State(config): State<Arc<Config>>,
) -> Result<Json<Vec<String>>, ServiceError> {
    let sessions = QuizService::new(&config).list_sessions().await?;
    Ok(Json(sessions))
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::NotFound(msg) => create_error_response(StatusCode::NOT_FOUND, &msg),
            ServiceError::InvalidInput(msg) => {
                create_error_response(StatusCode::UNPROCESSABLE_ENTITY, &msg)
            }
            other => {
                tracing::error!(error = %other, "request failed");
                create_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

fn create_error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
