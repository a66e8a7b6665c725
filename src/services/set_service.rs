use tokio::task;

use crate::{config::Config, services::ServiceError};

/// Sorted file names of the vocabulary sets on offer.
///
/// A missing words directory yields an empty list rather than an error.
pub async fn get_available_sets(config: &Config) -> Result<Vec<String>, ServiceError> {
    let loader = config.word_loader();
    let sets = task::spawn_blocking(move || loader.list_sources()).await?;
    tracing::debug!(count = sets.len(), dir = %config.words_path, "listed sets");
    Ok(sets)
}
