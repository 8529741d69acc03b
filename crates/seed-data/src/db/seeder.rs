//! The reset-and-load procedure.

use thiserror::Error;
use tracing::info;

use crate::payload::{PayloadError, Question};

use super::store::QuestionStore;

/// Failure phases of a seeding run. Every variant is fatal; the binary maps
/// any of them to a non-zero exit.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("failed to clear the question collection: {0}")]
    Delete(#[source] anyhow::Error),

    #[error("failed to insert the question payload: {0}")]
    Insert(#[source] anyhow::Error),

    #[error("invalid question payload: {0}")]
    Payload(#[from] PayloadError),
}

/// What a successful run did.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    /// Documents removed by the wipe.
    pub deleted: u64,
    /// Documents inserted from the payload.
    pub inserted: usize,
}

/// Runs the reset-and-load procedure against a [`QuestionStore`].
pub struct Seeder<S> {
    store: S,
}

impl<S: QuestionStore> Seeder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Replaces the entire contents of the question collection with
    /// `questions`.
    ///
    /// **WARNING**: the wipe is unconditional, with no confirmation, backup,
    /// or dry-run. If the insert fails the wipe is not rolled back and the
    /// collection is left empty.
    pub async fn reset(&self, questions: &[Question]) -> Result<SeedSummary, SeedError> {
        info!("Clearing the question collection...");
        let deleted = self.store.delete_all().await.map_err(SeedError::Delete)?;
        info!("Removed {deleted} existing documents");

        info!("Inserting {} questions...", questions.len());
        let inserted = self
            .store
            .insert_all(questions)
            .await
            .map_err(SeedError::Insert)?;
        info!("Inserted {inserted} questions");

        Ok(SeedSummary { deleted, inserted })
    }
}
