//! Storage backends for the question collection.

use anyhow::Context;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::config::SeedConfig;
use crate::payload::Question;

use super::SeedError;

/// The two collection operations the seeder consumes.
///
/// The trait exists so the reset procedure can be exercised against a test
/// double; production code only ever uses [`MongoStore`].
#[allow(async_fn_in_trait)]
pub trait QuestionStore {
    /// Removes every document in the question collection, returning the
    /// number of documents deleted.
    async fn delete_all(&self) -> anyhow::Result<u64>;

    /// Bulk-inserts the full payload in one call, returning the number of
    /// documents inserted.
    async fn insert_all(&self, questions: &[Question]) -> anyhow::Result<usize>;
}

/// Question storage backed by a MongoDB collection.
#[derive(Debug)]
pub struct MongoStore {
    collection: Collection<Question>,
}

impl MongoStore {
    /// Connects to the deployment named by `config` and pings it, so an
    /// unreachable endpoint fails the run before anything is deleted.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(SeedError::Connect)?;

        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(SeedError::Connect)?;

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }

    /// Returns the underlying collection handle for advanced usage.
    pub fn collection(&self) -> &Collection<Question> {
        &self.collection
    }
}

impl QuestionStore for MongoStore {
    async fn delete_all(&self) -> anyhow::Result<u64> {
        let result = self
            .collection
            .delete_many(doc! {})
            .await
            .context("delete_many on the question collection failed")?;
        Ok(result.deleted_count)
    }

    async fn insert_all(&self, questions: &[Question]) -> anyhow::Result<usize> {
        // The driver rejects an empty insert_many.
        if questions.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection
            .insert_many(questions)
            .await
            .context("insert_many on the question collection failed")?;
        Ok(result.inserted_ids.len())
    }
}
