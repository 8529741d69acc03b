//! Connection settings for seeding runs.

/// Where the seeder writes: a MongoDB deployment, a database, a collection.
///
/// Everything defaults to the local development stack so `cargo run --bin
/// seed` works out of the box; overrides come from the environment.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub uri: String,
    /// Database holding the quiz content.
    pub database: String,
    /// Collection the question payload is loaded into.
    pub collection: String,
}

impl SeedConfig {
    /// Reads configuration from `MONGODB_URI`, `SEED_DATABASE`, and
    /// `SEED_COLLECTION`, falling back to local development defaults.
    pub fn from_env() -> Self {
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database =
            std::env::var("SEED_DATABASE").unwrap_or_else(|_| "rhcsa_quiz".to_string());
        let collection =
            std::env::var("SEED_COLLECTION").unwrap_or_else(|_| "questions".to_string());

        Self {
            uri,
            database,
            collection,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "rhcsa_quiz".to_string(),
            collection: "questions".to_string(),
        }
    }
}
