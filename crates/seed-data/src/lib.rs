//! Database seeding for the RHCSA practice quiz.
//!
//! This crate provides the reset-and-load procedure that wipes the question
//! collection and repopulates it with the bundled RHCSA exam scenarios, plus
//! the payload models and validation that back it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::{MongoStore, Payload, SeedConfig, Seeder};
//!
//! let config = SeedConfig::from_env();
//! let payload = Payload::load()?;
//! let store = MongoStore::connect(&config).await?;
//! let summary = Seeder::new(store).reset(payload.questions()).await?;
//! println!("deleted {}, inserted {}", summary.deleted, summary.inserted);
//! ```

pub mod config;
pub mod db;
pub mod payload;

pub use config::SeedConfig;
pub use db::{MongoStore, QuestionStore, SeedError, SeedSummary, Seeder};
pub use payload::{Payload, PayloadError, Question, Step};
