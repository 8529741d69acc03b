//! Database integration for seeding the question collection.
//!
//! [`Seeder`] runs the reset-and-load procedure against any
//! [`QuestionStore`]; [`MongoStore`] is the real backend.

mod seeder;
mod store;

pub use seeder::{SeedError, SeedSummary, Seeder};
pub use store::{MongoStore, QuestionStore};
