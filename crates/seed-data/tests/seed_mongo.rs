//! Live-database checks for the seeder.
//!
//! These need a running MongoDB instance and are ignored by default:
//!
//! ```
//! MONGODB_URI=mongodb://localhost:27017 cargo test -p seed-data -- --ignored
//! ```
//!
//! Each test uses its own collection in a scratch database so runs do not
//! interfere with each other or with real quiz data.

use mongodb::Client;
use mongodb::bson::doc;
use seed_data::{MongoStore, Payload, Question, SeedConfig, Seeder, Step};

fn test_config(collection: &str) -> SeedConfig {
    SeedConfig {
        uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        database: "rhcsa_quiz_test".to_string(),
        collection: collection.to_string(),
    }
}

fn stale_question() -> Question {
    Question {
        id: 999,
        title: "stale".to_string(),
        steps: vec![Step {
            id: 1,
            instruction: "leftover".to_string(),
            answer: "leftover".to_string(),
            explanation: "leftover".to_string(),
        }],
    }
}

async fn raw_collection(config: &SeedConfig) -> mongodb::Collection<Question> {
    let client = Client::with_uri_str(&config.uri).await.unwrap();
    client
        .database(&config.database)
        .collection(&config.collection)
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn full_replace_of_prepopulated_collection() {
    let config = test_config("questions_full_replace");
    let collection = raw_collection(&config).await;

    collection.delete_many(doc! {}).await.unwrap();
    collection.insert_one(stale_question()).await.unwrap();

    let payload = Payload::load().unwrap();
    let store = MongoStore::connect(&config).await.unwrap();
    let summary = Seeder::new(store).reset(payload.questions()).await.unwrap();

    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.inserted, payload.len());

    let count = collection.count_documents(doc! {}).await.unwrap();
    assert_eq!(count as usize, payload.len());

    let stale = collection.find_one(doc! { "id": 999 }).await.unwrap();
    assert!(stale.is_none());

    let first = collection
        .find_one(doc! { "id": 1 })
        .await
        .unwrap()
        .expect("payload question 1 should be present");
    assert_eq!(first.title, payload.questions()[0].title);
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn seeding_twice_matches_seeding_once() {
    let config = test_config("questions_idempotent");
    let collection = raw_collection(&config).await;
    collection.delete_many(doc! {}).await.unwrap();

    let payload = Payload::load().unwrap();

    let store = MongoStore::connect(&config).await.unwrap();
    Seeder::new(store).reset(payload.questions()).await.unwrap();

    let store = MongoStore::connect(&config).await.unwrap();
    let summary = Seeder::new(store).reset(payload.questions()).await.unwrap();

    assert_eq!(summary.deleted, payload.len() as u64);
    assert_eq!(summary.inserted, payload.len());

    let count = collection.count_documents(doc! {}).await.unwrap();
    assert_eq!(count as usize, payload.len());
}

// Needs no server: URI parsing rejects the string before any traffic.
#[tokio::test]
async fn connect_rejects_unreachable_endpoint() {
    let config = SeedConfig {
        uri: "not-a-mongodb-uri".to_string(),
        ..SeedConfig::default()
    };

    let err = MongoStore::connect(&config).await.unwrap_err();
    assert!(matches!(err, seed_data::SeedError::Connect(_)));
}
