// ABOUTME: Integration tests for lead and quote storage against in-memory SQLite
// ABOUTME: Covers create/list round-trips, default status, and verbatim product ids

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use sunward_inquiries::{
    Interest, LeadCreateInput, LeadStorage, QuoteCreateInput, QuoteStorage, DEFAULT_QUOTE_STATUS,
};

async fn setup_pool() -> SqlitePool {
    // One connection: a pooled :memory: database is per-connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    sqlx::migrate!("../storage/migrations")
        .run(&pool)
        .await
        .expect("Migration should succeed");

    pool
}

fn lead_input() -> LeadCreateInput {
    LeadCreateInput {
        name: "Jane Brown".to_string(),
        email: "jane@example.com".to_string(),
        phone: "876-555-0101".to_string(),
        parish: "St. Andrew".to_string(),
        district: "Kingston".to_string(),
        interest: Interest::Solar,
        message: Some("Looking for a backup system".to_string()),
    }
}

fn quote_input(products: Vec<String>) -> QuoteCreateInput {
    QuoteCreateInput {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "876-555-0202".to_string(),
        parish: "Manchester".to_string(),
        district: "Mandeville".to_string(),
        interest: Interest::Quote,
        products,
        service_description: Some("Whole-house installation".to_string()),
        message: None,
        status: None,
    }
}

#[tokio::test]
async fn test_create_lead_then_list_round_trips() {
    let storage = LeadStorage::new(setup_pool().await);

    let created = storage.create_lead(lead_input()).await.unwrap();
    assert!(!created.id.is_empty());

    let listed = storage.list_leads().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].email, "jane@example.com");
    assert_eq!(listed[0].interest, Interest::Solar);
    assert_eq!(
        listed[0].message.as_deref(),
        Some("Looking for a backup system")
    );
}

#[tokio::test]
async fn test_repeated_lead_submissions_create_independent_records() {
    let storage = LeadStorage::new(setup_pool().await);

    let first = storage.create_lead(lead_input()).await.unwrap();
    let second = storage.create_lead(lead_input()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(storage.list_leads().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_quote_defaults_status_to_pending() {
    let storage = QuoteStorage::new(setup_pool().await);

    let created = storage.create_quote(quote_input(vec![])).await.unwrap();
    assert_eq!(created.status, DEFAULT_QUOTE_STATUS);
    assert!(created.products.is_empty());

    let listed = storage.list_quotes().await.unwrap();
    assert_eq!(listed[0].status, "pending");
}

#[tokio::test]
async fn test_create_quote_keeps_client_supplied_status() {
    let storage = QuoteStorage::new(setup_pool().await);

    let mut input = quote_input(vec![]);
    input.status = Some("urgent".to_string());

    let created = storage.create_quote(input).await.unwrap();
    assert_eq!(created.status, "urgent");
}

#[tokio::test]
async fn test_quote_product_ids_persist_verbatim() {
    let storage = QuoteStorage::new(setup_pool().await);

    let products = vec!["nonexistent-id".to_string(), "another-one".to_string()];
    let created = storage
        .create_quote(quote_input(products.clone()))
        .await
        .unwrap();
    assert_eq!(created.products, products);

    let listed = storage.list_quotes().await.unwrap();
    assert_eq!(listed[0].products, products);
}
