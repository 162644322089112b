// ABOUTME: SQLite-backed storage for leads and quote requests
// ABOUTME: Create and list-all; records are write-once and never updated

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use sunward_core::MAX_LIST_ROWS;
use sunward_storage::StorageError;

use crate::types::{Lead, LeadCreateInput, QuoteCreateInput, QuoteRequest};

/// Status written to a quote when the client does not supply one.
pub const DEFAULT_QUOTE_STATUS: &str = "pending";

/// Storage layer for contact-form leads
pub struct LeadStorage {
    pool: SqlitePool,
}

impl LeadStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new lead and return the stored record. Repeated submissions
    /// from the same contact create independent records.
    pub async fn create_lead(&self, input: LeadCreateInput) -> Result<Lead, StorageError> {
        let lead = Lead {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            parish: input.parish,
            district: input.district,
            interest: input.interest,
            message: input.message,
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO leads (id, name, email, phone, parish, district, interest, message, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&lead.id)
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(&lead.parish)
        .bind(&lead.district)
        .bind(lead.interest)
        .bind(&lead.message)
        .bind(lead.created_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!("Created lead {}", lead.id);

        Ok(lead)
    }

    pub async fn list_leads(&self) -> Result<Vec<Lead>, StorageError> {
        let rows = sqlx::query("SELECT * FROM leads LIMIT ?")
            .bind(MAX_LIST_ROWS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.into_iter().map(row_to_lead).collect()
    }
}

/// Storage layer for quote requests
pub struct QuoteStorage {
    pool: SqlitePool,
}

impl QuoteStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new quote request and return the stored record.
    ///
    /// The product id list is persisted verbatim; nothing checks the ids
    /// against the catalog.
    pub async fn create_quote(
        &self,
        input: QuoteCreateInput,
    ) -> Result<QuoteRequest, StorageError> {
        let quote = QuoteRequest {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            parish: input.parish,
            district: input.district,
            interest: input.interest,
            products: input.products,
            service_description: input.service_description,
            message: input.message,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_QUOTE_STATUS.to_string()),
            created_at: Utc::now(),
        };

        let products_json = serde_json::to_string(&quote.products)?;

        sqlx::query(
            r#"
            INSERT INTO quotes (
                id, name, email, phone, parish, district, interest,
                products, service_description, message, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&quote.id)
        .bind(&quote.name)
        .bind(&quote.email)
        .bind(&quote.phone)
        .bind(&quote.parish)
        .bind(&quote.district)
        .bind(quote.interest)
        .bind(products_json)
        .bind(&quote.service_description)
        .bind(&quote.message)
        .bind(&quote.status)
        .bind(quote.created_at)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        debug!("Created quote {} ({} products)", quote.id, quote.products.len());

        Ok(quote)
    }

    pub async fn list_quotes(&self) -> Result<Vec<QuoteRequest>, StorageError> {
        let rows = sqlx::query("SELECT * FROM quotes LIMIT ?")
            .bind(MAX_LIST_ROWS)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.into_iter().map(row_to_quote).collect()
    }
}

fn row_to_lead(row: SqliteRow) -> Result<Lead, StorageError> {
    Ok(Lead {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        parish: row.try_get("parish")?,
        district: row.try_get("district")?,
        interest: row.try_get("interest")?,
        message: row.try_get("message")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

fn row_to_quote(row: SqliteRow) -> Result<QuoteRequest, StorageError> {
    let products: Vec<String> = serde_json::from_str(row.try_get::<String, _>("products")?.as_str())?;

    Ok(QuoteRequest {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        parish: row.try_get("parish")?,
        district: row.try_get("district")?,
        interest: row.try_get("interest")?,
        products,
        service_description: row.try_get("service_description")?,
        message: row.try_get("message")?,
        status: row.try_get("status")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}
