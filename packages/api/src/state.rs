// ABOUTME: Shared application state for API handlers
// ABOUTME: Pool, storage layers, mailer, and the fire-and-forget notify hook

use std::sync::Arc;

use sqlx::SqlitePool;
use tracing::warn;

use sunward_catalog::CatalogStorage;
use sunward_inquiries::{LeadStorage, QuoteStorage};
use sunward_notifier::Mailer;

/// Explicitly constructed context passed into each handler.
///
/// Built once at startup and dropped at shutdown; there is no module-level
/// global state anywhere in the API.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub catalog: Arc<CatalogStorage>,
    pub leads: Arc<LeadStorage>,
    pub quotes: Arc<QuoteStorage>,
    pub mailer: Arc<Mailer>,
    /// Operator address receiving admin copies of inbound submissions.
    pub notify_email: String,
}

impl AppState {
    pub fn new(pool: SqlitePool, mailer: Arc<Mailer>, notify_email: String) -> Self {
        Self {
            catalog: Arc::new(CatalogStorage::new(pool.clone())),
            leads: Arc::new(LeadStorage::new(pool.clone())),
            quotes: Arc::new(QuoteStorage::new(pool.clone())),
            pool,
            mailer,
            notify_email,
        }
    }

    /// Fire-and-forget notification send.
    ///
    /// Spawned onto the runtime so a slow transport never delays the HTTP
    /// response; the outcome is logged and goes nowhere else.
    pub fn notify(&self, subject: String, recipients: Vec<String>, html_body: String) {
        let mailer = self.mailer.clone();
        tokio::spawn(async move {
            if let Err(err) = mailer.send(&subject, &recipients, &html_body).await {
                warn!(
                    subject = %subject,
                    recipients = ?recipients,
                    error = %err,
                    "Failed to send notification email"
                );
            }
        });
    }
}
