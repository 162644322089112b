// ABOUTME: Inbound customer inquiries for Sunward
// ABOUTME: Contact-form leads and structured quote requests with storage

pub mod storage;
pub mod types;

pub use storage::{LeadStorage, QuoteStorage, DEFAULT_QUOTE_STATUS};
pub use types::{Interest, Lead, LeadCreateInput, QuoteCreateInput, QuoteRequest};
