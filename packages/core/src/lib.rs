// ABOUTME: Core types and shared validation helpers for Sunward
// ABOUTME: Field-level validation errors, email syntax checks, retrieval limits

pub mod constants;
pub mod validate;

pub use constants::MAX_LIST_ROWS;
pub use validate::{is_valid_email, ValidationError};
