// ABOUTME: Lead and quote-request type definitions
// ABOUTME: Interest enum, stored records, creation inputs, and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sunward_core::validate::{is_valid_email, require_non_empty, ValidationError};

/// What an inquiry is about. Closed set shared by leads and quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Interest {
    Solar,
    Plumbing,
    Electrical,
    Carpentry,
    Quote,
    Other,
}

impl Interest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::Solar => "solar",
            Interest::Plumbing => "plumbing",
            Interest::Electrical => "electrical",
            Interest::Carpentry => "carpentry",
            Interest::Quote => "quote",
            Interest::Other => "other",
        }
    }
}

/// An unsolicited contact-form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub parish: String,
    pub district: String,
    pub interest: Interest,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreateInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub parish: String,
    pub district: String,
    pub interest: Interest,
    #[serde(default)]
    pub message: Option<String>,
}

/// A structured request for a price quote tied to specific product selections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub parish: String,
    pub district: String,
    pub interest: Interest,
    // Opaque product id strings copied from the request; never checked
    // against the catalog.
    pub products: Vec<String>,
    pub service_description: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCreateInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub parish: String,
    pub district: String,
    pub interest: Interest,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub service_description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

fn validate_contact_fields(
    errors: &mut Vec<ValidationError>,
    name: &str,
    email: &str,
    phone: &str,
    parish: &str,
    district: &str,
) {
    require_non_empty(errors, "name", name);
    require_non_empty(errors, "email", email);
    require_non_empty(errors, "phone", phone);
    require_non_empty(errors, "parish", parish);
    require_non_empty(errors, "district", district);

    if !email.trim().is_empty() && !is_valid_email(email.trim()) {
        errors.push(ValidationError::new("email", "email must be a valid address"));
    }
}

pub fn validate_lead_input(input: &LeadCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_contact_fields(
        &mut errors,
        &input.name,
        &input.email,
        &input.phone,
        &input.parish,
        &input.district,
    );
    errors
}

pub fn validate_quote_input(input: &QuoteCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_contact_fields(
        &mut errors,
        &input.name,
        &input.email,
        &input.phone,
        &input.parish,
        &input.district,
    );

    // Product ids are opaque strings, but blank entries are always a client
    // mistake.
    if input.products.iter().any(|id| id.trim().is_empty()) {
        errors.push(ValidationError::new(
            "products",
            "product ids cannot be empty strings",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lead_input() -> LeadCreateInput {
        LeadCreateInput {
            name: "Jane Brown".to_string(),
            email: "jane@example.com".to_string(),
            phone: "876-555-0101".to_string(),
            parish: "St. Andrew".to_string(),
            district: "Kingston".to_string(),
            interest: Interest::Solar,
            message: None,
        }
    }

    #[test]
    fn test_interest_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Interest::Electrical).unwrap(),
            "\"electrical\""
        );
        let parsed: Interest = serde_json::from_str("\"quote\"").unwrap();
        assert_eq!(parsed, Interest::Quote);
    }

    #[test]
    fn test_interest_rejects_unknown_values() {
        assert!(serde_json::from_str::<Interest>("\"roofing\"").is_err());
    }

    #[test]
    fn test_valid_lead_passes() {
        assert!(validate_lead_input(&lead_input()).is_empty());
    }

    #[test]
    fn test_lead_with_bad_email_fails() {
        let mut input = lead_input();
        input.email = "not-an-email".to_string();

        let errors = validate_lead_input(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn test_lead_with_missing_fields_collects_all_errors() {
        let mut input = lead_input();
        input.name = String::new();
        input.phone = "  ".to_string();

        let errors = validate_lead_input(&input);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "phone"]);
    }

    #[test]
    fn test_quote_products_default_to_empty() {
        let input: QuoteCreateInput = serde_json::from_str(
            r#"{"name":"Jane","email":"jane@example.com","phone":"876-555-0101",
                "parish":"St. Andrew","district":"Kingston","interest":"quote"}"#,
        )
        .unwrap();

        assert!(input.products.is_empty());
        assert_eq!(input.status, None);
    }

    #[test]
    fn test_quote_rejects_blank_product_ids() {
        let mut input = QuoteCreateInput {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: "876-555-0101".to_string(),
            parish: "St. Andrew".to_string(),
            district: "Kingston".to_string(),
            interest: Interest::Quote,
            products: vec!["abc".to_string()],
            service_description: None,
            message: None,
            status: None,
        };
        assert!(validate_quote_input(&input).is_empty());

        input.products.push("  ".to_string());
        let errors = validate_quote_input(&input);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "products");
    }
}
