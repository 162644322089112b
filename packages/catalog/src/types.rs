// ABOUTME: Product type definitions
// ABOUTME: Category enum, stored product record, and creation input

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sunward_core::validate::{require_non_empty, ValidationError};

/// Closed set of catalog categories.
///
/// The allowed values are part of the public API contract; an unknown value
/// in a request is a client error, never silently stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Inverters,
    Batteries,
    Panels,
    Accessories,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Inverters => "inverters",
            ProductCategory::Batteries => "batteries",
            ProductCategory::Panels => "panels",
            ProductCategory::Accessories => "accessories",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category strings outside the allowed set
#[derive(Debug, Clone)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown product category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inverters" => Ok(ProductCategory::Inverters),
            "batteries" => Ok(ProductCategory::Batteries),
            "panels" => Ok(ProductCategory::Panels),
            "accessories" => Ok(ProductCategory::Accessories),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// A stored catalog record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub regular_price: f64,
    // Intentionally unconstrained relative to regular_price; observed catalog
    // data includes sale prices above the regular price.
    pub sale_price: f64,
    pub image_url: String,
    pub specs: Option<HashMap<String, serde_json::Value>>,
    pub features: Option<Vec<String>>,
    pub in_stock: bool,
    pub backorder: bool,
    pub created_at: DateTime<Utc>,
}

/// Customer-facing input for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreateInput {
    pub name: String,
    pub category: ProductCategory,
    pub description: String,
    pub regular_price: f64,
    pub sale_price: f64,
    pub image_url: String,
    #[serde(default)]
    pub specs: Option<HashMap<String, serde_json::Value>>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default)]
    pub backorder: bool,
}

fn default_true() -> bool {
    true
}

/// Validates product input for creation. Duplicate names are permitted.
pub fn validate_product_input(input: &ProductCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    require_non_empty(&mut errors, "name", &input.name);
    require_non_empty(&mut errors, "description", &input.description);
    require_non_empty(&mut errors, "image_url", &input.image_url);

    if !input.regular_price.is_finite() {
        errors.push(ValidationError::new(
            "regular_price",
            "regular_price must be a finite number",
        ));
    }
    if !input.sale_price.is_finite() {
        errors.push(ValidationError::new(
            "sale_price",
            "sale_price must be a finite number",
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_input() -> ProductCreateInput {
        ProductCreateInput {
            name: "Test Panel".to_string(),
            category: ProductCategory::Panels,
            description: "d".to_string(),
            regular_price: 100.0,
            sale_price: 90.0,
            image_url: "http://x/y.png".to_string(),
            specs: None,
            features: None,
            in_stock: true,
            backorder: false,
        }
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for raw in ["inverters", "batteries", "panels", "accessories"] {
            let parsed: ProductCategory = raw.parse().unwrap();
            assert_eq!(parsed.as_str(), raw);
        }
    }

    #[test]
    fn test_category_rejects_unknown_values() {
        assert!("solar-ovens".parse::<ProductCategory>().is_err());
        // Singular forms are not in the allowed set
        assert!("panel".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Batteries).unwrap();
        assert_eq!(json, "\"batteries\"");
    }

    #[test]
    fn test_create_input_defaults() {
        let input: ProductCreateInput = serde_json::from_str(
            r#"{"name":"Test Panel","category":"panels","description":"d",
                "regular_price":100,"sale_price":90,"image_url":"http://x/y.png"}"#,
        )
        .unwrap();

        assert!(input.in_stock);
        assert!(!input.backorder);
        assert_eq!(input.specs, None);
        assert_eq!(input.features, None);
    }

    #[test]
    fn test_validate_flags_empty_fields() {
        let mut input = sample_input();
        input.name = " ".to_string();
        input.image_url = String::new();

        let errors = validate_product_input(&input);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "image_url"]);
    }

    #[test]
    fn test_validate_allows_sale_above_regular() {
        let mut input = sample_input();
        input.sale_price = 120.0;
        assert!(validate_product_input(&input).is_empty());
    }
}
