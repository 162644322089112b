// ABOUTME: Product catalog management for the Sunward storefront
// ABOUTME: Provides product types, validation, storage, and the bulk-load seed list

pub mod seed;
pub mod storage;
pub mod types;

pub use seed::seed_products;
pub use storage::{CatalogStorage, SeedOutcome};
pub use types::{Product, ProductCategory, ProductCreateInput};
