use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::Product;

/// Errors raised while loading the catalog file
///
/// The variants carry rendered messages rather than the underlying
/// error types so they can travel inside a `Clone`-able message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(String),

    #[error("catalog is not valid JSON: {0}")]
    Json(String),

    #[error("catalog is missing a \"products\" array")]
    MissingProducts,
}

/// The Catalog holds the product collection for the session.
///
/// It is populated exactly once, from the load task that runs at
/// startup. After that the collection is read-only: every view the
/// UI shows is derived from it, never carved out of it.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog, the state before (or after a failed) load
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load products from a catalog file.
    ///
    /// The file must be a JSON document with a top-level "products"
    /// array. A missing or non-array "products" field is a load
    /// failure, not a panic; the caller keeps the empty catalog.
    pub async fn load(path: PathBuf) -> Result<Vec<Product>, CatalogError> {
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;

        parse_products(&text)
    }

    /// Install the loaded collection. Called once per run.
    pub fn install(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// The full product collection, in load order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order.
    ///
    /// These become the category selector's options, after the "All"
    /// sentinel.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

/// Parse the catalog document and extract the product records
fn parse_products(text: &str) -> Result<Vec<Product>, CatalogError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| CatalogError::Json(e.to_string()))?;

    let products = document
        .get("products")
        .filter(|value| value.is_array())
        .cloned()
        .ok_or(CatalogError::MissingProducts)?;

    serde_json::from_value(products).map_err(|e| CatalogError::Json(e.to_string()))
}

/// Default location of the catalog file, relative to the working directory
pub fn default_catalog_path() -> PathBuf {
    Path::new("data.json").to_path_buf()
}
