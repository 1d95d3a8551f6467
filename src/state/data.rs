/// Shared data structures for the application state
///
/// These structs represent the catalog records that flow between
/// the loader and the UI layer.

use serde::Deserialize;

/// Stock availability of a product
///
/// The catalog file stores this as a free-form string. Anything the
/// parser does not recognize lands in `Unknown`, which the card
/// renderer shows with a neutral badge instead of failing the load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
    /// Unrecognized value, preserved verbatim for display
    Unknown(String),
}

impl From<String> for StockStatus {
    fn from(value: String) -> Self {
        // Accept the common spellings: "in stock", "in-stock", "in_stock"
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "instock" => StockStatus::InStock,
            "lowstock" => StockStatus::LowStock,
            "outofstock" => StockStatus::OutOfStock,
            _ => StockStatus::Unknown(value),
        }
    }
}

impl Default for StockStatus {
    fn default() -> Self {
        StockStatus::Unknown(String::new())
    }
}

impl StockStatus {
    /// Human-readable badge label
    pub fn label(&self) -> &str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Unknown(raw) if !raw.is_empty() => raw,
            StockStatus::Unknown(_) => "Unknown",
        }
    }
}

/// Represents a single product in the catalog
///
/// `id`, `name`, `category` and `price` are required; the remaining
/// fields fall back to defaults so one sloppy record does not take
/// down the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique, stable identifier
    pub id: i64,
    /// Display name (e.g., "iPhone 15")
    pub name: String,
    /// Category label, drawn from a small fixed set
    pub category: String,
    /// Price in currency-agnostic units (non-negative)
    pub price: f64,
    /// Rating from 0.0 to 5.0
    #[serde(default)]
    pub rating: f64,
    /// Stock availability
    #[serde(default)]
    pub stock: StockStatus,
    /// Path to the product image
    #[serde(default)]
    pub image: String,
    /// Free-form description, searched together with the name
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_parsing() {
        assert_eq!(StockStatus::from("in-stock".to_string()), StockStatus::InStock);
        assert_eq!(StockStatus::from("In Stock".to_string()), StockStatus::InStock);
        assert_eq!(StockStatus::from("low_stock".to_string()), StockStatus::LowStock);
        assert_eq!(
            StockStatus::from("out-of-stock".to_string()),
            StockStatus::OutOfStock
        );
    }

    #[test]
    fn test_stock_status_unknown_fallback() {
        let status = StockStatus::from("backordered".to_string());
        assert_eq!(status, StockStatus::Unknown("backordered".to_string()));
        assert_eq!(status.label(), "backordered");

        assert_eq!(StockStatus::default().label(), "Unknown");
    }

    #[test]
    fn test_product_deserializes_with_missing_optional_fields() {
        let json = r#"{"id": 1, "name": "Pixel 8", "category": "Smartphones", "price": 599}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.name, "Pixel 8");
        assert_eq!(product.price, 599.0);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.stock, StockStatus::default());
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_product_deserializes_full_record() {
        let json = r#"{
            "id": 2,
            "name": "iPhone 15",
            "category": "Smartphones",
            "price": 999,
            "rating": 4.8,
            "stock": "in-stock",
            "image": "images/iphone-15.jpg",
            "description": "Apple flagship smartphone"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.stock, StockStatus::InStock);
        assert_eq!(product.rating, 4.8);
    }
}
