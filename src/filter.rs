/// Pure filter/sort derivation
///
/// Given the full product collection and the current criteria, produce
/// the list to display. This never mutates the catalog: it works on a
/// fresh copy every run, so "no sort" after a sorted run falls back to
/// the original load order rather than leftover sort order.

use crate::state::criteria::{Criteria, SortMode};
use crate::state::data::Product;

/// Derive the visible product list from the catalog and the criteria.
///
/// Stages run in a fixed order: text filter, category filter, sort.
/// Both filters are order-preserving and the sort is stable, so equal
/// prices keep their load order.
pub fn derive(products: &[Product], criteria: &Criteria) -> Vec<Product> {
    let mut results: Vec<Product> = products.to_vec();

    let query = criteria.search.trim().to_lowercase();
    if !query.is_empty() {
        results.retain(|product| {
            product.name.to_lowercase().contains(&query)
                || product.description.to_lowercase().contains(&query)
        });
    }

    if let Some(category) = criteria.category_filter() {
        results.retain(|product| product.category == category);
    }

    match criteria.sort {
        SortMode::Featured => {}
        SortMode::PriceAscending => {
            results.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortMode::PriceDescending => {
            results.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: &str, price: f64, description: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name": name,
            "category": category,
            "price": price,
            "description": description,
        }))
        .unwrap()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "iPhone 15", "Smartphones", 999.0, "Apple flagship phone"),
            product(2, "Pixel 8", "Smartphones", 599.0, "Google camera phone"),
            product(3, "MacBook Air", "Laptops", 1299.0, "Thin and light laptop"),
            product(4, "ThinkPad X1", "Laptops", 1599.0, "Business laptop"),
            product(5, "AirPods Pro", "Audio", 249.0, "Noise cancelling earbuds"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_no_criteria_keeps_load_order() {
        let catalog = sample();
        let results = derive(&catalog, &Criteria::new());
        assert_eq!(names(&results), names(&catalog));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.search = "iphone".to_string();

        let results = derive(&catalog, &criteria);
        assert_eq!(names(&results), vec!["iPhone 15"]);
    }

    #[test]
    fn test_search_matches_description_too() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.search = "CAMERA".to_string();

        let results = derive(&catalog, &criteria);
        assert_eq!(names(&results), vec!["Pixel 8"]);
    }

    #[test]
    fn test_every_dropped_product_matches_neither_field() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.search = "laptop".to_string();

        let results = derive(&catalog, &criteria);
        for product in &catalog {
            let matches = product.name.to_lowercase().contains("laptop")
                || product.description.to_lowercase().contains("laptop");
            assert_eq!(results.contains(product), matches);
        }
    }

    #[test]
    fn test_whitespace_only_search_filters_nothing() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.search = "   ".to_string();

        let results = derive(&catalog, &criteria);
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.category = "Laptops".to_string();

        let results = derive(&catalog, &criteria);
        assert_eq!(names(&results), vec!["MacBook Air", "ThinkPad X1"]);

        // Case-sensitive: "laptops" is not a category
        criteria.category = "laptops".to_string();
        assert!(derive(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let catalog = sample();
        let mut criteria = Criteria::new();

        criteria.sort = SortMode::PriceAscending;
        let ascending = derive(&catalog, &criteria);
        assert!(ascending.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(ascending[0].name, "AirPods Pro");

        criteria.sort = SortMode::PriceDescending;
        let descending = derive(&catalog, &criteria);
        assert!(descending.windows(2).all(|w| w[0].price >= w[1].price));
        assert_eq!(descending[0].name, "ThinkPad X1");
    }

    #[test]
    fn test_two_product_search_and_sort() {
        let catalog = vec![
            product(1, "iPhone 15", "Smartphones", 999.0, ""),
            product(2, "Pixel 8", "Smartphones", 599.0, ""),
        ];

        let mut criteria = Criteria::new();
        criteria.search = "iphone".to_string();
        assert_eq!(names(&derive(&catalog, &criteria)), vec!["iPhone 15"]);

        criteria.search.clear();
        criteria.sort = SortMode::PriceAscending;
        assert_eq!(
            names(&derive(&catalog, &criteria)),
            vec!["Pixel 8", "iPhone 15"]
        );

        criteria.sort = SortMode::PriceDescending;
        assert_eq!(
            names(&derive(&catalog, &criteria)),
            vec!["iPhone 15", "Pixel 8"]
        );
    }

    #[test]
    fn test_featured_after_sort_restores_load_order() {
        // Sorting must be derived fresh each run, never cumulative
        let catalog = sample();
        let mut criteria = Criteria::new();

        criteria.sort = SortMode::PriceDescending;
        let _ = derive(&catalog, &criteria);

        criteria.sort = SortMode::Featured;
        let results = derive(&catalog, &criteria);
        assert_eq!(names(&results), names(&catalog));
    }

    #[test]
    fn test_stable_sort_preserves_order_of_equal_prices() {
        let catalog = vec![
            product(1, "First", "Audio", 100.0, ""),
            product(2, "Second", "Audio", 100.0, ""),
            product(3, "Cheap", "Audio", 50.0, ""),
        ];
        let mut criteria = Criteria::new();
        criteria.sort = SortMode::PriceAscending;

        let results = derive(&catalog, &criteria);
        assert_eq!(names(&results), vec!["Cheap", "First", "Second"]);
    }

    #[test]
    fn test_filters_combine_and_may_empty() {
        let catalog = sample();
        let mut criteria = Criteria::new();
        criteria.search = "phone".to_string();
        criteria.category = "Laptops".to_string();

        // Valid empty result, not an error
        assert!(derive(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_derivation_does_not_mutate_catalog() {
        let catalog = sample();
        let before = catalog.clone();
        let mut criteria = Criteria::new();
        criteria.sort = SortMode::PriceAscending;

        let _ = derive(&catalog, &criteria);
        assert_eq!(catalog, before);
    }
}
