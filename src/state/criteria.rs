/// Filter and sort criteria owned by the controller
///
/// This struct holds everything the user has asked for: the search
/// text, the selected category, and the sort mode. It is mutated only
/// by the event handlers in `update`, and read by the pure derivation
/// in `filter`.

use std::fmt;

/// Sentinel category label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Sort order for the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// No sort: keep the catalog's load order
    #[default]
    Featured,
    PriceAscending,
    PriceDescending,
}

impl SortMode {
    /// All modes, in the order the sort selector offers them
    pub const ALL: [SortMode; 3] = [
        SortMode::Featured,
        SortMode::PriceAscending,
        SortMode::PriceDescending,
    ];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortMode::Featured => "Featured",
            SortMode::PriceAscending => "Price: Low to High",
            SortMode::PriceDescending => "Price: High to Low",
        })
    }
}

/// The current search/filter/sort selections
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    /// Free-text search, matched case-insensitively against name and
    /// description. Whitespace-only text means "no text filter".
    pub search: String,
    /// Selected category, or [`ALL_CATEGORIES`]
    pub category: String,
    /// Price sort mode
    pub sort: SortMode,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::default(),
        }
    }
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// The category to filter by, if one is selected
    pub fn category_filter(&self) -> Option<&str> {
        if self.category == ALL_CATEGORIES {
            None
        } else {
            Some(&self.category)
        }
    }

    /// True when the trimmed search text is non-empty
    pub fn has_search(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Reset every criterion to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
