/// State management module
///
/// This module handles all application state, including:
/// - The product catalog and its loader (catalog.rs)
/// - Shared data structures (data.rs)
/// - The user's filter/sort criteria (criteria.rs)

pub mod catalog;
pub mod criteria;
pub mod data;
