/// UI building blocks
///
/// This module renders the derived product list, including:
/// - Individual product cards (card.rs)
/// - The wrap-grid and the empty-state panel (grid.rs)

pub mod card;
pub mod grid;
