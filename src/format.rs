/// Display formatting helpers
///
/// Pure functions shared by the card renderer: localized price strings
/// and the 5-symbol star rating.

/// Number of symbols in a star rating
const STAR_COUNT: u32 = 5;

/// Format a price as a USD currency string with thousands separators
/// and exactly two decimal places (e.g., 1299 -> "$1,299.00").
///
/// Prices are non-negative by contract; anything below zero is clamped
/// rather than rendered with a sign.
pub fn format_price(price: f64) -> String {
    let total_cents = (price.max(0.0) * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    format!("${}.{:02}", group_thousands(dollars), cents)
}

/// Insert comma separators into a whole number: 1299 -> "1,299"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Render a rating as exactly five star symbols.
///
/// The rating is rounded half-up to a whole number of filled stars,
/// clamped to 0..=5, and padded with empty stars.
pub fn star_rating(rating: f64) -> String {
    let filled = rating.clamp(0.0, STAR_COUNT as f64).round() as u32;
    let empty = STAR_COUNT - filled;

    let mut stars = String::new();
    for _ in 0..filled {
        stars.push('★');
    }
    for _ in 0..empty {
        stars.push('☆');
    }
    stars
}
