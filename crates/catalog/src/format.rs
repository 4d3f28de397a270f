//! Display formatting helpers (fixed en-US/USD rules).

use crate::product::Rating;

/// Format a price held in cents as en-US USD, e.g. `$1,299.99`.
pub fn format_price(cents: u64) -> String {
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}.{rem:02}")
}

/// Render a rating as a five-star string, rounding to the nearest half star.
///
/// `★` full, `½` half, `☆` empty: 4.5 → `★★★★½`, 4.2 → `★★★★☆`.
pub fn star_rating(rating: Rating) -> String {
    // Tenths rounded to the nearest multiple of five, i.e. half stars.
    let halves = (u32::from(rating.as_tenths()) + 2) / 5;
    let full = halves / 2;
    let half = halves % 2;
    let empty = 5 - full - half;

    let mut stars = String::new();
    for _ in 0..full {
        stars.push('★');
    }
    if half == 1 {
        stars.push('½');
    }
    for _ in 0..empty {
        stars.push('☆');
    }
    stars
}

/// Truncate text to `max_length` characters, appending `...` when cut.
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{cut}...")
}
