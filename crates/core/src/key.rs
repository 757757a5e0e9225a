//! Human-readable record keys.
//!
//! The books this tool replaced keyed every row as `<prefix>-<date>-<suffix>`
//! (`C-20251130-4821`). The scheme is kept as a display alias: it is what the
//! operator sees and types, but it carries no uniqueness guarantee — the
//! 4-digit suffix collides with non-negligible probability at high daily
//! volumes. [`crate::RecordId`] is the real identifier.
//!
//! Prefixes in use: `C` purchase lines, `R` shipment retrievals, `V` sales.

use chrono::{NaiveDate, Utc};
use rand::Rng;

/// Generate a display key for today: `PREFIX-YYYYMMDD-RRRR`.
///
/// Pure except for reading the wall clock and a thread-local RNG. The suffix
/// is uniform in `[1000, 9999]`.
pub fn generate_key(prefix: &str) -> String {
    let suffix: u32 = rand::rng().random_range(1000..=9999);
    format_key(prefix, Utc::now().date_naive(), suffix)
}

/// Deterministic core of [`generate_key`].
pub fn format_key(prefix: &str, date: NaiveDate, suffix: u32) -> String {
    format!("{}-{}-{}", prefix, date.format("%Y%m%d"), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_date_and_suffix() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(format_key("C", date, 4821), "C-20251130-4821");
    }

    #[test]
    fn generated_key_has_expected_shape() {
        let key = generate_key("R");
        let parts: Vec<&str> = key.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "R");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));

        let suffix: u32 = parts[2].parse().unwrap();
        assert!((1000..=9999).contains(&suffix));
    }

    #[test]
    fn suffix_stays_in_range_across_draws() {
        for _ in 0..200 {
            let key = generate_key("V");
            let suffix: u32 = key.rsplit('-').next().unwrap().parse().unwrap();
            assert!((1000..=9999).contains(&suffix));
        }
    }
}
