//! Conversions between stored values and their API representation.

use chrono::{Locale, NaiveDate, NaiveTime};

/// Release date rendered for the locales the storefront supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedDate {
    /// US English, e.g. `January 1, 2021`.
    pub en_us: String,
    /// Indonesian, e.g. `1 Januari 2021`.
    pub id_id: String,
}

/// Formats a release date as long-form text in US English and Indonesian.
pub fn localize_date(date: NaiveDate) -> LocalizedDate {
    let datetime = date.and_time(NaiveTime::MIN).and_utc();

    LocalizedDate {
        en_us: datetime
            .format_localized("%B %-d, %Y", Locale::en_US)
            .to_string(),
        id_id: datetime
            .format_localized("%-d %B %Y", Locale::id_ID)
            .to_string(),
    }
}

/// Converts a price in whole currency units to stored cents, rounding to the
/// nearest cent.
pub fn price_to_cents(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Converts stored cents back to the JSON number clients see.
pub fn cents_to_price(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_release_date_in_both_locales() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

        let localized = localize_date(date);

        assert_eq!(localized.en_us, "January 1, 2021");
        assert_eq!(localized.id_id, "1 Januari 2021");
    }

    #[test]
    fn formats_two_digit_days() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();

        let localized = localize_date(date);

        assert_eq!(localized.en_us, "August 17, 2024");
        assert_eq!(localized.id_id, "17 Agustus 2024");
    }

    #[test]
    fn converts_prices_through_cents() {
        assert_eq!(price_to_cents(850000.0), 85_000_000);
        assert_eq!(price_to_cents(19.99), 1999);
        assert_eq!(price_to_cents(0.005), 1);
        assert_eq!(cents_to_price(85_000_000), 850000.0);
        assert_eq!(cents_to_price(1999), 19.99);
    }
}
