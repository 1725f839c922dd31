//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a decimal amount as a euro price.
///
/// Usage in templates: `{{ order.total|euro }}`
#[askama::filter_fn]
pub fn euro(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_euro(&value.to_string()))
}

/// Renders a rating out of five as filled/empty stars.
///
/// Usage in templates: `{{ review.rating|stars }}`
#[askama::filter_fn]
pub fn stars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_stars(&value.to_string()))
}

pub(crate) fn format_euro(amount: &str) -> String {
    format!("{amount} €")
}

pub(crate) fn format_stars(rating: &str) -> String {
    let rating: usize = rating.parse().unwrap_or(0).min(5);
    format!("{}{}", "★".repeat(rating), "☆".repeat(5 - rating))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_euro_format() {
        assert_eq!(format_euro("13.00"), "13.00 €");
    }

    #[test]
    fn test_stars_format_clamps() {
        assert_eq!(format_stars("3"), "★★★☆☆");
        assert_eq!(format_stars("9"), "★★★★★");
        assert_eq!(format_stars("n/a"), "☆☆☆☆☆");
    }
}
