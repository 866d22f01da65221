/// Utilities for date formatting
///
/// The admin screens show dates as DD/MM/YYYY.
use chrono::NaiveDate;

/// Format an ISO date or datetime as DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024".
/// Anything that does not start with a valid date is returned unchanged.
pub fn format_display_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    let date_part = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Same as [`format_display_date`], with an empty cell for missing dates
pub fn format_optional_date(date: Option<&str>) -> String {
    date.map(format_display_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_display_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_display_date("2024-12-31 23:59:59"), "31/12/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_display_date("Disponible"), "Disponible");
        assert_eq!(format_display_date("2024-13-45"), "2024-13-45");
        assert_eq!(format_display_date("15/03/2024"), "15/03/2024");
    }

    #[test]
    fn test_missing_date() {
        assert_eq!(format_optional_date(None), "");
        assert_eq!(format_optional_date(Some("2024-01-01")), "01/01/2024");
    }
}
