//! Date helper functions

use chrono::{DateTime, Datelike, FixedOffset};

/// Abbreviated month names as date-fns prints them for the pt-BR locale
const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Parse a publication timestamp from the content API
///
/// The API emits RFC 3339, except that the offset may come without a
/// colon (`+0000`), which `parse_from_rfc3339` rejects.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Format a date as `dd MMM yyyy` in pt-BR, e.g. `25 mar 2021`
pub fn format_pt_br(date: &DateTime<FixedOffset>) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

/// Format a raw, possibly absent publication timestamp for display
///
/// Unpublished documents have no timestamp; those render as an empty
/// string rather than a placeholder.
pub fn publication_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|date| format_pt_br(&date))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let date = parse_timestamp("2021-03-25T19:25:28+00:00").unwrap();
        assert_eq!(date.year(), 2021);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 25);
    }

    #[test]
    fn test_parse_offset_without_colon() {
        assert!(parse_timestamp("2021-03-25T19:25:28+0000").is_some());
    }

    #[test]
    fn test_format_pt_br() {
        let date = parse_timestamp("2021-03-25T19:25:28+00:00").unwrap();
        assert_eq!(format_pt_br(&date), "25 mar 2021");

        let date = parse_timestamp("2022-02-01T08:00:00+00:00").unwrap();
        assert_eq!(format_pt_br(&date), "01 fev 2022");
    }

    #[test]
    fn test_publication_date_absent_or_invalid() {
        assert_eq!(publication_date(None), "");
        assert_eq!(publication_date(Some("not a date")), "");
        assert_eq!(
            publication_date(Some("2021-03-25T19:25:28+0000")),
            "25 mar 2021"
        );
    }
}
