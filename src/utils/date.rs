use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Date from an optional query/CLI value; missing or unparsable → today.
pub fn date_or_today(s: Option<&str>) -> NaiveDate {
    s.and_then(parse_date).unwrap_or_else(today)
}

/// Parse a timestamp given as RFC 3339 (offset kept) or as a naive
/// `YYYY-MM-DDTHH:MM[:SS]` / `YYYY-MM-DD HH:MM[:SS]` taken in local time.
pub fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_keeps_offset() {
        let dt = parse_timestamp("2024-03-01T23:30:00-03:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn naive_forms_are_accepted() {
        assert!(parse_timestamp("2024-03-01T08:15").is_some());
        assert!(parse_timestamp("2024-03-01 08:15:30").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn bad_date_falls_back_to_today() {
        assert_eq!(date_or_today(Some("31/12/2024")), today());
        assert_eq!(
            date_or_today(Some("2024-12-31")),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
    }
}
