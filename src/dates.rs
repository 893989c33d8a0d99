use chrono::{Duration, NaiveDate, Utc};

/// Date format used in the draw table's first column, e.g. "25.12.2024".
const DRAW_DATE_FORMAT: &str = "%d.%m.%Y";

pub fn parse_draw_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DRAW_DATE_FORMAT).ok()
}

pub fn format_draw_date(date: NaiveDate) -> String {
    date.format(DRAW_DATE_FORMAT).to_string()
}

/// The calendar day rows are matched against: the current time shifted by
/// the configured clock offset (see `ScrapingConfig::clock_offset_hours`).
pub fn adjusted_today(clock_offset_hours: i64) -> NaiveDate {
    (Utc::now() + Duration::hours(clock_offset_hours)).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn parses_dotted_dates() {
        let date = parse_draw_date("25.12.2024").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (25, 12, 2024));
        assert_eq!(date.ordinal(), 360);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_draw_date(" 25.12.2024 "),
            parse_draw_date("25.12.2024")
        );
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_draw_date("not-a-date").is_none());
        assert!(parse_draw_date("2024-12-25").is_none());
        assert!(parse_draw_date("").is_none());
    }

    #[test]
    fn formatting_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(parse_draw_date(&format_draw_date(date)), Some(date));
    }

    #[test]
    fn offset_shifts_the_matched_day_forward() {
        // 48h is always at least one calendar day ahead, whatever "now" is.
        assert!(adjusted_today(48) > adjusted_today(0));
    }
}
