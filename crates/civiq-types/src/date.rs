use chrono::NaiveDate;

/// Parse a chat creation date as received from the wire.
///
/// Accepted forms: ISO ("2024-06-01", optionally with a time suffix),
/// "DD/MM/YYYY" and "YYYY/MM/DD", with `/`, `.` or `-` as separators.
/// Returns `None` for anything else rather than guessing.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().split(['T', ' ']).next()?;
    let parts: Vec<&str> = head.split(['/', '.', '-']).collect();
    if parts.len() != 3 {
        return None;
    }

    // A four-digit first component means year-first ordering.
    let (year, month, day) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        (parts[2], parts[1], parts[0])
    };

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Display label for a date group, e.g. "01 June 2024".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date() {
        let date = normalize_date("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_iso_with_time_suffix() {
        let date = normalize_date("2024-06-01T13:45:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_day_first() {
        let date = normalize_date("02/06/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn test_year_first_slashes() {
        let date = normalize_date("2024/06/02").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn test_dot_separator() {
        let date = normalize_date("31.12.2023").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(normalize_date("").is_none());
        assert!(normalize_date("yesterday").is_none());
        assert!(normalize_date("32/13/2024").is_none());
        assert!(normalize_date("2024-06").is_none());
    }

    #[test]
    fn test_label_format() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(date_label(date), "01 June 2024");
    }
}
