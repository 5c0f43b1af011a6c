//! Shared utility functions for the article query form crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Local, NaiveDate, TimeDelta};

    /// Format used by HTML date inputs and the pageviews API path segments.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)?)
    }

    /// Get the Monday of the calendar week containing `date`.
    ///
    /// Sunday closes the week rather than opening it, so a Sunday maps back
    /// six days. Month and year boundaries roll over naturally.
    pub fn week_start(date: &NaiveDate) -> NaiveDate {
        // Sunday = 0 .. Saturday = 6
        let dow = date.weekday().num_days_from_sunday() as i64;
        let offset = if dow == 0 { -6 } else { 1 - dow };
        *date + TimeDelta::days(offset)
    }

    /// Monday of the current local week, formatted as "YYYY-MM-DD".
    pub fn current_week_start() -> String {
        let today = Local::now().date_naive();
        format_date(&week_start(&today))
    }

    /// Split a "YYYY-MM-DD" string into its year, month and day components.
    ///
    /// The components are returned exactly as written (zero padding kept).
    /// Missing components come back empty and anything past the day is
    /// ignored.
    pub fn split_date(s: &str) -> (String, String, String) {
        let mut parts = s.split('-');
        let year = parts.next().unwrap_or_default().to_string();
        let month = parts.next().unwrap_or_default().to_string();
        let day = parts.next().unwrap_or_default().to_string();
        (year, month, day)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{Datelike, NaiveDate, Weekday};

        fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(y, m, d).unwrap()
        }

        #[test]
        fn test_week_start_midweek() {
            assert_eq!(format_date(&week_start(&ymd(2024, 3, 13))), "2024-03-11");
        }

        #[test]
        fn test_week_start_sunday_belongs_to_previous_monday() {
            assert_eq!(format_date(&week_start(&ymd(2024, 3, 17))), "2024-03-11");
        }

        #[test]
        fn test_week_start_monday_is_itself() {
            assert_eq!(week_start(&ymd(2024, 3, 11)), ymd(2024, 3, 11));
        }

        #[test]
        fn test_week_start_across_month_and_year() {
            // Friday 1 March 2024
            assert_eq!(week_start(&ymd(2024, 3, 1)), ymd(2024, 2, 26));
            // Wednesday 1 January 2025
            assert_eq!(week_start(&ymd(2025, 1, 1)), ymd(2024, 12, 30));
            // Sunday 5 January 2025
            assert_eq!(week_start(&ymd(2025, 1, 5)), ymd(2024, 12, 30));
        }

        #[test]
        fn test_week_start_is_monday_in_same_iso_week() {
            let mut date = ymd(2023, 12, 20);
            while date < ymd(2024, 2, 10) {
                let start = week_start(&date);
                assert_eq!(start.weekday(), Weekday::Mon);
                assert!(start <= date);
                assert_eq!(start.iso_week(), date.iso_week());
                date = date.succ_opt().unwrap();
            }
        }

        #[test]
        fn test_current_week_start_parses_back() {
            let start = parse_date(&current_week_start()).unwrap();
            assert_eq!(start.weekday(), Weekday::Mon);
        }

        #[test]
        fn test_split_date() {
            let (year, month, day) = split_date("2024-03-05");
            assert_eq!(year, "2024");
            assert_eq!(month, "03");
            assert_eq!(day, "05");
            assert_eq!(format!("{year}-{month}-{day}"), "2024-03-05");
        }

        #[test]
        fn test_split_date_missing_parts() {
            assert_eq!(
                split_date("2024"),
                ("2024".to_string(), String::new(), String::new())
            );
        }

        #[test]
        fn test_split_date_ignores_extra_parts() {
            let (year, month, day) = split_date("2024-03-05-7");
            assert_eq!(year, "2024");
            assert_eq!(month, "03");
            assert_eq!(day, "05");
        }

        #[test]
        fn test_format_and_parse() {
            let date = ymd(2023, 6, 15);
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_other_formats() {
            assert!(parse_date("20230615").is_err());
            assert!(parse_date("2023-02-30").is_err());
        }
    }
}
