//! Creation-date display formatting.

use chrono::{DateTime, Utc};

/// Formats a timestamp as a display string (`YYYY-MM-DD HH:MM:SS`)
///
/// Pure function; the output is only used as an opaque label, no
/// component depends on its shape.
#[must_use]
pub fn date_to_str(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    #[allow(clippy::expect_used)]
    fn formats_known_timestamp() {
        let time = Utc
            .with_ymd_and_hms(2025, 1, 1, 9, 30, 5)
            .single()
            .expect("valid timestamp");

        assert_eq!(date_to_str(time), "2025-01-01 09:30:05");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn is_pure() {
        let time = Utc
            .with_ymd_and_hms(2024, 12, 31, 23, 59, 59)
            .single()
            .expect("valid timestamp");

        assert_eq!(date_to_str(time), date_to_str(time));
    }
}
