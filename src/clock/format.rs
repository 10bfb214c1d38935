//! Countdown formatting.

/// Format a number of seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so 3600 renders as `60:00`.
#[must_use]
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(5), "00:05");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(90), "01:30");
    }

    #[test]
    fn test_format_time_upper_bound() {
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(3599), "59:59");
    }
}
