use crate::views::format::{DEFAULT_DATE_FORMAT, ellipsize, format_date};

#[test]
fn given_rfc3339_timestamp_when_formatting_then_returns_calendar_date() {
    assert_eq!(
        format_date("2025-02-01T23:59:00.000Z", DEFAULT_DATE_FORMAT),
        "2025-02-01"
    );
}

#[test]
fn given_bucket_key_when_formatting_with_custom_format_then_uses_it() {
    assert_eq!(format_date("2025-02-01", "%d/%m/%Y"), "01/02/2025");
}

#[test]
fn given_naive_datetime_when_formatting_then_drops_time() {
    assert_eq!(
        format_date("2025-03-04T05:06:07.123", DEFAULT_DATE_FORMAT),
        "2025-03-04"
    );
}

/// **VALUE**: Verifies unparseable dates are shown verbatim rather than dropped.
///
/// **WHY THIS MATTERS**: Chart labels come straight from the backend. An unexpected format
/// should still render something the user can read.
#[test]
fn given_unknown_format_when_formatting_then_returns_input() {
    assert_eq!(format_date("week 5", DEFAULT_DATE_FORMAT), "week 5");
}

#[test]
fn given_long_value_when_ellipsized_then_cuts_at_char_boundary() {
    assert_eq!(ellipsize("https://sho.rt/abcdef", 14), "https://sho.rt...");
    assert_eq!(ellipsize("héllo wörld", 5), "héllo...");
}

#[test]
fn given_short_value_when_ellipsized_then_unchanged() {
    assert_eq!(ellipsize("short", 30), "short");
    assert_eq!(ellipsize("exactly5", 8), "exactly5");
}
