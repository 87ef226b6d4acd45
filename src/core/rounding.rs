//! Fixed-point rounding for durations and means.
//!
//! Durations leave the stopwatch as whole milliseconds, so the 2-decimal
//! seconds value is computed in integer arithmetic (round half up). Means
//! are floats and use `f64::round` (half away from zero).

/// Convert milliseconds to hundredths of a second, rounding half up.
#[must_use]
pub const fn ms_to_centis(ms: u64) -> u64 {
    (ms + 5) / 10
}

/// Convert milliseconds to seconds rounded to 2 decimals.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ms_to_seconds(ms: u64) -> f64 {
    ms_to_centis(ms) as f64 / 100.0
}

/// Format milliseconds as a 2-decimal seconds string, e.g. `4250 -> "4.25"`.
#[must_use]
pub fn format_ms_as_seconds(ms: u64) -> String {
    let centis = ms_to_centis(ms);
    format!("{}.{:02}", centis / 100, centis % 100)
}

/// Round a float to 2 decimals.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert seconds to whole milliseconds, clamping negatives and NaN to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn seconds_to_ms(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ms_as_seconds() {
        assert_eq!(format_ms_as_seconds(0), "0.00");
        assert_eq!(format_ms_as_seconds(4250), "4.25");
        assert_eq!(format_ms_as_seconds(61230), "61.23");
        assert_eq!(format_ms_as_seconds(1004), "1.00");
    }

    #[test]
    fn test_half_up() {
        assert_eq!(format_ms_as_seconds(1005), "1.01");
        assert_eq!(format_ms_as_seconds(1015), "1.02");
        assert_eq!(ms_to_centis(994), 99);
        assert_eq!(ms_to_centis(995), 100);
    }

    #[test]
    fn test_round2() {
        assert!((round2(4.256) - 4.26).abs() < f64::EPSILON);
        assert!((round2(4.0 / 3.0) - 1.33).abs() < f64::EPSILON);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seconds_to_ms() {
        assert_eq!(seconds_to_ms(4.25), 4250);
        assert_eq!(seconds_to_ms(-1.0), 0);
        assert_eq!(seconds_to_ms(f64::NAN), 0);
    }
}
