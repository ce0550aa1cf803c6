// Copyright 2026 the Raven Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

const SECS_PER_DAY: i64 = 86_400;
const MS_PER_DAY: i64 = 86_400_000;

/// Reason a mission timestamp failed to parse.
///
/// Returned by [`parse_timestamp`]. The variants distinguish shape problems
/// from calendar problems so that ingestion layers can report bad data
/// precisely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampParseError {
    /// The input does not have the `YYYY-DOYTHH:MM:SS[.fff]` shape.
    ///
    /// This covers missing separators, non-digit characters, wrong field
    /// widths, and fractions that are empty or longer than nine digits.
    Malformed,
    /// The day-of-year is zero or past the last day of the year.
    DayOutOfRange,
    /// Hours, minutes, or seconds are outside their clock range.
    TimeOutOfRange,
}

impl core::fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Malformed => write!(f, "expected a `YYYY-DOYTHH:MM:SS[.fff]` timestamp"),
            Self::DayOutOfRange => write!(f, "day-of-year is outside the year"),
            Self::TimeOutOfRange => write!(f, "time component is out of range"),
        }
    }
}

impl core::error::Error for TimestampParseError {}

/// Parses a `YYYY-DOYTHH:MM:SS[.fff]` mission timestamp into UTC epoch seconds.
///
/// The year must be four digits and the day-of-year one to three digits;
/// hours, minutes, and seconds must be two digits each. The fractional part
/// is optional and accepts one to nine digits. Leap days are honored, so
/// day 366 parses in `2020` and is rejected in `2021`.
///
/// ```rust
/// use raven_time::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-001T00:00:00"), Ok(0.0));
/// let t = parse_timestamp("1970-002T12:00:00.25").unwrap();
/// assert_eq!(t, 86_400.0 + 43_200.25);
/// ```
pub fn parse_timestamp(input: &str) -> Result<f64, TimestampParseError> {
    let (year_s, rest) = input
        .split_once('-')
        .ok_or(TimestampParseError::Malformed)?;
    let (doy_s, time_s) = rest.split_once('T').ok_or(TimestampParseError::Malformed)?;
    let (hour_s, rest) = time_s
        .split_once(':')
        .ok_or(TimestampParseError::Malformed)?;
    let (minute_s, second_full) = rest.split_once(':').ok_or(TimestampParseError::Malformed)?;
    let (second_s, frac_s) = match second_full.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (second_full, None),
    };

    if year_s.len() != 4
        || doy_s.is_empty()
        || doy_s.len() > 3
        || hour_s.len() != 2
        || minute_s.len() != 2
        || second_s.len() != 2
    {
        return Err(TimestampParseError::Malformed);
    }

    let year = parse_digits(year_s)?;
    let doy = parse_digits(doy_s)?;
    let hour = parse_digits(hour_s)?;
    let minute = parse_digits(minute_s)?;
    let second = parse_digits(second_s)?;

    if hour > 23 || minute > 59 || second > 59 {
        return Err(TimestampParseError::TimeOutOfRange);
    }
    if doy == 0 || doy > days_in_year(year) {
        return Err(TimestampParseError::DayOutOfRange);
    }

    let frac = match frac_s {
        None => 0.0,
        Some(digits) => {
            if digits.is_empty() || digits.len() > 9 {
                return Err(TimestampParseError::Malformed);
            }
            let numerator = parse_digits(digits)?;
            #[expect(clippy::cast_possible_truncation, reason = "width is at most nine digits")]
            let denominator = 10_i64.pow(digits.len() as u32);
            numerator as f64 / denominator as f64
        }
    };

    let days = days_from_year(year) + (doy - 1);
    let seconds = days * SECS_PER_DAY + hour * 3_600 + minute * 60 + second;
    Ok(seconds as f64 + frac)
}

/// Formats UTC epoch seconds as a `YYYY-DOYTHH:MM:SS.fff` mission timestamp.
///
/// The output always carries exactly three fractional digits; the input is
/// rounded to the nearest millisecond first, so `86_399.9996` formats as day
/// two rather than as an out-of-range clock time. Negative inputs format as
/// pre-1970 timestamps.
///
/// ```rust
/// use raven_time::format_timestamp;
///
/// assert_eq!(format_timestamp(0.0), "1970-001T00:00:00.000");
/// assert_eq!(format_timestamp(-0.5), "1969-365T23:59:59.500");
/// ```
#[must_use]
pub fn format_timestamp(time: f64) -> String {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "rounded milliseconds for any representable timestamp fit in `i64`"
    )]
    let total_ms = libm::round(time * 1_000.0) as i64;
    let days = total_ms.div_euclid(MS_PER_DAY);
    let mut ms = total_ms.rem_euclid(MS_PER_DAY);

    let (year, doy) = year_and_day_of_year(days);
    let hour = ms / 3_600_000;
    ms %= 3_600_000;
    let minute = ms / 60_000;
    ms %= 60_000;
    let second = ms / 1_000;
    let millis = ms % 1_000;

    format!("{year:04}-{doy:03}T{hour:02}:{minute:02}:{second:02}.{millis:03}")
}

fn parse_digits(s: &str) -> Result<i64, TimestampParseError> {
    debug_assert!(s.len() <= 9, "field widths are checked before parsing");
    let mut value: i64 = 0;
    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return Err(TimestampParseError::Malformed);
        }
        value = value * 10 + i64::from(byte - b'0');
    }
    Ok(value)
}

fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days from the Unix epoch to January 1 of `year`, proleptic Gregorian.
fn days_from_year(year: i64) -> i64 {
    let y = year - 1;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + 306;
    era * 146_097 + doe - 719_468
}

/// Splits days-from-epoch into `(year, day_of_year)` with day one-based.
fn year_and_day_of_year(days: i64) -> (i64, i64) {
    // Shift to an era-aligned day count so the division below stays exact
    // for dates before 1970.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    // Day within a March-first year, then back to a civil month/day.
    let doy_march = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy_march + 2) / 153;
    let day = doy_march - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = y + i64::from(month <= 2);

    const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    #[expect(clippy::cast_possible_truncation, reason = "month is in `1..=12`")]
    let mut doy = DAYS_BEFORE_MONTH[(month - 1) as usize] + day;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    (year, doy)
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    #[test]
    fn parses_epoch_origin() {
        assert_eq!(parse_timestamp("1970-001T00:00:00"), Ok(0.0));
    }

    #[test]
    fn parses_known_mission_timestamp() {
        // 2022-179 is June 28; cross-checked against the epoch value the
        // planning services emit for this timestamp.
        let t = parse_timestamp("2022-179T23:41:54.184").unwrap();
        assert!((t - 1_656_459_714.184).abs() < 1e-6);
    }

    #[test]
    fn fraction_digits_scale_by_width() {
        assert_eq!(parse_timestamp("1970-001T00:00:00.5"), Ok(0.5));
        assert_eq!(parse_timestamp("1970-001T00:00:00.050"), Ok(0.05));
        let t = parse_timestamp("1970-001T00:00:00.123456789").unwrap();
        assert!((t - 0.123_456_789).abs() < 1e-12);
    }

    #[test]
    fn honors_leap_years() {
        assert!(parse_timestamp("2020-366T00:00:00").is_ok());
        assert_eq!(
            parse_timestamp("2021-366T00:00:00"),
            Err(TimestampParseError::DayOutOfRange)
        );
        // Century years are only leap when divisible by 400.
        assert!(parse_timestamp("2000-366T00:00:00").is_ok());
        assert_eq!(
            parse_timestamp("1900-366T00:00:00"),
            Err(TimestampParseError::DayOutOfRange)
        );
    }

    #[test]
    fn rejects_day_zero() {
        assert_eq!(
            parse_timestamp("2022-000T00:00:00"),
            Err(TimestampParseError::DayOutOfRange)
        );
    }

    #[test]
    fn rejects_clock_overflow() {
        assert_eq!(
            parse_timestamp("2022-179T24:00:00"),
            Err(TimestampParseError::TimeOutOfRange)
        );
        assert_eq!(
            parse_timestamp("2022-179T00:60:00"),
            Err(TimestampParseError::TimeOutOfRange)
        );
        assert_eq!(
            parse_timestamp("2022-179T00:00:60"),
            Err(TimestampParseError::TimeOutOfRange)
        );
    }

    #[test]
    fn rejects_malformed_inputs() {
        for input in [
            "",
            "2022179T00:00:00",
            "22-179T00:00:00",
            "2022-179 00:00:00",
            "2022-1790T00:00:00",
            "2022-179T0:00:00",
            "2022-179T00:00",
            "2022-179T00:00:00.",
            "2022-179T00:00:00.1234567890",
            "2022-179T00:00:0a",
            "2022-17aT00:00:00",
        ] {
            assert_eq!(
                parse_timestamp(input),
                Err(TimestampParseError::Malformed),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn formats_epoch_origin() {
        assert_eq!(format_timestamp(0.0), "1970-001T00:00:00.000");
    }

    #[test]
    fn formats_negative_times() {
        assert_eq!(format_timestamp(-0.5), "1969-365T23:59:59.500");
        assert_eq!(format_timestamp(-86_400.0), "1969-365T00:00:00.000");
    }

    #[test]
    fn rounds_to_milliseconds_before_splitting_fields() {
        // Rounding up at the end of a day must carry into the next day
        // instead of printing second sixty.
        assert_eq!(format_timestamp(86_399.9996), "1970-002T00:00:00.000");
    }

    #[test]
    fn round_trips_through_text() {
        for input in [
            "1970-001T00:00:00.000",
            "2020-366T23:59:59.999",
            "2022-179T23:41:54.184",
            "1969-365T23:59:59.500",
        ] {
            let t = parse_timestamp(input).unwrap();
            assert_eq!(format_timestamp(t), input);
        }
    }

    #[test]
    fn round_trips_through_seconds() {
        for t in [0.0, 0.25, 1_656_459_714.184, -123_456.789] {
            let text = format_timestamp(t);
            let back = parse_timestamp(&text).unwrap();
            assert!((back - t).abs() < 5e-4, "{t} -> {text} -> {back}");
        }
    }

    #[test]
    fn error_display_is_stable() {
        assert_eq!(
            TimestampParseError::Malformed.to_string(),
            "expected a `YYYY-DOYTHH:MM:SS[.fff]` timestamp"
        );
    }
}
