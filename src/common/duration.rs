use std::time::Duration;
use thiserror::Error;

/// Largest accepted duration, in nanoseconds (about 292 years).
const MAX_NANOS: u128 = i64::MAX as u128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("negative duration")]
    Negative,
    #[error("missing unit in duration")]
    MissingUnit,
    #[error("unknown unit '{0}' in duration")]
    UnknownUnit(String),
    #[error("invalid number in duration")]
    InvalidNumber,
    #[error("duration out of range")]
    Overflow,
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(len)
}

/// Parses a duration made of `<number><unit>` components.
///
/// Numbers may carry a decimal fraction, which is truncated to whole
/// nanoseconds. Units: `ns`, `us` (`µs`, `μs`), `ms`, `s`, `m`, `h`.
/// A bare `0` needs no unit.
///
/// # Examples
///
/// ```
/// use env_accessor::common::duration::parse;
/// use std::time::Duration;
///
/// assert_eq!(parse("1h30m"), Ok(Duration::from_secs(90 * 60)));
/// assert_eq!(parse("500ms"), Ok(Duration::from_millis(500)));
/// assert_eq!(parse("1.5s"), Ok(Duration::from_millis(1500)));
/// assert_eq!(parse("0"), Ok(Duration::ZERO));
/// assert!(parse("garbage").is_err());
/// ```
pub fn parse(input: &str) -> Result<Duration, DurationParseError> {
    let (negative, mut rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole_digits, after) = split_digits(rest);
        let (frac_digits, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };
        if whole_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationParseError::InvalidNumber);
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationParseError::MissingUnit);
        }
        let scale = unit_nanos(unit)
            .ok_or_else(|| DurationParseError::UnknownUnit(unit.to_string()))?;

        let whole: u128 = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse().map_err(|_| DurationParseError::Overflow)?
        };
        let mut nanos = whole
            .checked_mul(scale)
            .ok_or(DurationParseError::Overflow)?;

        if !frac_digits.is_empty() {
            // digits past 10^-18 cannot change the truncated result
            let digits = &frac_digits[..frac_digits.len().min(18)];
            let frac: u128 = digits
                .parse()
                .map_err(|_| DurationParseError::InvalidNumber)?;
            nanos += frac * scale / 10u128.pow(digits.len() as u32);
        }

        total = total
            .checked_add(nanos)
            .filter(|total| *total <= MAX_NANOS)
            .ok_or(DurationParseError::Overflow)?;
        rest = after;
    }

    if negative && total > 0 {
        return Err(DurationParseError::Negative);
    }

    Ok(Duration::from_nanos(total as u64))
}
