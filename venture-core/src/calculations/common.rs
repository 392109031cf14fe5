//! Common utility functions for venture calculations.
//!
//! This module provides the rounding helpers shared by the scoring engine and
//! the lenient number parsing applied to raw questionnaire answers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use venture_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(3.454)), dec!(3.45));
/// assert_eq!(round_half_up(dec!(3.455)), dec!(3.46));
/// assert_eq!(round_half_up(dec!(-3.455)), dec!(-3.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    round_dp(value, 2)
}

/// Rounds to `dp` decimal places, midpoints away from zero.
pub fn round_dp(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to a whole number, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use venture_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(29.5)), dec!(30));
/// assert_eq!(round_whole(dec!(29.49)), dec!(29));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    round_dp(value, 0)
}

/// Returns `value`, or `cap` when `value` exceeds it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use venture_core::calculations::common::cap_at;
///
/// assert_eq!(cap_at(dec!(42), dec!(30)), dec!(30));
/// assert_eq!(cap_at(dec!(12), dec!(30)), dec!(12));
/// assert_eq!(cap_at(dec!(-5), dec!(30)), dec!(-5));
/// ```
pub fn cap_at(
    value: Decimal,
    cap: Decimal,
) -> Decimal {
    if value > cap { cap } else { value }
}

/// Largest number of significant digits a `Decimal` holds exactly.
const MAX_DIGITS: usize = 28;

/// Leading number literal of an answer, split into its parts.
#[derive(Debug, PartialEq, Eq)]
struct Literal<'a> {
    negative: bool,
    /// Integer digits with thousands separators removed.
    int: String,
    fraction: &'a str,
    exponent: i64,
}

/// `true` for `1,500` and `12,345,678`: a 1-3 digit group followed by
/// groups of exactly three.
fn is_thousands_grouping(run: &str) -> bool {
    let mut groups = run.split(',');
    let first_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    first_ok
        && run.contains(',')
        && groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()))
}

fn digit_run(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Reads the longest leading number literal: sign, integer part, fraction
/// and exponent. Commas survive only as well-formed thousands separators,
/// so `1,5` reads as `1`. An exponent marker without digits is not part of
/// the literal.
fn leading_literal(s: &str) -> Option<Literal<'_>> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run_end = rest
        .find(|c: char| !c.is_ascii_digit() && c != ',')
        .unwrap_or(rest.len());
    let run = &rest[..run_end];
    let (int, rest) = if is_thousands_grouping(run) {
        (run.replace(',', ""), &rest[run_end..])
    } else {
        let digits = digit_run(rest);
        (digits.to_string(), &rest[digits.len()..])
    };

    let (fraction, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let digits = digit_run(after_dot);
            (digits, &after_dot[digits.len()..])
        }
        None => ("", rest),
    };
    if int.is_empty() && fraction.is_empty() {
        return None;
    }

    let exponent = rest
        .strip_prefix(['e', 'E'])
        .and_then(|after_e| {
            let (exp_negative, digits) = match after_e.as_bytes().first() {
                Some(b'-') => (true, digit_run(&after_e[1..])),
                Some(b'+') => (false, digit_run(&after_e[1..])),
                _ => (false, digit_run(after_e)),
            };
            if digits.is_empty() {
                return None;
            }
            // Anything past i64 is out of range either way.
            let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
            Some(if exp_negative { -magnitude } else { magnitude })
        })
        .unwrap_or(0);

    Some(Literal {
        negative,
        int,
        fraction,
        exponent,
    })
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

impl Literal<'_> {
    /// Value of the literal. Magnitudes beyond `Decimal` saturate to
    /// `Decimal::MAX`/`MIN`; magnitudes below its precision become zero.
    fn to_decimal(&self) -> Decimal {
        let int = self.int.trim_start_matches('0');
        if int.len() > MAX_DIGITS {
            return if self.exponent < 0 {
                self.scaled_from_digits(int)
            } else {
                saturated(self.negative)
            };
        }

        let kept_fraction = &self.fraction[..self.fraction.len().min(MAX_DIGITS - int.len())];
        let mut text = String::with_capacity(MAX_DIGITS + 3);
        if self.negative {
            text.push('-');
        }
        text.push_str(if int.is_empty() { "0" } else { int });
        if !kept_fraction.is_empty() {
            text.push('.');
            text.push_str(kept_fraction);
        }
        match text.parse::<Decimal>() {
            Ok(mantissa) => scale_by_power_of_ten(mantissa, self.exponent),
            Err(_) => saturated(self.negative),
        }
    }

    /// Over-long integer digits shifted down by a negative exponent first.
    fn scaled_from_digits(
        &self,
        int: &str,
    ) -> Decimal {
        let excess = int.len() - MAX_DIGITS;
        let shifted = Literal {
            negative: self.negative,
            int: int[..MAX_DIGITS].to_string(),
            fraction: "",
            exponent: self.exponent.saturating_add(excess as i64),
        };
        shifted.to_decimal()
    }
}

/// `mantissa × 10^exponent`, saturating on overflow and flushing to zero on
/// underflow.
fn scale_by_power_of_ten(
    mantissa: Decimal,
    exponent: i64,
) -> Decimal {
    // Past this no non-zero Decimal stays in range.
    const LIMIT: i64 = 2 * MAX_DIGITS as i64 + 2;

    if mantissa.is_zero() {
        return Decimal::ZERO;
    }
    if exponent > LIMIT {
        return saturated(mantissa.is_sign_negative());
    }
    if exponent < -LIMIT {
        return Decimal::ZERO;
    }

    let mut value = mantissa;
    for _ in 0..exponent.unsigned_abs() {
        let next = if exponent > 0 {
            value.checked_mul(Decimal::TEN)
        } else {
            value.checked_div(Decimal::TEN)
        };
        value = match next {
            Some(next) => next,
            None if exponent > 0 => return saturated(mantissa.is_sign_negative()),
            None => return Decimal::ZERO,
        };
    }
    value
}

/// Parses an answer as a number.
///
/// Reads the leading number of the answer and ignores whatever follows it,
/// so `"5 EUR"` reads as `5` and `"1e3x"` as `1000`. Commas count only as
/// thousands separators in groups of three; `"1,5"` reads as `1`.
/// Scientific notation is accepted. Values too large for a `Decimal`
/// saturate and values too small for it read as zero. Returns `None` for
/// blank or non-numeric input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use venture_core::calculations::common::parse_number;
///
/// assert_eq!(parse_number("1,234.5"), Some(dec!(1234.5)));
/// assert_eq!(parse_number("1,5"), Some(dec!(1)));
/// assert_eq!(parse_number("5 EUR"), Some(dec!(5)));
/// assert_eq!(parse_number("1e3"), Some(dec!(1000)));
/// assert_eq!(parse_number("1e30"), Some(Decimal::MAX));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(s: &str) -> Option<Decimal> {
    leading_literal(s.trim()).map(|literal| literal.to_decimal())
}

/// Parses an answer, falling back to `fallback` when it is unusable.
///
/// Missing, blank, non-numeric and zero answers all resolve to `fallback`.
/// A zero reading counts as unset so that an investment of `0` keeps the
/// configured default.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use venture_core::calculations::common::parse_number_or_default;
///
/// assert_eq!(parse_number_or_default(Some("2.5"), dec!(0)), dec!(2.5));
/// assert_eq!(parse_number_or_default(Some("n/a"), dec!(1000)), dec!(1000));
/// assert_eq!(parse_number_or_default(Some("0"), dec!(1000)), dec!(1000));
/// assert_eq!(parse_number_or_default(None, dec!(0)), dec!(0));
/// ```
pub fn parse_number_or_default(
    value: Option<&str>,
    fallback: Decimal,
) -> Decimal {
    value
        .and_then(parse_number)
        .filter(|number| !number.is_zero())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // rounding tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(105.004)), dec!(105.00));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(105.005)), dec!(105.01));
    }

    #[test]
    fn round_dp_one_place() {
        assert_eq!(round_dp(dec!(66.666), 1), dec!(66.7));
        assert_eq!(round_dp(dec!(-33.35), 1), dec!(-33.4));
    }

    #[test]
    fn round_whole_handles_midpoints() {
        assert_eq!(round_whole(dec!(0.5)), dec!(1));
        assert_eq!(round_whole(dec!(2649.5)), dec!(2650));
        assert_eq!(round_whole(dec!(-0.5)), dec!(-1));
    }

    // =========================================================================
    // cap_at tests
    // =========================================================================

    #[test]
    fn cap_at_keeps_equal_value() {
        assert_eq!(cap_at(dec!(30), dec!(30)), dec!(30));
    }

    #[test]
    fn cap_at_does_not_raise_negative_values() {
        assert_eq!(cap_at(dec!(-100), dec!(20)), dec!(-100));
    }

    // =========================================================================
    // parse_number tests
    // =========================================================================

    #[test]
    fn parse_number_accepts_plain_values() {
        assert_eq!(parse_number("5"), Some(dec!(5)));
        assert_eq!(parse_number("1.5"), Some(dec!(1.5)));
        assert_eq!(parse_number("-20"), Some(dec!(-20)));
    }

    #[test]
    fn parse_number_accepts_comma_thousands_separator() {
        assert_eq!(parse_number("1,500"), Some(dec!(1500)));
        assert_eq!(parse_number("1,234,567.89"), Some(dec!(1234567.89)));
        assert_eq!(parse_number("-12,000 EUR"), Some(dec!(-12000)));
    }

    #[test]
    fn parse_number_stops_at_decimal_comma() {
        assert_eq!(parse_number("1,5"), Some(dec!(1)));
        assert_eq!(parse_number("2,50 EUR"), Some(dec!(2)));
        assert_eq!(parse_number("1,5000"), Some(dec!(1)));
        assert_eq!(parse_number("1,500,5"), Some(dec!(1)));
    }

    #[test]
    fn parse_number_trims_whitespace() {
        assert_eq!(parse_number("  123.45  "), Some(dec!(123.45)));
    }

    #[test]
    fn parse_number_reads_leading_number() {
        assert_eq!(parse_number("5 EUR"), Some(dec!(5)));
        assert_eq!(parse_number("2%"), Some(dec!(2)));
        assert_eq!(parse_number("12.5.3"), Some(dec!(12.5)));
        assert_eq!(parse_number("7. days"), Some(dec!(7)));
    }

    #[test]
    fn parse_number_reads_bare_fraction() {
        assert_eq!(parse_number(".5x"), Some(dec!(0.5)));
        assert_eq!(parse_number("-.25 units"), Some(dec!(-0.25)));
    }

    #[test]
    fn parse_number_reads_scientific_notation() {
        assert_eq!(parse_number("1.5e3"), Some(dec!(1500)));
        assert_eq!(parse_number("2E-2"), Some(dec!(0.02)));
        assert_eq!(parse_number("4e+1"), Some(dec!(40)));
    }

    #[test]
    fn parse_number_saturates_huge_exponents() {
        assert_eq!(parse_number("1e30"), Some(Decimal::MAX));
        assert_eq!(parse_number("-1e30"), Some(Decimal::MIN));
        assert_eq!(parse_number("1e999999999999999999999"), Some(Decimal::MAX));
    }

    #[test]
    fn parse_number_flushes_tiny_exponents_to_zero() {
        assert_eq!(parse_number("1e-30"), Some(Decimal::ZERO));
        assert_eq!(parse_number_or_default(Some("1e-30"), dec!(1000)), dec!(1000));
    }

    #[test]
    fn parse_number_reads_exponent_before_trailing_text() {
        assert_eq!(parse_number("1e3x"), Some(dec!(1000)));
        assert_eq!(parse_number("2.5e2 visitors"), Some(dec!(250)));
    }

    #[test]
    fn parse_number_ignores_exponent_marker_without_digits() {
        assert_eq!(parse_number("5e"), Some(dec!(5)));
        assert_eq!(parse_number("5 EUR"), Some(dec!(5)));
        assert_eq!(parse_number("3e-x"), Some(dec!(3)));
    }

    #[test]
    fn parse_number_saturates_overlong_integers() {
        assert_eq!(parse_number("99999999999999999999999999999999"), Some(Decimal::MAX));
        assert_eq!(
            parse_number("12345678901234567890123456789012e-10"),
            Some(dec!(1234567890123456789012.345678))
        );
    }

    #[test]
    fn parse_number_keeps_precision_for_long_fractions() {
        assert_eq!(
            parse_number("0.12345678901234567890123456789999"),
            Some(dec!(0.1234567890123456789012345678))
        );
    }

    #[test]
    fn parse_number_rejects_text() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("EUR 5"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn parse_number_rejects_blank() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    // =========================================================================
    // parse_number_or_default tests
    // =========================================================================

    #[test]
    fn parse_number_or_default_uses_parsed_value() {
        assert_eq!(parse_number_or_default(Some("42"), dec!(1000)), dec!(42));
    }

    #[test]
    fn parse_number_or_default_missing_uses_fallback() {
        assert_eq!(parse_number_or_default(None, dec!(1000)), dec!(1000));
    }

    #[test]
    fn parse_number_or_default_invalid_uses_fallback() {
        assert_eq!(parse_number_or_default(Some("lots"), dec!(0)), dec!(0));
        assert_eq!(parse_number_or_default(Some(""), dec!(1000)), dec!(1000));
    }

    #[test]
    fn parse_number_or_default_zero_uses_fallback() {
        assert_eq!(parse_number_or_default(Some("0"), dec!(1000)), dec!(1000));
        assert_eq!(parse_number_or_default(Some("0.00"), dec!(1000)), dec!(1000));
    }

    #[test]
    fn parse_number_or_default_keeps_negative_values() {
        assert_eq!(parse_number_or_default(Some("-3"), dec!(0)), dec!(-3));
    }
}
