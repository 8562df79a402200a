//! Arbitrary-precision decimal arithmetic on decimal strings.
//!
//! Every operation takes an explicit result `scale` (digits after the
//! point). The exact result is truncated toward zero to that scale and
//! rendered with exactly `scale` fractional digits, so `add("1.5", "0", 2)`
//! yields `"1.50"`.

use std::cmp::Ordering;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};

use crate::error::{HelperError, Result};

/// Parses a plain decimal operand: optional sign, digits, at most one point.
///
/// Exponents, digit separators and empty digit runs are rejected.
pub fn parse(value: &str) -> Result<BigDecimal> {
    let invalid = || HelperError::InvalidNumber(value.to_string());

    let trimmed = value.trim();
    let body = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));

    let digits_only = int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit());
    if !digits_only || (int_part.is_empty() && frac_part.is_empty()) {
        return Err(invalid());
    }

    BigDecimal::from_str(trimmed).map_err(|_| invalid())
}

fn truncate(value: &BigDecimal, scale: u32) -> BigDecimal {
    value.with_scale_round(i64::from(scale), RoundingMode::Down)
}

fn render(value: &BigDecimal, scale: u32) -> String {
    truncate(value, scale).to_plain_string()
}

fn pow10(exp: i64) -> Result<BigInt> {
    let exp = u32::try_from(exp).map_err(|_| HelperError::Overflow)?;
    Ok(BigInt::from(10u8).pow(exp))
}

/// `left + right`, truncated to `scale` digits.
pub fn add(left: &str, right: &str, scale: u32) -> Result<String> {
    Ok(render(&(parse(left)? + parse(right)?), scale))
}

/// `left - right`, truncated to `scale` digits.
pub fn sub(left: &str, right: &str, scale: u32) -> Result<String> {
    Ok(render(&(parse(left)? - parse(right)?), scale))
}

/// `left * right`, truncated to `scale` digits.
pub fn mul(left: &str, right: &str, scale: u32) -> Result<String> {
    Ok(render(&(parse(left)? * parse(right)?), scale))
}

/// `dividend / divisor`, truncated to `scale` digits.
pub fn div(dividend: &str, divisor: &str, scale: u32) -> Result<String> {
    let dividend = parse(dividend)?;
    let divisor = parse(divisor)?;
    if divisor.is_zero() {
        return Err(HelperError::DivisionByZero);
    }

    // quotient * 10^scale = a * 10^(scale + sb - sa) / b, integer division truncates.
    let (a, sa) = dividend.as_bigint_and_exponent();
    let (b, sb) = divisor.as_bigint_and_exponent();
    let exp = i64::from(scale) + sb - sa;
    let quotient = if exp >= 0 {
        a * pow10(exp)? / b
    } else {
        a / (b * pow10(-exp)?)
    };

    Ok(render(&BigDecimal::new(quotient, i64::from(scale)), scale))
}

/// Compares both operands after truncating them to `scale` digits.
pub fn compare(left: &str, right: &str, scale: u32) -> Result<Ordering> {
    let left = truncate(&parse(left)?, scale);
    let right = truncate(&parse(right)?, scale);
    Ok(left.cmp(&right))
}

/// Formats a price-like number with `scale` digits.
///
/// With `remove_excess_zero`, trailing fractional zeros (and a dangling
/// point) are dropped: `"12.50"` becomes `"12.5"`, `"3.00"` becomes `"3"`.
pub fn format(number: &str, remove_excess_zero: bool, scale: u32) -> Result<String> {
    let formatted = add(number, "0", scale)?;
    if remove_excess_zero && formatted.contains('.') {
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        return Ok(trimmed.to_string());
    }
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_plain_decimals() {
        assert_eq!(parse("-12.3400").unwrap(), BigDecimal::new(BigInt::from(-123400), 4));
        assert_eq!(parse(".5").unwrap(), BigDecimal::new(BigInt::from(5), 1));
        assert_eq!(parse(" +7. ").unwrap(), BigDecimal::from(7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "-", ".", "abc", "1.2.3", "1e5", "12a", "1_000", "--1"] {
            assert!(
                matches!(parse(input), Err(HelperError::InvalidNumber(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_add_and_sub_truncate() {
        assert_eq!(add("1.234", "2", 2).unwrap(), "3.23");
        assert_eq!(add("1.5", "0", 2).unwrap(), "1.50");
        assert_eq!(add("1.9", "0", 0).unwrap(), "1");
        assert_eq!(add("-1.9", "0", 0).unwrap(), "-1");
        assert_eq!(sub("1", "2.5", 1).unwrap(), "-1.5");
        assert_eq!(sub("0", "0.001", 2).unwrap(), "0.00");
    }

    #[test]
    fn test_mul() {
        assert_eq!(mul("1.25", "-3", 1).unwrap(), "-3.7");
        assert_eq!(mul("19.99", "3", 2).unwrap(), "59.97");
        assert_eq!(mul("0.1", "0.1", 4).unwrap(), "0.0100");
    }

    #[test]
    fn test_div() {
        assert_eq!(div("10", "3", 4).unwrap(), "3.3333");
        assert_eq!(div("-10", "4", 0).unwrap(), "-2");
        assert_eq!(div("1.000", "0.25", 2).unwrap(), "4.00");
        assert_eq!(div("2", "0.0003", 0).unwrap(), "6666");
        assert!(matches!(div("1", "0.00", 2), Err(HelperError::DivisionByZero)));
    }

    #[test]
    fn test_compare_at_scale() {
        assert_eq!(compare("1.001", "1.002", 2).unwrap(), Ordering::Equal);
        assert_eq!(compare("1.001", "1.002", 3).unwrap(), Ordering::Less);
        assert_eq!(compare("5", "-5", 0).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_format() {
        assert_eq!(format("12.5", false, 2).unwrap(), "12.50");
        assert_eq!(format("12.50", true, 2).unwrap(), "12.5");
        assert_eq!(format("3", true, 2).unwrap(), "3");
        assert_eq!(format("100", true, 0).unwrap(), "100");
        assert_eq!(format("0.129", false, 2).unwrap(), "0.12");
    }

    #[test]
    fn test_large_scales() {
        assert_eq!(add("1", "0", 39).unwrap(), format!("1.{}", "0".repeat(39)));
        assert_eq!(format("12.5", false, 40).unwrap(), format!("12.5{}", "0".repeat(39)));
        assert_eq!(div("1", "3", 40).unwrap(), format!("0.{}", "3".repeat(40)));
        assert_eq!(div("-2", "3", 45).unwrap(), format!("-0.{}", "6".repeat(45)));
    }

    #[test]
    fn test_wide_operands() {
        assert_eq!(
            mul("12345678901234567890", "12345678901234567890", 2).unwrap(),
            "152415787532388367501905199875019052100.00"
        );
        assert_eq!(
            add("99999999999999999999", "199999999999999999998", 0).unwrap(),
            "299999999999999999997"
        );
        assert_eq!(
            compare(&"9".repeat(50), &format!("1{}", "0".repeat(50)), 0).unwrap(),
            Ordering::Less
        );
    }
}
