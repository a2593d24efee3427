use crate::math::utils::{u256_to_f64, u256_to_integer};
use alloy_primitives::U256;
use rug::ops::Pow;
use rug::{Float, Integer};

const ESTIMATE_PRECISION: u32 = 128;
const SIGNIFICANT_DIGITS: u32 = 6;

/// token1-per-token0 price for a Q128.128 sqrt ratio, as a float.
pub fn sqrt_ratio_to_price(sqrt_ratio: U256) -> f64 {
    let sqrt_price = u256_to_f64(sqrt_ratio) / 2f64.powi(128);
    sqrt_price * sqrt_price
}

/// Renders the price for a sqrt ratio at six significant digits, ties rounded up.
///
/// Trailing zeros are dropped. Decimal exponents in `[-6, 21)` are written out
/// in full, anything else as `d.ddddde±x`.
pub fn format_price(sqrt_ratio: U256) -> String {
    let sqrt = u256_to_integer(sqrt_ratio);
    let squared = Integer::from(&sqrt * &sqrt);
    format_fraction(&squared, &(Integer::from(1) << 256u32))
}

fn pow10(exponent: u32) -> Integer {
    Integer::from(10).pow(exponent)
}

/// `numerator / denominator >= 10^exponent`
fn at_least_pow10(numerator: &Integer, denominator: &Integer, exponent: i32) -> bool {
    let scale = pow10(exponent.unsigned_abs());
    if exponent >= 0 {
        *numerator >= Integer::from(denominator * &scale)
    } else {
        Integer::from(numerator * &scale) >= *denominator
    }
}

/// Exact `floor(log10(numerator / denominator))` for a positive fraction.
fn decimal_exponent(numerator: &Integer, denominator: &Integer) -> i32 {
    let estimate = Float::with_val(ESTIMATE_PRECISION, numerator)
        / Float::with_val(ESTIMATE_PRECISION, denominator);
    let mut exponent = estimate
        .log10()
        .floor()
        .to_integer()
        .and_then(|e| e.to_i32())
        .unwrap_or(0);
    while !at_least_pow10(numerator, denominator, exponent) {
        exponent -= 1;
    }
    while at_least_pow10(numerator, denominator, exponent + 1) {
        exponent += 1;
    }
    exponent
}

fn format_fraction(numerator: &Integer, denominator: &Integer) -> String {
    if *numerator <= 0 {
        return "0".to_string();
    }

    let mut exponent = decimal_exponent(numerator, denominator);
    // scale so the kept digits form the integer part, then round half up
    let shift = SIGNIFICANT_DIGITS as i32 - 1 - exponent;
    let (scaled, divisor) = if shift >= 0 {
        (Integer::from(numerator * pow10(shift as u32)), denominator.clone())
    } else {
        (numerator.clone(), Integer::from(denominator * pow10(shift.unsigned_abs())))
    };
    let mut significand = (scaled * 2u32 + &divisor) / (divisor * 2u32);
    if significand == pow10(SIGNIFICANT_DIGITS) {
        significand = pow10(SIGNIFICANT_DIGITS - 1);
        exponent += 1;
    }

    let digits = significand.to_string();
    let digits = digits.trim_end_matches('0');

    if (-6..21).contains(&exponent) {
        if exponent < 0 {
            let zeros = "0".repeat((-exponent - 1) as usize);
            format!("0.{zeros}{digits}")
        } else {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                format!("{digits}{}", "0".repeat(int_len - digits.len()))
            } else {
                format!("{}.{}", &digits[..int_len], &digits[int_len..])
            }
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{lead}.{rest}")
        };
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    }
}
