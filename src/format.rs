//! Display formatting for evaluation results.
//!
//! Values are reduced to 14 significant decimal digits before rendering so
//! binary floating-point artifacts (`0.1 + 0.2`) do not leak into the
//! display, then expanded to plain decimal notation with trailing fractional
//! zeros stripped and the integer part grouped by thousands.

/// Significant decimal digits kept in the display.
const DISPLAY_PRECISION: usize = 14;

/// Renders a finite numeric result as the canonical display string.
///
/// `format_value(1000000.0)` is `"1,000,000"`, `format_value(0.1 + 0.2)` is
/// `"0.3"`, and formatting is idempotent: re-parsing the output (commas
/// stripped) and formatting again yields the same string. Scientific
/// notation is never emitted.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }
    if !value.is_finite() {
        // The pipeline never produces these; direct callers get the plain
        // rendering rather than a panic.
        return value.to_string();
    }

    // Round to the display precision by re-rendering through exponential
    // notation, then expand by placing the decimal point manually.
    let exponential = format!("{:.*e}", DISPLAY_PRECISION - 1, value);
    let Some((mantissa, exponent)) = exponential.split_once('e') else {
        return exponential;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let negative = mantissa.starts_with('-');
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();

    let (integer_digits, fraction_digits) = if exponent >= 0 {
        let point = exponent as usize + 1;
        if point >= digits.len() {
            (format!("{digits:0<point$}"), String::new())
        } else {
            (digits[..point].to_string(), digits[point..].to_string())
        }
    } else {
        let leading_zeros = "0".repeat((-exponent - 1) as usize);
        ("0".to_string(), format!("{leading_zeros}{digits}"))
    };

    let fraction = fraction_digits.trim_end_matches('0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(&integer_digits));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Inserts grouping commas into a run of integer digits, in groups of three
/// from the right. The fractional part is never grouped.
fn group_thousands(digits: &str) -> String {
    let length = digits.len();
    let mut grouped = String::with_capacity(length + length / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (length - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
