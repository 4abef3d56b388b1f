//! Text rendering for step values and session messages.

use crate::models::{SequenceKind, Step};

/// Digits after the decimal point for fixed and scientific output.
const PRECISION: usize = 6;

/// Render a result value: fixed-point with 6 decimals, switching to
/// scientific notation when `|v| > 1e6` or `0 < |v| < 1e-6`.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let magnitude = value.abs();
    if magnitude > 1e6 || (magnitude < 1e-6 && value != 0.0) {
        scientific(value, PRECISION)
    } else {
        format!("{:.*}", PRECISION, value)
    }
}

/// Render an operand inside a step expression with up to 6 significant
/// digits and no trailing zeros (`2`, `1.5`, `1e+07`).
pub fn format_operand(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    if value == 0.0 {
        return format!("{value}");
    }

    // Round to 6 significant digits first; the decimal exponent of the
    // rounded value decides between fixed and scientific layout.
    let rounded = format!("{:.*e}", PRECISION - 1, value);
    let exponent: i32 = rounded
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION as i32 {
        let trimmed = match rounded.split_once('e') {
            Some((mantissa, e)) => format!("{}e{}", strip_trailing_zeros(mantissa), e),
            None => rounded,
        };
        with_signed_exponent(trimmed)
    } else {
        let decimals = (PRECISION as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn scientific(value: f64, precision: usize) -> String {
    with_signed_exponent(format!("{value:.precision$e}"))
}

/// `1.5e6` -> `1.5e+06`, `1e-7` -> `1e-07`.
fn with_signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

// ─── Session messages ─────────────────────────────────────────────────────────

/// `Base = 2.000000, Exponent = 5`
pub fn parameters_message(base: f64, exponent: i32) -> String {
    format!("Base = {}, Exponent = {}", format_value(base), exponent)
}

/// `Starting Linear Growth Calculation`
pub fn start_message(kind: SequenceKind) -> String {
    format!("Starting {kind} Growth Calculation")
}

/// One line per computed step.
///
/// Step 1 renders the base like a result (`2.000000`), and linear step 1 is
/// the bare base with no multiplication. Later steps use the compact operand.
pub fn step_message(kind: SequenceKind, base: f64, step: &Step) -> String {
    let value = format_value(step.value);
    if step.index == 1 {
        let b = format_value(base);
        return match kind {
            SequenceKind::Linear => format!("Step 1: {b} = {value}"),
            SequenceKind::Exponential => format!("Step 1: {b}^1 = {value}"),
        };
    }

    let b = format_operand(base);
    match kind {
        SequenceKind::Linear => format!("Step {}: {b} × {} = {value}", step.index, step.index),
        SequenceKind::Exponential => format!("Step {}: {b}^{} = {value}", step.index, step.index),
    }
}

/// `Final Exponential Result: 32.000000`
pub fn final_message(kind: SequenceKind, value: f64) -> String {
    format!("Final {kind} Result: {}", format_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_fixed() {
        assert_eq!(format_value(6.0), "6.000000");
        assert_eq!(format_value(-2.5), "-2.500000");
        assert_eq!(format_value(0.0), "0.000000");
        assert_eq!(format_value(1_000_000.0), "1000000.000000");
        assert_eq!(format_value(0.000001), "0.000001");
    }

    #[test]
    fn test_format_value_scientific() {
        assert_eq!(format_value(1_048_576.0), "1.048576e+06");
        assert_eq!(format_value(-1_048_576.0), "-1.048576e+06");
        assert_eq!(format_value(1e-7), "1.000000e-07");
        assert_eq!(format_value(2f64.powi(100)), "1.267651e+30");
        assert_eq!(format_value(1e300), "1.000000e+300");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_value(f64::NAN), "nan");
    }

    #[test]
    fn test_format_operand() {
        assert_eq!(format_operand(2.0), "2");
        assert_eq!(format_operand(1.5), "1.5");
        assert_eq!(format_operand(-3.25), "-3.25");
        assert_eq!(format_operand(0.0001), "0.0001");
        assert_eq!(format_operand(0.00001), "1e-05");
        assert_eq!(format_operand(123456.0), "123456");
        assert_eq!(format_operand(1234567.0), "1.23457e+06");
        assert_eq!(format_operand(1e7), "1e+07");
        assert_eq!(format_operand(0.0), "0");
    }

    #[test]
    fn test_step_messages() {
        let first = Step { index: 1, value: 2.0 };
        let third = Step { index: 3, value: 6.0 };
        assert_eq!(step_message(SequenceKind::Linear, 2.0, &first), "Step 1: 2.000000 = 2.000000");
        assert_eq!(step_message(SequenceKind::Linear, 2.0, &third), "Step 3: 2 × 3 = 6.000000");

        let cube = Step { index: 3, value: 8.0 };
        assert_eq!(step_message(SequenceKind::Exponential, 2.0, &cube), "Step 3: 2^3 = 8.000000");
        assert_eq!(
            step_message(SequenceKind::Exponential, 2.0, &first),
            "Step 1: 2.000000^1 = 2.000000"
        );

        let big = Step { index: 1, value: 2e7 };
        assert_eq!(
            step_message(SequenceKind::Linear, 2e7, &big),
            "Step 1: 2.000000e+07 = 2.000000e+07"
        );
    }

    #[test]
    fn test_session_messages() {
        assert_eq!(parameters_message(2.0, 5), "Base = 2.000000, Exponent = 5");
        assert_eq!(start_message(SequenceKind::Linear), "Starting Linear Growth Calculation");
        assert_eq!(
            final_message(SequenceKind::Exponential, 32.0),
            "Final Exponential Result: 32.000000"
        );
    }
}
