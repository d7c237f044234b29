/// Truncate a metric value to a fixed number of decimal digits.
///
/// The value is truncated toward zero, not rounded:
/// `trunc(value * 10^digits) / 10^digits`.
///
/// # Arguments
///
/// * `value` - The value to truncate.
/// * `digits` - The number of decimal digits to keep.
///
/// # Example
///
/// ```
/// use imdiff_imgproc::metrics::truncate_decimal;
///
/// assert_eq!(truncate_decimal(0.123456, 4), 0.1234);
/// assert_eq!(truncate_decimal(0.12999, 4), 0.1299);
/// ```
pub fn truncate_decimal(value: f32, digits: u32) -> f32 {
    let scale = 10f32.powi(digits as i32);
    (value * scale).trunc() / scale
}

#[cfg(test)]
mod tests {
    use super::truncate_decimal;

    #[test]
    fn truncates_not_rounds() {
        assert_eq!(truncate_decimal(0.123456, 4), 0.1234);
        assert_eq!(truncate_decimal(0.99999, 4), 0.9999);
        assert_eq!(truncate_decimal(0.12996, 4), 0.1299);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(truncate_decimal(0.0, 4), 0.0);
    }

    #[test]
    fn exact_values_unchanged() {
        assert_eq!(truncate_decimal(0.5, 4), 0.5);
        assert_eq!(truncate_decimal(2.0, 4), 2.0);
    }
}
