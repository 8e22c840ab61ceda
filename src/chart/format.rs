/// Round to a whole number and insert `,` between groups of three digits.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(1234567.0), "1,234,567");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(1000.0), "1,000");
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(-4500.0), "-4,500");
    }

    #[test]
    fn test_format_thousands_rounds_float_noise() {
        // 1.234567 million is not exactly representable.
        assert_eq!(format_thousands(1.234567 * 1_000_000.0), "1,234,567");
        assert_eq!(format_thousands(1_000_000.6), "1,000,001");
    }
}
