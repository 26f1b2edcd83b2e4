//! Number formatting for legends, axes and tooltips.

/// Label used wherever a statistic is missing.
pub const MISSING_LABEL: &str = "N/A";

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

const MINUS: char = '\u{2212}';

/// Split `x` (non-negative) into its significant digits and decimal exponent
/// when rounded to `precision` significant digits, e.g. `(1500, 2)` gives
/// `("15", 3)`.
fn decimal_parts(x: f64, precision: usize) -> (String, i32) {
    let p = precision.max(1);
    let formatted = format!("{:.*e}", p - 1, x);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    (mantissa.replace('.', ""), exponent.parse().unwrap_or(0))
}

/// Format with an SI prefix and `precision` significant digits (d3's `.Ns`):
/// `12345` -> `12k`, `1500` -> `1.5k`, `0` -> `0.0`.
pub fn format_si(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let p = precision.max(1);
    let (digits, exponent) = decimal_parts(value.abs(), p);
    let prefix_exponent = exponent.div_euclid(3).clamp(-8, 8);
    let i = exponent - prefix_exponent * 3 + 1;
    let n = digits.len() as i32;

    let body = if i == n {
        digits
    } else if i > n {
        format!("{}{}", digits, "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (int, frac) = digits.split_at(i as usize);
        format!("{}.{}", int, frac)
    } else {
        let extra = (p as i32 + i - 1).max(1) as usize;
        format!("0.{}{}", "0".repeat((-i) as usize), decimal_parts(value.abs(), extra).0)
    };

    let prefix = SI_PREFIXES[(prefix_exponent + 8) as usize];
    let sign = if value < 0.0 && body.chars().any(|c| c != '0' && c != '.') {
        MINUS.to_string()
    } else {
        String::new()
    };
    format!("{}{}{}", sign, body, prefix)
}

/// Fixed-point with thousands separators (d3's `,.Nf`): `20000` -> `20,000`.
pub fn format_grouped_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int, frac) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted.clone(), None),
    };

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(f) = frac {
        grouped.push('.');
        grouped.push_str(&f);
    }

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        format!("{}{}", MINUS, grouped)
    } else {
        grouped
    }
}

/// A statistic as shown in tooltips: the plain number, or `N/A` when missing.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        MISSING_LABEL.to_string()
    } else {
        format!("{}", value)
    }
}

/// A histogram bin range as `round(x0) - round(x1)`.
pub fn format_range(x0: f64, x1: f64) -> String {
    format!("{} - {}", (x0 + 0.5).floor(), (x1 + 0.5).floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn si_two_significant_digits() {
        assert_eq!(format_si(12345.0, 2), "12k");
        assert_eq!(format_si(1500.0, 2), "1.5k");
        assert_eq!(format_si(58731.0, 2), "59k");
        assert_eq!(format_si(120000.0, 2), "120k");
        assert_eq!(format_si(13.2, 2), "13");
        assert_eq!(format_si(3.9, 2), "3.9");
        assert_eq!(format_si(0.5, 2), "500m");
        assert_eq!(format_si(2_500_000.0, 2), "2.5M");
    }

    #[test]
    fn si_zero_and_negative() {
        assert_eq!(format_si(0.0, 2), "0.0");
        assert_eq!(format_si(-1500.0, 2), "\u{2212}1.5k");
    }

    #[test]
    fn grouped_fixed() {
        assert_eq!(format_grouped_fixed(0.0, 0), "0");
        assert_eq!(format_grouped_fixed(999.0, 0), "999");
        assert_eq!(format_grouped_fixed(20000.0, 0), "20,000");
        assert_eq!(format_grouped_fixed(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped_fixed(0.26, 1), "0.3");
        assert_eq!(format_grouped_fixed(-4000.0, 0), "\u{2212}4,000");
    }

    #[test]
    fn missing_values_show_na() {
        assert_eq!(format_value(f64::NAN), "N/A");
        assert_eq!(format_value(13.5), "13.5");
        assert_eq!(format_value(58731.0), "58731");
    }

    #[test]
    fn ranges_are_rounded() {
        assert_eq!(format_range(10.4, 12.0), "10 - 12");
        assert_eq!(format_range(30.0, 30.7), "30 - 31");
    }
}
