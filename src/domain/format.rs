use thousands::Separable;
use unicode_width::UnicodeWidthStr;

/// Formats a money amount with thousands grouping and up to three
/// fractional digits, trailing zeros dropped: `4924.0` -> `$4,924`.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", grouped(value.abs()))
}

/// Formats a money amount with exactly two decimals: `0.31` -> `$0.31`.
pub fn currency_fixed2(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.2}", value.abs());
    match rounded.split_once('.') {
        Some((int, frac)) => format!("{sign}${}.{frac}", group_digits(int)),
        None => format!("{sign}${rounded}"),
    }
}

/// Plain number with grouping, no currency sign.
pub fn number(value: f64) -> String {
    if value < 0.0 {
        format!("-{}", grouped(value.abs()))
    } else {
        grouped(value)
    }
}

fn grouped(value: f64) -> String {
    let rounded = format!("{value:.3}");
    let (int, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        group_digits(int)
    } else {
        format!("{}.{frac}", group_digits(int))
    }
}

fn group_digits(int: &str) -> String {
    match int.parse::<u64>() {
        Ok(n) => n.separate_with_commas(),
        Err(_) => int.to_string(),
    }
}

/// Short form for bar labels: `80`, `4.9k`, `12.1k`, `1.2M`.
pub fn compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (abs / 1_000.0, "k")
    } else {
        return format!("{sign}{}", grouped((abs * 100.0).round() / 100.0));
    };
    let one_decimal = format!("{scaled:.1}");
    let trimmed = one_decimal.trim_end_matches(".0");
    format!("{sign}{trimmed}{suffix}")
}

/// `fuelConsumption` -> `Fuel consumption`.
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Truncates to `max_width` display columns, ending with `…` when cut.
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.encode_utf8(&mut [0; 4]).width();
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(4924.0, "$4,924")]
    #[case(80.0, "$80")]
    #[case(116650.0, "$116,650")]
    #[case(1234567.5, "$1,234,567.5")]
    #[case(0.0, "$0")]
    #[case(-1500.0, "-$1,500")]
    fn test_currency(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(currency(value), expected);
    }

    #[rstest]
    #[case(0.31, "$0.31")]
    #[case(3.126, "$3.13")]
    #[case(2.0, "$2.00")]
    #[case(1234.5, "$1,234.50")]
    fn test_currency_fixed2(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(currency_fixed2(value), expected);
    }

    #[test]
    fn test_number() {
        assert_eq!(number(21000.0), "21,000");
        assert_eq!(number(1.08), "1.08");
    }

    #[rstest]
    #[case(80.0, "80")]
    #[case(0.31, "0.31")]
    #[case(4924.0, "4.9k")]
    #[case(12050.0, "12.1k")]
    #[case(6000.0, "6k")]
    #[case(1_260_000.0, "1.3M")]
    fn test_compact(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(compact(value), expected);
    }

    #[rstest]
    #[case("fuelConsumption", "Fuel consumption")]
    #[case("tower", "Tower")]
    #[case("lossOfLoadProbability", "Loss of load probability")]
    #[case("", "")]
    fn test_humanize_key(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(humanize_key(key), expected);
    }

    #[test]
    fn test_truncate_width() {
        assert_eq!(truncate_width("Photovoltaic", 20), "Photovoltaic");
        assert_eq!(truncate_width("Photovoltaic", 6), "Photo…");
        assert_eq!(truncate_width("Photovoltaic", 0), "");
    }
}
