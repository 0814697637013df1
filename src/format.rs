//! Display and input rules for the figures recorded against each period.

use crate::{CURRENCY_SUFFIX, GROUPING_SEPARATOR, PERCENT_SUFFIX};

/// Characters that cannot appear in an exported file name
const FORBIDDEN_FILE_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Formats an amount with two decimals, space-grouped thousands and a euro suffix.
///
/// `1234.5` renders as `1 234.50 €`. A non-finite value renders as an empty
/// cell.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let body = format!("{:.2}", value.abs());
    let (int_part, fraction) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{fraction}{CURRENCY_SUFFIX}",
        group_digits(int_part, GROUPING_SEPARATOR)
    )
}

/// Formats a percentage with two decimals: `12.5` renders as `12.50 %`.
/// A non-finite value renders as an empty cell.
pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!("{value:.2}{PERCENT_SUFFIX}")
}

/// Reads an amount typed as shown by [`format_amount`], without the grouping.
pub fn parse_amount(text: &str) -> Option<f64> {
    parse_stripped(text, &['€', ' '])
}

/// Reads a percentage typed as shown by [`format_percentage`].
pub fn parse_percentage(text: &str) -> Option<f64> {
    parse_stripped(text, &['%', ' '])
}

/// Reads a number written with either a comma or a dot as decimal separator.
pub fn parse_decimal(text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    text.replace(',', ".")
        .replace(' ', "")
        .trim()
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}

/// Writes decimals the French way, with a comma.
pub fn normalize_decimal(text: &str) -> String {
    text.replace('.', ",")
}

/// Turns free text (a salon or staff name) into a portable file name.
///
/// French accented letters fold to plain ASCII, `&` becomes `and`, and the
/// characters reserved by common file systems are dropped.
pub fn sanitize_file_name(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if FORBIDDEN_FILE_CHARS.contains(&ch) {
            continue;
        }
        match fold_char(ch) {
            Some(folded) => cleaned.push_str(folded),
            None => cleaned.push(ch),
        }
    }
    cleaned.trim().to_owned()
}

fn fold_char(ch: char) -> Option<&'static str> {
    let folded = match ch {
        '&' => "and",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'à' | 'â' | 'ä' => "a",
        'ù' | 'û' | 'ü' => "u",
        'ï' | 'î' => "i",
        'ô' | 'ö' => "o",
        'ç' => "c",
        'É' | 'È' | 'Ê' | 'Ë' => "E",
        'À' | 'Â' | 'Ä' => "A",
        'Ù' | 'Û' | 'Ü' => "U",
        'Ï' | 'Î' => "I",
        'Ô' | 'Ö' => "O",
        'Ç' => "C",
        _ => return None,
    };
    Some(folded)
}

fn parse_stripped(text: &str, strip: &[char]) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let cleaned: String = text.chars().filter(|ch| !strip.contains(ch)).collect();
    cleaned.trim().parse().ok().filter(|value: &f64| value.is_finite())
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && (len - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_cases() {
        struct TestCase {
            value:    f64,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                value:    0.0,
                expected: "0.00 €",
            },
            TestCase {
                value:    12.5,
                expected: "12.50 €",
            },
            TestCase {
                value:    999.999,
                expected: "1 000.00 €",
            },
            TestCase {
                value:    1234.5,
                expected: "1 234.50 €",
            },
            TestCase {
                value:    1_234_567.891,
                expected: "1 234 567.89 €",
            },
            TestCase {
                value:    -4321.0,
                expected: "-4 321.00 €",
            },
            TestCase {
                value:    f64::NAN,
                expected: "",
            },
            TestCase {
                value:    f64::INFINITY,
                expected: "",
            },
            TestCase {
                value:    f64::NEG_INFINITY,
                expected: "",
            },
        ];

        for case in &cases {
            assert_eq!(format_amount(case.value), case.expected, "formatting {}", case.value);
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(12.5), "12.50 %");
        assert_eq!(format_percentage(0.0), "0.00 %");
        assert_eq!(format_percentage(100.0), "100.00 %");
        assert_eq!(format_percentage(f64::NAN), "");
        assert_eq!(format_percentage(f64::INFINITY), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1234.50 €"), Some(1234.5));
        assert_eq!(parse_amount("1 234.50 €"), Some(1234.5));
        assert_eq!(parse_amount("  42 "), Some(42.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("douze €"), None);
        assert_eq!(parse_amount("NaN €"), None);
        assert_eq!(parse_amount("inf €"), None);
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("12.50 %"), Some(12.5));
        assert_eq!(parse_percentage("7%"), Some(7.0));
        assert_eq!(parse_percentage(""), None);
        assert_eq!(parse_percentage("n/a"), None);
    }

    #[test]
    fn test_parse_decimal_accepts_comma() {
        assert_eq!(parse_decimal("12,5"), Some(12.5));
        assert_eq!(parse_decimal("12.5"), Some(12.5));
        assert_eq!(parse_decimal("1 234,75"), Some(1234.75));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("-inf"), None);
    }

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("12.50 %"), "12,50 %");
        assert_eq!(normalize_decimal(&format_amount(1234.5)), "1 234,50 €");
        assert_eq!(parse_decimal(&normalize_decimal("3.25")), Some(3.25));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Coiffure & Beauté"), "Coiffure and Beaute");
        assert_eq!(sanitize_file_name("  Hélène Lefèvre "), "Helene Lefevre");
        assert_eq!(sanitize_file_name("Salon: \"Ça/Va\"?"), "Salon CaVa");
        assert_eq!(sanitize_file_name("Suivis <Décembre>|2025*"), "Suivis Decembre2025");
        assert_eq!(sanitize_file_name("ÉLÉONORE"), "ELEONORE");
    }
}
