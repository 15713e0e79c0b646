//! Rating, deposit, spread, and leverage cleaning.

use crate::record::RawValue;

/// Parse the leading numeric prefix of a string, like `"4.5 stars"` -> 4.5.
///
/// Tries a full parse first, then falls back to the longest prefix that
/// reads as a signed decimal. Returns `None` when no digits lead the text.
pub(crate) fn leading_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(number) = text.parse::<f64>() {
        return Some(number);
    }

    let bytes = text.as_bytes();
    let mut end = 0;
    if bytes[0] == b'+' || bytes[0] == b'-' {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

/// Normalize a star rating to a number in `[0, 5]`.
///
/// Text ratings are parsed by numeric prefix. Missing, non-numeric, or
/// non-finite input defaults to 0; everything else is clamped into range.
pub(crate) fn clean_rating(raw: Option<&RawValue>) -> f64 {
    let parsed = match raw {
        Some(RawValue::Number(number)) => Some(*number),
        Some(RawValue::Text(text)) => leading_float(text),
        _ => None,
    };

    match parsed {
        Some(number) if number.is_finite() => number.clamp(0.0, 5.0),
        _ => 0.0,
    }
}

/// Normalize a minimum deposit to its digit string, like `"$1,000"` -> `"1000"`.
///
/// Keeps only ASCII digits. Numbers go through their decimal rendering
/// first, so `250.0` becomes `"250"`. When no digits remain the field is
/// absent, not zero.
pub(crate) fn clean_min_deposit(raw: Option<&RawValue>) -> Option<String> {
    let digits: String = match raw {
        Some(RawValue::Text(text)) => text.chars().filter(char::is_ascii_digit).collect(),
        Some(RawValue::Number(number)) => number
            .to_string()
            .chars()
            .filter(char::is_ascii_digit)
            .collect(),
        _ => return None,
    };

    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Normalize a spread to a non-negative number, like `"1.2 pips"` -> 1.2.
///
/// Negative spreads are scraper noise and clamp to zero. Non-numeric
/// input leaves the field absent.
pub(crate) fn clean_spread(raw: Option<&RawValue>) -> Option<f64> {
    let parsed = match raw {
        Some(RawValue::Number(number)) => Some(*number),
        Some(RawValue::Text(text)) => leading_float(text),
        _ => None,
    };

    match parsed {
        Some(number) if number.is_finite() => Some(number.max(0.0)),
        _ => None,
    }
}

fn keep_leverage_chars(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == ':')
        .collect()
}

/// Normalize leverage notation, like `"1:500x"` -> `"1:500"`.
///
/// Keeps digits and colons only. Unlike the other text normalizers this
/// one preserves an empty result, so downstream rules can flag leverage
/// text that carried no usable notation at all.
pub(crate) fn clean_leverage(raw: Option<&RawValue>) -> Option<String> {
    match raw {
        Some(RawValue::Text(text)) => Some(keep_leverage_chars(text)),
        Some(RawValue::Number(number)) => Some(keep_leverage_chars(&number.to_string())),
        _ => None,
    }
}
