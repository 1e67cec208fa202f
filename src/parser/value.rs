use super::*;
use crate::ast::Number;

const QUOTE: char = '\'';
const ARRAY_OPEN: char = '{';
const ARRAY_CLOSE: char = '}';
const ARRAY_SEPARATOR: char = '.';

/// Parse a trimmed literal fragment.
///
/// The forms are tried in a fixed order: quoted string, number, array. Errors
/// carry line 0; callers move them to the real line.
pub(super) fn parse_literal(text: &str) -> Result<Value> {
    if is_string(text) {
        parse_string_value(text)
    } else if is_number(text) {
        parse_number_value(text)
    } else if text.starts_with(ARRAY_OPEN) && text.ends_with(ARRAY_CLOSE) {
        parse_array_value(text)
    } else {
        Err(invalid(text))
    }
}

fn is_string(text: &str) -> bool {
    text.len() >= 2 && text.starts_with(QUOTE) && text.ends_with(QUOTE)
}

/// `-?digits(.digits)?`
fn is_number(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn parse_string_value(text: &str) -> Result<Value> {
    // No escapes: everything between the quotes is taken verbatim.
    Ok(Value::String(text[1..text.len() - 1].to_string()))
}

fn parse_number_value(text: &str) -> Result<Value> {
    let number = if text.contains('.') {
        text.parse::<f64>().map(Number::Float).map_err(|_| invalid(text))?
    } else {
        // Digits that do not fit in an i64.
        text.parse::<i64>().map(Number::Int).map_err(|_| invalid(text))?
    };
    Ok(Value::Number(number))
}

fn parse_array_value(text: &str) -> Result<Value> {
    let interior = &text[1..text.len() - 1];
    let segments = split_top_level(interior).ok_or_else(|| invalid(text))?;

    let mut arr = Vec::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            // `{ 1 . 2 . }` and `{}` drop empty slots.
            continue;
        }
        arr.push(parse_literal(segment)?);
    }

    Ok(Value::Array(arr))
}

/// Split on separators that are not inside a nested array.
///
/// Braces between a pair of quotes do not nest. Quotes do not protect `.`, so
/// the quote state starts over in every segment.
/// Returns `None` when the braces do not balance.
fn split_top_level(interior: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut quoted = false;
    let mut start = 0;

    for (i, ch) in interior.char_indices() {
        match ch {
            QUOTE => quoted = !quoted,
            _ if quoted && ch != ARRAY_SEPARATOR => {}
            ARRAY_OPEN => depth += 1,
            ARRAY_CLOSE => depth = depth.checked_sub(1)?,
            ARRAY_SEPARATOR if depth == 0 => {
                segments.push(&interior[start..i]);
                start = i + ch.len_utf8();
                quoted = false;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    segments.push(&interior[start..]);
    Some(segments)
}

fn invalid(fragment: &str) -> QuillError {
    QuillError::InvalidLiteral {
        fragment: fragment.to_string(),
        line: 0,
    }
}
