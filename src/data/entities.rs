//! HTML entity decoding for provider text.
//!
//! Answers are compared by exact string equality, so every field has to be
//! decoded before it reaches a [`Question`](crate::models::Question).

use std::borrow::Cow;

/// Longest HTML5 entity name, `&CounterClockwiseContourIntegral;`.
const MAX_ENTITY_LEN: usize = 31;

/// Decode named and numeric character references. Unknown or malformed
/// references are kept verbatim.
pub fn decode_html(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match decode_reference(tail) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// `tail` starts with `&`. Returns the decoded text and the bytes consumed.
fn decode_reference(tail: &str) -> Option<(String, usize)> {
    let end = tail
        .char_indices()
        .take(MAX_ENTITY_LEN + 2)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let body = &tail[1..end];

    let decoded = if let Some(numeric) = body.strip_prefix('#') {
        let code = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => numeric.parse::<u32>().ok()?,
        };
        char::from_u32(code)?.to_string()
    } else if !body.is_empty() && body.chars().all(|c| c.is_ascii_alphanumeric()) {
        named_entity(&tail[..=end])?
    } else {
        return None;
    };

    Some((decoded, end + 1))
}

/// Resolves one `&name;` reference against the full HTML5 named set.
fn named_entity(reference: &str) -> Option<String> {
    match html_escape::decode_html_entities(reference) {
        Cow::Owned(decoded) if decoded != reference => Some(decoded),
        _ => None,
    }
}
