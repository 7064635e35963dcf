//! Plain string scanning over page text.

/// Leading decimal digits of `text`, the way a lenient integer parse reads
/// `"85 problems"` as 85.
pub(crate) fn leading_int(text: &str) -> Option<u32> {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}

/// Byte range of the first run of ASCII digits at or after `from`.
fn digit_run(s: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let start = from + bytes.get(from..)?.iter().position(u8::is_ascii_digit)?;
    let len = bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len() - start);
    Some((start, start + len))
}

/// First whole number anywhere after the first occurrence of `token`.
pub(crate) fn number_after<'a>(document: &'a str, token: &str) -> Option<&'a str> {
    let from = document.find(token)? + token.len();
    let (start, end) = digit_run(document, from)?;
    Some(&document[start..end])
}

/// First `digits.digits` number anywhere after the first occurrence of `token`.
/// Plain integers in between are skipped.
pub(crate) fn decimal_after<'a>(document: &'a str, token: &str) -> Option<&'a str> {
    let bytes = document.as_bytes();
    let mut from = document.find(token)? + token.len();

    while let Some((start, end)) = digit_run(document, from) {
        let fraction = (bytes.get(end) == Some(&b'.'))
            .then(|| digit_run(document, end + 1))
            .flatten()
            .filter(|(frac_start, _)| *frac_start == end + 1);
        if let Some((_, frac_end)) = fraction {
            return Some(&document[start..frac_end]);
        }
        from = end;
    }
    None
}

/// The `[...]` literal assigned to `token` (`token = [...]`), up to the first
/// closing bracket.
pub(crate) fn array_literal_after<'a>(document: &'a str, token: &str) -> Option<&'a str> {
    document.match_indices(token).find_map(|(at, _)| {
        let rest = document[at + token.len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        if !rest.starts_with('[') {
            return None;
        }
        let close = rest.find(']')?;
        Some(&rest[..=close])
    })
}
