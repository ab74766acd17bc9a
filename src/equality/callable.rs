use std::borrow::Cow;

/// Collapses the whitespace between the first `)` that is followed by an
/// opening `{` and that brace, so `function f(a)  {` becomes
/// `function f(a){`. Returns the input unchanged when there is nothing to
/// collapse.
pub fn normalize_body_delimiter(source: &str) -> Cow<'_, str> {
    for (index, _) in source.match_indices(')') {
        let rest = &source[index + 1..];
        let trimmed = rest.trim_start_matches(is_source_whitespace);
        if !trimmed.starts_with('{') {
            continue;
        }
        let brace = source.len() - trimmed.len();
        if brace == index + 1 {
            return Cow::Borrowed(source);
        }
        let mut normalized =
            String::with_capacity(source.len() - (brace - index - 1));
        normalized.push_str(&source[..=index]);
        normalized.push_str(&source[brace..]);
        return Cow::Owned(normalized);
    }
    Cow::Borrowed(source)
}

/// Whitespace and line terminators as source text defines them. This differs
/// from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
fn is_source_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{B}' | '\u{C}' | ' ' | '\u{A0}' | '\u{FEFF}'
            | '\n' | '\r' | '\u{2028}' | '\u{2029}'
            | '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}'
            | '\u{3000}'
    )
}
