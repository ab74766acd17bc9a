use crate::values::value_container::ValueError;
use core::fmt::Display;

/// Flags in the order a runtime reports them.
const CANONICAL_FLAGS: &str = "dgimsuvy";

/// A regular expression, kept as its source text and flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    /// Creates a regular expression. The source is escaped the way a runtime
    /// exposes it (`(?:)` for an empty pattern, `/` and line breaks escaped)
    /// and the flags are validated and sorted.
    pub fn new(source: &str, flags: &str) -> Result<Self, ValueError> {
        Ok(RegExp {
            source: escape_source(source),
            flags: canonicalize_flags(flags)?,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    pub fn to_text(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }
}

impl Display for RegExp {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(f, "/{}/{}", self.source, self.flags)
    }
}

fn canonicalize_flags(flags: &str) -> Result<String, ValueError> {
    let mut seen = [false; CANONICAL_FLAGS.len()];
    for flag in flags.chars() {
        let index = CANONICAL_FLAGS
            .find(flag)
            .ok_or(ValueError::InvalidRegExpFlag(flag))?;
        if seen[index] {
            return Err(ValueError::DuplicateRegExpFlag(flag));
        }
        seen[index] = true;
    }
    let canonical: String = CANONICAL_FLAGS
        .chars()
        .zip(seen)
        .filter_map(|(flag, present)| present.then_some(flag))
        .collect();
    if canonical.contains('u') && canonical.contains('v') {
        return Err(ValueError::IncompatibleRegExpFlags('u', 'v'));
    }
    Ok(canonical)
}

fn escape_source(source: &str) -> String {
    if source.is_empty() {
        return "(?:)".to_string();
    }
    let mut escaped = String::with_capacity(source.len());
    let mut in_class = false;
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '[' => {
                in_class = true;
                escaped.push(c);
            }
            ']' => {
                in_class = false;
                escaped.push(c);
            }
            '/' if !in_class => escaped.push_str("\\/"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}
