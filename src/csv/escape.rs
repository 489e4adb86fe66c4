use std::borrow::Cow;

/// Characters that force a field into quoted form.
fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\n', '\r'])
}

/// Escape a single field per RFC 4180.
///
/// A field is quoted when it contains a comma, a double quote, or a line
/// break, or when `always_quote` is set. Inside a quoted field every `"` is
/// doubled; embedded `\n`/`\r` are kept as-is (quoted fields may contain
/// line breaks). Fields that need no quoting are returned borrowed and
/// unchanged.
///
/// Apply exactly once per raw value — escaping already-escaped text
/// double-escapes it.
///
/// ```rust
/// use csvout::escape_field;
///
/// assert_eq!(escape_field("plain", false), "plain");
/// assert_eq!(escape_field("say \"hello\"", false), "\"say \"\"hello\"\"\"");
/// ```
pub fn escape_field(value: &str, always_quote: bool) -> Cow<'_, str> {
    if !always_quote && !needs_quoting(value) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push_str("\"\"");
        } else {
            out.push(ch);
        }
    }
    out.push('"');
    Cow::Owned(out)
}
