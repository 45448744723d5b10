//! `.env` formatting.
//!
//! Renders fetched values as `KEY=value` lines and decides which keys can be
//! exported into a child process environment.

/// Render key/value pairs in .env format, one per line.
///
/// Quotes values containing whitespace or .env-special characters.
pub fn render<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut output = String::new();

    for (key, value) in pairs {
        if needs_quotes(value) {
            output.push_str(&format!("{}=\"{}\"\n", key, escape_value(value)));
        } else {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }

    output
}

/// Whether a key can be used as an environment variable name.
///
/// Accepts ASCII letters, digits and underscore, not starting with a digit.
pub fn is_env_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains('#')
        || value.contains('=')
        || value.contains('"')
        || value.contains('\'')
        || value.contains('\\')
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
