//! External name derivation.
//!
//! Field identifiers (and dotted nesting prefixes) are normalized to a
//! canonical kebab form: split at literal separators (`.`, space, `_`, `-`)
//! and at camel-case word boundaries, lowercase everything, collapse runs of
//! separators into one hyphen.
//!
//! The conversion is pure and idempotent — feeding a kebab name back in
//! returns it unchanged — so nesting prefixes can be converted once and
//! re-joined with leaf names before a final pass.

/// Convert a field identifier to its external kebab-form name.
///
/// Camel boundaries follow the straightforward rule: a break before an
/// upper-case letter that follows a lower-case letter or digit, and before
/// the last upper-case letter of a capital run that is followed by a
/// lower-case letter (`HTTPServer` → `http-server`).
pub fn to_kebab(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '.' || c == ' ' || c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }

        if c.is_uppercase() {
            if !out.is_empty() && !out.ends_with('-') {
                let after_word = chars
                    .get(i.wrapping_sub(1))
                    .is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
                let before_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
                if after_word || before_lower {
                    out.push('-');
                }
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_matches('-').to_string()
}

/// Environment variable key for an external name: prefix + upper-snake form.
pub fn env_key(prefix: &str, external_name: &str) -> String {
    format!("{prefix}{}", external_name.replace('-', "_").to_uppercase())
}
