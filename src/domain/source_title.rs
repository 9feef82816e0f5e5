use regex::Regex;
use std::sync::LazyLock;

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Strip characters that are illegal in file names on common filesystems.
pub fn sanitize_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !matches!(c, '\\' | '/' | '*' | '?' | ':' | '"' | '<' | '>' | '|'))
        .collect()
}

/// Derive the canonical base name for a downloaded source title.
///
/// Broadcast titles often carry the actual subject in a bracketed segment
/// ("LIVE [Q3 Earnings Call] ..."); when one is present it wins over the
/// full title. The result is always filesystem-safe.
pub fn canonical_base_name(title: &str) -> String {
    let base = match BRACKETED.captures(title).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => title,
    };
    sanitize_filename(base.trim())
}
