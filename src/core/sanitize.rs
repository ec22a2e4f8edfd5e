// src/core/sanitize.rs

/// Undo the stray `</br>` tags the menu page ships with.
/// Blunt on purpose: every literal `/br` becomes `br`.
pub fn repair_markup(s: &str) -> String {
    s.replace("/br", "br")
}

/// A beer may or may not have an asterisk appended.
/// Inner whitespace is left alone: it is part of the name.
pub fn clean_title(s: &str) -> String {
    s.replace('*', "").trim().to_string()
}

/// Leading `digits ['.' digits*]` of `s` (after leading whitespace), if any.
/// "5" → 5.0, "5.5% ABV" → 5.5, "7." → 7.0, ".5" → None
pub fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let b = s.as_bytes();

    let mut end = 0;
    while end < b.len() && b[end].is_ascii_digit() { end += 1; }
    if end == 0 { return None; }

    if end < b.len() && b[end] == b'.' {
        end += 1;
        while end < b.len() && b[end].is_ascii_digit() { end += 1; }
    }
    s[..end].parse().ok()
}
