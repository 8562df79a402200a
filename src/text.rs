//! String helpers: URL splicing, masking and character filtering.

use crate::config::MaskSettings;

/// Prefixes a relative `url` with `domain`.
///
/// Empty URLs stay empty, and URLs that already contain an `http://` or
/// `https://` scheme (any case) are returned unchanged.
pub fn splice_domain(url: &str, domain: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let lower = url.to_ascii_lowercase();
    if lower.contains("http://") || lower.contains("https://") {
        return url.to_string();
    }

    format!("{}{}", domain, url)
}

/// Masks the middle of a string, keeping `start_len` leading and `end_len`
/// trailing characters.
///
/// A single character string is kept and followed by the mask. Lengths are
/// counted in characters, not bytes. When the string is shorter than
/// `end_len`, the tail offset wraps from the end the way a negative
/// substring offset does, clamping at the start.
///
/// ```
/// use backend_helpers::text::hide_part;
///
/// assert_eq!(hide_part("13812345678", 3, 4, "****"), "138****5678");
/// ```
pub fn hide_part(s: &str, start_len: usize, end_len: usize, mask: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let length = chars.len();

    if length == 1 {
        return format!("{}{}", s, mask);
    }

    let head: String = chars.iter().take(start_len).collect();

    let tail_start = if end_len <= length {
        length - end_len
    } else {
        // length - end_len is negative; count it back from the end.
        (2 * length).saturating_sub(end_len)
    };
    let tail: String = chars.iter().skip(tail_start).take(end_len).collect();

    format!("{}{}{}", head, mask, tail)
}

/// [`hide_part`] with lengths and mask taken from settings.
pub fn hide_with(s: &str, settings: &MaskSettings) -> String {
    hide_part(s, settings.start_len, settings.end_len, &settings.mask)
}

/// Removes every character encoded with four UTF-8 bytes (emoji and other
/// supplementary-plane symbols).
pub fn filter_emoji(s: &str) -> String {
    s.chars().filter(|c| c.len_utf8() < 4).collect()
}

/// Checks whether [`filter_emoji`] would remove anything.
pub fn contains_emoji(s: &str) -> bool {
    s.chars().any(|c| c.len_utf8() >= 4)
}

/// Keeps printable ASCII only, dropping control characters, DEL and every
/// non-ASCII character.
pub fn strip_invisible(s: &str) -> String {
    s.chars().filter(|c| matches!(*c, ' '..='~')).collect()
}
