//! Placeholder name validation.

/// Check if string is a valid placeholder name: ASCII letters, digits or `_`.
#[inline]
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
