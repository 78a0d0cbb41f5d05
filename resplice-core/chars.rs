//! Char-offset helpers for splicing `&str` content.
//!
//! The engine addresses content in character offsets, never bytes, so every
//! split has to translate a char count into a byte boundary first.

/// Byte index of the `n`th char of `s`, or `s.len()` when `n` is past the
/// end.
#[inline]
pub fn byte_of_char(s: &str, n: usize) -> usize {
  s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

/// Split after `n` chars. Past-the-end counts yield `(s, "")`.
#[inline]
pub fn split_at_char(s: &str, n: usize) -> (&str, &str) {
  s.split_at(byte_of_char(s, n))
}

/// Split at a signed char position: positions at or before 0 yield
/// `("", s)`, so content "before the start" contributes nothing.
#[inline]
pub fn split_at_char_clamped(s: &str, pos: isize) -> (&str, &str) {
  if pos <= 0 {
    ("", s)
  } else {
    split_at_char(s, pos as usize)
  }
}

#[inline]
pub fn len_chars(s: &str) -> usize {
  s.chars().count()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn splits_on_char_boundaries() {
    assert_eq!(split_at_char("héllo", 2), ("hé", "llo"));
    assert_eq!(split_at_char("héllo", 9), ("héllo", ""));
    assert_eq!(split_at_char("", 3), ("", ""));
  }

  #[test]
  fn clamped_split_handles_negative_positions() {
    assert_eq!(split_at_char_clamped("abc", -2), ("", "abc"));
    assert_eq!(split_at_char_clamped("abc", 0), ("", "abc"));
    assert_eq!(split_at_char_clamped("abc", 2), ("ab", "c"));
  }
}
