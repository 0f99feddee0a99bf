//! String literal values are stored as UTF-16 code units, matching how
//! JavaScript strings compare and index.

pub fn utf16(s: &str) -> Vec<u16> {
  s.encode_utf16().collect()
}

pub fn utf16_equals_str(units: &[u16], s: &str) -> bool {
  let mut it = s.encode_utf16();
  for &u in units {
    if it.next() != Some(u) {
      return false;
    };
  }
  it.next().is_none()
}

/// Lossy conversion; lone surrogates become U+FFFD.
pub fn utf16_to_string(units: &[u16]) -> String {
  String::from_utf16_lossy(units)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn compares_without_allocating() {
    let v = utf16("undefined");
    assert!(utf16_equals_str(&v, "undefined"));
    assert!(!utf16_equals_str(&v, "undefine"));
    assert!(!utf16_equals_str(&v, "undefinedx"));
    assert!(utf16_equals_str(&[], ""));
  }

  #[test]
  fn astral_characters_use_surrogate_pairs() {
    let v = utf16("\u{1F600}");
    assert_eq!(v.len(), 2);
    assert_eq!(utf16_to_string(&v), "\u{1F600}");
  }
}
