//! Boundary-aware byte buffer writer.
//!
//! Fragments are classified as they are written so that the minimal whitespace
//! is inserted between tokens that would otherwise lex as one (e.g. `returnx`,
//! `a+ +b`, `a- -1`). Prefer the typed helpers so fragments get classified.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
  None,
  Word,
  Number,
  Plus,
  Minus,
  Slash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leading {
  None,
  Word,
  Number,
  Plus,
  Minus,
  Slash,
  Star,
  Dot,
  Other,
}

#[derive(Debug, Clone, Default)]
pub struct Emitter {
  out: Vec<u8>,
  trailing: Option<Boundary>,
}

impl Emitter {
  pub fn new() -> Self {
    Emitter::default()
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.out
  }

  pub fn into_string(self) -> String {
    // Every write goes through `&str`, so the buffer is valid UTF-8.
    String::from_utf8_lossy(&self.out).into_owned()
  }

  pub fn write_keyword(&mut self, keyword: &str) {
    self.write_classified(keyword, Leading::Word, Boundary::Word);
  }

  pub fn write_identifier(&mut self, identifier: &str) {
    self.write_classified(identifier, Leading::Word, Boundary::Word);
  }

  pub fn write_number(&mut self, number: &str) {
    // Exponent and digit suffixes can end in a letter, e.g. `1e3` or `10n`.
    let trailing = match number.as_bytes().last() {
      Some(b'0'..=b'9') => Boundary::Number,
      Some(b'.') => Boundary::Number,
      _ => Boundary::Word,
    };
    let leading = if number.starts_with('.') {
      Leading::Dot
    } else {
      Leading::Number
    };
    self.write_classified(number, leading, trailing);
  }

  /// Emits punctuation or operators.
  pub fn write_punct(&mut self, punct: &str) {
    let bytes = punct.as_bytes();
    let Some(&first) = bytes.first() else {
      return;
    };
    let leading = match first {
      b'+' => Leading::Plus,
      b'-' => Leading::Minus,
      b'/' => Leading::Slash,
      b'*' => Leading::Star,
      b'.' => Leading::Dot,
      _ => Leading::Other,
    };
    let trailing = match bytes[bytes.len() - 1] {
      b'+' => Boundary::Plus,
      b'-' => Boundary::Minus,
      b'/' => Boundary::Slash,
      _ => Boundary::None,
    };
    self.write_classified(punct, leading, trailing);
  }

  /// Writes text that forms a complete token on its own and never merges
  /// with its neighbours, such as a string or regular expression literal.
  pub fn write_literal(&mut self, text: &str) {
    let leading = if text.starts_with('/') {
      Leading::Slash
    } else {
      Leading::Other
    };
    let trailing = if text.ends_with(|c: char| c.is_ascii_alphanumeric()) {
      Boundary::Word
    } else {
      Boundary::None
    };
    self.write_classified(text, leading, trailing);
  }

  /// Writes bytes verbatim, resetting boundary tracking.
  pub fn write_raw_str(&mut self, text: &str) {
    self.out.extend_from_slice(text.as_bytes());
    self.trailing = None;
  }

  fn write_classified(&mut self, text: &str, leading: Leading, trailing: Boundary) {
    if text.is_empty() {
      return;
    };
    if needs_space(self.trailing.unwrap_or(Boundary::None), leading) {
      self.out.push(b' ');
    };
    self.out.extend_from_slice(text.as_bytes());
    self.trailing = Some(trailing);
  }
}

fn needs_space(prev: Boundary, next: Leading) -> bool {
  matches!(
    (prev, next),
    (Boundary::Word, Leading::Word)
      | (Boundary::Word, Leading::Number)
      | (Boundary::Number, Leading::Word)
      | (Boundary::Number, Leading::Number)
      | (Boundary::Number, Leading::Dot)
      | (Boundary::Plus, Leading::Plus)
      | (Boundary::Minus, Leading::Minus)
      | (Boundary::Slash, Leading::Slash)
      | (Boundary::Slash, Leading::Star)
  )
}

#[cfg(test)]
mod tests {
  use super::Emitter;

  fn emit(f: impl FnOnce(&mut Emitter)) -> String {
    let mut e = Emitter::new();
    f(&mut e);
    e.into_string()
  }

  #[test]
  fn separates_words() {
    assert_eq!(
      emit(|e| {
        e.write_keyword("typeof");
        e.write_identifier("x");
      }),
      "typeof x"
    );
    assert_eq!(
      emit(|e| {
        e.write_keyword("void");
        e.write_number("0");
      }),
      "void 0"
    );
  }

  #[test]
  fn separates_repeated_signs() {
    assert_eq!(
      emit(|e| {
        e.write_identifier("a");
        e.write_punct("-");
        e.write_punct("-");
        e.write_number("1");
      }),
      "a- -1"
    );
    assert_eq!(
      emit(|e| {
        e.write_punct("+");
        e.write_punct("++");
        e.write_identifier("b");
      }),
      "+ ++b"
    );
  }

  #[test]
  fn punctuation_needs_no_space() {
    assert_eq!(
      emit(|e| {
        e.write_keyword("return");
        e.write_punct("!");
        e.write_identifier("a");
        e.write_literal("\"s\"");
        e.write_keyword("in");
      }),
      "return!a\"s\"in"
    );
  }
}
