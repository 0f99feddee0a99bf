/// Renders a string literal delimited by double quotes from UTF-16 code
/// units. Non-ASCII characters are kept as-is except for the line separators
/// U+2028/U+2029 and lone surrogates, which must be escaped to survive a
/// round trip through UTF-8.
pub fn string_literal_double_quoted(value: &[u16]) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('"');
  write_escaped(&mut out, value, '"');
  out.push('"');
  out
}

/// Renders a raw template segment, escaping characters that would terminate
/// the template or start a substitution.
pub fn template_segment(value: &[u16]) -> String {
  let mut out = String::with_capacity(value.len());
  write_escaped(&mut out, value, '`');
  out
}

fn write_escaped(out: &mut String, value: &[u16], quote: char) {
  let decoded: Vec<_> = char::decode_utf16(value.iter().copied()).collect();
  let mut iter = decoded.iter().peekable();
  while let Some(unit) = iter.next() {
    let ch = match unit {
      Ok(ch) => *ch,
      Err(e) => {
        out.push_str(&format!("\\u{:04X}", e.unpaired_surrogate()));
        continue;
      }
    };
    match ch {
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\0' => {
        let next_is_digit = matches!(iter.peek(), Some(Ok(c)) if c.is_ascii_digit());
        if next_is_digit {
          out.push_str("\\x00");
        } else {
          out.push_str("\\0");
        }
      }
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      '$' if quote == '`' && matches!(iter.peek(), Some(Ok('{'))) => out.push_str("\\$"),
      c if c == quote => {
        out.push('\\');
        out.push(c);
      }
      c if c < '\u{20}' => out.push_str(&format!("\\x{:02X}", c as u32)),
      c => out.push(c),
    }
  }
}
