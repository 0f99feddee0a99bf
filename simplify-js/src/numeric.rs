use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::num::JsNumber;
use ast_js::operator::OperatorName;
use num_bigint::BigInt;
use num_bigint::Sign;

/// Parses a BigInt literal's digits, with or without a radix prefix.
pub fn parse_bigint(raw: &str) -> Option<BigInt> {
  let raw = raw.strip_suffix('n').unwrap_or(raw).replace('_', "");
  let (digits, radix) = match raw.get(..2) {
    Some("0x" | "0X") => (&raw[2..], 16),
    Some("0o" | "0O") => (&raw[2..], 8),
    Some("0b" | "0B") => (&raw[2..], 2),
    _ => (raw.as_str(), 10),
  };
  BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// `None` if the literal can't be parsed.
pub fn bigint_is_zero(raw: &str) -> Option<bool> {
  parse_bigint(raw).map(|v| v.sign() == Sign::NoSign)
}

/// `ToNumber(expr)`, if it's a constant and computing it can't run user code.
/// Objects are never folded: `Array.prototype` or `Object.prototype` may have
/// a user-defined `valueOf` or `toString`.
pub fn to_number_without_side_effects(expr: &Node<Expr>) -> Option<f64> {
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => to_number_without_side_effects(&e.value),
    Expr::Null => Some(0.0),
    Expr::Undefined => Some(f64::NAN),
    Expr::Boolean(e) => Some(if e.value { 1.0 } else { 0.0 }),
    Expr::Number(e) => Some(e.value.0),
    Expr::String(e) => {
      if e.value.is_empty() {
        return Some(0.0);
      };
      string_to_equivalent_number(&e.value)
    }
    _ => None,
  }
}

// Only accepts strings that are exactly how the number would print, so we
// never have to replicate the full StringToNumber grammar.
fn string_to_equivalent_number(units: &[u16]) -> Option<f64> {
  let text = String::from_utf16(units).ok()?;
  let value = text.parse::<f64>().ok()?;
  (JsNumber(value).to_string() == text).then_some(value)
}

pub fn extract_numeric_value(expr: &Node<Expr>) -> Option<f64> {
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => extract_numeric_value(&e.value),
    Expr::Number(e) => Some(e.value.0),
    _ => None,
  }
}

pub fn extract_numeric_values(left: &Node<Expr>, right: &Node<Expr>) -> Option<(f64, f64)> {
  Some((extract_numeric_value(left)?, extract_numeric_value(right)?))
}

/// ECMAScript `ToInt32`.
pub fn to_int32(f: f64) -> i32 {
  if !f.is_finite() {
    return 0;
  };
  let m = f.abs().trunc() % 4294967296.0;
  let v = m as u32 as i32;
  if f < 0.0 {
    v.wrapping_neg()
  } else {
    v
  }
}

/// ECMAScript `ToUint32`.
pub fn to_uint32(f: f64) -> u32 {
  to_int32(f) as u32
}

/// Whether the expression always produces a 32-bit integer (signed or
/// unsigned) when it produces a number at all.
pub fn is_int32_or_uint32(expr: &Node<Expr>) -> bool {
  use OperatorName::*;
  match expr.stx.as_ref() {
    Expr::Unary(e) => e.operator == BitwiseNot,
    Expr::Binary(e) => match e.operator {
      BitwiseAnd | BitwiseOr | BitwiseXor | BitwiseLeftShift | BitwiseRightShift
      | BitwiseUnsignedRightShift => true,
      LogicalOr | LogicalAnd => is_int32_or_uint32(&e.left) && is_int32_or_uint32(&e.right),
      _ => false,
    },
    Expr::If(e) => is_int32_or_uint32(&e.yes) && is_int32_or_uint32(&e.no),
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast_js::build::*;
  use ast_js::Ref;

  #[test]
  fn int32_conversion() {
    assert_eq!(to_int32(0.0), 0);
    assert_eq!(to_int32(-0.0), 0);
    assert_eq!(to_int32(f64::NAN), 0);
    assert_eq!(to_int32(f64::INFINITY), 0);
    assert_eq!(to_int32(1.9), 1);
    assert_eq!(to_int32(-1.9), -1);
    assert_eq!(to_int32(2147483648.0), -2147483648);
    assert_eq!(to_int32(4294967296.0), 0);
    assert_eq!(to_int32(4294967297.0), 1);
    assert_eq!(to_int32(-4294967297.0), -1);
    assert_eq!(to_uint32(-1.0), 4294967295);
  }

  #[test]
  fn numbers_from_literals() {
    assert_eq!(to_number_without_side_effects(&null()), Some(0.0));
    assert!(to_number_without_side_effects(&undefined()).unwrap().is_nan());
    assert_eq!(to_number_without_side_effects(&boolean(true)), Some(1.0));
    assert_eq!(to_number_without_side_effects(&string("")), Some(0.0));
    assert_eq!(to_number_without_side_effects(&string("12.5")), Some(12.5));
    assert_eq!(to_number_without_side_effects(&string("-0")), Some(-0.0));
    assert_eq!(to_number_without_side_effects(&string(" 1")), None);
    assert_eq!(to_number_without_side_effects(&string("0x10")), None);
    assert_eq!(to_number_without_side_effects(&string("1.50")), None);
    assert_eq!(to_number_without_side_effects(&id(Ref(0))), None);
  }

  #[test]
  fn objects_are_not_numbers() {
    // `Array.prototype.valueOf` and friends can be replaced at runtime.
    assert_eq!(to_number_without_side_effects(&array(vec![])), None);
    assert_eq!(to_number_without_side_effects(&object(vec![])), None);
    assert_eq!(to_number_without_side_effects(&regexp("/x/")), None);
    assert_eq!(extract_numeric_values(&array(vec![]), &num(0.0)), None);
  }

  #[test]
  fn numeric_values() {
    assert_eq!(
      extract_numeric_values(&num(1.0), &inlined_enum(num(2.0), "E.B")),
      Some((1.0, 2.0))
    );
    assert_eq!(extract_numeric_values(&num(1.0), &string("2")), None);
  }

  #[test]
  fn bigints() {
    assert_eq!(bigint_is_zero("0"), Some(true));
    assert_eq!(bigint_is_zero("0x0"), Some(true));
    assert_eq!(bigint_is_zero("10"), Some(false));
    assert_eq!(bigint_is_zero("1_000"), Some(false));
    assert_eq!(bigint_is_zero("zz"), None);
    assert_eq!(parse_bigint("0b101"), parse_bigint("5"));
  }

  #[test]
  fn int32_producers() {
    let x = || id(Ref(0));
    assert!(is_int32_or_uint32(&unary(OperatorName::BitwiseNot, x())));
    assert!(is_int32_or_uint32(&binary(OperatorName::BitwiseUnsignedRightShift, x(), num(0.0))));
    assert!(is_int32_or_uint32(&cond(
      x(),
      binary(OperatorName::BitwiseOr, x(), num(0.0)),
      binary(OperatorName::BitwiseAnd, x(), num(1.0))
    )));
    assert!(!is_int32_or_uint32(&binary(
      OperatorName::LogicalOr,
      binary(OperatorName::BitwiseOr, x(), num(0.0)),
      x()
    )));
    assert!(!is_int32_or_uint32(&num(1.0)));
  }
}
