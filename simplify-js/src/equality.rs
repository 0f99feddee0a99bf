use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use itertools::Itertools;

use crate::numeric::parse_bigint;

fn unwrap_inlined_enum(expr: &Node<Expr>) -> &Node<Expr> {
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => unwrap_inlined_enum(&e.value),
    _ => expr,
  }
}

/// The result of `left === right` when both are literals. `None` if either
/// side isn't a literal or the comparison can't be decided here.
pub fn check_equality_if_no_side_effects(left: &Node<Expr>, right: &Node<Expr>) -> Option<bool> {
  let left = unwrap_inlined_enum(left).stx.as_ref();
  let right = unwrap_inlined_enum(right).stx.as_ref();
  match (left, right) {
    (Expr::Null, Expr::Null) | (Expr::Undefined, Expr::Undefined) => Some(true),
    (Expr::Boolean(l), Expr::Boolean(r)) => Some(l.value == r.value),
    // Raw f64 comparison: NaN is unequal to itself and the zeros are equal.
    (Expr::Number(l), Expr::Number(r)) => Some(l.value.0 == r.value.0),
    (Expr::BigInt(l), Expr::BigInt(r)) => {
      if l.value == r.value {
        return Some(true);
      };
      Some(parse_bigint(&l.value)? == parse_bigint(&r.value)?)
    }
    (Expr::String(l), Expr::String(r)) => Some(l.value == r.value),
    (l, r) if l.is_primitive_literal_kind() && r.is_primitive_literal_kind() => Some(false),
    _ => None,
  }
}

/// Whether two expressions certainly evaluate to the same value, assuming
/// nothing between the two evaluations changes it. Used to match a guard
/// against the start of a member chain.
pub fn values_look_the_same(left: &Node<Expr>, right: &Node<Expr>) -> bool {
  let left = unwrap_inlined_enum(left);
  let right = unwrap_inlined_enum(right);
  match (left.stx.as_ref(), right.stx.as_ref()) {
    (Expr::Identifier(l), Expr::Identifier(r)) => l.ref_ == r.ref_,
    (Expr::ImportIdentifier(l), Expr::ImportIdentifier(r)) => l.ref_ == r.ref_,
    (Expr::Dot(l), Expr::Dot(r)) => {
      l.optional_chain == r.optional_chain
        && l.name == r.name
        && values_look_the_same(&l.target, &r.target)
    }
    (Expr::Index(l), Expr::Index(r)) => {
      l.optional_chain == r.optional_chain
        && values_look_the_same(&l.target, &r.target)
        && values_look_the_same(&l.index, &r.index)
    }
    (Expr::If(l), Expr::If(r)) => {
      values_look_the_same(&l.test, &r.test)
        && values_look_the_same(&l.yes, &r.yes)
        && values_look_the_same(&l.no, &r.no)
    }
    (Expr::Unary(l), Expr::Unary(r)) => {
      l.operator == r.operator && values_look_the_same(&l.value, &r.value)
    }
    (Expr::Binary(l), Expr::Binary(r)) => {
      l.operator == r.operator
        && values_look_the_same(&l.left, &r.left)
        && values_look_the_same(&l.right, &r.right)
    }
    (Expr::Call(l), Expr::Call(r)) => {
      l.optional_chain == r.optional_chain
        && l.kind == r.kind
        && l.can_be_unwrapped_if_unused == r.can_be_unwrapped_if_unused
        && l.args.len() == r.args.len()
        && values_look_the_same(&l.target, &r.target)
        && l
          .args
          .iter()
          .zip_eq(r.args.iter())
          .all(|(a, b)| values_look_the_same(a, b))
    }
    // `Object.is` semantics for zero so `-0` isn't substituted for `0`.
    (Expr::Number(l), Expr::Number(r)) if l.value.0 == 0.0 && r.value.0 == 0.0 => {
      l.value.0.is_sign_negative() == r.value.0.is_sign_negative()
    }
    _ => check_equality_if_no_side_effects(left, right) == Some(true),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast_js::build::*;
  use ast_js::operator::OperatorName;
  use ast_js::Ref;

  #[test]
  fn literal_equality() {
    assert_eq!(check_equality_if_no_side_effects(&null(), &null()), Some(true));
    assert_eq!(check_equality_if_no_side_effects(&null(), &undefined()), Some(false));
    assert_eq!(check_equality_if_no_side_effects(&num(f64::NAN), &num(f64::NAN)), Some(false));
    assert_eq!(check_equality_if_no_side_effects(&num(-0.0), &num(0.0)), Some(true));
    assert_eq!(check_equality_if_no_side_effects(&bigint("0x10"), &bigint("16")), Some(true));
    assert_eq!(check_equality_if_no_side_effects(&string("a"), &string("a")), Some(true));
    assert_eq!(check_equality_if_no_side_effects(&string("1"), &num(1.0)), Some(false));
    assert_eq!(
      check_equality_if_no_side_effects(&inlined_enum(num(1.0), "E.A"), &num(1.0)),
      Some(true)
    );
    assert_eq!(check_equality_if_no_side_effects(&id(Ref(0)), &id(Ref(0))), None);
    assert_eq!(check_equality_if_no_side_effects(&num(1.0), &array(vec![])), None);
  }

  #[test]
  fn negative_zero_is_not_the_same_value() {
    assert!(!values_look_the_same(&num(-0.0), &num(0.0)));
    assert!(values_look_the_same(&num(-0.0), &num(-0.0)));
    assert!(!values_look_the_same(&num(f64::NAN), &num(f64::NAN)));
  }

  #[test]
  fn structural_sameness() {
    let a = || id(Ref(0));
    assert!(values_look_the_same(&dot(a(), "b"), &dot(a(), "b")));
    assert!(!values_look_the_same(&dot(a(), "b"), &dot(a(), "c")));
    assert!(!values_look_the_same(&dot(a(), "b"), &pure_dot(id(Ref(1)), "b")));
    assert!(values_look_the_same(&index(a(), string("k")), &index(a(), string("k"))));
    assert!(values_look_the_same(
      &binary(OperatorName::Addition, a(), num(1.0)),
      &binary(OperatorName::Addition, a(), num(1.0))
    ));
    assert!(!values_look_the_same(
      &binary(OperatorName::Addition, a(), num(1.0)),
      &binary(OperatorName::Subtraction, a(), num(1.0))
    ));
    assert!(values_look_the_same(&call(a(), vec![num(1.0)]), &call(a(), vec![num(1.0)])));
    assert!(!values_look_the_same(&call(a(), vec![num(1.0)]), &call(a(), vec![])));
    assert!(!values_look_the_same(&call(a(), vec![]), &pure_call(a(), vec![])));
    assert!(!values_look_the_same(&this(), &this()));
  }
}
