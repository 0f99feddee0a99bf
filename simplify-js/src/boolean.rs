use ast_js::ast::expr::{BinaryExpr, BooleanExpr, Expr, IfExpr, InlinedEnumExpr, UnaryExpr};
use ast_js::ast::node::Node;
use ast_js::loc::Loc;
use ast_js::operator::OperatorName;

use crate::join::join_with_left_associative_op_by;
use crate::numeric::bigint_is_zero;
use crate::numeric::is_int32_or_uint32;
use crate::primitive::known_primitive_type;
use crate::primitive::PrimitiveType;
use crate::truthiness::to_boolean_with_side_effects;
use crate::truthiness::SideEffects;

fn boolean_at(loc: Loc, value: bool) -> Node<Expr> {
  Node::new(loc, Expr::Boolean(BooleanExpr { value }))
}

/// Negates `expr` without wrapping it in `!` if there's a shorter form.
/// Returns the untouched expression as the error if there isn't.
pub fn maybe_simplify_not(expr: Node<Expr>) -> Result<Node<Expr>, Node<Expr>> {
  let loc = expr.loc;
  match expr.stx.as_ref() {
    Expr::Null | Expr::Undefined => return Ok(boolean_at(loc, true)),
    Expr::Boolean(e) => return Ok(boolean_at(loc, !e.value)),
    Expr::Number(e) => return Ok(boolean_at(loc, !e.value.is_truthy())),
    Expr::BigInt(e) => {
      if let Some(zero) = bigint_is_zero(&e.value) {
        return Ok(boolean_at(loc, zero));
      };
    }
    Expr::String(e) => return Ok(boolean_at(loc, e.value.is_empty())),
    Expr::Function(_) | Expr::Arrow(_) | Expr::RegExp(_) => return Ok(boolean_at(loc, false)),
    _ => {}
  };

  match *expr.stx {
    Expr::InlinedEnum(e) => match maybe_simplify_not(e.value) {
      Ok(simplified) => Ok(simplified),
      Err(value) => Err(Node::new(loc, Expr::InlinedEnum(InlinedEnumExpr {
        value,
        comment: e.comment,
      }))),
    },
    // `!!!a` is `!a` when `!!a` is just `a`.
    Expr::Unary(e)
      if e.operator == OperatorName::LogicalNot
        && known_primitive_type(&e.value) == PrimitiveType::Boolean =>
    {
      Ok(e.value)
    }
    // Relational operators can't be flipped: `!(a < b)` isn't `a >= b` for NaN.
    Expr::Binary(mut e) => match e.operator.negated_equality() {
      Some(negated) => {
        e.operator = negated;
        Ok(Node::new(loc, Expr::Binary(e)))
      }
      None if e.operator == OperatorName::Comma => {
        e.right = not(e.right);
        Ok(Node::new(loc, Expr::Binary(e)))
      }
      None => Err(Node::new(loc, Expr::Binary(e))),
    },
    stx => Err(Node::new(loc, stx)),
  }
}

/// `!expr`, folded where possible.
pub fn not(expr: Node<Expr>) -> Node<Expr> {
  match maybe_simplify_not(expr) {
    Ok(simplified) => simplified,
    Err(value) => Node::new(value.loc, Expr::Unary(UnaryExpr {
      operator: OperatorName::LogicalNot,
      value,
      value_was_originally_identifier: false,
    })),
  }
}

// `!expr` where only its truthiness matters, so `!!a` can be `a`.
fn not_in_boolean_context(expr: Node<Expr>) -> Node<Expr> {
  let loc = expr.loc;
  match *expr.stx {
    Expr::Unary(e) if e.operator == OperatorName::LogicalNot => e.value,
    stx => not(Node::new(loc, stx)),
  }
}

// `a && truthy` => `a` and `a || falsy` => `a`.
fn logical(loc: Loc, operator: OperatorName, left: Node<Expr>, right: Node<Expr>) -> Node<Expr> {
  match to_boolean_with_side_effects(&right) {
    Some((value, SideEffects::NoSideEffects)) if value == (operator == OperatorName::LogicalAnd) => left,
    _ => Node::new(loc, Expr::Binary(BinaryExpr {
      operator,
      left,
      right,
    })),
  }
}

fn is_zero_literal(expr: &Node<Expr>) -> bool {
  matches!(expr.stx.as_ref(), Expr::Number(n) if n.value.0 == 0.0)
}

/// Rewrites an expression whose value is only ever tested for truthiness.
/// The result has the same truthiness and the same side effects, but not
/// necessarily the same value. Simplifying the result again changes nothing.
pub fn simplify_boolean_expr(expr: Node<Expr>) -> Node<Expr> {
  use OperatorName::*;
  let loc = expr.loc;
  match *expr.stx {
    // `!!a` => `a`, including when the inner `!` only shows up once the
    // operand is simplified, as in `!(a == 0)`.
    Expr::Unary(e) if e.operator == LogicalNot => not_in_boolean_context(simplify_boolean_expr(e.value)),

    Expr::Binary(e) => match e.operator {
      // `x == 0` => `!x` for integer-valued `x`. A strict comparison also
      // needs `x` to be a number, as `0n !== 0`.
      Equality | StrictEquality | Inequality | StrictInequality
        if is_zero_literal(&e.right)
          && is_int32_or_uint32(&e.left)
          && (matches!(e.operator, Equality | Inequality)
            || known_primitive_type(&e.left) == PrimitiveType::Number) =>
      {
        // Only the truthiness of `x` is left, so it can be simplified too.
        let left = simplify_boolean_expr(e.left);
        if matches!(e.operator, Inequality | StrictInequality) {
          left
        } else {
          not_in_boolean_context(left)
        }
      }
      LogicalAnd | LogicalOr => logical(
        loc,
        e.operator,
        simplify_boolean_expr(e.left),
        simplify_boolean_expr(e.right),
      ),
      _ => Node::new(loc, Expr::Binary(e)),
    },

    Expr::If(e) => {
      let test = simplify_boolean_expr(e.test);
      let yes = simplify_boolean_expr(e.yes);
      let no = simplify_boolean_expr(e.no);
      if let Some((value, SideEffects::NoSideEffects)) = to_boolean_with_side_effects(&yes) {
        return if value {
          // `a ? truthy : b` => `a || b`
          join_with_left_associative_op_by(LogicalOr, test, no, &logical)
        } else {
          // `a ? falsy : b` => `!a && b`
          join_with_left_associative_op_by(LogicalAnd, not_in_boolean_context(test), no, &logical)
        };
      };
      if let Some((value, SideEffects::NoSideEffects)) = to_boolean_with_side_effects(&no) {
        return if value {
          // `a ? b : truthy` => `!a || b`
          join_with_left_associative_op_by(LogicalOr, not_in_boolean_context(test), yes, &logical)
        } else {
          // `a ? b : falsy` => `a && b`
          join_with_left_associative_op_by(LogicalAnd, test, yes, &logical)
        };
      };
      Node::new(loc, Expr::If(IfExpr { test, yes, no }))
    }

    stx => Node::new(loc, stx),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast_js::build::*;
  use ast_js::Ref;

  fn a() -> Node<Expr> {
    id(Ref(0))
  }

  #[test]
  fn literal_negation() {
    assert_eq!(not(null()), boolean(true));
    assert_eq!(not(num(f64::NAN)), boolean(true));
    assert_eq!(not(num(2.0)), boolean(false));
    assert_eq!(not(bigint("0")), boolean(true));
    assert_eq!(not(string("x")), boolean(false));
    assert_eq!(not(regexp("/x/")), boolean(false));
    assert_eq!(not(inlined_enum(num(0.0), "E.A")), boolean(true));
    assert_eq!(not(inlined_enum(a(), "E.A")), logical_not(inlined_enum(a(), "E.A")));
  }

  #[test]
  fn operator_negation() {
    assert_eq!(
      not(binary(OperatorName::StrictEquality, a(), num(1.0))),
      binary(OperatorName::StrictInequality, a(), num(1.0))
    );
    assert_eq!(
      not(binary(OperatorName::LessThan, a(), num(1.0))),
      logical_not(binary(OperatorName::LessThan, a(), num(1.0)))
    );
    assert_eq!(
      not(binary(OperatorName::Comma, a(), a())),
      binary(OperatorName::Comma, a(), logical_not(a()))
    );
    // `!!!a` => `!a`
    assert_eq!(not(logical_not(logical_not(a()))), logical_not(a()));
    assert_eq!(not(logical_not(a())), logical_not(logical_not(a())));
  }

  #[test]
  fn double_negation_disappears() {
    assert_eq!(simplify_boolean_expr(logical_not(logical_not(a()))), a());
    assert_eq!(
      simplify_boolean_expr(logical_not(logical_not(logical_not(a())))),
      logical_not(a())
    );
  }

  #[test]
  fn negated_zero_comparison_drops_both_negations() {
    let int = || binary(OperatorName::BitwiseOr, a(), id(Ref(1)));
    let once = simplify_boolean_expr(logical_not(binary(OperatorName::Equality, int(), num(0.0))));
    assert_eq!(once, int());
    assert_eq!(simplify_boolean_expr(once.clone()), once);
    assert_eq!(
      simplify_boolean_expr(logical_not(binary(OperatorName::Inequality, int(), num(0.0)))),
      logical_not(int())
    );
  }

  #[test]
  fn comparisons_against_zero() {
    let int = || binary(OperatorName::BitwiseOr, a(), num(0.0));
    assert_eq!(
      simplify_boolean_expr(binary(OperatorName::Inequality, int(), num(0.0))),
      int()
    );
    assert_eq!(
      simplify_boolean_expr(binary(OperatorName::Equality, int(), num(0.0))),
      logical_not(int())
    );
    // `a | 0` may be a bigint.
    let strict = binary(OperatorName::StrictEquality, int(), num(0.0));
    assert_eq!(simplify_boolean_expr(strict.clone()), strict);
    let not_int = binary(OperatorName::Equality, a(), num(0.0));
    assert_eq!(simplify_boolean_expr(not_int.clone()), not_int);
  }

  #[test]
  fn absorbing_right_operands() {
    assert_eq!(simplify_boolean_expr(binary(OperatorName::LogicalAnd, a(), num(1.0))), a());
    assert_eq!(simplify_boolean_expr(binary(OperatorName::LogicalOr, a(), string(""))), a());
    let kept = binary(OperatorName::LogicalAnd, a(), array(vec![]));
    assert_eq!(simplify_boolean_expr(kept.clone()), kept);
  }

  #[test]
  fn conditional_truth_table() {
    let b = || id(Ref(1));
    let c = || id(Ref(2));
    assert_eq!(
      simplify_boolean_expr(cond(a(), boolean(true), b())),
      binary(OperatorName::LogicalOr, a(), b())
    );
    assert_eq!(
      simplify_boolean_expr(cond(a(), num(0.0), b())),
      binary(OperatorName::LogicalAnd, logical_not(a()), b())
    );
    assert_eq!(
      simplify_boolean_expr(cond(a(), b(), string("x"))),
      binary(OperatorName::LogicalOr, logical_not(a()), b())
    );
    assert_eq!(
      simplify_boolean_expr(cond(a(), b(), null())),
      binary(OperatorName::LogicalAnd, a(), b())
    );
    assert_eq!(
      simplify_boolean_expr(cond(a(), logical_not(logical_not(b())), c())),
      cond(a(), b(), c())
    );
  }

  #[test]
  fn folded_conditionals_are_fully_simplified() {
    let b = || id(Ref(1));
    assert_eq!(simplify_boolean_expr(cond(a(), boolean(true), boolean(false))), a());
    assert_eq!(
      simplify_boolean_expr(cond(logical_not(logical_not(a())), num(0.0), b())),
      binary(OperatorName::LogicalAnd, logical_not(a()), b())
    );
    assert_eq!(
      simplify_boolean_expr(cond(logical_not(a()), b(), num(1.0))),
      binary(OperatorName::LogicalOr, a(), b())
    );
    // Reassociating `a || (0 || b)` exposes the `0`.
    assert_eq!(
      simplify_boolean_expr(cond(a(), boolean(true), binary(OperatorName::LogicalOr, num(0.0), b()))),
      binary(OperatorName::LogicalOr, a(), b())
    );
  }
}
