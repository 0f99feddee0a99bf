use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::operator::OperatorName;

use crate::numeric::bigint_is_zero;

/// Whether computing a statically known property of a value (its truthiness,
/// whether it's nullish) also requires evaluating the expression for effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffects {
  CouldHaveSideEffects,
  NoSideEffects,
}

/// Whether `expr` is `null` or `undefined`, if that's known.
pub fn to_null_or_undefined_with_side_effects(expr: &Node<Expr>) -> Option<(bool, SideEffects)> {
  use OperatorName::*;
  use SideEffects::*;
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => to_null_or_undefined_with_side_effects(&e.value),

    Expr::Boolean(_)
    | Expr::Number(_)
    | Expr::String(_)
    | Expr::RegExp(_)
    | Expr::Function(_)
    | Expr::Arrow(_)
    | Expr::BigInt(_) => Some((false, NoSideEffects)),

    // Never nullish, but building them may run code.
    Expr::Object(_) | Expr::Array(_) | Expr::Class(_) => Some((false, CouldHaveSideEffects)),

    Expr::Null | Expr::Undefined => Some((true, NoSideEffects)),

    Expr::Unary(e) => match e.operator {
      UnaryPlus | UnaryNegation | BitwiseNot | PrefixDecrement | PrefixIncrement
      | PostfixDecrement | PostfixIncrement | LogicalNot | Delete => {
        Some((false, CouldHaveSideEffects))
      }
      Typeof if e.value_was_originally_identifier => Some((false, NoSideEffects)),
      Typeof => Some((false, CouldHaveSideEffects)),
      Void => Some((true, CouldHaveSideEffects)),
      _ => None,
    },

    Expr::Binary(e) => match e.operator {
      Addition
      | AssignmentAddition
      | Subtraction
      | Multiplication
      | Division
      | Remainder
      | Exponentiation
      | AssignmentSubtraction
      | AssignmentMultiplication
      | AssignmentDivision
      | AssignmentRemainder
      | AssignmentExponentiation
      | BitwiseLeftShift
      | BitwiseRightShift
      | BitwiseUnsignedRightShift
      | AssignmentBitwiseLeftShift
      | AssignmentBitwiseRightShift
      | AssignmentBitwiseUnsignedRightShift
      | BitwiseAnd
      | BitwiseOr
      | BitwiseXor
      | AssignmentBitwiseAnd
      | AssignmentBitwiseOr
      | AssignmentBitwiseXor
      | LessThan
      | LessThanOrEqual
      | GreaterThan
      | GreaterThanOrEqual
      | In
      | Instanceof
      | Equality
      | Inequality
      | StrictEquality
      | StrictInequality => Some((false, CouldHaveSideEffects)),
      Comma => to_null_or_undefined_with_side_effects(&e.right)
        .map(|(is_nullish, _)| (is_nullish, CouldHaveSideEffects)),
      _ => None,
    },

    _ => None,
  }
}

/// `ToBoolean(expr)`, if that's known.
pub fn to_boolean_with_side_effects(expr: &Node<Expr>) -> Option<(bool, SideEffects)> {
  use OperatorName::*;
  use SideEffects::*;
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => to_boolean_with_side_effects(&e.value),
    Expr::Null | Expr::Undefined => Some((false, NoSideEffects)),
    Expr::Boolean(e) => Some((e.value, NoSideEffects)),
    Expr::Number(e) => Some((e.value.is_truthy(), NoSideEffects)),
    Expr::BigInt(e) => bigint_is_zero(&e.value).map(|zero| (!zero, NoSideEffects)),
    Expr::String(e) => Some((!e.value.is_empty(), NoSideEffects)),
    Expr::Function(_) | Expr::Arrow(_) | Expr::RegExp(_) => Some((true, NoSideEffects)),
    Expr::Object(_) | Expr::Array(_) | Expr::Class(_) => Some((true, CouldHaveSideEffects)),
    Expr::Unary(e) => match e.operator {
      Void => Some((false, CouldHaveSideEffects)),
      // Never an empty string.
      Typeof => {
        if e.value_was_originally_identifier && matches!(e.value.stx.as_ref(), Expr::Identifier(_)) {
          Some((true, NoSideEffects))
        } else {
          Some((true, CouldHaveSideEffects))
        }
      }
      LogicalNot => to_boolean_with_side_effects(&e.value).map(|(b, s)| (!b, s)),
      _ => None,
    },
    Expr::Binary(e) => match e.operator {
      // `anything || truthy` is truthy.
      LogicalOr => match to_boolean_with_side_effects(&e.right) {
        Some((true, _)) => Some((true, CouldHaveSideEffects)),
        _ => None,
      },
      // `anything && falsy` is falsy.
      LogicalAnd => match to_boolean_with_side_effects(&e.right) {
        Some((false, _)) => Some((false, CouldHaveSideEffects)),
        _ => None,
      },
      Comma => to_boolean_with_side_effects(&e.right).map(|(b, _)| (b, CouldHaveSideEffects)),
      _ => None,
    },
    _ => None,
  }
}
