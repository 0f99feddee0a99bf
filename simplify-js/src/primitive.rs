use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::operator::OperatorName;
use serde::Serialize;

/// The primitive type an expression is statically known to produce.
///
/// `Unknown` means the value may be an object (or we can't tell), so
/// conversions on it may run user code. `Mixed` means it is definitely some
/// primitive, just not one we can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
  Unknown,
  Mixed,
  Null,
  Undefined,
  Boolean,
  Number,
  String,
  BigInt,
}

impl PrimitiveType {
  pub fn merge(self, other: PrimitiveType) -> PrimitiveType {
    if self == PrimitiveType::Unknown || other == PrimitiveType::Unknown {
      PrimitiveType::Unknown
    } else if self == other {
      self
    } else {
      PrimitiveType::Mixed
    }
  }

  /// A single named primitive, i.e. neither `Unknown` nor `Mixed`.
  pub fn is_specific(self) -> bool {
    !matches!(self, PrimitiveType::Unknown | PrimitiveType::Mixed)
  }
}

pub fn merged_known_primitive_types(a: &Node<Expr>, b: &Node<Expr>) -> PrimitiveType {
  let x = known_primitive_type(a);
  if x == PrimitiveType::Unknown {
    return PrimitiveType::Unknown;
  };
  x.merge(known_primitive_type(b))
}

pub fn known_primitive_type(expr: &Node<Expr>) -> PrimitiveType {
  use OperatorName::*;
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => known_primitive_type(&e.value),
    Expr::Null => PrimitiveType::Null,
    Expr::Undefined => PrimitiveType::Undefined,
    Expr::Boolean(_) => PrimitiveType::Boolean,
    Expr::Number(_) => PrimitiveType::Number,
    Expr::String(_) => PrimitiveType::String,
    Expr::BigInt(_) => PrimitiveType::BigInt,
    Expr::Template(t) if t.tag.is_none() => PrimitiveType::String,
    Expr::If(e) => merged_known_primitive_types(&e.yes, &e.no),
    Expr::Unary(e) => match e.operator {
      Void => PrimitiveType::Undefined,
      Typeof => PrimitiveType::String,
      LogicalNot | Delete => PrimitiveType::Boolean,
      // Can't be a bigint, `+1n` throws.
      UnaryPlus => PrimitiveType::Number,
      UnaryNegation | BitwiseNot => match known_primitive_type(&e.value) {
        PrimitiveType::BigInt => PrimitiveType::BigInt,
        t if t.is_specific() => PrimitiveType::Number,
        _ => PrimitiveType::Mixed,
      },
      PrefixIncrement | PrefixDecrement | PostfixIncrement | PostfixDecrement => PrimitiveType::Mixed,
      _ => PrimitiveType::Unknown,
    },
    Expr::Binary(e) => match e.operator {
      StrictEquality | StrictInequality | Equality | Inequality | LessThan | GreaterThan
      | LessThanOrEqual | GreaterThanOrEqual | Instanceof | In => PrimitiveType::Boolean,
      LogicalOr | LogicalAnd => merged_known_primitive_types(&e.left, &e.right),
      NullishCoalescing => {
        let left = known_primitive_type(&e.left);
        let right = known_primitive_type(&e.right);
        match left {
          PrimitiveType::Null | PrimitiveType::Undefined => right,
          // Definitely not null or undefined.
          l if l.is_specific() => l,
          // Definitely some kind of primitive.
          PrimitiveType::Mixed if right != PrimitiveType::Unknown => PrimitiveType::Mixed,
          _ => PrimitiveType::Unknown,
        }
      }
      Addition => {
        let left = known_primitive_type(&e.left);
        let right = known_primitive_type(&e.right);
        if left == PrimitiveType::String || right == PrimitiveType::String {
          PrimitiveType::String
        } else if left == PrimitiveType::BigInt && right == PrimitiveType::BigInt {
          PrimitiveType::BigInt
        } else if left.is_specific()
          && left != PrimitiveType::BigInt
          && right.is_specific()
          && right != PrimitiveType::BigInt
        {
          PrimitiveType::Number
        } else {
          // Number, bigint or string, or an exception.
          PrimitiveType::Mixed
        }
      }
      AssignmentAddition => {
        if known_primitive_type(&e.right) == PrimitiveType::String {
          PrimitiveType::String
        } else {
          PrimitiveType::Mixed
        }
      }
      Subtraction
      | Multiplication
      | Division
      | Remainder
      | Exponentiation
      | BitwiseAnd
      | BitwiseOr
      | BitwiseXor
      | BitwiseLeftShift
      | BitwiseRightShift
      | BitwiseUnsignedRightShift
      | AssignmentSubtraction
      | AssignmentMultiplication
      | AssignmentDivision
      | AssignmentRemainder
      | AssignmentExponentiation
      | AssignmentBitwiseAnd
      | AssignmentBitwiseOr
      | AssignmentBitwiseXor
      | AssignmentBitwiseLeftShift
      | AssignmentBitwiseRightShift
      | AssignmentBitwiseUnsignedRightShift => PrimitiveType::Mixed,
      Assignment | Comma => known_primitive_type(&e.right),
      _ => PrimitiveType::Unknown,
    },
    _ => PrimitiveType::Unknown,
  }
}

/// Whether `a === b` can be written `a == b` without changing the result.
pub fn can_change_strict_to_loose(a: &Node<Expr>, b: &Node<Expr>) -> bool {
  let x = known_primitive_type(a);
  let y = known_primitive_type(b);
  x == y && x.is_specific()
}

pub fn is_primitive_literal(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => is_primitive_literal(&e.value),
    e => e.is_primitive_literal_kind(),
  }
}

/// Whether the expression always evaluates to a primitive, although
/// evaluating it may have side effects. Comparing two such values with `==`
/// can't call a user-defined `valueOf` or `toString`.
pub fn is_primitive_with_side_effects(expr: &Node<Expr>) -> bool {
  use OperatorName::*;
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => is_primitive_with_side_effects(&e.value),
    Expr::Null | Expr::Undefined | Expr::Boolean(_) | Expr::Number(_) | Expr::BigInt(_) | Expr::String(_) => {
      true
    }
    Expr::Template(t) => t.tag.is_none(),
    Expr::Unary(e) => matches!(
      e.operator,
      UnaryPlus
        | UnaryNegation
        | BitwiseNot
        | PrefixIncrement
        | PrefixDecrement
        | PostfixIncrement
        | PostfixDecrement
        | LogicalNot
        | Delete
        | Void
        | Typeof
    ),
    Expr::Binary(e) => match e.operator {
      // These always return one of their operands unmodified.
      LogicalAnd
      | LogicalOr
      | NullishCoalescing
      | AssignmentLogicalAnd
      | AssignmentLogicalOr
      | AssignmentNullishCoalescing => {
        is_primitive_with_side_effects(&e.left) && is_primitive_with_side_effects(&e.right)
      }
      Comma => is_primitive_with_side_effects(&e.right),
      Assignment => false,
      _ => true,
    },
    Expr::If(e) => is_primitive_with_side_effects(&e.yes) && is_primitive_with_side_effects(&e.no),
    _ => false,
  }
}
