use ahash::HashMap;
use ahash::HashMapExt;
use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
pub enum OperatorName {
  Addition,
  Assignment,
  AssignmentAddition,
  AssignmentBitwiseAnd,
  AssignmentBitwiseLeftShift,
  AssignmentBitwiseOr,
  AssignmentBitwiseRightShift,
  AssignmentBitwiseUnsignedRightShift,
  AssignmentBitwiseXor,
  AssignmentDivision,
  AssignmentExponentiation,
  AssignmentLogicalAnd,
  AssignmentLogicalOr,
  AssignmentMultiplication,
  AssignmentNullishCoalescing,
  AssignmentRemainder,
  AssignmentSubtraction,
  BitwiseAnd,
  BitwiseLeftShift,
  BitwiseNot,
  BitwiseOr,
  BitwiseRightShift,
  BitwiseUnsignedRightShift,
  BitwiseXor,
  Comma,
  Conditional,
  Delete,
  Division,
  Equality,
  Exponentiation,
  GreaterThan,
  GreaterThanOrEqual,
  In,
  Inequality,
  Instanceof,
  LessThan,
  LessThanOrEqual,
  LogicalAnd,
  LogicalNot,
  LogicalOr,
  Multiplication,
  NullishCoalescing,
  PostfixDecrement,
  PostfixIncrement,
  PrefixDecrement,
  PrefixIncrement,
  Remainder,
  StrictEquality,
  StrictInequality,
  Subtraction,
  Typeof,
  UnaryNegation,
  UnaryPlus,
  Void,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Associativity {
  Left,
  Right,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arity {
  Unary,
  Binary,
  Ternary,
}

pub struct Operator {
  pub name: OperatorName,
  pub arity: Arity,
  pub associativity: Associativity,
  pub precedence: u8,
  pub text: &'static str,
}

const PRECEDENCE_LEVELS: &'static [&'static [(OperatorName, Arity, &'static str)]] = &[
  &[
    (OperatorName::PostfixDecrement, Arity::Unary, "--"),
    (OperatorName::PostfixIncrement, Arity::Unary, "++"),
  ],
  &[
    (OperatorName::BitwiseNot, Arity::Unary, "~"),
    (OperatorName::Delete, Arity::Unary, "delete"),
    (OperatorName::LogicalNot, Arity::Unary, "!"),
    (OperatorName::PrefixDecrement, Arity::Unary, "--"),
    (OperatorName::PrefixIncrement, Arity::Unary, "++"),
    (OperatorName::Typeof, Arity::Unary, "typeof"),
    (OperatorName::UnaryNegation, Arity::Unary, "-"),
    (OperatorName::UnaryPlus, Arity::Unary, "+"),
    (OperatorName::Void, Arity::Unary, "void"),
  ],
  &[(OperatorName::Exponentiation, Arity::Binary, "**")],
  &[
    (OperatorName::Division, Arity::Binary, "/"),
    (OperatorName::Multiplication, Arity::Binary, "*"),
    (OperatorName::Remainder, Arity::Binary, "%"),
  ],
  &[
    (OperatorName::Addition, Arity::Binary, "+"),
    (OperatorName::Subtraction, Arity::Binary, "-"),
  ],
  &[
    (OperatorName::BitwiseLeftShift, Arity::Binary, "<<"),
    (OperatorName::BitwiseRightShift, Arity::Binary, ">>"),
    (OperatorName::BitwiseUnsignedRightShift, Arity::Binary, ">>>"),
  ],
  &[
    (OperatorName::GreaterThan, Arity::Binary, ">"),
    (OperatorName::GreaterThanOrEqual, Arity::Binary, ">="),
    (OperatorName::In, Arity::Binary, "in"),
    (OperatorName::Instanceof, Arity::Binary, "instanceof"),
    (OperatorName::LessThan, Arity::Binary, "<"),
    (OperatorName::LessThanOrEqual, Arity::Binary, "<="),
  ],
  &[
    (OperatorName::Equality, Arity::Binary, "=="),
    (OperatorName::Inequality, Arity::Binary, "!="),
    (OperatorName::StrictEquality, Arity::Binary, "==="),
    (OperatorName::StrictInequality, Arity::Binary, "!=="),
  ],
  &[(OperatorName::BitwiseAnd, Arity::Binary, "&")],
  &[(OperatorName::BitwiseXor, Arity::Binary, "^")],
  &[(OperatorName::BitwiseOr, Arity::Binary, "|")],
  &[(OperatorName::LogicalAnd, Arity::Binary, "&&")],
  &[
    (OperatorName::LogicalOr, Arity::Binary, "||"),
    (OperatorName::NullishCoalescing, Arity::Binary, "??"),
  ],
  &[
    (OperatorName::Assignment, Arity::Binary, "="),
    (OperatorName::AssignmentAddition, Arity::Binary, "+="),
    (OperatorName::AssignmentBitwiseAnd, Arity::Binary, "&="),
    (OperatorName::AssignmentBitwiseLeftShift, Arity::Binary, "<<="),
    (OperatorName::AssignmentBitwiseOr, Arity::Binary, "|="),
    (OperatorName::AssignmentBitwiseRightShift, Arity::Binary, ">>="),
    (OperatorName::AssignmentBitwiseUnsignedRightShift, Arity::Binary, ">>>="),
    (OperatorName::AssignmentBitwiseXor, Arity::Binary, "^="),
    (OperatorName::AssignmentDivision, Arity::Binary, "/="),
    (OperatorName::AssignmentExponentiation, Arity::Binary, "**="),
    (OperatorName::AssignmentLogicalAnd, Arity::Binary, "&&="),
    (OperatorName::AssignmentLogicalOr, Arity::Binary, "||="),
    (OperatorName::AssignmentMultiplication, Arity::Binary, "*="),
    (OperatorName::AssignmentNullishCoalescing, Arity::Binary, "??="),
    (OperatorName::AssignmentRemainder, Arity::Binary, "%="),
    (OperatorName::AssignmentSubtraction, Arity::Binary, "-="),
    (OperatorName::Conditional, Arity::Ternary, "?:"),
  ],
  &[(OperatorName::Comma, Arity::Binary, ",")],
];

// Levels above, from tightest to loosest, map onto precedences 16 down to 3,
// then the comma at 1. Precedence 2 is reserved for arrow functions, 18 for
// member access and calls, and 19 for primary expressions.
fn precedence_for_level(level: usize) -> u8 {
  match level {
    0 => 16,
    1 => 15,
    2 => 14,
    3 => 13,
    4 => 12,
    5 => 11,
    6 => 10,
    7 => 9,
    8 => 8,
    9 => 7,
    10 => 6,
    11 => 5,
    12 => 4,
    13 => 3,
    _ => 1,
  }
}

pub static OPERATORS: Lazy<HashMap<OperatorName, Operator>> = Lazy::new(|| {
  let mut map = HashMap::<OperatorName, Operator>::new();
  for (level, ops) in PRECEDENCE_LEVELS.iter().enumerate() {
    let precedence = precedence_for_level(level);
    for &(name, arity, text) in ops.iter() {
      let associativity = match name {
        OperatorName::Exponentiation | OperatorName::Conditional => Associativity::Right,
        _ if arity == Arity::Unary => Associativity::Right,
        _ if name.is_assignment() => Associativity::Right,
        _ => Associativity::Left,
      };
      map.insert(name, Operator {
        name,
        arity,
        associativity,
        precedence,
        text,
      });
    }
  }
  map
});

impl OperatorName {
  pub fn operator(self) -> &'static Operator {
    &OPERATORS[&self]
  }

  pub fn text(self) -> &'static str {
    self.operator().text
  }

  pub fn precedence(self) -> u8 {
    self.operator().precedence
  }

  pub fn is_assignment(self) -> bool {
    matches!(
      self,
      OperatorName::Assignment
        | OperatorName::AssignmentAddition
        | OperatorName::AssignmentBitwiseAnd
        | OperatorName::AssignmentBitwiseLeftShift
        | OperatorName::AssignmentBitwiseOr
        | OperatorName::AssignmentBitwiseRightShift
        | OperatorName::AssignmentBitwiseUnsignedRightShift
        | OperatorName::AssignmentBitwiseXor
        | OperatorName::AssignmentDivision
        | OperatorName::AssignmentExponentiation
        | OperatorName::AssignmentLogicalAnd
        | OperatorName::AssignmentLogicalOr
        | OperatorName::AssignmentMultiplication
        | OperatorName::AssignmentNullishCoalescing
        | OperatorName::AssignmentRemainder
        | OperatorName::AssignmentSubtraction
    )
  }

  pub fn is_unary(self) -> bool {
    self.operator().arity == Arity::Unary
  }

  pub fn is_prefix(self) -> bool {
    self.is_unary()
      && !matches!(
        self,
        OperatorName::PostfixDecrement | OperatorName::PostfixIncrement
      )
  }

  /// Operators that are spelled as a keyword and need whitespace before an
  /// identifier-like operand.
  pub fn is_keyword(self) -> bool {
    matches!(
      self,
      OperatorName::Delete
        | OperatorName::Typeof
        | OperatorName::Void
        | OperatorName::In
        | OperatorName::Instanceof
    )
  }

  /// `<`, `>`, `<=` and `>=`.
  pub fn is_relational(self) -> bool {
    matches!(
      self,
      OperatorName::LessThan
        | OperatorName::LessThanOrEqual
        | OperatorName::GreaterThan
        | OperatorName::GreaterThanOrEqual
    )
  }

  pub fn is_equality(self) -> bool {
    matches!(
      self,
      OperatorName::Equality
        | OperatorName::Inequality
        | OperatorName::StrictEquality
        | OperatorName::StrictInequality
    )
  }

  /// The operator that produces the negated boolean result for the same
  /// operands, where one exists without changing evaluation.
  pub fn negated_equality(self) -> Option<OperatorName> {
    match self {
      OperatorName::Equality => Some(OperatorName::Inequality),
      OperatorName::Inequality => Some(OperatorName::Equality),
      OperatorName::StrictEquality => Some(OperatorName::StrictInequality),
      OperatorName::StrictInequality => Some(OperatorName::StrictEquality),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_operator_is_in_the_table() {
    for op in [
      OperatorName::Addition,
      OperatorName::Comma,
      OperatorName::Conditional,
      OperatorName::Typeof,
      OperatorName::PostfixIncrement,
      OperatorName::AssignmentNullishCoalescing,
    ] {
      assert_eq!(OPERATORS[&op].name, op);
    }
  }

  #[test]
  fn precedence_ordering() {
    assert!(OperatorName::Multiplication.precedence() > OperatorName::Addition.precedence());
    assert!(OperatorName::Addition.precedence() > OperatorName::LessThan.precedence());
    assert!(OperatorName::LessThan.precedence() > OperatorName::StrictEquality.precedence());
    assert!(OperatorName::LogicalAnd.precedence() > OperatorName::LogicalOr.precedence());
    assert_eq!(
      OperatorName::LogicalOr.precedence(),
      OperatorName::NullishCoalescing.precedence()
    );
    assert!(OperatorName::Assignment.precedence() > OperatorName::Comma.precedence());
    assert_eq!(OperatorName::Comma.precedence(), 1);
  }

  #[test]
  fn associativity() {
    assert_eq!(OPERATORS[&OperatorName::Subtraction].associativity, Associativity::Left);
    assert_eq!(OPERATORS[&OperatorName::Exponentiation].associativity, Associativity::Right);
    assert_eq!(OPERATORS[&OperatorName::AssignmentAddition].associativity, Associativity::Right);
    assert_eq!(OPERATORS[&OperatorName::Conditional].associativity, Associativity::Right);
  }

  #[test]
  fn negation() {
    assert_eq!(
      OperatorName::StrictEquality.negated_equality(),
      Some(OperatorName::StrictInequality)
    );
    assert_eq!(OperatorName::LessThan.negated_equality(), None);
  }
}
