use ast_js::ast::expr::{Expr, OptionalChain};
use ast_js::ast::node::Node;
use ast_js::operator::{Associativity, OperatorName, OPERATORS};

/// Wrapper around a precedence value with total ordering.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Prec(u8);

impl Prec {
  pub const LOWEST: Prec = Prec(0);

  pub const fn new(value: u8) -> Self {
    Prec(value)
  }

  pub const fn tighter(self) -> Self {
    Prec(self.0 + 1)
  }

  pub fn of(op: OperatorName) -> Self {
    Prec(OPERATORS[&op].precedence)
  }
}

/// Precedence for optional chaining, member access, and call-like operators.
pub const CALL_MEMBER_PRECEDENCE: Prec = Prec::new(18);
/// Precedence for atomic expressions (identifiers, literals, etc.).
pub const PRIMARY_PRECEDENCE: Prec = Prec::new(19);
/// Arrow functions sit below assignment so they are parenthesized as operands.
pub const ARROW_FUNCTION_PRECEDENCE: Prec = Prec::new(2);
/// Anything that can appear as a single argument or array element.
pub const ASSIGNMENT_PRECEDENCE: Prec = Prec::new(3);

#[derive(Clone, Copy, Debug)]
pub enum Side {
  Left,
  Right,
}

pub fn child_min_prec_for_binary(op: OperatorName, side: Side) -> Prec {
  let operator = &OPERATORS[&op];
  let prec = Prec::new(operator.precedence);
  match operator.associativity {
    Associativity::Left => match side {
      Side::Left => prec,
      Side::Right => prec.tighter(),
    },
    Associativity::Right => match side {
      Side::Left => prec.tighter(),
      Side::Right => prec,
    },
  }
}

pub fn expr_prec(expr: &Node<Expr>) -> Prec {
  match expr.stx.as_ref() {
    Expr::Binary(binary) => Prec::of(binary.operator),
    Expr::If(_) => Prec::of(OperatorName::Conditional),
    Expr::Unary(unary) => Prec::of(unary.operator),
    Expr::Call(_) | Expr::Dot(_) | Expr::Index(_) | Expr::New(_) => CALL_MEMBER_PRECEDENCE,
    Expr::Template(t) if t.tag.is_some() => CALL_MEMBER_PRECEDENCE,
    Expr::Arrow(_) => ARROW_FUNCTION_PRECEDENCE,
    Expr::Number(n) if n.value.0 < 0.0 || n.value.is_negative_zero() => {
      Prec::of(OperatorName::UnaryNegation)
    }
    Expr::Undefined => Prec::of(OperatorName::Void),
    Expr::InlinedEnum(e) => expr_prec(&e.value),
    Expr::Spread(_) => ASSIGNMENT_PRECEDENCE,
    Expr::Array(_)
    | Expr::BigInt(_)
    | Expr::Boolean(_)
    | Expr::Class(_)
    | Expr::Function(_)
    | Expr::Identifier(_)
    | Expr::ImportIdentifier(_)
    | Expr::ImportMeta
    | Expr::Missing
    | Expr::Null
    | Expr::Number(_)
    | Expr::Object(_)
    | Expr::RegExp(_)
    | Expr::String(_)
    | Expr::Template(_)
    | Expr::This => PRIMARY_PRECEDENCE,
  }
}

/// Whether the node is a link of an optional chain, so that wrapping it in a
/// plain member access needs parentheses to stop the short circuit.
pub fn is_in_optional_chain(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Dot(e) => e.optional_chain != OptionalChain::None,
    Expr::Index(e) => e.optional_chain != OptionalChain::None,
    Expr::Call(e) => e.optional_chain != OptionalChain::None,
    _ => false,
  }
}

/// `??` cannot be mixed with `&&` or `||` without parentheses.
pub fn is_nullish_mix(parent: OperatorName, child: &Node<Expr>) -> bool {
  let Expr::Binary(b) = child.stx.as_ref() else {
    return false;
  };
  let logical = |op| matches!(op, OperatorName::LogicalAnd | OperatorName::LogicalOr);
  (parent == OperatorName::NullishCoalescing && logical(b.operator))
    || (logical(parent) && b.operator == OperatorName::NullishCoalescing)
}

/// The leftmost token of an expression statement decides how it parses.
/// Object literals, function and class expressions must not start one.
pub fn expr_stmt_needs_parens(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Object(_) | Expr::Function(_) | Expr::Class(_) => true,
    Expr::Binary(b) => expr_stmt_needs_parens(&b.left),
    Expr::If(c) => expr_stmt_needs_parens(&c.test),
    Expr::Call(c) => expr_stmt_needs_parens(&c.target),
    Expr::Dot(d) => expr_stmt_needs_parens(&d.target),
    Expr::Index(i) => expr_stmt_needs_parens(&i.target),
    Expr::Template(t) => t.tag.as_ref().is_some_and(expr_stmt_needs_parens),
    Expr::Unary(u) if !u.operator.is_prefix() => expr_stmt_needs_parens(&u.value),
    Expr::InlinedEnum(e) => expr_stmt_needs_parens(&e.value),
    _ => false,
  }
}

/// A concise arrow body only has to avoid starting with `{`.
pub fn arrow_body_needs_parens(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Object(_) => true,
    Expr::Binary(b) => arrow_body_needs_parens(&b.left),
    Expr::If(c) => arrow_body_needs_parens(&c.test),
    Expr::Call(c) => arrow_body_needs_parens(&c.target),
    Expr::Dot(d) => arrow_body_needs_parens(&d.target),
    Expr::Index(i) => arrow_body_needs_parens(&i.target),
    Expr::Template(t) => t.tag.as_ref().is_some_and(arrow_body_needs_parens),
    Expr::Unary(u) if !u.operator.is_prefix() => arrow_body_needs_parens(&u.value),
    Expr::InlinedEnum(e) => arrow_body_needs_parens(&e.value),
    _ => false,
  }
}
