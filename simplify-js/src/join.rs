use ast_js::ast::expr::{BinaryExpr, Expr, OptionalChain};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::{ExprStmt, Stmt};
use ast_js::loc::Loc;
use ast_js::operator::OperatorName;

fn binary_at(loc: Loc, operator: OperatorName, left: Node<Expr>, right: Node<Expr>) -> Node<Expr> {
  Node::new(loc, Expr::Binary(BinaryExpr {
    operator,
    left,
    right,
  }))
}

/// Builds `a op b`, hoisting a leading comma out and reassociating a right
/// operand that uses the same operator, so `(x, a) && (b && c)` becomes
/// `x, (a && b) && c`.
pub fn join_with_left_associative_op(op: OperatorName, a: Node<Expr>, b: Node<Expr>) -> Node<Expr> {
  join_with_left_associative_op_by(op, a, b, &binary_at)
}

/// Like `join_with_left_associative_op`, but each `a op b` is built by
/// `combine`, which may fold it.
pub fn join_with_left_associative_op_by<F>(op: OperatorName, a: Node<Expr>, b: Node<Expr>, combine: &F) -> Node<Expr>
where
  F: Fn(Loc, OperatorName, Node<Expr>, Node<Expr>) -> Node<Expr>,
{
  let a_loc = a.loc;
  let mut a = match *a.stx {
    Expr::Binary(mut comma) if comma.operator == OperatorName::Comma => {
      comma.right = join_with_left_associative_op_by(op, comma.right, b, combine);
      return Node::new(a_loc, Expr::Binary(comma));
    }
    stx => Node::new(a_loc, stx),
  };
  let mut b = b;
  loop {
    let b_loc = b.loc;
    match *b.stx {
      Expr::Binary(inner) if inner.operator == op => {
        a = join_with_left_associative_op_by(op, a, inner.left, combine);
        b = inner.right;
      }
      stx => {
        b = Node::new(b_loc, stx);
        break;
      }
    };
  }
  combine(a.loc, op, a, b)
}

pub fn join_with_comma(a: Node<Expr>, b: Node<Expr>) -> Node<Expr> {
  binary_at(a.loc, OperatorName::Comma, a, b)
}

/// Comma-joins whatever survived; `None` if nothing did.
pub fn join_all_with_comma<I: IntoIterator<Item = Option<Node<Expr>>>>(exprs: I) -> Option<Node<Expr>> {
  exprs.into_iter().flatten().reduce(join_with_comma)
}

pub fn assign(target: Node<Expr>, value: Node<Expr>) -> Node<Expr> {
  binary_at(target.loc, OperatorName::Assignment, target, value)
}

pub fn assign_stmt(target: Node<Expr>, value: Node<Expr>) -> Node<Stmt> {
  let expr = assign(target, value);
  Node::new(expr.loc, Stmt::Expr(ExprStmt {
    expr,
    does_not_affect_tree_shaking: false,
  }))
}

pub fn is_property_access(expr: &Node<Expr>) -> bool {
  matches!(expr.stx.as_ref(), Expr::Dot(_) | Expr::Index(_))
}

pub fn is_optional_chain(expr: &Node<Expr>) -> bool {
  let chain = match expr.stx.as_ref() {
    Expr::Dot(e) => e.optional_chain,
    Expr::Index(e) => e.optional_chain,
    Expr::Call(e) => e.optional_chain,
    _ => return false,
  };
  chain != OptionalChain::None
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast_js::build::*;
  use ast_js::Ref;

  fn and(a: Node<Expr>, b: Node<Expr>) -> Node<Expr> {
    binary(OperatorName::LogicalAnd, a, b)
  }

  #[test]
  fn reassociates_to_the_left() {
    let (a, b, c) = (id(Ref(0)), id(Ref(1)), id(Ref(2)));
    let joined = join_with_left_associative_op(OperatorName::LogicalAnd, a.clone(), and(b.clone(), c.clone()));
    assert_eq!(joined, and(and(a, b), c));
  }

  #[test]
  fn hoists_leading_comma() {
    let (x, a, b) = (id(Ref(0)), id(Ref(1)), id(Ref(2)));
    let joined = join_with_left_associative_op(
      OperatorName::LogicalOr,
      binary(OperatorName::Comma, x.clone(), a.clone()),
      b.clone(),
    );
    assert_eq!(
      joined,
      binary(OperatorName::Comma, x, binary(OperatorName::LogicalOr, a, b))
    );
  }

  #[test]
  fn joins_present_values_only() {
    assert_eq!(join_all_with_comma(vec![None, None]), None);
    let a = id(Ref(0));
    assert_eq!(join_all_with_comma(vec![None, Some(a.clone())]), Some(a.clone()));
    assert_eq!(
      join_all_with_comma(vec![Some(a.clone()), None, Some(num(1.0)), Some(num(2.0))]),
      Some(binary(
        OperatorName::Comma,
        binary(OperatorName::Comma, a, num(1.0)),
        num(2.0)
      ))
    );
  }

  #[test]
  fn assignment_takes_target_location() {
    let target = new_expr(Loc(3, 4), ast_js::ast::expr::Expr::This);
    let stmt = assign_stmt(target, num(1.0));
    assert_eq!(stmt.loc, Loc(3, 4));
    assert!(is_property_access(&dot(this(), "x")));
    assert!(!is_optional_chain(&dot(this(), "x")));
  }
}
