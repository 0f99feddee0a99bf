use ast_js::ast::expr::{BooleanExpr, Expr};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use ast_js::operator::OperatorName;
use derive_visitor::{DriveMut, VisitorMut};

use super::{take_expr, MinifyCx, Pass};
use crate::boolean::maybe_simplify_not;
use crate::equality::check_equality_if_no_side_effects;
use crate::primitive::can_change_strict_to_loose;
use crate::truthiness::to_null_or_undefined_with_side_effects;
use crate::truthiness::SideEffects;

type ExprNode = Node<Expr>;

/// Local, value-preserving rewrites applied bottom-up to every expression.
pub(super) struct MangleExprPass;

#[derive(VisitorMut)]
#[visitor(ExprNode(exit))]
struct MangleVisitor {
  mangle_strict_equality: bool,
  rewrites: usize,
}

impl MangleVisitor {
  fn exit_expr_node(&mut self, node: &mut ExprNode) {
    let loc = node.loc;
    let replacement = match node.stx.as_mut() {
      Expr::Binary(e) => match e.operator {
        OperatorName::StrictEquality | OperatorName::StrictInequality => {
          if let Some(equal) = check_equality_if_no_side_effects(&e.left, &e.right) {
            let value = equal == (e.operator == OperatorName::StrictEquality);
            Some(Node::new(loc, Expr::Boolean(BooleanExpr { value })))
          } else {
            if self.mangle_strict_equality && can_change_strict_to_loose(&e.left, &e.right) {
              e.operator = if e.operator == OperatorName::StrictEquality {
                OperatorName::Equality
              } else {
                OperatorName::Inequality
              };
              self.rewrites += 1;
            };
            None
          }
        }
        OperatorName::NullishCoalescing => match to_null_or_undefined_with_side_effects(&e.left) {
          Some((false, _)) => Some(take_expr(&mut e.left)),
          Some((true, SideEffects::NoSideEffects)) => Some(take_expr(&mut e.right)),
          _ => None,
        },
        _ => None,
      },
      Expr::Unary(e) if e.operator == OperatorName::LogicalNot => {
        match maybe_simplify_not(take_expr(&mut e.value)) {
          Ok(simplified) => Some(simplified),
          Err(value) => {
            e.value = value;
            None
          }
        }
      }
      _ => None,
    };
    if let Some(replacement) = replacement {
      tracing::trace!(target: "simplify_js::minify::mangle", ?loc, "folded expression");
      *node = replacement;
      self.rewrites += 1;
    };
  }
}

impl Pass for MangleExprPass {
  fn name(&self) -> &'static str {
    "mangle-expr"
  }

  fn run(&mut self, cx: &mut MinifyCx, top: &mut Vec<Node<Stmt>>) -> bool {
    let mut visitor = MangleVisitor {
      mangle_strict_equality: cx.options.mangle_strict_equality,
      rewrites: 0,
    };
    top.drive_mut(&mut visitor);
    cx.stats.rewrites += visitor.rewrites;
    visitor.rewrites > 0
  }
}
