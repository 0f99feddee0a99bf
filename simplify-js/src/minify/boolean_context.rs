use ast_js::ast::expr::IfExpr;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::{DoWhileStmt, IfStmt, Stmt, WhileStmt};
use derive_visitor::{DriveMut, VisitorMut};

use super::{rewrite_expr, MinifyCx, Pass};
use crate::boolean::simplify_boolean_expr;

/// Simplifies conditions whose value is only ever tested for truthiness.
pub(super) struct BooleanContextPass;

#[derive(VisitorMut, Default)]
#[visitor(IfStmt(enter), WhileStmt(enter), DoWhileStmt(enter), IfExpr(enter))]
struct BooleanContextVisitor {
  rewrites: usize,
}

impl BooleanContextVisitor {
  fn count(&mut self, changed: bool) {
    if changed {
      self.rewrites += 1;
    };
  }

  fn enter_if_stmt(&mut self, stmt: &mut IfStmt) {
    let changed = rewrite_expr(&mut stmt.test, simplify_boolean_expr);
    self.count(changed);
  }

  fn enter_while_stmt(&mut self, stmt: &mut WhileStmt) {
    let changed = rewrite_expr(&mut stmt.test, simplify_boolean_expr);
    self.count(changed);
  }

  fn enter_do_while_stmt(&mut self, stmt: &mut DoWhileStmt) {
    let changed = rewrite_expr(&mut stmt.test, simplify_boolean_expr);
    self.count(changed);
  }

  fn enter_if_expr(&mut self, expr: &mut IfExpr) {
    let changed = rewrite_expr(&mut expr.test, simplify_boolean_expr);
    self.count(changed);
  }
}

impl Pass for BooleanContextPass {
  fn name(&self) -> &'static str {
    "boolean-context"
  }

  fn run(&mut self, cx: &mut MinifyCx, top: &mut Vec<Node<Stmt>>) -> bool {
    let mut visitor = BooleanContextVisitor::default();
    top.drive_mut(&mut visitor);
    cx.stats.rewrites += visitor.rewrites;
    visitor.rewrites > 0
  }
}
