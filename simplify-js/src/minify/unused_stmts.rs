use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;

use super::traverse::apply_to_function_like_bodies;
use super::{MinifyCx, Pass};
use crate::unused::simplify_unused_expr;
use crate::SimplifyCx;

/// Drops expression statements whose value is unused and has no effect, and
/// trims the rest down to the parts with effects.
pub(super) struct UnusedStmtsPass;

impl Pass for UnusedStmtsPass {
  fn name(&self) -> &'static str {
    "unused-stmts"
  }

  fn run(&mut self, cx: &mut MinifyCx, top: &mut Vec<Node<Stmt>>) -> bool {
    let simplify = cx.simplify;
    let stats = &mut cx.stats;
    apply_to_function_like_bodies(top, |stmts, changed| {
      let mut removed = 0;
      let mut rewrites = 0;
      let out = simplify_body(stmts, &simplify, &mut removed, &mut rewrites);
      if removed + rewrites > 0 {
        *changed = true;
      };
      stats.statements_removed += removed;
      stats.rewrites += rewrites;
      out
    })
  }
}

fn is_directive(stmt: &Node<Stmt>) -> bool {
  matches!(stmt.stx.as_ref(), Stmt::Expr(s) if matches!(s.expr.stx.as_ref(), Expr::String(_)))
}

// A body starts with its directive prologue, which looks like unused strings.
fn simplify_body(
  stmts: Vec<Node<Stmt>>,
  cx: &SimplifyCx,
  removed: &mut usize,
  rewrites: &mut usize,
) -> Vec<Node<Stmt>> {
  let mut out = Vec::with_capacity(stmts.len());
  let mut in_prologue = true;
  for stmt in stmts {
    if in_prologue && is_directive(&stmt) {
      out.push(stmt);
      continue;
    };
    in_prologue = false;
    if let Some(stmt) = simplify_stmt_in_list(stmt, cx, removed, rewrites) {
      out.push(stmt);
    };
  }
  out
}

fn simplify_stmts(
  stmts: Vec<Node<Stmt>>,
  cx: &SimplifyCx,
  removed: &mut usize,
  rewrites: &mut usize,
) -> Vec<Node<Stmt>> {
  stmts
    .into_iter()
    .filter_map(|stmt| simplify_stmt_in_list(stmt, cx, removed, rewrites))
    .collect()
}

fn simplify_stmt_in_list(
  stmt: Node<Stmt>,
  cx: &SimplifyCx,
  removed: &mut usize,
  rewrites: &mut usize,
) -> Option<Node<Stmt>> {
  let stmt = simplify_stmt(stmt, cx, removed, rewrites);
  match stmt.stx.as_ref() {
    Stmt::Expr(s) if matches!(s.expr.stx.as_ref(), Expr::Missing) => {
      *removed += 1;
      None
    }
    _ => Some(stmt),
  }
}

// Where a statement list isn't allowed, a vanished statement becomes `;`.
fn simplify_single_stmt(
  stmt: Node<Stmt>,
  cx: &SimplifyCx,
  removed: &mut usize,
  rewrites: &mut usize,
) -> Node<Stmt> {
  let loc = stmt.loc;
  match simplify_stmt_in_list(stmt, cx, removed, rewrites) {
    Some(stmt) => stmt,
    None => Node::new(loc, Stmt::Empty),
  }
}

// Vanished expression statements come back holding `Missing` for the caller to drop.
fn simplify_stmt(
  stmt: Node<Stmt>,
  cx: &SimplifyCx,
  removed: &mut usize,
  rewrites: &mut usize,
) -> Node<Stmt> {
  let loc = stmt.loc;
  let stx = match *stmt.stx {
    Stmt::Expr(mut s) => {
      // Leave `Missing` alone so the caller can drop it.
      if matches!(s.expr.stx.as_ref(), Expr::Missing) {
        return Node::new(loc, Stmt::Expr(s));
      };
      let before = s.expr.clone();
      match simplify_unused_expr(s.expr, cx) {
        Some(expr) => {
          if expr != before {
            tracing::trace!(target: "simplify_js::minify::unused", ?loc, "trimmed unused expression");
            *rewrites += 1;
          };
          s.expr = expr;
        }
        None => s.expr = Node::new(before.loc, Expr::Missing),
      };
      Stmt::Expr(s)
    }
    Stmt::Block(mut block) => {
      block.body = simplify_stmts(block.body, cx, removed, rewrites);
      Stmt::Block(block)
    }
    Stmt::If(mut s) => {
      s.yes = simplify_single_stmt(s.yes, cx, removed, rewrites);
      s.no = s.no.map(|no| simplify_single_stmt(no, cx, removed, rewrites));
      Stmt::If(s)
    }
    Stmt::While(mut s) => {
      s.body = simplify_single_stmt(s.body, cx, removed, rewrites);
      Stmt::While(s)
    }
    Stmt::DoWhile(mut s) => {
      s.body = simplify_single_stmt(s.body, cx, removed, rewrites);
      Stmt::DoWhile(s)
    }
    Stmt::Label(mut s) => {
      s.stmt = simplify_single_stmt(s.stmt, cx, removed, rewrites);
      Stmt::Label(s)
    }
    Stmt::With(mut s) => {
      s.body = simplify_single_stmt(s.body, cx, removed, rewrites);
      Stmt::With(s)
    }
    Stmt::Try(mut s) => {
      s.block = simplify_stmts(s.block, cx, removed, rewrites);
      if let Some(catch) = s.catch.as_mut() {
        catch.body = simplify_stmts(std::mem::take(&mut catch.body), cx, removed, rewrites);
      };
      s.finally = s.finally.map(|f| simplify_stmts(f, cx, removed, rewrites));
      Stmt::Try(s)
    }
    stx => stx,
  };
  Node::new(loc, stx)
}
