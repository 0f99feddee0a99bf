//! A small fixpoint driver that applies the simplifier to a whole program.

use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use ast_js::Ref;
use serde::Serialize;
use std::fmt;
use tracing::debug;
use tracing::instrument;

use crate::options::SimplifyOptions;
use crate::side_effects::stmts_can_be_removed_if_unused;
use crate::side_effects::StmtRemovalFlags;
use crate::SimplifyCx;

mod boolean_context;
mod mangle;
mod traverse;
mod unused_stmts;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MinifyStats {
  /// Iterations of the pass pipeline, including the final one that changed nothing.
  pub passes: usize,
  pub statements_removed: usize,
  pub rewrites: usize,
}

struct MinifyCx<'a> {
  options: &'a SimplifyOptions,
  simplify: SimplifyCx<'a>,
  stats: MinifyStats,
}

trait Pass {
  fn name(&self) -> &'static str;
  fn run(&mut self, cx: &mut MinifyCx, top: &mut Vec<Node<Stmt>>) -> bool;
}

struct PassPipeline {
  passes: Vec<Box<dyn Pass>>,
}

impl PassPipeline {
  fn new(passes: Vec<Box<dyn Pass>>) -> Self {
    Self { passes }
  }

  fn run(&mut self, cx: &mut MinifyCx, top: &mut Vec<Node<Stmt>>, max_iters: usize) {
    for _ in 0..max_iters {
      cx.stats.passes += 1;
      let mut changed = false;
      for pass in self.passes.iter_mut() {
        let pass_changed = pass.run(cx, top);
        tracing::trace!(target: "simplify_js::minify", pass = pass.name(), changed = pass_changed);
        changed |= pass_changed;
      }
      if !changed {
        break;
      }
    }
  }
}

impl fmt::Debug for PassPipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PassPipeline")
      .field(
        "passes",
        &self.passes.iter().map(|p| p.name()).collect::<Vec<_>>(),
      )
      .finish()
  }
}

/// Replaces the expression in `slot` with whatever `rewrite` makes of it and
/// reports whether anything changed. Locations don't count as changes.
fn rewrite_expr(slot: &mut Node<Expr>, rewrite: impl FnOnce(Node<Expr>) -> Node<Expr>) -> bool {
  let before = slot.clone();
  let taken = take_expr(slot);
  *slot = rewrite(taken);
  *slot != before
}

fn take_expr(slot: &mut Node<Expr>) -> Node<Expr> {
  let loc = slot.loc;
  std::mem::replace(slot, Node::new(loc, Expr::Missing))
}

/// Simplifies a program in place, repeating until nothing changes or the
/// pass limit is reached.
#[instrument(level = "debug", skip_all, fields(statements = stmts.len(), max_passes = options.passes()))]
pub fn minify(
  stmts: &mut Vec<Node<Stmt>>,
  is_unbound: &dyn Fn(Ref) -> bool,
  options: &SimplifyOptions,
) -> MinifyStats {
  let mut cx = MinifyCx {
    options,
    simplify: SimplifyCx::new(options, is_unbound),
    stats: MinifyStats::default(),
  };
  let mut pipeline = PassPipeline::new(vec![
    Box::new(unused_stmts::UnusedStmtsPass),
    Box::new(boolean_context::BooleanContextPass),
    Box::new(mangle::MangleExprPass),
  ]);
  pipeline.run(&mut cx, stmts, options.passes());
  debug!(
    passes = cx.stats.passes,
    statements_removed = cx.stats.statements_removed,
    rewrites = cx.stats.rewrites,
    "minified"
  );
  cx.stats
}

/// Per-statement verdicts for a tree shaker: whether each statement could be
/// dropped if nothing it declares is referenced.
pub fn removable_statements(
  stmts: &[Node<Stmt>],
  flags: StmtRemovalFlags,
  is_unbound: &dyn Fn(Ref) -> bool,
) -> Vec<bool> {
  stmts
    .iter()
    .map(|stmt| stmts_can_be_removed_if_unused(std::slice::from_ref(stmt), flags, is_unbound))
    .collect()
}
