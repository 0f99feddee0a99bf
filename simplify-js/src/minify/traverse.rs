use ast_js::ast::class::StaticBlock;
use ast_js::ast::expr::ArrowExpr;
use ast_js::ast::func::Func;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use derive_visitor::{DriveMut, VisitorMut};

#[derive(VisitorMut)]
#[visitor(Func(enter), ArrowExpr(enter), StaticBlock(enter))]
struct BodyVisitor<'a> {
  apply: &'a mut dyn FnMut(Vec<Node<Stmt>>, &mut bool) -> Vec<Node<Stmt>>,
  changed: bool,
}

impl BodyVisitor<'_> {
  fn enter_func(&mut self, func: &mut Func) {
    let body = std::mem::take(&mut func.body);
    func.body = (self.apply)(body, &mut self.changed);
  }

  fn enter_arrow_expr(&mut self, arrow: &mut ArrowExpr) {
    let body = std::mem::take(&mut arrow.body);
    arrow.body = (self.apply)(body, &mut self.changed);
  }

  fn enter_static_block(&mut self, block: &mut StaticBlock) {
    let body = std::mem::take(&mut block.body);
    block.body = (self.apply)(body, &mut self.changed);
  }
}

/// Runs `apply` on the top-level statement list and then on every function,
/// arrow and static block body nested anywhere inside it, outermost first.
pub(super) fn apply_to_function_like_bodies<F>(top: &mut Vec<Node<Stmt>>, apply: F) -> bool
where
  F: FnMut(Vec<Node<Stmt>>, &mut bool) -> Vec<Node<Stmt>>,
{
  let mut apply = apply;
  let mut changed = false;
  let body = std::mem::take(top);
  *top = apply(body, &mut changed);
  let mut visitor = BodyVisitor {
    apply: &mut apply,
    changed,
  };
  top.drive_mut(&mut visitor);
  visitor.changed
}
