use ast_js::ast::expr::{Expr, OptionalChain};
use ast_js::ast::node::Node;

use crate::equality::values_look_the_same;

/// Turns `a.b.c()` into `a?.b.c()` in place if some target along the member
/// chain looks the same as `guard`. Returns false, leaving `expr` untouched,
/// if no target matches.
pub fn try_to_insert_optional_chain(guard: &Node<Expr>, expr: &mut Node<Expr>) -> bool {
  let (target, chain) = match expr.stx.as_mut() {
    Expr::Dot(e) => (&mut e.target, &mut e.optional_chain),
    Expr::Index(e) => (&mut e.target, &mut e.optional_chain),
    Expr::Call(e) => (&mut e.target, &mut e.optional_chain),
    _ => return false,
  };
  if values_look_the_same(guard, target) {
    *chain = OptionalChain::Start;
    return true;
  };
  if try_to_insert_optional_chain(guard, target) {
    if *chain == OptionalChain::None {
      *chain = OptionalChain::Continue;
    };
    return true;
  };
  false
}
