use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::build::*;
use ast_js::operator::OperatorName;
use ast_js::Ref;
use emit_js::emit_expr;
use simplify_js::*;
use symbol_js::{SymbolKind, SymbolTable};

struct Program {
  symbols: SymbolTable,
  options: SimplifyOptions,
}

impl Program {
  fn new() -> Program {
    Program {
      symbols: SymbolTable::new(),
      options: SimplifyOptions::default(),
    }
  }

  fn global(&mut self, name: &str) -> Ref {
    self.symbols.unbound(name)
  }

  fn local(&mut self, name: &str) -> Ref {
    self.symbols.declare(name, SymbolKind::Lexical)
  }

  fn removable(&self, expr: &Node<Expr>) -> bool {
    expr_can_be_removed_if_unused(expr, &|r| self.symbols.is_unbound(r))
  }

  fn unused(&self, expr: Node<Expr>) -> Option<String> {
    let is_unbound = |r| self.symbols.is_unbound(r);
    let cx = SimplifyCx::new(&self.options, &is_unbound);
    simplify_unused_expr(expr, &cx).map(|e| emit_expr(&e, &self.symbols).unwrap())
  }
}

#[test]
fn discarded_void_vanishes() {
  let p = Program::new();
  assert!(p.removable(&void_0()));
  assert_eq!(p.unused(void_0()), None);
}

#[test]
fn impure_right_side_of_and_is_kept() {
  let mut p = Program::new();
  let a = p.local("a");
  let b = p.global("b");
  let expr = binary(OperatorName::LogicalAnd, id(a), call(id(b), vec![]));
  assert!(!p.removable(&expr));
  assert_eq!(p.unused(expr).as_deref(), Some("a&&b()"));
}

#[test]
fn typeof_guard_makes_unbound_read_removable() {
  let mut p = Program::new();
  let x = p.global("x");
  let guarded = cond(
    binary(OperatorName::StrictInequality, typeof_id(x), string("undefined")),
    id(x),
    null(),
  );
  assert!(p.removable(&guarded));
  assert_eq!(p.unused(guarded), None);

  // The guard proves nothing on the other branch.
  let inverted = cond(
    binary(OperatorName::StrictInequality, typeof_id(x), string("undefined")),
    null(),
    id(x),
  );
  assert!(!p.removable(&inverted));
}

#[test]
fn discarded_conditional_keeps_only_its_test() {
  let mut p = Program::new();
  let test = p.global("cond");
  let expr = cond(id(test), num(1.0), num(2.0));
  assert_eq!(p.unused(expr).as_deref(), Some("cond"));
}

#[test]
fn null_check_becomes_optional_chain() {
  let mut p = Program::new();
  let a = p.local("a");
  let expr = binary(
    OperatorName::LogicalAnd,
    binary(OperatorName::Inequality, id(a), null()),
    call(dot(dot(id(a), "b"), "c"), vec![]),
  );
  assert_eq!(p.unused(expr.clone()).as_deref(), Some("a?.b.c()"));

  p.options.optional_chain_supported = false;
  assert_eq!(p.unused(expr).as_deref(), Some("a!=null&&a.b.c()"));
}

#[test]
fn discarded_iife_is_inlined() {
  let mut p = Program::new();
  let foo = p.global("foo");
  let iife = call(arrow(vec![expr_stmt(call(id(foo), vec![]))]), vec![]);
  assert_eq!(p.unused(iife).as_deref(), Some("foo()"));
}

#[test]
fn negative_zero_looks_different_but_compares_equal() {
  assert!(!values_look_the_same(&num(-0.0), &num(0.0)));
  assert_eq!(check_equality_if_no_side_effects(&num(-0.0), &num(0.0)), Some(true));
}

#[test]
fn double_negation_of_boolean() {
  let mut p = Program::new();
  let a = p.local("a");
  let boolean_value = binary(OperatorName::LessThan, id(a), num(1.0));
  assert_eq!(known_primitive_type(&boolean_value), PrimitiveType::Boolean);
  assert_eq!(not(not(boolean_value.clone())), boolean_value);
}
