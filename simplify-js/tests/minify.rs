use ast_js::ast::expr::{CallKind, Expr};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::*;
use ast_js::build::*;
use ast_js::loc::Loc;
use ast_js::operator::OperatorName;
use ast_js::Ref;
use emit_js::emit_stmts;
use simplify_js::*;
use symbol_js::{SymbolKind, SymbolTable};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

struct Program {
  symbols: SymbolTable,
  options: SimplifyOptions,
}

impl Program {
  fn new() -> Program {
    init_tracing();
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

  fn minify(&self, stmts: &mut Vec<Node<Stmt>>) -> MinifyStats {
    minify(stmts, &|r| self.symbols.is_unbound(r), &self.options)
  }

  fn emit(&self, stmts: &[Node<Stmt>]) -> String {
    emit_stmts(stmts, &self.symbols).unwrap()
  }
}

fn if_stmt(test: Node<Expr>, yes: Node<Stmt>) -> Node<Stmt> {
  new_stmt(Loc::default(), Stmt::If(IfStmt { test, yes, no: None }))
}

#[test]
fn drops_unused_statements_but_keeps_directives() {
  let mut p = Program::new();
  let f = p.global("f");
  let mut stmts = vec![
    expr_stmt(string("use strict")),
    expr_stmt(num(1.0)),
    expr_stmt(call(id(f), vec![])),
    expr_stmt(string("not a directive")),
  ];
  let stats = p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "\"use strict\";f();");
  assert_eq!(stats.statements_removed, 2);
  assert_eq!(stats.passes, 2);
}

#[test]
fn simplifies_inside_function_bodies() {
  let mut p = Program::new();
  let x = p.local("x");
  let a = p.global("a");
  let mut stmts = vec![expr_stmt(binary(
    OperatorName::Assignment,
    id(x),
    function(vec![
      expr_stmt(num(1.0)),
      expr_stmt(cond(id(a), num(1.0), call(id(a), vec![]))),
    ]),
  ))];
  p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "x=function(){a||a();};");
}

#[test]
fn keeps_public_field_definitions() {
  let mut p = Program::new();
  let define = p.global("__publicField");
  let c = p.local("C");
  let mut field = call(id(define), vec![id(c), string("x"), num(1.0)]);
  if let Expr::Call(e) = field.stx.as_mut() {
    e.kind = CallKind::InternalPublicFieldCall;
  };
  let mut stmts = vec![expr_stmt(field)];
  let stats = p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "__publicField(C,\"x\",1);");
  assert_eq!(stats.statements_removed, 0);
}

#[test]
fn drops_guarded_global_reads() {
  let mut p = Program::new();
  let x = p.global("x");
  let exists = || binary(OperatorName::StrictInequality, typeof_id(x), string("undefined"));
  let mut stmts = vec![
    expr_stmt(binary(OperatorName::LogicalAnd, exists(), id(x))),
    expr_stmt(cond(exists(), id(x), null())),
    expr_stmt(cond(exists(), null(), id(x))),
  ];
  let stats = p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "typeof x!=\"undefined\"||x;");
  assert_eq!(stats.statements_removed, 2);
}

#[test]
fn vanished_branch_becomes_empty_statement() {
  let mut p = Program::new();
  let a = p.global("a");
  let mut stmts = vec![if_stmt(id(a), expr_stmt(void_0()))];
  let stats = p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "if(a);");
  assert_eq!(stats.statements_removed, 1);
}

#[test]
fn simplifies_conditions_and_equality() {
  let mut p = Program::new();
  let a = p.global("a");
  let b = p.global("b");
  let mut stmts = vec![
    if_stmt(
      logical_not(logical_not(id(a))),
      expr_stmt(call(id(b), vec![])),
    ),
    if_stmt(
      binary(OperatorName::StrictEquality, typeof_id(a), string("string")),
      expr_stmt(call(id(b), vec![])),
    ),
  ];
  let stats = p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "if(a)b();if(typeof a==\"string\")b();");
  assert_eq!(stats.rewrites, 2);

  p.options.mangle_strict_equality = false;
  let mut strict = vec![if_stmt(
    binary(OperatorName::StrictEquality, typeof_id(a), string("string")),
    expr_stmt(call(id(b), vec![])),
  )];
  p.minify(&mut strict);
  assert_eq!(p.emit(&strict), "if(typeof a===\"string\")b();");
}

#[test]
fn folds_nullish_coalescing_and_literal_comparisons() {
  let mut p = Program::new();
  let x = p.local("x");
  let a = p.global("a");
  let mut stmts = vec![
    expr_stmt(binary(
      OperatorName::Assignment,
      id(x),
      binary(OperatorName::NullishCoalescing, null(), id(a)),
    )),
    expr_stmt(binary(
      OperatorName::Assignment,
      id(x),
      binary(OperatorName::NullishCoalescing, num(1.0), id(a)),
    )),
    expr_stmt(binary(
      OperatorName::Assignment,
      id(x),
      binary(OperatorName::StrictInequality, string("a"), string("b")),
    )),
  ];
  p.minify(&mut stmts);
  assert_eq!(p.emit(&stmts), "x=a;x=1;x=true;");
}

#[test]
fn stops_at_the_pass_limit() {
  let mut p = Program::new();
  let f = p.global("f");
  p.options.max_passes = 1;
  let mut stmts = vec![expr_stmt(num(1.0)), expr_stmt(call(id(f), vec![]))];
  let stats = p.minify(&mut stmts);
  assert_eq!(stats.passes, 1);
  assert_eq!(p.emit(&stmts), "f();");
}

#[test]
fn nothing_to_do_takes_one_pass() {
  let mut p = Program::new();
  let f = p.global("f");
  let mut stmts = vec![expr_stmt(call(id(f), vec![]))];
  let stats = p.minify(&mut stmts);
  assert_eq!(stats, MinifyStats {
    passes: 1,
    statements_removed: 0,
    rewrites: 0,
  });
}

#[test]
fn per_statement_removability() {
  let mut p = Program::new();
  let x = p.local("x");
  let f = p.global("f");
  let stmts = vec![
    new_stmt(Loc::default(), Stmt::Local(LocalStmt {
      kind: LocalKind::Const,
      decls: vec![Decl {
        binding: id_binding(x),
        value: Some(num(1.0)),
      }],
      is_export: false,
    })),
    expr_stmt(call(id(f), vec![])),
    new_stmt(Loc::default(), Stmt::ExportClause(ExportClauseStmt { items: vec![] })),
  ];
  let is_unbound = |r| p.symbols.is_unbound(r);
  assert_eq!(
    removable_statements(&stmts, StmtRemovalFlags::default(), &is_unbound),
    vec![true, false, true],
  );
  assert_eq!(
    removable_statements(
      &stmts,
      StmtRemovalFlags {
        keep_export_clauses: true,
      },
      &is_unbound,
    ),
    vec![true, false, false],
  );
}

#[test]
fn stats_serialize_for_reporting() {
  let stats = MinifyStats {
    passes: 2,
    statements_removed: 3,
    rewrites: 1,
  };
  assert_eq!(
    serde_json::to_string(&stats).unwrap(),
    r#"{"passes":2,"statements_removed":3,"rewrites":1}"#
  );
}
