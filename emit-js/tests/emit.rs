use ast_js::ast::binding::{ArrayBinding, ArrayBindingItem, Binding};
use ast_js::ast::expr::{Expr, OptionalChain};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::*;
use ast_js::build::*;
use ast_js::loc::Loc;
use ast_js::operator::OperatorName;
use ast_js::Ref;
use emit_js::{emit_expr, emit_stmts, EmitError};
use symbol_js::{SymbolKind, SymbolTable};

struct Names {
  table: SymbolTable,
}

impl Names {
  fn new() -> Names {
    Names {
      table: SymbolTable::new(),
    }
  }

  fn global(&mut self, name: &str) -> Ref {
    self.table.unbound(name)
  }

  fn local(&mut self, name: &str) -> Ref {
    self.table.declare(name, SymbolKind::Lexical)
  }

  fn expr(&self, expr: &Node<Expr>) -> String {
    emit_expr(expr, &self.table).unwrap()
  }

  fn stmts(&self, stmts: &[Node<Stmt>]) -> String {
    emit_stmts(stmts, &self.table).unwrap()
  }
}

fn chain(mut expr: Node<Expr>, state: OptionalChain) -> Node<Expr> {
  match expr.stx.as_mut() {
    Expr::Dot(e) => e.optional_chain = state,
    Expr::Index(e) => e.optional_chain = state,
    Expr::Call(e) => e.optional_chain = state,
    _ => panic!("not a chain node"),
  };
  expr
}

#[test]
fn literals() {
  let n = Names::new();
  assert_eq!(n.expr(&undefined()), "void 0");
  assert_eq!(n.expr(&num(-0.0)), "-0");
  assert_eq!(n.expr(&num(f64::NAN)), "NaN");
  assert_eq!(n.expr(&num(f64::NEG_INFINITY)), "-Infinity");
  assert_eq!(n.expr(&num(1.5)), "1.5");
  assert_eq!(n.expr(&bigint("10")), "10n");
  assert_eq!(n.expr(&string("a\"b")), "\"a\\\"b\"");
  assert_eq!(n.expr(&regexp("/x/g")), "/x/g");
  assert_eq!(n.expr(&array(vec![num(1.0), missing()])), "[1,,]");
}

#[test]
fn operators_get_minimal_spacing_and_parens() {
  let mut n = Names::new();
  let a = n.global("a");
  let b = n.global("b");
  let c = n.global("c");
  assert_eq!(
    n.expr(&binary(OperatorName::Subtraction, id(a), num(-1.0))),
    "a- -1"
  );
  assert_eq!(
    n.expr(&binary(
      OperatorName::Multiplication,
      binary(OperatorName::Addition, id(a), id(b)),
      id(c)
    )),
    "(a+b)*c"
  );
  assert_eq!(
    n.expr(&binary(
      OperatorName::Subtraction,
      id(a),
      binary(OperatorName::Subtraction, id(b), id(c))
    )),
    "a-(b-c)"
  );
  assert_eq!(
    n.expr(&binary(
      OperatorName::LogicalOr,
      binary(OperatorName::NullishCoalescing, id(a), id(b)),
      id(c)
    )),
    "(a??b)||c"
  );
  assert_eq!(
    n.expr(&binary(
      OperatorName::Exponentiation,
      unary(OperatorName::UnaryNegation, id(a)),
      num(2.0)
    )),
    "(-a)**2"
  );
  assert_eq!(n.expr(&typeof_id(a)), "typeof a");
  assert_eq!(n.expr(&logical_not(logical_not(id(a)))), "!!a");
  assert_eq!(
    n.expr(&cond(id(a), binary(OperatorName::Comma, id(b), id(c)), null())),
    "a?(b,c):null"
  );
  assert_eq!(
    n.expr(&binary(OperatorName::In, string("x"), id(a))),
    "\"x\"in a"
  );
}

#[test]
fn optional_chains() {
  let mut n = Names::new();
  let a = n.global("a");
  let inner = chain(dot(id(a), "b"), OptionalChain::Start);
  let outer = chain(dot(inner, "c"), OptionalChain::Continue);
  let expr = chain(call(outer, vec![]), OptionalChain::Continue);
  assert_eq!(n.expr(&expr), "a?.b.c()");

  let broken = dot(chain(dot(id(a), "b"), OptionalChain::Start), "c");
  assert_eq!(n.expr(&broken), "(a?.b).c");

  let opt_call = chain(call(id(a), vec![num(1.0)]), OptionalChain::Start);
  assert_eq!(n.expr(&opt_call), "a?.(1)");
  let opt_index = chain(index(id(a), num(0.0)), OptionalChain::Start);
  assert_eq!(n.expr(&opt_index), "a?.[0]");
}

#[test]
fn new_and_calls() {
  let mut n = Names::new();
  let f = n.global("f");
  assert_eq!(n.expr(&new_(call(id(f), vec![]), vec![], false)), "new(f())()");
  assert_eq!(n.expr(&new_(dot(id(f), "g"), vec![], false)), "new f.g()");
  assert_eq!(
    n.expr(&call(arrow_expr(id(f)), vec![spread(id(f))])),
    "(()=>f)(...f)"
  );
  assert_eq!(n.expr(&dot(num(-1.0), "x")), "(-1).x");
}

#[test]
fn arrows_and_templates() {
  let mut n = Names::new();
  let x = n.global("x");
  assert_eq!(n.expr(&arrow_expr(object(vec![]))), "()=>({})");
  assert_eq!(n.expr(&arrow(vec![expr_stmt(id(x))])), "()=>{x;}");
  let mut a = arrow(vec![ret(Some(id(x)))]);
  if let Expr::Arrow(arrow) = a.stx.as_mut() {
    arrow.is_async = true;
  };
  assert_eq!(n.expr(&a), "async()=>{return x;}");
  assert_eq!(
    n.expr(&template(None, "a`", vec![(id(x), "b"), (num(1.0), "")])),
    "`a\\`${x}b${1}`"
  );
  assert_eq!(n.expr(&template(Some(id(x)), "s", vec![])), "x`s`");
}

#[test]
fn objects() {
  let mut n = Names::new();
  let k = n.global("k");
  let o = object(vec![
    prop("a", num(1.0)),
    prop("b-c", num(2.0)),
    computed_prop(id(k), null()),
    spread_prop(id(k)),
  ]);
  assert_eq!(n.expr(&o), "{a:1,\"b-c\":2,[k]:null,...k}");
}

#[test]
fn expression_statements_starting_with_braces_or_keywords() {
  let mut n = Names::new();
  let a = n.global("a");
  let stmts = vec![
    expr_stmt(dot(object(vec![]), "x")),
    expr_stmt(call(function(vec![]), vec![])),
    expr_stmt(binary(OperatorName::Comma, class_expr(class(None, vec![])), id(a))),
    expr_stmt(id(a)),
  ];
  assert_eq!(n.stmts(&stmts), "({}.x);(function(){}());(class{},a);a;");
}

#[test]
fn statements() {
  let mut n = Names::new();
  let x = n.local("x");
  let y = n.local("y");
  let a = n.global("a");
  let b = n.global("b");
  let local = new_stmt(Loc::default(), Stmt::Local(LocalStmt {
    kind: LocalKind::Let,
    decls: vec![
      Decl {
        binding: id_binding(x),
        value: Some(num(1.0)),
      },
      Decl {
        binding: Node::new(Loc::default(), Binding::Array(ArrayBinding {
          items: vec![
            ArrayBindingItem {
              binding: Node::new(Loc::default(), Binding::Missing),
              default: None,
            },
            ArrayBindingItem {
              binding: id_binding(y),
              default: None,
            },
          ],
          has_spread: true,
        })),
        value: Some(id(a)),
      },
    ],
    is_export: false,
  }));
  let nested_if = new_stmt(Loc::default(), Stmt::If(IfStmt {
    test: id(a),
    yes: new_stmt(Loc::default(), Stmt::If(IfStmt {
      test: id(b),
      yes: expr_stmt(id(x)),
      no: None,
    })),
    no: Some(ret(None)),
  }));
  let export = new_stmt(Loc::default(), Stmt::ExportDefault(ExportDefaultStmt {
    default_ref: n.local("default"),
    value: ExportDefaultValue::Expr(binary(OperatorName::Comma, id(a), id(b))),
  }));
  assert_eq!(
    n.stmts(&[local, nested_if, export]),
    "let x=1,[,...y]=a;if(a){if(b)x;}else return;export default(a,b);"
  );
}

#[test]
fn unknown_symbols_are_errors() {
  let n = Names::new();
  assert_eq!(
    emit_expr(&id(Ref(9)), &n.table),
    Err(EmitError::UnknownSymbol(Ref(9)))
  );
}
