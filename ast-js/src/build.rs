//! Shorthand constructors for synthesizing nodes. Everything built here has
//! an empty location; callers that replace an existing node should use
//! `new_expr` with that node's location.

use crate::ast::binding::{Binding, IdentifierBinding};
use crate::ast::class::{Class, Property, PropertyKind};
use crate::ast::expr::*;
use crate::ast::func::Func;
use crate::ast::node::Node;
use crate::ast::stmt::{ExprStmt, ReturnStmt, Stmt};
use crate::ast::symbol::Ref;
use crate::loc::Loc;
use crate::num::JsNumber;
use crate::operator::OperatorName;
use crate::text::utf16;

pub fn new_expr(loc: Loc, stx: Expr) -> Node<Expr> {
  Node::new(loc, stx)
}

pub fn new_stmt(loc: Loc, stx: Stmt) -> Node<Stmt> {
  Node::new(loc, stx)
}

fn e(stx: Expr) -> Node<Expr> {
  new_expr(Loc::default(), stx)
}

pub fn null() -> Node<Expr> {
  e(Expr::Null)
}

pub fn undefined() -> Node<Expr> {
  e(Expr::Undefined)
}

pub fn missing() -> Node<Expr> {
  e(Expr::Missing)
}

pub fn this() -> Node<Expr> {
  e(Expr::This)
}

pub fn import_meta() -> Node<Expr> {
  e(Expr::ImportMeta)
}

pub fn boolean(value: bool) -> Node<Expr> {
  e(Expr::Boolean(BooleanExpr { value }))
}

pub fn num(value: f64) -> Node<Expr> {
  e(Expr::Number(NumberExpr {
    value: JsNumber(value),
  }))
}

pub fn bigint(digits: &str) -> Node<Expr> {
  e(Expr::BigInt(BigIntExpr {
    value: digits.to_string(),
  }))
}

pub fn string(value: &str) -> Node<Expr> {
  string_utf16(utf16(value))
}

pub fn string_utf16(value: Vec<u16>) -> Node<Expr> {
  e(Expr::String(StringExpr { value }))
}

pub fn regexp(value: &str) -> Node<Expr> {
  e(Expr::RegExp(RegExpExpr {
    value: value.to_string(),
  }))
}

pub fn id(ref_: Ref) -> Node<Expr> {
  e(Expr::Identifier(IdentifierExpr {
    ref_,
    can_be_removed_if_unused: false,
    must_keep_due_to_with_stmt: false,
  }))
}

/// An identifier the producer has asserted is safe to drop, e.g. a known global.
pub fn pure_id(ref_: Ref) -> Node<Expr> {
  e(Expr::Identifier(IdentifierExpr {
    ref_,
    can_be_removed_if_unused: true,
    must_keep_due_to_with_stmt: false,
  }))
}

pub fn import_id(ref_: Ref) -> Node<Expr> {
  e(Expr::ImportIdentifier(ImportIdentifierExpr { ref_ }))
}

pub fn dot(target: Node<Expr>, name: &str) -> Node<Expr> {
  e(Expr::Dot(DotExpr {
    target,
    name: name.to_string(),
    optional_chain: OptionalChain::None,
    can_be_removed_if_unused: false,
  }))
}

pub fn pure_dot(target: Node<Expr>, name: &str) -> Node<Expr> {
  e(Expr::Dot(DotExpr {
    target,
    name: name.to_string(),
    optional_chain: OptionalChain::None,
    can_be_removed_if_unused: true,
  }))
}

pub fn index(target: Node<Expr>, index: Node<Expr>) -> Node<Expr> {
  e(Expr::Index(IndexExpr {
    target,
    index,
    optional_chain: OptionalChain::None,
    can_be_removed_if_unused: false,
  }))
}

pub fn call(target: Node<Expr>, args: Vec<Node<Expr>>) -> Node<Expr> {
  e(Expr::Call(CallExpr {
    target,
    args,
    optional_chain: OptionalChain::None,
    can_be_unwrapped_if_unused: false,
    kind: CallKind::Normal,
  }))
}

/// A call annotated `/* @__PURE__ */`.
pub fn pure_call(target: Node<Expr>, args: Vec<Node<Expr>>) -> Node<Expr> {
  e(Expr::Call(CallExpr {
    target,
    args,
    optional_chain: OptionalChain::None,
    can_be_unwrapped_if_unused: true,
    kind: CallKind::Normal,
  }))
}

pub fn new_(target: Node<Expr>, args: Vec<Node<Expr>>, pure: bool) -> Node<Expr> {
  e(Expr::New(NewExpr {
    target,
    args,
    can_be_unwrapped_if_unused: pure,
  }))
}

pub fn unary(operator: OperatorName, value: Node<Expr>) -> Node<Expr> {
  e(Expr::Unary(UnaryExpr {
    operator,
    value,
    value_was_originally_identifier: false,
  }))
}

pub fn logical_not(value: Node<Expr>) -> Node<Expr> {
  unary(OperatorName::LogicalNot, value)
}

pub fn void_0() -> Node<Expr> {
  unary(OperatorName::Void, num(0.0))
}

/// `typeof x` where `x` was written directly as an identifier.
pub fn typeof_id(ref_: Ref) -> Node<Expr> {
  e(Expr::Unary(UnaryExpr {
    operator: OperatorName::Typeof,
    value: id(ref_),
    value_was_originally_identifier: true,
  }))
}

pub fn binary(operator: OperatorName, left: Node<Expr>, right: Node<Expr>) -> Node<Expr> {
  e(Expr::Binary(BinaryExpr {
    operator,
    left,
    right,
  }))
}

pub fn cond(test: Node<Expr>, yes: Node<Expr>, no: Node<Expr>) -> Node<Expr> {
  e(Expr::If(IfExpr { test, yes, no }))
}

pub fn array(items: Vec<Node<Expr>>) -> Node<Expr> {
  e(Expr::Array(ArrayExpr { items }))
}

pub fn spread(value: Node<Expr>) -> Node<Expr> {
  e(Expr::Spread(SpreadExpr { value }))
}

pub fn object(properties: Vec<Property>) -> Node<Expr> {
  e(Expr::Object(ObjectExpr { properties }))
}

pub fn prop(key: &str, value: Node<Expr>) -> Property {
  Property {
    kind: PropertyKind::Normal,
    is_computed: false,
    is_static: false,
    key: string(key),
    value: Some(value),
    initializer: None,
  }
}

pub fn computed_prop(key: Node<Expr>, value: Node<Expr>) -> Property {
  Property {
    kind: PropertyKind::Normal,
    is_computed: true,
    is_static: false,
    key,
    value: Some(value),
    initializer: None,
  }
}

pub fn spread_prop(value: Node<Expr>) -> Property {
  Property {
    kind: PropertyKind::Spread,
    is_computed: false,
    is_static: false,
    key: missing(),
    value: Some(value),
    initializer: None,
  }
}

pub fn template(tag: Option<Node<Expr>>, head: &str, parts: Vec<(Node<Expr>, &str)>) -> Node<Expr> {
  e(Expr::Template(TemplateExpr {
    tag,
    head: utf16(head),
    parts: parts
      .into_iter()
      .map(|(value, tail)| TemplatePart {
        value,
        tail: utf16(tail),
      })
      .collect(),
  }))
}

pub fn func(body: Vec<Node<Stmt>>) -> Func {
  Func {
    name: None,
    args: Vec::new(),
    body,
    is_async: false,
    is_generator: false,
  }
}

pub fn function(body: Vec<Node<Stmt>>) -> Node<Expr> {
  e(Expr::Function(FunctionExpr { func: func(body) }))
}

pub fn arrow(body: Vec<Node<Stmt>>) -> Node<Expr> {
  e(Expr::Arrow(ArrowExpr {
    args: Vec::new(),
    body,
    is_async: false,
    prefer_expr: false,
  }))
}

pub fn async_arrow(body: Vec<Node<Stmt>>) -> Node<Expr> {
  e(Expr::Arrow(ArrowExpr {
    args: Vec::new(),
    body,
    is_async: true,
    prefer_expr: false,
  }))
}

/// `() => value`.
pub fn arrow_expr(value: Node<Expr>) -> Node<Expr> {
  e(Expr::Arrow(ArrowExpr {
    args: Vec::new(),
    body: vec![ret(Some(value))],
    is_async: false,
    prefer_expr: true,
  }))
}

pub fn class(extends: Option<Node<Expr>>, members: Vec<crate::ast::class::ClassMember>) -> Class {
  Class {
    name: None,
    extends,
    members,
  }
}

pub fn class_expr(class: Class) -> Node<Expr> {
  e(Expr::Class(ClassExpr { class }))
}

pub fn inlined_enum(value: Node<Expr>, comment: &str) -> Node<Expr> {
  e(Expr::InlinedEnum(InlinedEnumExpr {
    value,
    comment: comment.to_string(),
  }))
}

pub fn expr_stmt(expr: Node<Expr>) -> Node<Stmt> {
  new_stmt(expr.loc, Stmt::Expr(ExprStmt {
    expr,
    does_not_affect_tree_shaking: false,
  }))
}

pub fn ret(value: Option<Node<Expr>>) -> Node<Stmt> {
  new_stmt(Loc::default(), Stmt::Return(ReturnStmt { value }))
}

pub fn id_binding(ref_: Ref) -> Node<Binding> {
  Node::new(Loc::default(), Binding::Identifier(IdentifierBinding { ref_ }))
}
