use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::binding::Binding;
use super::expr::Expr;
use super::node::Node;
use super::stmt::Stmt;
use super::symbol::Ref;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Arg {
  pub binding: Node<Binding>,
  pub default: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Func {
  #[drive(skip)]
  pub name: Option<Ref>,
  pub args: Vec<Arg>,
  pub body: Vec<Node<Stmt>>,
  #[drive(skip)]
  pub is_async: bool,
  #[drive(skip)]
  pub is_generator: bool,
}
