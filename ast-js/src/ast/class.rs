use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::expr::Expr;
use super::node::Node;
use super::stmt::Stmt;
use super::symbol::Ref;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum PropertyKind {
  #[default]
  Normal,
  Get,
  Set,
  Method,
  /// `...value` inside an object literal. The key is `Missing`.
  Spread,
}

/// A member of an object literal or a class body.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Property {
  #[drive(skip)]
  pub kind: PropertyKind,
  #[drive(skip)]
  pub is_computed: bool,
  #[drive(skip)]
  pub is_static: bool,
  pub key: Node<Expr>,
  pub value: Option<Node<Expr>>,
  /// Class field initializer, or the default in a shorthand pattern.
  pub initializer: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct StaticBlock {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "$t")]
pub enum ClassMember {
  Property(Property),
  StaticBlock(StaticBlock),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Class {
  #[drive(skip)]
  pub name: Option<Ref>,
  pub extends: Option<Node<Expr>>,
  pub members: Vec<ClassMember>,
}
