use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::expr::Expr;
use super::node::Node;
use super::symbol::Ref;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "$t")]
pub enum Binding {
  Array(ArrayBinding),
  Identifier(IdentifierBinding),
  /// A hole in an array pattern.
  Missing,
  Object(ObjectBinding),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct IdentifierBinding {
  #[drive(skip)]
  pub ref_: Ref,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ArrayBindingItem {
  pub binding: Node<Binding>,
  pub default: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ArrayBinding {
  pub items: Vec<ArrayBindingItem>,
  /// The last item is a rest element.
  #[drive(skip)]
  pub has_spread: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct PropertyBinding {
  pub key: Node<Expr>,
  #[drive(skip)]
  pub is_computed: bool,
  #[drive(skip)]
  pub is_spread: bool,
  pub value: Node<Binding>,
  pub default: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ObjectBinding {
  pub properties: Vec<PropertyBinding>,
}
