use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use crate::num::JsNumber;
use crate::operator::OperatorName;

use super::class::{Class, Property};
use super::func::{Arg, Func};
use super::node::Node;
use super::stmt::Stmt;
use super::symbol::Ref;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum OptionalChain {
  /// Not part of an optional chain, or a chain member that never short-circuits.
  #[default]
  None,
  /// `a?.b`: this node's target is the optional operand.
  Start,
  /// `a?.b.c`: the `.c` continues a chain started further in.
  Continue,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum CallKind {
  #[default]
  Normal,
  DirectEval,
  /// Compiler-generated helper call that defines a public class field. It
  /// never evaluates anything but its arguments.
  InternalPublicFieldCall,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "$t")]
pub enum Expr {
  Array(ArrayExpr),
  Arrow(ArrowExpr),
  BigInt(BigIntExpr),
  Binary(BinaryExpr),
  Boolean(BooleanExpr),
  Call(CallExpr),
  Class(ClassExpr),
  Dot(DotExpr),
  Function(FunctionExpr),
  Identifier(IdentifierExpr),
  If(IfExpr),
  ImportIdentifier(ImportIdentifierExpr),
  ImportMeta,
  Index(IndexExpr),
  InlinedEnum(InlinedEnumExpr),
  Missing,
  New(NewExpr),
  Null,
  Number(NumberExpr),
  Object(ObjectExpr),
  RegExp(RegExpExpr),
  Spread(SpreadExpr),
  String(StringExpr),
  Template(TemplateExpr),
  This,
  Unary(UnaryExpr),
  Undefined,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ArrayExpr {
  pub items: Vec<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ArrowExpr {
  pub args: Vec<Arg>,
  pub body: Vec<Node<Stmt>>,
  #[drive(skip)]
  pub is_async: bool,
  /// Print as `() => expr` when the body is a single `return`.
  #[drive(skip)]
  pub prefer_expr: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct BigIntExpr {
  #[drive(skip)]
  pub value: String, // Decimal digits without the trailing `n`.
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct BinaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub left: Node<Expr>,
  pub right: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct BooleanExpr {
  #[drive(skip)]
  pub value: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct CallExpr {
  pub target: Node<Expr>,
  pub args: Vec<Node<Expr>>,
  #[drive(skip)]
  pub optional_chain: OptionalChain,
  /// Annotated pure: the call may be dropped, but its arguments must still be evaluated.
  #[drive(skip)]
  pub can_be_unwrapped_if_unused: bool,
  #[drive(skip)]
  pub kind: CallKind,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ClassExpr {
  pub class: Class,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct DotExpr {
  pub target: Node<Expr>,
  #[drive(skip)]
  pub name: String,
  #[drive(skip)]
  pub optional_chain: OptionalChain,
  #[drive(skip)]
  pub can_be_removed_if_unused: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct FunctionExpr {
  pub func: Func,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct IdentifierExpr {
  #[drive(skip)]
  pub ref_: Ref,
  #[drive(skip)]
  pub can_be_removed_if_unused: bool,
  /// The reference sits inside a `with` body and may resolve to a property of the scope object.
  #[drive(skip)]
  pub must_keep_due_to_with_stmt: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct IfExpr {
  pub test: Node<Expr>,
  pub yes: Node<Expr>,
  pub no: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ImportIdentifierExpr {
  #[drive(skip)]
  pub ref_: Ref,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct IndexExpr {
  pub target: Node<Expr>,
  pub index: Node<Expr>,
  #[drive(skip)]
  pub optional_chain: OptionalChain,
  #[drive(skip)]
  pub can_be_removed_if_unused: bool,
}

/// A constant substituted for an enum member reference. The comment records
/// what was inlined.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct InlinedEnumExpr {
  pub value: Node<Expr>,
  #[drive(skip)]
  pub comment: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct NewExpr {
  pub target: Node<Expr>,
  pub args: Vec<Node<Expr>>,
  #[drive(skip)]
  pub can_be_unwrapped_if_unused: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct NumberExpr {
  #[drive(skip)]
  pub value: JsNumber,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ObjectExpr {
  pub properties: Vec<Property>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct RegExpExpr {
  #[drive(skip)]
  pub value: String, // Including delimiter slashes and any flags.
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct SpreadExpr {
  pub value: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct StringExpr {
  #[drive(skip)]
  pub value: Vec<u16>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct TemplateExpr {
  pub tag: Option<Node<Expr>>,
  #[drive(skip)]
  pub head: Vec<u16>,
  pub parts: Vec<TemplatePart>,
}

/// A substitution followed by the literal text up to the next substitution.
#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct TemplatePart {
  pub value: Node<Expr>,
  #[drive(skip)]
  pub tail: Vec<u16>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct UnaryExpr {
  #[drive(skip)]
  pub operator: OperatorName,
  pub value: Node<Expr>,
  /// Set for `typeof x` where `x` was written as a bare identifier, which can't throw even if unbound.
  #[drive(skip)]
  pub value_was_originally_identifier: bool,
}

impl Expr {
  pub fn is_primitive_literal_kind(&self) -> bool {
    matches!(
      self,
      Expr::Null
        | Expr::Undefined
        | Expr::Boolean(_)
        | Expr::Number(_)
        | Expr::BigInt(_)
        | Expr::String(_)
    )
  }

  pub fn as_identifier(&self) -> Option<&IdentifierExpr> {
    match self {
      Expr::Identifier(id) => Some(id),
      _ => None,
    }
  }

  pub fn as_string(&self) -> Option<&[u16]> {
    match self {
      Expr::String(s) => Some(&s.value),
      _ => None,
    }
  }
}
