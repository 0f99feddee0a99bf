use derive_visitor::{Drive, DriveMut};
use serde::Serialize;

use super::binding::Binding;
use super::class::Class;
use super::expr::Expr;
use super::func::Func;
use super::node::Node;
use super::symbol::Ref;

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
#[serde(tag = "$t")]
pub enum Stmt {
  Block(BlockStmt),
  Break(BreakStmt),
  Class(ClassDecl),
  Continue(ContinueStmt),
  Debugger,
  DoWhile(DoWhileStmt),
  Empty,
  ExportClause(ExportClauseStmt),
  ExportDefault(ExportDefaultStmt),
  ExportFrom(ExportFromStmt),
  Expr(ExprStmt),
  Function(FuncDecl),
  If(IfStmt),
  Import(ImportStmt),
  Label(LabelStmt),
  Local(LocalStmt),
  Return(ReturnStmt),
  Throw(ThrowStmt),
  Try(TryStmt),
  While(WhileStmt),
  With(WithStmt),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct BlockStmt {
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct BreakStmt {
  #[drive(skip)]
  pub label: Option<String>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ClassDecl {
  pub class: Class,
  #[drive(skip)]
  pub is_export: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ContinueStmt {
  #[drive(skip)]
  pub label: Option<String>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct DoWhileStmt {
  pub body: Node<Stmt>,
  pub test: Node<Expr>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClauseItem {
  pub alias: String,
  pub original_name: String,
  pub ref_: Ref,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ExportClauseStmt {
  #[drive(skip)]
  pub items: Vec<ClauseItem>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub enum ExportDefaultValue {
  Class(ClassDecl),
  Expr(Node<Expr>),
  Function(FuncDecl),
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ExportDefaultStmt {
  #[drive(skip)]
  pub default_ref: Ref,
  pub value: ExportDefaultValue,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ExportFromStmt {
  #[drive(skip)]
  pub items: Vec<ClauseItem>,
  #[drive(skip)]
  pub path: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ExprStmt {
  pub expr: Node<Expr>,
  /// Compiler-generated glue that tree shaking must not treat as a use.
  #[drive(skip)]
  pub does_not_affect_tree_shaking: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct FuncDecl {
  pub func: Func,
  #[drive(skip)]
  pub is_export: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct IfStmt {
  pub test: Node<Expr>,
  pub yes: Node<Stmt>,
  pub no: Option<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ImportStmt {
  #[drive(skip)]
  pub default: Option<Ref>,
  #[drive(skip)]
  pub items: Vec<ClauseItem>,
  #[drive(skip)]
  pub namespace: Option<Ref>,
  #[drive(skip)]
  pub path: String,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct LabelStmt {
  #[drive(skip)]
  pub name: String,
  pub stmt: Node<Stmt>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum LocalKind {
  Const,
  Let,
  Var,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Decl {
  pub binding: Node<Binding>,
  pub value: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct LocalStmt {
  #[drive(skip)]
  pub kind: LocalKind,
  pub decls: Vec<Decl>,
  #[drive(skip)]
  pub is_export: bool,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ReturnStmt {
  pub value: Option<Node<Expr>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct ThrowStmt {
  pub value: Node<Expr>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct Catch {
  pub binding: Option<Node<Binding>>,
  pub body: Vec<Node<Stmt>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct TryStmt {
  pub block: Vec<Node<Stmt>>,
  pub catch: Option<Catch>,
  pub finally: Option<Vec<Node<Stmt>>>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct WhileStmt {
  pub test: Node<Expr>,
  pub body: Node<Stmt>,
}

#[derive(Clone, Debug, Drive, DriveMut, PartialEq, Serialize)]
pub struct WithStmt {
  pub value: Node<Expr>,
  pub body: Node<Stmt>,
}
