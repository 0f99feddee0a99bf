mod emitter;
mod escape;
mod expr;
mod precedence;
mod stmt;

use ast_js::ast::expr::Expr;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use ast_js::Ref;
use symbol_js::SymbolTable;

pub use emitter::Emitter;
pub use escape::string_literal_double_quoted;
pub use precedence::expr_stmt_needs_parens;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmitError {
  #[error("no symbol for ref {0:?}")]
  UnknownSymbol(Ref),
  #[error("{0} cannot be printed in this position")]
  Unsupported(&'static str),
}

pub type EmitResult = Result<(), EmitError>;

pub(crate) struct Printer<'a> {
  pub(crate) out: &'a mut Emitter,
  pub(crate) symbols: &'a SymbolTable,
}

impl<'a> Printer<'a> {
  pub(crate) fn name(&self, r: Ref) -> Result<&'a str, EmitError> {
    self.symbols.name(r).ok_or(EmitError::UnknownSymbol(r))
  }
}

/// Prints a single expression in minified form.
pub fn emit_expr(expr: &Node<Expr>, symbols: &SymbolTable) -> Result<String, EmitError> {
  let mut out = Emitter::new();
  Printer {
    out: &mut out,
    symbols,
  }
  .emit_expr(expr)?;
  Ok(out.into_string())
}

/// Prints a statement list in minified form, one statement after another.
pub fn emit_stmts(stmts: &[Node<Stmt>], symbols: &SymbolTable) -> Result<String, EmitError> {
  let mut out = Emitter::new();
  let mut printer = Printer {
    out: &mut out,
    symbols,
  };
  for stmt in stmts {
    printer.emit_stmt(stmt)?;
  }
  Ok(out.into_string())
}
