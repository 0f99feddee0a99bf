use ast_js::ast::binding::Binding;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::*;
use ast_js::ast::expr::Expr;
use ast_js::text::utf16_to_string;

use crate::escape::string_literal_double_quoted;
use crate::expr::is_identifier_name;
use crate::precedence::{expr_stmt_needs_parens, ASSIGNMENT_PRECEDENCE, PRIMARY_PRECEDENCE};
use crate::{EmitResult, Printer};

impl<'a> Printer<'a> {
  pub(crate) fn emit_block(&mut self, body: &[Node<Stmt>]) -> EmitResult {
    self.out.write_punct("{");
    for stmt in body {
      self.emit_stmt(stmt)?;
    }
    self.out.write_punct("}");
    Ok(())
  }

  pub(crate) fn emit_binding(&mut self, binding: &Node<Binding>) -> EmitResult {
    match binding.stx.as_ref() {
      Binding::Missing => {}
      Binding::Identifier(id) => {
        let name = self.name(id.ref_)?;
        self.out.write_identifier(name);
      }
      Binding::Array(array) => {
        self.out.write_punct("[");
        let last = array.items.len().saturating_sub(1);
        for (i, item) in array.items.iter().enumerate() {
          if i > 0 {
            self.out.write_punct(",");
          };
          if array.has_spread && i == last {
            self.out.write_punct("...");
          };
          self.emit_binding(&item.binding)?;
          if let Some(default) = &item.default {
            self.out.write_punct("=");
            self.emit_expr_with_min_prec(default, ASSIGNMENT_PRECEDENCE)?;
          };
        }
        if matches!(array.items.last().map(|i| i.binding.stx.as_ref()), Some(Binding::Missing)) {
          self.out.write_punct(",");
        };
        self.out.write_punct("]");
      }
      Binding::Object(object) => {
        self.out.write_punct("{");
        for (i, prop) in object.properties.iter().enumerate() {
          if i > 0 {
            self.out.write_punct(",");
          };
          if prop.is_spread {
            self.out.write_punct("...");
            self.emit_binding(&prop.value)?;
            continue;
          };
          if prop.is_computed {
            self.out.write_punct("[");
            self.emit_expr_with_min_prec(&prop.key, ASSIGNMENT_PRECEDENCE)?;
            self.out.write_punct("]");
          } else if let Expr::String(s) = prop.key.stx.as_ref() {
            let name = utf16_to_string(&s.value);
            if is_identifier_name(&name) {
              self.out.write_identifier(&name);
            } else {
              self.out.write_literal(&string_literal_double_quoted(&s.value));
            };
          } else {
            self.emit_expr_with_min_prec(&prop.key, PRIMARY_PRECEDENCE)?;
          };
          self.out.write_punct(":");
          self.emit_binding(&prop.value)?;
          if let Some(default) = &prop.default {
            self.out.write_punct("=");
            self.emit_expr_with_min_prec(default, ASSIGNMENT_PRECEDENCE)?;
          };
        }
        self.out.write_punct("}");
      }
    };
    Ok(())
  }

  fn emit_clause(&mut self, items: &[ClauseItem]) {
    self.out.write_punct("{");
    for (i, item) in items.iter().enumerate() {
      if i > 0 {
        self.out.write_punct(",");
      };
      self.out.write_identifier(&item.original_name);
      if item.alias != item.original_name {
        self.out.write_keyword("as");
        self.out.write_identifier(&item.alias);
      };
    }
    self.out.write_punct("}");
  }

  fn emit_local(&mut self, local: &LocalStmt) -> EmitResult {
    if local.is_export {
      self.out.write_keyword("export");
    };
    self.out.write_keyword(match local.kind {
      LocalKind::Const => "const",
      LocalKind::Let => "let",
      LocalKind::Var => "var",
    });
    for (i, decl) in local.decls.iter().enumerate() {
      if i > 0 {
        self.out.write_punct(",");
      };
      self.emit_binding(&decl.binding)?;
      if let Some(value) = &decl.value {
        self.out.write_punct("=");
        self.emit_expr_with_min_prec(value, ASSIGNMENT_PRECEDENCE)?;
      };
    }
    self.out.write_punct(";");
    Ok(())
  }

  pub(crate) fn emit_stmt(&mut self, stmt: &Node<Stmt>) -> EmitResult {
    match stmt.stx.as_ref() {
      Stmt::Block(block) => self.emit_block(&block.body)?,
      Stmt::Break(b) => {
        self.out.write_keyword("break");
        if let Some(label) = &b.label {
          self.out.write_identifier(label);
        };
        self.out.write_punct(";");
      }
      Stmt::Class(decl) => {
        if decl.is_export {
          self.out.write_keyword("export");
        };
        self.emit_class(&decl.class)?;
      }
      Stmt::Continue(c) => {
        self.out.write_keyword("continue");
        if let Some(label) = &c.label {
          self.out.write_identifier(label);
        };
        self.out.write_punct(";");
      }
      Stmt::Debugger => {
        self.out.write_keyword("debugger");
        self.out.write_punct(";");
      }
      Stmt::DoWhile(d) => {
        self.out.write_keyword("do");
        self.emit_stmt(&d.body)?;
        self.out.write_keyword("while");
        self.out.write_punct("(");
        self.emit_expr(&d.test)?;
        self.out.write_punct(")");
        self.out.write_punct(";");
      }
      Stmt::Empty => self.out.write_punct(";"),
      Stmt::ExportClause(clause) => {
        self.out.write_keyword("export");
        self.emit_clause(&clause.items);
        self.out.write_punct(";");
      }
      Stmt::ExportDefault(default) => {
        self.out.write_keyword("export");
        self.out.write_keyword("default");
        match &default.value {
          ExportDefaultValue::Expr(expr) => {
            if expr_stmt_needs_parens(expr) {
              self.out.write_punct("(");
              self.emit_expr(expr)?;
              self.out.write_punct(")");
            } else {
              self.emit_expr_with_min_prec(expr, ASSIGNMENT_PRECEDENCE)?;
            };
            self.out.write_punct(";");
          }
          ExportDefaultValue::Function(decl) => self.emit_func(&decl.func)?,
          ExportDefaultValue::Class(decl) => self.emit_class(&decl.class)?,
        };
      }
      Stmt::ExportFrom(from) => {
        self.out.write_keyword("export");
        self.emit_clause(&from.items);
        self.out.write_keyword("from");
        self.out.write_literal(&string_literal_double_quoted(&ast_js::text::utf16(&from.path)));
        self.out.write_punct(";");
      }
      Stmt::Expr(e) => {
        if expr_stmt_needs_parens(&e.expr) {
          self.out.write_punct("(");
          self.emit_expr(&e.expr)?;
          self.out.write_punct(")");
        } else {
          self.emit_expr(&e.expr)?;
        };
        self.out.write_punct(";");
      }
      Stmt::Function(decl) => {
        if decl.is_export {
          self.out.write_keyword("export");
        };
        self.emit_func(&decl.func)?;
      }
      Stmt::If(i) => {
        self.out.write_keyword("if");
        self.out.write_punct("(");
        self.emit_expr(&i.test)?;
        self.out.write_punct(")");
        // An `else` would otherwise bind to a nested `if` without one.
        let dangling = i.no.is_some() && matches!(i.yes.stx.as_ref(), Stmt::If(inner) if inner.no.is_none());
        if dangling {
          self.emit_block(std::slice::from_ref(&i.yes))?;
        } else {
          self.emit_stmt(&i.yes)?;
        };
        if let Some(no) = &i.no {
          self.out.write_keyword("else");
          self.emit_stmt(no)?;
        };
      }
      Stmt::Import(import) => {
        self.out.write_keyword("import");
        let mut any = false;
        if let Some(default) = import.default {
          let name = self.name(default)?;
          self.out.write_identifier(name);
          any = true;
        };
        if let Some(ns) = import.namespace {
          if any {
            self.out.write_punct(",");
          };
          self.out.write_punct("*");
          self.out.write_keyword("as");
          let name = self.name(ns)?;
          self.out.write_identifier(name);
          any = true;
        };
        if !import.items.is_empty() {
          if any {
            self.out.write_punct(",");
          };
          self.out.write_punct("{");
          for (i, item) in import.items.iter().enumerate() {
            if i > 0 {
              self.out.write_punct(",");
            };
            self.out.write_identifier(&item.alias);
            let local = self.name(item.ref_)?;
            if local != item.alias {
              self.out.write_keyword("as");
              self.out.write_identifier(local);
            };
          }
          self.out.write_punct("}");
          any = true;
        };
        if any {
          self.out.write_keyword("from");
        };
        self.out.write_literal(&string_literal_double_quoted(&ast_js::text::utf16(&import.path)));
        self.out.write_punct(";");
      }
      Stmt::Label(label) => {
        self.out.write_identifier(&label.name);
        self.out.write_punct(":");
        self.emit_stmt(&label.stmt)?;
      }
      Stmt::Local(local) => self.emit_local(local)?,
      Stmt::Return(ret) => {
        self.out.write_keyword("return");
        if let Some(value) = &ret.value {
          self.emit_expr(value)?;
        };
        self.out.write_punct(";");
      }
      Stmt::Throw(throw) => {
        self.out.write_keyword("throw");
        self.emit_expr(&throw.value)?;
        self.out.write_punct(";");
      }
      Stmt::Try(t) => {
        self.out.write_keyword("try");
        self.emit_block(&t.block)?;
        if let Some(catch) = &t.catch {
          self.out.write_keyword("catch");
          if let Some(binding) = &catch.binding {
            self.out.write_punct("(");
            self.emit_binding(binding)?;
            self.out.write_punct(")");
          };
          self.emit_block(&catch.body)?;
        };
        if let Some(finally) = &t.finally {
          self.out.write_keyword("finally");
          self.emit_block(finally)?;
        };
      }
      Stmt::While(w) => {
        self.out.write_keyword("while");
        self.out.write_punct("(");
        self.emit_expr(&w.test)?;
        self.out.write_punct(")");
        self.emit_stmt(&w.body)?;
      }
      Stmt::With(w) => {
        self.out.write_keyword("with");
        self.out.write_punct("(");
        self.emit_expr(&w.value)?;
        self.out.write_punct(")");
        self.emit_stmt(&w.body)?;
      }
    };
    Ok(())
  }
}
