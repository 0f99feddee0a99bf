use ast_js::ast::class::{Class, ClassMember, Property, PropertyKind};
use ast_js::ast::expr::*;
use ast_js::ast::func::{Arg, Func};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::Stmt;
use ast_js::num::JsNumber;
use ast_js::operator::OperatorName;
use ast_js::text::utf16_to_string;

use crate::escape::{string_literal_double_quoted, template_segment};
use crate::precedence::*;
use crate::{EmitResult, Printer};

pub(crate) fn is_identifier_name(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
    _ => return false,
  };
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Renders a finite, non-negative number. The sign is emitted separately as
/// a unary minus.
fn render_magnitude(value: f64) -> String {
  if value.is_infinite() {
    return "Infinity".to_string();
  };
  format!("{}", value)
}

impl<'a> Printer<'a> {
  pub(crate) fn emit_expr(&mut self, expr: &Node<Expr>) -> EmitResult {
    self.emit_expr_with_min_prec(expr, Prec::LOWEST)
  }

  pub(crate) fn emit_expr_with_min_prec(&mut self, expr: &Node<Expr>, min_prec: Prec) -> EmitResult {
    if expr_prec(expr) < min_prec {
      self.out.write_punct("(");
      self.emit_expr_no_parens(expr)?;
      self.out.write_punct(")");
    } else {
      self.emit_expr_no_parens(expr)?;
    }
    Ok(())
  }

  fn emit_parenthesized(&mut self, expr: &Node<Expr>) -> EmitResult {
    self.out.write_punct("(");
    self.emit_expr_no_parens(expr)?;
    self.out.write_punct(")");
    Ok(())
  }

  fn emit_expr_no_parens(&mut self, expr: &Node<Expr>) -> EmitResult {
    match expr.stx.as_ref() {
      Expr::Array(array) => {
        self.out.write_punct("[");
        for (i, item) in array.items.iter().enumerate() {
          if i > 0 {
            self.out.write_punct(",");
          };
          self.emit_expr_with_min_prec(item, ASSIGNMENT_PRECEDENCE)?;
        }
        // A trailing hole needs its own comma to be preserved.
        if matches!(array.items.last().map(|i| i.stx.as_ref()), Some(Expr::Missing)) {
          self.out.write_punct(",");
        };
        self.out.write_punct("]");
      }
      Expr::Arrow(arrow) => self.emit_arrow(arrow)?,
      Expr::BigInt(b) => self.out.write_number(&format!("{}n", b.value)),
      Expr::Binary(binary) => self.emit_binary(binary)?,
      Expr::Boolean(b) => self.out.write_keyword(if b.value { "true" } else { "false" }),
      Expr::Call(call) => {
        self.emit_chain_target(&call.target, call.optional_chain)?;
        if call.optional_chain == OptionalChain::Start {
          self.out.write_punct("?.");
        };
        self.emit_args(&call.args)?;
      }
      Expr::Class(c) => self.emit_class(&c.class)?,
      Expr::Dot(dot) => {
        self.emit_chain_target(&dot.target, dot.optional_chain)?;
        self.out.write_punct(if dot.optional_chain == OptionalChain::Start {
          "?."
        } else {
          "."
        });
        self.out.write_identifier(&dot.name);
      }
      Expr::Function(f) => self.emit_func(&f.func)?,
      Expr::Identifier(id) => {
        let name = self.name(id.ref_)?;
        self.out.write_identifier(name);
      }
      Expr::If(cond) => {
        let prec = Prec::of(OperatorName::Conditional);
        self.emit_expr_with_min_prec(&cond.test, prec.tighter())?;
        self.out.write_punct("?");
        self.emit_expr_with_min_prec(&cond.yes, ASSIGNMENT_PRECEDENCE)?;
        self.out.write_punct(":");
        self.emit_expr_with_min_prec(&cond.no, ASSIGNMENT_PRECEDENCE)?;
      }
      Expr::ImportIdentifier(id) => {
        let name = self.name(id.ref_)?;
        self.out.write_identifier(name);
      }
      Expr::ImportMeta => {
        self.out.write_keyword("import");
        self.out.write_punct(".");
        self.out.write_identifier("meta");
      }
      Expr::Index(index) => {
        self.emit_chain_target(&index.target, index.optional_chain)?;
        if index.optional_chain == OptionalChain::Start {
          self.out.write_punct("?.");
        };
        self.out.write_punct("[");
        self.emit_expr(&index.index)?;
        self.out.write_punct("]");
      }
      Expr::InlinedEnum(e) => self.emit_expr_no_parens(&e.value)?,
      Expr::Missing => {}
      Expr::New(new) => {
        self.out.write_keyword("new");
        if new_target_needs_parens(&new.target) {
          self.emit_parenthesized(&new.target)?;
        } else {
          self.emit_expr_with_min_prec(&new.target, CALL_MEMBER_PRECEDENCE)?;
        };
        self.emit_args(&new.args)?;
      }
      Expr::Null => self.out.write_keyword("null"),
      Expr::Number(n) => self.emit_number(n.value),
      Expr::Object(object) => {
        self.out.write_punct("{");
        for (i, prop) in object.properties.iter().enumerate() {
          if i > 0 {
            self.out.write_punct(",");
          };
          self.emit_property(prop)?;
        }
        self.out.write_punct("}");
      }
      Expr::RegExp(r) => self.out.write_literal(&r.value),
      Expr::Spread(s) => {
        self.out.write_punct("...");
        self.emit_expr_with_min_prec(&s.value, ASSIGNMENT_PRECEDENCE)?;
      }
      Expr::String(s) => self.out.write_literal(&string_literal_double_quoted(&s.value)),
      Expr::Template(t) => {
        if let Some(tag) = &t.tag {
          self.emit_expr_with_min_prec(tag, CALL_MEMBER_PRECEDENCE)?;
        };
        let mut raw = String::from("`");
        raw.push_str(&template_segment(&t.head));
        if t.parts.is_empty() {
          raw.push('`');
          self.out.write_literal(&raw);
        } else {
          raw.push_str("${");
          self.out.write_literal(&raw);
          for (i, part) in t.parts.iter().enumerate() {
            self.emit_expr(&part.value)?;
            let mut raw = String::from("}");
            raw.push_str(&template_segment(&part.tail));
            raw.push_str(if i + 1 == t.parts.len() { "`" } else { "${" });
            self.out.write_literal(&raw);
          }
        };
      }
      Expr::This => self.out.write_keyword("this"),
      Expr::Unary(unary) => self.emit_unary(unary)?,
      Expr::Undefined => {
        self.out.write_keyword("void");
        self.out.write_number("0");
      }
    };
    Ok(())
  }

  fn emit_number(&mut self, value: JsNumber) {
    let v = value.0;
    if v.is_nan() {
      self.out.write_identifier("NaN");
      return;
    };
    if v < 0.0 || value.is_negative_zero() {
      self.out.write_punct("-");
    };
    let magnitude = v.abs();
    if magnitude.is_infinite() {
      self.out.write_identifier("Infinity");
    } else {
      self.out.write_number(&render_magnitude(magnitude));
    };
  }

  /// Targets of member accesses and calls. A target that is itself part of
  /// an optional chain must be parenthesized when this link does not
  /// continue the chain, otherwise the short circuit would extend over it.
  fn emit_chain_target(&mut self, target: &Node<Expr>, chain: OptionalChain) -> EmitResult {
    if chain == OptionalChain::None && is_in_optional_chain(target) {
      return self.emit_parenthesized(target);
    };
    self.emit_expr_with_min_prec(target, CALL_MEMBER_PRECEDENCE)
  }

  fn emit_args(&mut self, args: &[Node<Expr>]) -> EmitResult {
    self.out.write_punct("(");
    for (i, arg) in args.iter().enumerate() {
      if i > 0 {
        self.out.write_punct(",");
      };
      self.emit_expr_with_min_prec(arg, ASSIGNMENT_PRECEDENCE)?;
    }
    self.out.write_punct(")");
    Ok(())
  }

  fn emit_binary(&mut self, binary: &BinaryExpr) -> EmitResult {
    let op = binary.operator;
    let left_needs_parens = is_nullish_mix(op, &binary.left)
      || (op == OperatorName::Exponentiation && is_unary_like(&binary.left));
    if left_needs_parens {
      self.emit_parenthesized(&binary.left)?;
    } else {
      self.emit_expr_with_min_prec(&binary.left, child_min_prec_for_binary(op, Side::Left))?;
    };
    if op.is_keyword() {
      self.out.write_keyword(op.text());
    } else {
      self.out.write_punct(op.text());
    };
    if is_nullish_mix(op, &binary.right) {
      self.emit_parenthesized(&binary.right)
    } else {
      self.emit_expr_with_min_prec(&binary.right, child_min_prec_for_binary(op, Side::Right))
    }
  }

  fn emit_unary(&mut self, unary: &UnaryExpr) -> EmitResult {
    let op = unary.operator;
    let prec = Prec::of(op);
    if op.is_prefix() {
      if op.is_keyword() {
        self.out.write_keyword(op.text());
      } else {
        self.out.write_punct(op.text());
      };
      self.emit_expr_with_min_prec(&unary.value, prec)
    } else {
      self.emit_expr_with_min_prec(&unary.value, prec)?;
      self.out.write_punct(op.text());
      Ok(())
    }
  }

  pub(crate) fn emit_arg_list(&mut self, args: &[Arg]) -> EmitResult {
    self.out.write_punct("(");
    for (i, arg) in args.iter().enumerate() {
      if i > 0 {
        self.out.write_punct(",");
      };
      self.emit_binding(&arg.binding)?;
      if let Some(default) = &arg.default {
        self.out.write_punct("=");
        self.emit_expr_with_min_prec(default, ASSIGNMENT_PRECEDENCE)?;
      };
    }
    self.out.write_punct(")");
    Ok(())
  }

  fn emit_arrow(&mut self, arrow: &ArrowExpr) -> EmitResult {
    if arrow.is_async {
      self.out.write_keyword("async");
    };
    self.emit_arg_list(&arrow.args)?;
    self.out.write_punct("=>");
    if let Some(value) = concise_body(arrow) {
      if arrow_body_needs_parens(value) {
        return self.emit_parenthesized(value);
      };
      return self.emit_expr_with_min_prec(value, ASSIGNMENT_PRECEDENCE);
    };
    self.emit_block(&arrow.body)
  }

  pub(crate) fn emit_func(&mut self, func: &Func) -> EmitResult {
    if func.is_async {
      self.out.write_keyword("async");
    };
    self.out.write_keyword("function");
    if func.is_generator {
      self.out.write_punct("*");
    };
    if let Some(name) = func.name {
      let name = self.name(name)?;
      self.out.write_identifier(name);
    };
    self.emit_func_rest(func)
  }

  /// Everything after the name: the parameter list and body.
  fn emit_func_rest(&mut self, func: &Func) -> EmitResult {
    self.emit_arg_list(&func.args)?;
    self.emit_block(&func.body)
  }

  fn emit_property_key(&mut self, prop: &Property) -> EmitResult {
    if prop.is_computed {
      self.out.write_punct("[");
      self.emit_expr_with_min_prec(&prop.key, ASSIGNMENT_PRECEDENCE)?;
      self.out.write_punct("]");
      return Ok(());
    };
    match prop.key.stx.as_ref() {
      Expr::String(s) => {
        let name = utf16_to_string(&s.value);
        if is_identifier_name(&name) {
          self.out.write_identifier(&name);
        } else {
          self.out.write_literal(&string_literal_double_quoted(&s.value));
        };
        Ok(())
      }
      _ => self.emit_expr_with_min_prec(&prop.key, PRIMARY_PRECEDENCE),
    }
  }

  /// Shared by object literals and class bodies. Methods and accessors carry
  /// a function expression as their value.
  fn emit_property(&mut self, prop: &Property) -> EmitResult {
    if prop.kind == PropertyKind::Spread {
      self.out.write_punct("...");
      if let Some(value) = &prop.value {
        self.emit_expr_with_min_prec(value, ASSIGNMENT_PRECEDENCE)?;
      };
      return Ok(());
    };
    if prop.is_static {
      self.out.write_keyword("static");
    };
    let method = prop.value.as_ref().and_then(|v| match v.stx.as_ref() {
      Expr::Function(f) => Some(&f.func),
      _ => None,
    });
    match (prop.kind, method) {
      (PropertyKind::Get | PropertyKind::Set | PropertyKind::Method, Some(func)) => {
        match prop.kind {
          PropertyKind::Get => self.out.write_keyword("get"),
          PropertyKind::Set => self.out.write_keyword("set"),
          _ => {
            if func.is_async {
              self.out.write_keyword("async");
            };
            if func.is_generator {
              self.out.write_punct("*");
            };
          }
        };
        self.emit_property_key(prop)?;
        self.emit_func_rest(func)
      }
      _ => {
        self.emit_property_key(prop)?;
        if let Some(value) = &prop.value {
          self.out.write_punct(":");
          self.emit_expr_with_min_prec(value, ASSIGNMENT_PRECEDENCE)?;
        };
        if let Some(init) = &prop.initializer {
          self.out.write_punct("=");
          self.emit_expr_with_min_prec(init, ASSIGNMENT_PRECEDENCE)?;
        };
        Ok(())
      }
    }
  }

  pub(crate) fn emit_class(&mut self, class: &Class) -> EmitResult {
    self.out.write_keyword("class");
    if let Some(name) = class.name {
      let name = self.name(name)?;
      self.out.write_identifier(name);
    };
    if let Some(extends) = &class.extends {
      self.out.write_keyword("extends");
      self.emit_expr_with_min_prec(extends, CALL_MEMBER_PRECEDENCE)?;
    };
    self.out.write_punct("{");
    for member in class.members.iter() {
      match member {
        ClassMember::Property(prop) => {
          self.emit_property(prop)?;
          if prop.kind == PropertyKind::Normal {
            self.out.write_punct(";");
          };
        }
        ClassMember::StaticBlock(block) => {
          self.out.write_keyword("static");
          self.emit_block(&block.body)?;
        }
      };
    }
    self.out.write_punct("}");
    Ok(())
  }
}

/// `() => value` for arrows that prefer the expression form and whose body is
/// a lone `return value`.
fn concise_body(arrow: &ArrowExpr) -> Option<&Node<Expr>> {
  if !arrow.prefer_expr {
    return None;
  };
  match arrow.body.as_slice() {
    [stmt] => match stmt.stx.as_ref() {
      Stmt::Return(ret) => ret.value.as_ref(),
      _ => None,
    },
    _ => None,
  }
}

/// `new f()()` differs from `new (f())()`: a call anywhere in the target's
/// member chain must be parenthesized.
fn new_target_needs_parens(target: &Node<Expr>) -> bool {
  match target.stx.as_ref() {
    Expr::Call(_) => true,
    Expr::Dot(d) => d.optional_chain != OptionalChain::None || new_target_needs_parens(&d.target),
    Expr::Index(i) => i.optional_chain != OptionalChain::None || new_target_needs_parens(&i.target),
    Expr::Template(t) => t.tag.as_ref().is_some_and(new_target_needs_parens),
    _ => false,
  }
}

/// The base of `**` cannot be a unary expression.
fn is_unary_like(expr: &Node<Expr>) -> bool {
  match expr.stx.as_ref() {
    Expr::Unary(u) => u.operator.is_prefix(),
    Expr::Undefined => true,
    Expr::Number(n) => n.value.0 < 0.0 || n.value.is_negative_zero(),
    _ => false,
  }
}
