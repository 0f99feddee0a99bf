use ast_js::ast::class::PropertyKind;
use ast_js::ast::expr::*;
use ast_js::ast::node::Node;
use ast_js::ast::stmt::{ReturnStmt, Stmt};
use ast_js::loc::Loc;
use ast_js::num::JsNumber;
use ast_js::operator::OperatorName;

use crate::boolean::simplify_boolean_expr;
use crate::join::join_all_with_comma;
use crate::optional_chain::try_to_insert_optional_chain;
use crate::primitive::can_change_strict_to_loose;
use crate::primitive::is_primitive_with_side_effects;
use crate::primitive::known_primitive_type;
use crate::primitive::PrimitiveType;
use crate::side_effects::class_can_be_removed_if_unused;
use crate::side_effects::expr_can_be_removed_if_unused;
use crate::side_effects::is_side_effect_free_unbound_identifier_ref;
use crate::SimplifyCx;

fn comma(a: Option<Node<Expr>>, b: Option<Node<Expr>>) -> Option<Node<Expr>> {
  join_all_with_comma([a, b])
}

fn empty_string(loc: Loc) -> Node<Expr> {
  Node::new(loc, Expr::String(StringExpr { value: Vec::new() }))
}

/// Reduces an expression whose value is discarded to just the parts that
/// must still run. `None` means nothing needs to run at all.
pub fn simplify_unused_expr(expr: Node<Expr>, cx: &SimplifyCx) -> Option<Node<Expr>> {
  use OperatorName::*;
  let loc = expr.loc;
  match *expr.stx {
    Expr::InlinedEnum(e) => simplify_unused_expr(e.value, cx),

    Expr::Null
    | Expr::Undefined
    | Expr::Missing
    | Expr::Boolean(_)
    | Expr::Number(_)
    | Expr::BigInt(_)
    | Expr::String(_)
    | Expr::This
    | Expr::RegExp(_)
    | Expr::Function(_)
    | Expr::Arrow(_)
    | Expr::ImportMeta
    | Expr::ImportIdentifier(_) => None,

    Expr::Dot(e) if e.can_be_removed_if_unused => None,
    Expr::Index(e) if e.can_be_removed_if_unused && expr_can_be_removed_if_unused(&e.index, cx.is_unbound) => {
      None
    }

    Expr::Identifier(e) => {
      if !e.must_keep_due_to_with_stmt && (e.can_be_removed_if_unused || !(cx.is_unbound)(e.ref_)) {
        None
      } else {
        Some(Node::new(loc, Expr::Identifier(e)))
      }
    }

    Expr::Class(e) if class_can_be_removed_if_unused(&e.class, cx.is_unbound) => None,

    Expr::Template(e) if e.tag.is_none() => simplify_unused_template(e.parts, cx),

    Expr::Array(e) => {
      // Spreading runs the iterator protocol, so the literal has to stay.
      if e.items.iter().any(|i| matches!(i.stx.as_ref(), Expr::Spread(_))) {
        let items = e
          .items
          .into_iter()
          .filter_map(|item| simplify_unused_expr(item, cx))
          .collect();
        return Some(Node::new(loc, Expr::Array(ArrayExpr { items })));
      };
      join_all_with_comma(e.items.into_iter().map(|item| simplify_unused_expr(item, cx)))
    }

    Expr::Object(e) => simplify_unused_object(loc, e, cx),

    Expr::If(e) => {
      // Only the truthiness of the test matters.
      let test = simplify_boolean_expr(e.test);
      let yes = simplify_unused_branch(e.yes, &test, true, cx);
      let no = simplify_unused_branch(e.no, &test, false, cx);
      match (yes, no) {
        // `a() ? 1 : 2` => `a()`
        (None, None) => simplify_unused_expr(test, cx),
        // `a() ? 1 : b()` => `a() || b()`
        (None, Some(no)) => Some(simplify_unused_logical(loc, LogicalOr, test, no, cx)),
        // `a() ? b() : 2` => `a() && b()`
        (Some(yes), None) => Some(simplify_unused_logical(loc, LogicalAnd, test, yes, cx)),
        (Some(yes), Some(no)) => Some(Node::new(loc, Expr::If(IfExpr { test, yes, no }))),
      }
    }

    Expr::Unary(e) => match e.operator {
      // None of these convert their operand.
      Void | LogicalNot => simplify_unused_expr(e.value, cx),
      // `typeof x` can't throw but `x` can, so drop it entirely rather than unwrapping.
      Typeof
        if e.value_was_originally_identifier && matches!(e.value.stx.as_ref(), Expr::Identifier(_)) =>
      {
        None
      }
      Typeof => simplify_unused_expr(e.value, cx),
      _ => Some(Node::new(loc, Expr::Unary(e))),
    },

    Expr::Binary(e) => simplify_unused_binary(loc, e, cx),

    Expr::Call(e) => simplify_unused_call(loc, e, cx),

    Expr::New(e) if e.can_be_unwrapped_if_unused => simplify_unused_args(e.args, cx),

    stx => Some(Node::new(loc, stx)),
  }
}

// Like `simplify_unused_expr`, but also drops an unbound read that `test`
// already proved exists, as in `typeof x !== "undefined" ? x : 0`.
fn simplify_unused_branch(
  value: Node<Expr>,
  test: &Node<Expr>,
  is_yes_branch: bool,
  cx: &SimplifyCx,
) -> Option<Node<Expr>> {
  if is_side_effect_free_unbound_identifier_ref(&value, test, is_yes_branch, cx.is_unbound) {
    return None;
  };
  simplify_unused_expr(value, cx)
}

fn simplify_unused_template(parts: Vec<TemplatePart>, cx: &SimplifyCx) -> Option<Node<Expr>> {
  let mut result = None;
  // Parts whose `ToString` may run user code. They're kept in a template
  // rather than a string addition, which would call `valueOf` instead.
  let mut residual: Option<(Loc, Vec<TemplatePart>)> = None;
  for part in parts {
    if known_primitive_type(&part.value) != PrimitiveType::Unknown {
      if let Some((loc, parts)) = residual.take() {
        result = comma(result, Some(residual_template(loc, parts)));
      };
      result = comma(result, simplify_unused_expr(part.value, cx));
      continue;
    };
    let part_loc = part.value.loc;
    residual
      .get_or_insert_with(|| (part_loc, Vec::new()))
      .1
      .push(TemplatePart {
        value: part.value,
        tail: Vec::new(),
      });
  }
  if let Some((loc, parts)) = residual {
    result = comma(result, Some(residual_template(loc, parts)));
  };
  result
}

fn residual_template(loc: Loc, parts: Vec<TemplatePart>) -> Node<Expr> {
  Node::new(loc, Expr::Template(TemplateExpr {
    tag: None,
    head: Vec::new(),
    parts,
  }))
}

fn simplify_unused_object(loc: Loc, e: ObjectExpr, cx: &SimplifyCx) -> Option<Node<Expr>> {
  // Spreading runs getters, so the literal has to stay. Trim everything else.
  if e.properties.iter().any(|p| p.kind == PropertyKind::Spread) {
    let mut properties = Vec::with_capacity(e.properties.len());
    for mut property in e.properties {
      if property.kind != PropertyKind::Spread {
        match property.value.take().and_then(|v| simplify_unused_expr(v, cx)) {
          Some(value) => property.value = Some(value),
          None if !property.is_computed => continue,
          // The key still has to be computed; `0` is the shortest value.
          None => {
            property.value = Some(Node::new(property.key.loc, Expr::Number(NumberExpr {
              value: JsNumber(0.0),
            })))
          }
        };
      };
      properties.push(property);
    }
    return Some(Node::new(loc, Expr::Object(ObjectExpr { properties })));
  };

  let mut result = None;
  for property in e.properties {
    if property.is_computed {
      let key = if known_primitive_type(&property.key) != PrimitiveType::Unknown {
        simplify_unused_expr(property.key, cx)
      } else {
        // Keep the `ToString` on the key.
        let key_loc = property.key.loc;
        Some(Node::new(key_loc, Expr::Binary(BinaryExpr {
          operator: OperatorName::Addition,
          left: property.key,
          right: empty_string(key_loc),
        })))
      };
      result = comma(result, key);
    };
    result = comma(result, property.value.and_then(|v| simplify_unused_expr(v, cx)));
  }
  result
}

// The guard of `a != null && a.b` or `a == null || a.b`, if it's one we can
// turn into `a?.b`. An unbound `a` may be a getter on the global object, which
// the guarded form reads twice and `a?.b` would read only once.
fn optional_chain_guard<'e>(op: OperatorName, left: &'e Node<Expr>, cx: &SimplifyCx) -> Option<&'e Node<Expr>> {
  let Expr::Binary(test) = left.stx.as_ref() else {
    return None;
  };
  let shape_matches = (test.operator == OperatorName::Inequality && op == OperatorName::LogicalAnd)
    || (test.operator == OperatorName::Equality && op == OperatorName::LogicalOr);
  if !shape_matches {
    return None;
  };
  let guard = if matches!(test.right.stx.as_ref(), Expr::Null) {
    &test.left
  } else if matches!(test.left.stx.as_ref(), Expr::Null) {
    &test.right
  } else {
    return None;
  };
  match guard.stx.as_ref() {
    Expr::Identifier(id) if !id.must_keep_due_to_with_stmt && !(cx.is_unbound)(id.ref_) => Some(guard),
    _ => None,
  }
}

// `left op right` where `right` has already been reduced and must still run,
// and `left` has been simplified as far as `op` allows.
fn simplify_unused_logical(
  loc: Loc,
  operator: OperatorName,
  left: Node<Expr>,
  mut right: Node<Expr>,
  cx: &SimplifyCx,
) -> Node<Expr> {
  if cx.optional_chain_supported {
    if let Some(guard) = optional_chain_guard(operator, &left, cx) {
      if try_to_insert_optional_chain(guard, &mut right) {
        tracing::trace!(target: "simplify_js::unused", "inserted optional chain");
        return right;
      };
    };
  };
  Node::new(loc, Expr::Binary(BinaryExpr {
    operator,
    left,
    right,
  }))
}

fn simplify_unused_binary(loc: Loc, e: BinaryExpr, cx: &SimplifyCx) -> Option<Node<Expr>> {
  use OperatorName::*;
  match e.operator {
    // No conversions, and these never throw.
    StrictEquality | StrictInequality | Comma => comma(
      simplify_unused_expr(e.left, cx),
      simplify_unused_expr(e.right, cx),
    ),

    // Loose equality between primitives can't call `valueOf` or `toString`.
    Equality | Inequality
      if (is_primitive_with_side_effects(&e.left) && is_primitive_with_side_effects(&e.right))
        || can_change_strict_to_loose(&e.left, &e.right) =>
    {
      comma(
        simplify_unused_expr(e.left, cx),
        simplify_unused_expr(e.right, cx),
      )
    }

    // The left side is only unused if the right side vanishes entirely;
    // otherwise it still decides whether the right side runs.
    LogicalAnd | LogicalOr | NullishCoalescing => {
      let (left, right) = if e.operator == NullishCoalescing {
        (e.left, simplify_unused_expr(e.right, cx))
      } else {
        // Only the truthiness of the left side matters for `&&` and `||`.
        let left = simplify_boolean_expr(e.left);
        let right = simplify_unused_branch(e.right, &left, e.operator == LogicalAnd, cx);
        (left, right)
      };
      match right {
        Some(right) => Some(simplify_unused_logical(loc, e.operator, left, right, cx)),
        None => simplify_unused_expr(left, cx),
      }
    }

    Addition => {
      let (result, is_string_addition) =
        simplify_unused_string_addition_chain(Node::new(loc, Expr::Binary(e)));
      if is_string_addition && matches!(result.stx.as_ref(), Expr::String(_)) {
        None
      } else {
        Some(result)
      }
    }

    _ => Some(Node::new(loc, Expr::Binary(e))),
  }
}

/// Blanks the string literals in an unused `+` chain that's known to be a
/// string concatenation. The bool is whether `expr` is one.
fn simplify_unused_string_addition_chain(expr: Node<Expr>) -> (Node<Expr>, bool) {
  let loc = expr.loc;
  match *expr.stx {
    // `"x" + y` => `"" + y`
    Expr::String(_) => (empty_string(loc), true),
    Expr::Binary(mut e) if e.operator == OperatorName::Addition => {
      let (left, left_is_string_addition) = simplify_unused_string_addition_chain(e.left);
      if matches!(e.right.stx.as_ref(), Expr::String(_)) {
        // `("" + x) + "y"` => `"" + x`
        if left_is_string_addition {
          return (left, true);
        };
        // `x + "y"` => `x + ""`, which is a string concatenation either way.
        let right_loc = e.right.loc;
        return (
          Node::new(loc, Expr::Binary(BinaryExpr {
            operator: OperatorName::Addition,
            left,
            right: empty_string(right_loc),
          })),
          true,
        );
      };
      e.left = left;
      (Node::new(loc, Expr::Binary(e)), left_is_string_addition)
    }
    stx => (Node::new(loc, stx), false),
  }
}

fn simplify_unused_args(args: Vec<Node<Expr>>, cx: &SimplifyCx) -> Option<Node<Expr>> {
  join_all_with_comma(args.into_iter().map(|arg| {
    // `f(...x)` still iterates `x`; `[...x]` is the shortest way to keep that.
    let arg = if matches!(arg.stx.as_ref(), Expr::Spread(_)) {
      let arg_loc = arg.loc;
      Node::new(arg_loc, Expr::Array(ArrayExpr { items: vec![arg] }))
    } else {
      arg
    };
    simplify_unused_expr(arg, cx)
  }))
}

fn simplify_unused_call(loc: Loc, mut e: CallExpr, cx: &SimplifyCx) -> Option<Node<Expr>> {
  // The annotation lets us ignore the target. Public field helper calls only
  // count as removable for class tree shaking; once kept, they define a field.
  if e.can_be_unwrapped_if_unused {
    return simplify_unused_args(e.args, cx);
  };

  if e.args.is_empty() {
    match e.target.stx.as_mut() {
      // `(function() {})()`
      Expr::Function(f) if f.func.args.is_empty() && f.func.body.is_empty() => return None,
      Expr::Arrow(arrow) if arrow.args.is_empty() => {
        // `(() => {})()`
        if arrow.body.is_empty() {
          return None;
        };
        let is_async = arrow.is_async;
        if let [stmt] = arrow.body.as_mut_slice() {
          let stmt_loc = stmt.loc;
          match stmt.stx.as_mut() {
            // `(() => { a() })()` => `a()`
            Stmt::Expr(s) if !is_async => {
              let value = std::mem::replace(&mut s.expr, Node::new(stmt_loc, Expr::Missing));
              return simplify_unused_expr(value, cx);
            }
            // `(async () => { a() })()` => `(async () => a())()`
            Stmt::Expr(s) => {
              let value = std::mem::replace(&mut s.expr, Node::new(stmt_loc, Expr::Missing));
              *stmt = Node::new(stmt_loc, Stmt::Return(ReturnStmt { value: Some(value) }));
              arrow.prefer_expr = true;
            }
            // `(() => a())()` => `a()`
            Stmt::Return(r) if !is_async => {
              return r.value.take().and_then(|v| simplify_unused_expr(v, cx));
            }
            _ => {}
          };
        };
      }
      _ => {}
    };
  };

  Some(Node::new(loc, Expr::Call(e)))
}
