use ast_js::ast::class::{Class, ClassMember, PropertyKind};
use ast_js::ast::expr::{CallKind, Expr};
use ast_js::ast::node::Node;
use ast_js::ast::stmt::{ExportDefaultValue, Stmt};
use ast_js::ast::binding::Binding;
use ast_js::operator::OperatorName;
use ast_js::text::utf16_equals_str;
use ast_js::Ref;

use crate::primitive::can_change_strict_to_loose;
use crate::primitive::is_primitive_literal;
use crate::primitive::known_primitive_type;
use crate::primitive::PrimitiveType;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StmtRemovalFlags {
  /// `export { a, b }` counts as a use of its bindings and must stay.
  pub keep_export_clauses: bool,
}

/// Whether evaluating `expr` and discarding the result is unobservable.
pub fn expr_can_be_removed_if_unused(expr: &Node<Expr>, is_unbound: &dyn Fn(Ref) -> bool) -> bool {
  use OperatorName::*;
  let removable = |e: &Node<Expr>| expr_can_be_removed_if_unused(e, is_unbound);
  match expr.stx.as_ref() {
    Expr::InlinedEnum(e) => removable(&e.value),

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
    | Expr::ImportMeta => true,

    // Import items are bound by the linker; reading one never throws.
    Expr::ImportIdentifier(_) => true,

    Expr::Class(e) => class_can_be_removed_if_unused(&e.class, is_unbound),

    Expr::Dot(e) => e.can_be_removed_if_unused,
    Expr::Index(e) => e.can_be_removed_if_unused && removable(&e.index),

    Expr::Identifier(e) => {
      if e.must_keep_due_to_with_stmt {
        return false;
      };
      e.can_be_removed_if_unused || !is_unbound(e.ref_)
    }

    Expr::If(e) => {
      removable(&e.test)
        && (removable(&e.yes)
          || is_side_effect_free_unbound_identifier_ref(&e.yes, &e.test, true, is_unbound))
        && (removable(&e.no)
          || is_side_effect_free_unbound_identifier_ref(&e.no, &e.test, false, is_unbound))
    }

    Expr::Array(e) => e.items.iter().all(removable),

    Expr::Object(e) => e.properties.iter().all(|p| {
      // Spreading runs getters.
      if p.kind == PropertyKind::Spread {
        return false;
      };
      // Computed keys run `toString` on anything that isn't already a primitive.
      if p.is_computed && !is_primitive_literal(&p.key) {
        return false;
      };
      p.value.as_ref().map_or(true, removable)
    }),

    // The target of a pure call is never evaluated, only the arguments.
    Expr::Call(e) => {
      (e.can_be_unwrapped_if_unused || e.kind == CallKind::InternalPublicFieldCall)
        && e.args.iter().all(removable)
    }
    Expr::New(e) => e.can_be_unwrapped_if_unused && e.args.iter().all(removable),

    Expr::Template(e) => {
      e.tag.is_none()
        && e
          .parts
          .iter()
          .all(|p| removable(&p.value) && known_primitive_type(&p.value) != PrimitiveType::Unknown)
    }

    Expr::Unary(e) => match e.operator {
      // `typeof x` is special-cased to never throw even if `x` doesn't exist.
      Typeof if e.value_was_originally_identifier && matches!(e.value.stx.as_ref(), Expr::Identifier(_)) => {
        true
      }
      // None of these can run `toString` or `valueOf`, or throw.
      Typeof | Void | LogicalNot => removable(&e.value),
      _ => false,
    },

    Expr::Binary(e) => match e.operator {
      StrictEquality | StrictInequality | Comma | NullishCoalescing => {
        removable(&e.left) && removable(&e.right)
      }
      LogicalOr | LogicalAnd => {
        removable(&e.left)
          && (removable(&e.right)
            || is_side_effect_free_unbound_identifier_ref(
              &e.right,
              &e.left,
              e.operator == LogicalAnd,
              is_unbound,
            ))
      }
      // Loose equality only avoids `valueOf`/`toString` when it's as good as strict.
      Equality | Inequality => {
        can_change_strict_to_loose(&e.left, &e.right) && removable(&e.left) && removable(&e.right)
      }
      LessThan | GreaterThan | LessThanOrEqual | GreaterThanOrEqual => {
        let left = known_primitive_type(&e.left);
        matches!(
          left,
          PrimitiveType::String | PrimitiveType::Number | PrimitiveType::BigInt
        ) && known_primitive_type(&e.right) == left
          && removable(&e.left)
          && removable(&e.right)
      }
      _ => false,
    },

    _ => false,
  }
}

/// Whether `value` is an unbound identifier that `guard` has already proven
/// to exist on the given branch, e.g. the `x` in
/// `typeof x !== "undefined" ? x : null`. Reading it there can't throw.
pub fn is_side_effect_free_unbound_identifier_ref(
  value: &Node<Expr>,
  guard: &Node<Expr>,
  is_yes_branch: bool,
  is_unbound: &dyn Fn(Ref) -> bool,
) -> bool {
  use OperatorName::*;
  let Expr::Identifier(id) = value.stx.as_ref() else {
    return false;
  };
  if !is_unbound(id.ref_) {
    return false;
  };
  let Expr::Binary(binary) = guard.stx.as_ref() else {
    return false;
  };

  let mut is_yes_branch = is_yes_branch;
  let (typeof_side, string_side) = if matches!(binary.left.stx.as_ref(), Expr::String(_)) {
    (&binary.right, &binary.left)
  } else {
    (&binary.left, &binary.right)
  };
  let Expr::Unary(typeof_expr) = typeof_side.stx.as_ref() else {
    return false;
  };
  if typeof_expr.operator != Typeof || !typeof_expr.value_was_originally_identifier {
    return false;
  };
  let Some(text) = string_side.stx.as_string() else {
    return false;
  };
  let same_ref = matches!(typeof_expr.value.stx.as_ref(), Expr::Identifier(t) if t.ref_ == id.ref_);
  if !same_ref {
    return false;
  };

  match binary.operator {
    StrictEquality | StrictInequality | Equality | Inequality => {
      // `typeof x === "undefined" ? 0 : x` and `typeof x !== "undefined" ? x : 0`,
      // and likewise for any other type name with the polarity reversed.
      let is_undefined_check = utf16_equals_str(text, "undefined");
      (is_undefined_check == is_yes_branch)
        == matches!(binary.operator, Inequality | StrictInequality)
    }
    LessThan | GreaterThan | LessThanOrEqual | GreaterThanOrEqual => {
      // `typeof x < "u"` holds exactly when `x` is defined, as "undefined" is
      // the only type name sorting at or after "u".
      if !utf16_equals_str(text, "u") {
        return false;
      };
      if matches!(binary.left.stx.as_ref(), Expr::String(_)) {
        is_yes_branch = !is_yes_branch;
      };
      is_yes_branch == matches!(binary.operator, LessThan | LessThanOrEqual)
    }
    _ => false,
  }
}

/// Whether evaluating the class definition, including its static members, is unobservable.
pub fn class_can_be_removed_if_unused(class: &Class, is_unbound: &dyn Fn(Ref) -> bool) -> bool {
  if let Some(extends) = &class.extends {
    if !expr_can_be_removed_if_unused(extends, is_unbound) {
      return false;
    };
  };
  for member in class.members.iter() {
    match member {
      ClassMember::StaticBlock(block) => {
        if !stmts_can_be_removed_if_unused(&block.body, StmtRemovalFlags::default(), is_unbound) {
          return false;
        };
      }
      ClassMember::Property(property) => {
        if property.is_computed && !is_primitive_literal(&property.key) {
          return false;
        };
        // Instance members only run on construction.
        if !property.is_static {
          continue;
        };
        let values = property.value.iter().chain(property.initializer.iter());
        for value in values {
          if !expr_can_be_removed_if_unused(value, is_unbound) {
            return false;
          };
        }
      }
    };
  }
  true
}

/// Whether the whole statement list can be dropped if nothing it declares is used.
pub fn stmts_can_be_removed_if_unused(
  stmts: &[Node<Stmt>],
  flags: StmtRemovalFlags,
  is_unbound: &dyn Fn(Ref) -> bool,
) -> bool {
  stmts
    .iter()
    .all(|stmt| stmt_can_be_removed_if_unused(stmt, flags, is_unbound))
}

fn stmt_can_be_removed_if_unused(
  stmt: &Node<Stmt>,
  flags: StmtRemovalFlags,
  is_unbound: &dyn Fn(Ref) -> bool,
) -> bool {
  match stmt.stx.as_ref() {
    Stmt::Function(_) | Stmt::Empty | Stmt::Import(_) => true,
    Stmt::Class(decl) => class_can_be_removed_if_unused(&decl.class, is_unbound),
    Stmt::Expr(s) => {
      s.does_not_affect_tree_shaking || expr_can_be_removed_if_unused(&s.expr, is_unbound)
    }
    Stmt::Local(local) => local.decls.iter().all(|decl| {
      // Destructuring can run getters and iterators.
      matches!(decl.binding.stx.as_ref(), Binding::Identifier(_))
        && decl
          .value
          .as_ref()
          .map_or(true, |v| expr_can_be_removed_if_unused(v, is_unbound))
    }),
    // Catch bodies only run if the try body throws, which we've ruled out.
    Stmt::Try(t) => {
      stmts_can_be_removed_if_unused(&t.block, StmtRemovalFlags::default(), is_unbound)
        && t.finally.as_ref().map_or(true, |f| {
          stmts_can_be_removed_if_unused(f, StmtRemovalFlags::default(), is_unbound)
        })
    }
    Stmt::ExportFrom(_) => true,
    Stmt::ExportClause(_) => !flags.keep_export_clauses,
    Stmt::ExportDefault(default) => match &default.value {
      ExportDefaultValue::Expr(e) => expr_can_be_removed_if_unused(e, is_unbound),
      ExportDefaultValue::Function(_) => true,
      ExportDefaultValue::Class(decl) => class_can_be_removed_if_unused(&decl.class, is_unbound),
    },
    _ => false,
  }
}
