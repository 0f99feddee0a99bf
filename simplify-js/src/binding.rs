use ast_js::ast::binding::Binding;
use ast_js::ast::class::{Property, PropertyKind};
use ast_js::ast::expr::{ArrayExpr, Expr, IdentifierExpr, ObjectExpr, SpreadExpr};
use ast_js::ast::node::Node;
use ast_js::loc::Loc;
use ast_js::Ref;

use crate::join::assign;

/// Turns a destructuring pattern into the equivalent assignment target, e.g.
/// `[a, b = 1, ...c]` into `[a, b = 1, ...c]` as an array literal. Identifiers
/// go through `wrap_identifier` if given, so callers can substitute the
/// reference (e.g. with a namespace member).
pub fn convert_binding_to_expr(
  binding: Node<Binding>,
  wrap_identifier: Option<&dyn Fn(Loc, Ref) -> Node<Expr>>,
) -> Node<Expr> {
  let loc = binding.loc;
  match *binding.stx {
    Binding::Missing => Node::new(loc, Expr::Missing),
    Binding::Identifier(b) => match wrap_identifier {
      Some(wrap) => wrap(loc, b.ref_),
      None => Node::new(loc, Expr::Identifier(IdentifierExpr {
        ref_: b.ref_,
        can_be_removed_if_unused: false,
        must_keep_due_to_with_stmt: false,
      })),
    },
    Binding::Array(b) => {
      let last = b.items.len().saturating_sub(1);
      let items = b
        .items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
          let target = convert_binding_to_expr(item.binding, wrap_identifier);
          if b.has_spread && i == last {
            let spread_loc = target.loc;
            Node::new(spread_loc, Expr::Spread(SpreadExpr { value: target }))
          } else {
            match item.default {
              Some(default) => assign(target, default),
              None => target,
            }
          }
        })
        .collect();
      Node::new(loc, Expr::Array(ArrayExpr { items }))
    }
    Binding::Object(b) => {
      let properties = b
        .properties
        .into_iter()
        .map(|p| Property {
          kind: if p.is_spread {
            PropertyKind::Spread
          } else {
            PropertyKind::Normal
          },
          is_computed: p.is_computed,
          is_static: false,
          key: p.key,
          value: Some(convert_binding_to_expr(p.value, wrap_identifier)),
          initializer: p.default,
        })
        .collect();
      Node::new(loc, Expr::Object(ObjectExpr { properties }))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use ast_js::ast::binding::{
    ArrayBinding, ArrayBindingItem, IdentifierBinding, ObjectBinding, PropertyBinding,
  };
  use ast_js::build::*;

  fn arr(items: Vec<(Node<Binding>, Option<Node<Expr>>)>, has_spread: bool) -> Node<Binding> {
    Node::new(Loc(0, 0), Binding::Array(ArrayBinding {
      items: items
        .into_iter()
        .map(|(binding, default)| ArrayBindingItem { binding, default })
        .collect(),
      has_spread,
    }))
  }

  #[test]
  fn identifiers_become_references() {
    assert_eq!(convert_binding_to_expr(id_binding(Ref(3)), None), id(Ref(3)));
    let wrap = |_: Loc, r: Ref| dot(id(Ref(0)), &format!("v{}", r.0));
    assert_eq!(
      convert_binding_to_expr(id_binding(Ref(3)), Some(&wrap)),
      dot(id(Ref(0)), "v3"),
    );
  }

  #[test]
  fn array_patterns_keep_defaults_and_rest() {
    let pattern = arr(
      vec![
        (id_binding(Ref(1)), None),
        (Node::new(Loc(0, 0), Binding::Missing), None),
        (id_binding(Ref(2)), Some(num(1.0))),
        (id_binding(Ref(3)), None),
      ],
      true,
    );
    assert_eq!(
      convert_binding_to_expr(pattern, None),
      array(vec![
        id(Ref(1)),
        missing(),
        assign(id(Ref(2)), num(1.0)),
        spread(id(Ref(3))),
      ]),
    );
  }

  #[test]
  fn object_patterns_become_object_literals() {
    let pattern = Node::new(Loc(0, 0), Binding::Object(ObjectBinding {
      properties: vec![
        PropertyBinding {
          key: string("a"),
          is_computed: false,
          is_spread: false,
          value: Node::new(Loc(0, 0), Binding::Identifier(IdentifierBinding { ref_: Ref(1) })),
          default: Some(num(2.0)),
        },
        PropertyBinding {
          key: missing(),
          is_computed: false,
          is_spread: true,
          value: id_binding(Ref(2)),
          default: None,
        },
      ],
    }));
    let Expr::Object(obj) = *convert_binding_to_expr(pattern, None).stx else {
      panic!("expected an object literal");
    };
    assert_eq!(obj.properties.len(), 2);
    assert_eq!(obj.properties[0].kind, PropertyKind::Normal);
    assert_eq!(obj.properties[0].value, Some(id(Ref(1))));
    assert_eq!(obj.properties[0].initializer, Some(num(2.0)));
    assert_eq!(obj.properties[1].kind, PropertyKind::Spread);
    assert_eq!(obj.properties[1].value, Some(id(Ref(2))));
  }
}
