//! Side-effect-aware simplification of JavaScript expressions and statements.
//!
//! Every analysis here is conservative: when we can't prove something, we
//! answer "unknown", "could have side effects" or "not removable", which only
//! ever costs output size.

use ast_js::Ref;

pub mod binding;
pub mod boolean;
pub mod equality;
pub mod err;
pub mod join;
pub mod minify;
pub mod numeric;
pub mod optional_chain;
pub mod options;
pub mod primitive;
pub mod side_effects;
pub mod truthiness;
pub mod unused;

pub use binding::convert_binding_to_expr;
pub use boolean::maybe_simplify_not;
pub use boolean::not;
pub use boolean::simplify_boolean_expr;
pub use equality::check_equality_if_no_side_effects;
pub use equality::values_look_the_same;
pub use err::ConfigError;
pub use minify::minify;
pub use minify::removable_statements;
pub use minify::MinifyStats;
pub use optional_chain::try_to_insert_optional_chain;
pub use options::SimplifyOptions;
pub use primitive::known_primitive_type;
pub use primitive::PrimitiveType;
pub use side_effects::expr_can_be_removed_if_unused;
pub use side_effects::stmts_can_be_removed_if_unused;
pub use side_effects::StmtRemovalFlags;
pub use truthiness::SideEffects;
pub use unused::simplify_unused_expr;

/// What the unused-value reducer needs to know about its surroundings.
#[derive(Clone, Copy)]
pub struct SimplifyCx<'a> {
  pub optional_chain_supported: bool,
  /// Whether a reference resolves to no declaration, i.e. a global that may throw when read.
  pub is_unbound: &'a dyn Fn(Ref) -> bool,
}

impl<'a> SimplifyCx<'a> {
  pub fn new(options: &SimplifyOptions, is_unbound: &'a dyn Fn(Ref) -> bool) -> SimplifyCx<'a> {
    SimplifyCx {
      optional_chain_supported: options.optional_chain_supported,
      is_unbound,
    }
  }
}
