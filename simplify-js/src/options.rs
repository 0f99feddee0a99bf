use serde::Deserialize;
use serde::Serialize;

use crate::err::ConfigError;

/// Knobs for the simplifier and the minify pass driver.
///
/// Hosts usually build this from the output target: `optional_chain_supported`
/// must be false when emitting for engines without `?.`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SimplifyOptions {
  pub optional_chain_supported: bool,
  /// Treat `export { … }` clauses as side effects when deciding whether a
  /// statement list can be dropped.
  pub keep_export_clauses: bool,
  pub max_passes: usize,
  /// Rewrite `===`/`!==` to `==`/`!=` when both sides have the same known primitive type.
  pub mangle_strict_equality: bool,
}

impl Default for SimplifyOptions {
  fn default() -> Self {
    Self {
      optional_chain_supported: true,
      keep_export_clauses: false,
      max_passes: 2,
      mangle_strict_equality: true,
    }
  }
}

impl SimplifyOptions {
  /// Parses options from JSON. Missing keys take their defaults; `maxPasses`
  /// of zero is rejected rather than silently disabling every pass.
  pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
    let options: SimplifyOptions = serde_json::from_str(raw)?;
    if options.max_passes == 0 {
      return Err(ConfigError::InvalidMaxPasses(options.max_passes));
    };
    Ok(options)
  }

  /// Never less than one.
  pub fn passes(&self) -> usize {
    self.max_passes.max(1)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_object_gives_defaults() {
    assert_eq!(SimplifyOptions::from_json("{}").unwrap(), SimplifyOptions::default());
  }

  #[test]
  fn camel_case_keys() {
    let options = SimplifyOptions::from_json(
      r#"{"optionalChainSupported": false, "keepExportClauses": true, "maxPasses": 5}"#,
    )
    .unwrap();
    assert!(!options.optional_chain_supported);
    assert!(options.keep_export_clauses);
    assert_eq!(options.max_passes, 5);
    assert!(options.mangle_strict_equality);
  }

  #[test]
  fn rejects_zero_passes() {
    assert!(matches!(
      SimplifyOptions::from_json(r#"{"maxPasses": 0}"#),
      Err(ConfigError::InvalidMaxPasses(0))
    ));
  }

  #[test]
  fn rejects_malformed_and_unknown_keys() {
    assert!(matches!(
      SimplifyOptions::from_json("{"),
      Err(ConfigError::InvalidJson(_))
    ));
    assert!(matches!(
      SimplifyOptions::from_json(r#"{"optionalChain": true}"#),
      Err(ConfigError::InvalidJson(_))
    ));
  }

  #[test]
  fn passes_are_clamped() {
    let options = SimplifyOptions {
      max_passes: 0,
      ..SimplifyOptions::default()
    };
    assert_eq!(options.passes(), 1);
  }
}
