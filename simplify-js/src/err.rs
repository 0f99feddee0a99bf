#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("invalid options JSON: {0}")]
  InvalidJson(#[from] serde_json::Error),
  #[error("maxPasses must be at least 1, got {0}")]
  InvalidMaxPasses(usize),
}
