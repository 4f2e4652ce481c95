/* src/core/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

/// Configuration problems detected at engine construction or config loading.
/// A malformed pattern in the template map is fatal, never a silent no-match.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid template pattern '{pattern}': {source}")]
  InvalidPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },
  #[error("failed to read config file '{path}': {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config: {source}")]
  Parse {
    #[from]
    source: serde_json::Error,
  },
}

/// Failure reported by the rendering collaborator. Carried through
/// unchanged; this crate never retries or recovers a render.
#[derive(Debug, Error)]
#[error("render failed for '{resource}': {source}")]
pub struct RenderError {
  pub resource: String,
  #[source]
  pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl RenderError {
  pub fn new(
    resource: impl Into<String>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    Self { resource: resource.into(), source: source.into() }
  }
}

/// Top-level error for one engine render call.
#[derive(Debug, Error)]
pub enum ViewError {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error(transparent)]
  Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_pattern_names_the_source() {
    let err = regex::Regex::new("[").expect_err("should not compile");
    let err = ConfigError::InvalidPattern { pattern: "[".to_string(), source: err };
    assert!(err.to_string().contains("invalid template pattern '['"));
  }

  #[test]
  fn render_error_keeps_resource_and_cause() {
    let err = RenderError::new("views/hotels/show.html", "missing file");
    assert_eq!(err.resource, "views/hotels/show.html");
    assert!(err.to_string().contains("missing file"));
  }

  #[test]
  fn view_error_wraps_transparently() {
    let err: ViewError = RenderError::new("x", "boom").into();
    assert!(err.to_string().contains("render failed for 'x'"));
  }
}
