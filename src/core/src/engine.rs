/* src/core/src/engine.rs */

use std::collections::HashMap;

use crate::compose::{Compositor, Model, Render};
use crate::config::ViewConfig;
use crate::errors::{ConfigError, ViewError};
use crate::policy::LayoutPolicy;
use crate::resolver::{ResolvedView, TemplateResolver};

/// Wires policy, resolver and compositor together for one configured
/// decoration pipeline. Immutable after construction apart from the
/// resolver-owned caches, so adapters share it behind `Arc` across
/// request tasks.
pub struct ViewEngine {
  resolver: TemplateResolver,
  policy: LayoutPolicy,
  compositor: Compositor,
  renderer: Box<dyn Render + Send + Sync>,
}

impl ViewEngine {
  /// Build an engine. Fails fast on configuration errors such as a
  /// malformed pattern in the template map.
  pub fn new(
    config: &ViewConfig,
    renderer: Box<dyn Render + Send + Sync>,
  ) -> Result<Self, ConfigError> {
    Ok(Self {
      resolver: TemplateResolver::new(config)?,
      policy: LayoutPolicy::new(config),
      compositor: Compositor::new(config),
      renderer,
    })
  }

  /// Decide decoration for one request and resolve the view, without
  /// rendering. Exposed so callers can inspect the outcome.
  pub fn decide(
    &self,
    raw_view: &str,
    params: &HashMap<String, String>,
  ) -> Result<ResolvedView, ConfigError> {
    let decision = self.policy.decide(params, raw_view, &self.resolver)?;
    Ok(self.resolver.materialize(raw_view, decision.template.as_deref()))
  }

  /// Render one view for one request: decide decoration from the request
  /// parameters, resolve paths, delegate to the rendering collaborator.
  pub fn render(
    &self,
    raw_view: &str,
    params: &HashMap<String, String>,
    model: &Model,
  ) -> Result<String, ViewError> {
    let resolved = self.decide(raw_view, params)?;
    Ok(self.compositor.compose(self.renderer.as_ref(), &resolved, model)?)
  }

  pub fn resolver(&self) -> &TemplateResolver {
    &self.resolver
  }
}
