/* src/core/src/policy.rs */

use std::collections::HashMap;

use tracing::debug;

use crate::config::ViewConfig;
use crate::errors::ConfigError;
use crate::resolver::TemplateResolver;

/// Per-request decoration outcome. `None` skips decoration entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
  pub template: Option<String>,
}

/// Decides per request whether to decorate and with which template.
///
/// Static mode: the layout parameter can only cancel decoration; the
/// template always comes from the resolver. Dynamic mode: the parameter
/// value is itself a template name, unless it is the cancel sentinel.
/// A parameter equal to the sentinel always means "do not decorate".
///
/// The decision is recomputed on every call; request parameters are
/// request-scoped and must never be cached.
pub struct LayoutPolicy {
  layout_param: String,
  cancel_value: String,
  dynamic: bool,
}

impl LayoutPolicy {
  pub fn new(config: &ViewConfig) -> Self {
    Self {
      layout_param: config.layout_param.clone(),
      cancel_value: config.cancel_value.clone(),
      dynamic: config.dynamic_templates,
    }
  }

  pub fn decide(
    &self,
    params: &HashMap<String, String>,
    raw_view: &str,
    resolver: &TemplateResolver,
  ) -> Result<Decision, ConfigError> {
    match params.get(&self.layout_param) {
      Some(value) if *value == self.cancel_value => {
        debug!(view = raw_view, param = %self.layout_param, "decoration cancelled by request");
        Ok(Decision { template: None })
      }
      Some(value) if self.dynamic => {
        debug!(view = raw_view, template = %value, "dynamic template override");
        Ok(Decision { template: Some(value.clone()) })
      }
      _ => Ok(Decision { template: resolver.template_name(raw_view)? }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn resolver() -> TemplateResolver {
    let config = ViewConfig::new().default_template("common/standard");
    TemplateResolver::new(&config).expect("should build")
  }

  fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
  }

  fn policy(dynamic: bool) -> LayoutPolicy {
    LayoutPolicy::new(&ViewConfig::new().dynamic_templates(dynamic))
  }

  #[test]
  fn static_mode_decorates_by_default() {
    let decision = policy(false).decide(&params(&[]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("common/standard"));
  }

  #[test]
  fn static_mode_cancel_sentinel_disables_decoration() {
    let decision = policy(false)
      .decide(&params(&[("layout", "none")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template, None);
  }

  #[test]
  fn static_mode_ignores_other_parameter_values() {
    let decision = policy(false)
      .decide(&params(&[("layout", "alt-template")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("common/standard"));
  }

  #[test]
  fn dynamic_mode_parameter_overrides_resolver() {
    let decision = policy(true)
      .decide(&params(&[("layout", "alt-template")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("alt-template"));
  }

  #[test]
  fn dynamic_mode_cancel_sentinel_still_disables() {
    let decision = policy(true)
      .decide(&params(&[("layout", "none")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template, None);
  }

  #[test]
  fn dynamic_mode_absent_parameter_falls_back_to_resolver() {
    let decision = policy(true).decide(&params(&[]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("common/standard"));
  }

  #[test]
  fn custom_param_name_and_sentinel() {
    let config = ViewConfig::new().layout_param("tpl").cancel_value("off");
    let policy = LayoutPolicy::new(&config);
    let decision = policy
      .decide(&params(&[("tpl", "off")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template, None);
    // The default "layout" name is no longer consulted
    let decision = policy
      .decide(&params(&[("layout", "none")]), "hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("common/standard"));
  }

  #[test]
  fn inline_override_flows_through_static_mode() {
    let decision = policy(false)
      .decide(&params(&[]), "special+hotels/show", &resolver())
      .expect("should decide");
    assert_eq!(decision.template.as_deref(), Some("special"));
  }
}
