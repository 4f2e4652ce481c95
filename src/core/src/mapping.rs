/* src/core/src/mapping.rs */

use std::collections::HashMap;

use crate::config::TemplateRule;
use crate::errors::ConfigError;
use crate::pattern;

/// Ordered view name -> template name rules, immutable after construction.
///
/// Exact lookup goes through a prebuilt index; pattern lookup walks the
/// rules in declaration order so the earliest match wins.
pub struct TemplateMap {
  rules: Vec<TemplateRule>,
  exact: HashMap<String, usize>,
}

impl TemplateMap {
  /// Build the map. When `validate_patterns` is set, every key is compiled
  /// up front so a malformed pattern fails startup instead of surfacing on
  /// the first request that happens to reach it.
  pub fn new(rules: Vec<TemplateRule>, validate_patterns: bool) -> Result<Self, ConfigError> {
    if validate_patterns {
      for rule in &rules {
        pattern::compile(&rule.key)?;
      }
    }
    let mut exact = HashMap::new();
    for (index, rule) in rules.iter().enumerate() {
      // First declaration wins on duplicate keys
      exact.entry(rule.key.clone()).or_insert(index);
    }
    Ok(Self { rules, exact })
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  /// Exact-key lookup.
  pub fn get(&self, view_name: &str) -> Option<&str> {
    self.exact.get(view_name).map(|&index| self.rules[index].template.as_str())
  }

  /// Rules in declaration order, for pattern iteration.
  pub fn rules(&self) -> impl Iterator<Item = &TemplateRule> {
    self.rules.iter()
  }
}
