/* src/core/src/pattern.rs */

use dashmap::DashMap;
use regex::Regex;

use crate::errors::ConfigError;

/// Compile a pattern source into a whole-string matcher. The source is
/// anchored so "account/.*" matches "account/show" but never a longer
/// identifier that merely contains it.
pub fn compile(source: &str) -> Result<Regex, ConfigError> {
  Regex::new(&format!("^(?:{source})$"))
    .map_err(|err| ConfigError::InvalidPattern { pattern: source.to_string(), source: err })
}

/// Memoizes compiled patterns by source string.
///
/// Created once per resolver, grows for the process lifetime and is never
/// cleared: the template map is immutable after startup, so a compiled
/// pattern can never go stale. Concurrent misses on the same source may
/// both compile; both writes are equivalent, so whichever lands is fine.
pub struct PatternCache {
  enabled: bool,
  compiled: DashMap<String, Regex>,
}

impl PatternCache {
  pub fn new(enabled: bool) -> Self {
    Self { enabled, compiled: DashMap::new() }
  }

  /// Whole-string match of `name` against the pattern `source`. Compiles on
  /// first use and memoizes when enabled; recompiles per call otherwise.
  pub fn matches(&self, source: &str, name: &str) -> Result<bool, ConfigError> {
    if !self.enabled {
      return Ok(compile(source)?.is_match(name));
    }
    if let Some(pattern) = self.compiled.get(source) {
      return Ok(pattern.is_match(name));
    }
    let pattern = compile(source)?;
    let matched = pattern.is_match(name);
    self.compiled.insert(source.to_string(), pattern);
    Ok(matched)
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.compiled.len()
  }
}
