/* src/core/src/cache.rs */

use dashmap::DashMap;

/// Memoizes view name -> resolved template name.
///
/// Owned by one resolver, created at startup and never invalidated: the
/// template map cannot change after startup, so a cached name stays valid
/// for the process lifetime. Request threads read and write concurrently;
/// two threads resolving the same miss write equal values, a benign race.
pub struct NameCache {
  enabled: bool,
  names: DashMap<String, String>,
}

impl NameCache {
  pub fn new(enabled: bool) -> Self {
    Self { enabled, names: DashMap::new() }
  }

  pub fn get(&self, view_name: &str) -> Option<String> {
    if !self.enabled {
      return None;
    }
    self.names.get(view_name).map(|entry| entry.value().clone())
  }

  /// Store a resolved name. No-op when caching is disabled.
  pub fn put(&self, view_name: &str, template_name: &str) {
    if self.enabled {
      self.names.insert(view_name.to_string(), template_name.to_string());
    }
  }

  pub fn contains(&self, view_name: &str) -> bool {
    self.enabled && self.names.contains_key(view_name)
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.names.len()
  }
}
