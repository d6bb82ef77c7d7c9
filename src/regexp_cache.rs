use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("An error occurred while trying to create regex {pattern:?}: {source}")]
pub struct InvalidRegexError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Compiled regexes keyed by their source. Region data is immutable once
/// loaded, so entries are never evicted.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
            regex::Regex::new(pattern)
                .map(Arc::new)
                .map_err(|source| InvalidRegexError { pattern: pattern.to_string(), source })
        })?;
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
