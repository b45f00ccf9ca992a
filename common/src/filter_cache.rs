//! Memoized filtering for larger datasets.
//!
//! Results are keyed by the JSON-serialized (query, filters) pair and stored as dataset
//! indices, so a cache instance must only ever be used with one dataset.

use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::course::Course;
use crate::filter_engine::filter_course_indices;
use crate::filter_state::FilterState;

#[derive(Serialize)]
struct CacheKey<'a> {
    query: &'a str,
    filters: &'a FilterState,
}

#[derive(Debug, Default)]
pub struct FilterCache {
    entries: HashMap<String, Vec<usize>>,
    hits: u64,
    misses: u64,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter<'a>(&mut self, dataset: &'a [Course], query: &str, filters: &FilterState) -> Vec<&'a Course> {
        let indices = match serde_json::to_string(&CacheKey { query, filters }) {
            Ok(key) => {
                if let Some(indices) = self.entries.get(&key) {
                    self.hits += 1;
                    trace!(%key, "filter cache hit");
                    indices.clone()
                } else {
                    self.misses += 1;
                    trace!(%key, "filter cache miss");
                    let indices = filter_course_indices(dataset, query, filters);
                    self.entries.insert(key, indices.clone());
                    indices
                }
            }
            Err(_) => filter_course_indices(dataset, query, filters),
        };
        indices.into_iter().filter_map(|i| dataset.get(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_engine::filter_courses;
    use crate::filter_state::FilterField;
    use crate::mock_data::mock_courses;

    #[test]
    fn repeated_lookup_hits_cache() {
        let courses = mock_courses();
        let mut cache = FilterCache::new();
        let state = FilterState::default().toggle_set_member(FilterField::Categories, "Business & Entrepreneurship").unwrap();

        let first = cache.filter(&courses, "", &state);
        let second = cache.filter(&courses, "", &state);
        assert_eq!(first, second);
        assert_eq!(first, filter_courses(&courses, "", &state));
        assert_eq!((cache.hits(), cache.misses(), cache.len()), (1, 1, 1));
    }

    #[test]
    fn query_is_part_of_the_key() {
        let courses = mock_courses();
        let mut cache = FilterCache::new();
        let state = FilterState::default();
        assert_eq!(cache.filter(&courses, "", &state).len(), 6);
        assert_eq!(cache.filter(&courses, "kwame", &state).len(), 1);
        assert_eq!(cache.misses(), 2);
    }
}
