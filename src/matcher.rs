use std::cmp::Ordering;
use std::collections::BinaryHeap;

use strsim::jaro_winkler;

use crate::data::Feature;

/// Sentinel type filter value meaning "no filter".
pub const ALL_TYPES: &str = "all";

const SUGGESTION_CUTOFF: f64 = 0.75;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search: String,
    pub type_filter: Option<String>,
}

impl Query {
    pub fn new(search: Option<String>, type_filter: Option<String>) -> Self {
        Self {
            search: search.unwrap_or_default(),
            type_filter,
        }
    }

    fn matches_search(&self, needle: &str, feature: &Feature) -> bool {
        needle.is_empty()
            || feature.title.to_lowercase().contains(needle)
            || feature.description.to_lowercase().contains(needle)
            || feature.id.to_lowercase().contains(needle)
    }

    fn matches_type(&self, feature: &Feature) -> bool {
        match self.type_filter.as_deref() {
            None | Some("") | Some(ALL_TYPES) => true,
            Some(wanted) => feature.r#type == wanted,
        }
    }

    /// Stable filter over a store snapshot.
    pub fn apply<'a>(&self, features: &'a [Feature]) -> Vec<&'a Feature> {
        let needle = self.search.to_lowercase();
        features
            .iter()
            .filter(|f| self.matches_search(&needle, f) && self.matches_type(f))
            .collect()
    }
}

/// Distinct types in first-seen order.
pub fn available_types(features: &[Feature]) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for feature in features {
        if !types.contains(&feature.r#type.as_str()) {
            types.push(&feature.r#type);
        }
    }
    types
}

#[derive(PartialEq)]
struct ScoredStr {
    score: f64,
    string: String,
}

impl Eq for ScoredStr {}

impl Ord for ScoredStr {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score)
    }
}

impl PartialOrd for ScoredStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn get_close_matches<'a, I>(word: &str, possibilities: I, cutoff: f64) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut heap: BinaryHeap<ScoredStr> = BinaryHeap::new();

    for possibility in possibilities {
        let score = jaro_winkler(word, &possibility.to_lowercase());
        if score >= cutoff {
            heap.push(ScoredStr {
                score,
                string: possibility.to_string(),
            });
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|scored| scored.string)
        .collect()
}

/// Ids close to `id`, best first. Used when a detail lookup misses.
pub fn suggest_ids(id: &str, features: &[Feature]) -> Vec<String> {
    get_close_matches(
        &id.to_lowercase(),
        features.iter().map(|f| f.id.as_str()),
        SUGGESTION_CUTOFF,
    )
}

/// Types close to `wanted` when it does not name an existing type.
pub fn suggest_types(wanted: &str, features: &[Feature]) -> Vec<String> {
    let types = available_types(features);
    if wanted.is_empty() || wanted == ALL_TYPES || types.contains(&wanted) {
        return Vec::new();
    }
    get_close_matches(&wanted.to_lowercase(), types, SUGGESTION_CUTOFF)
}
