use rayon::prelude::*;

mod filter;
mod results;

pub use filter::RouteFilter;
pub use results::{compose_results, filtered_count};

use crate::shared::normalize;

// Search result caps per entity kind.
pub const ROUTE_RESULT_CAP: usize = 8;
pub const LOCATION_RESULT_CAP: usize = 10;
pub const USER_RESULT_CAP: usize = 8;

/// The searched text fields of a catalog entity, already normalized.
pub trait Searchable {
    /// The headline field. A prefix hit here outranks everything else.
    fn primary(&self) -> &str;
    /// Every other searched field.
    fn secondary(&self) -> impl Iterator<Item = &str>;
}

/// Match quality, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    /// The primary field starts with the query.
    Primary,
    /// Some searched field contains the query.
    Secondary,
}

/// Ranks one entity against an already normalized needle.
pub fn rank<T: Searchable>(entity: &T, needle: &str) -> Option<MatchRank> {
    if entity.primary().starts_with(needle) {
        return Some(MatchRank::Primary);
    }
    if entity.primary().contains(needle) || entity.secondary().any(|field| field.contains(needle)) {
        return Some(MatchRank::Secondary);
    }
    None
}

/// Generic ranked search built for multithreaded scanning.
///
/// Matches order by rank first and catalog position second, so entities of
/// equal rank keep feed order. At most `cap` results come back. A blank
/// query matches nothing.
pub fn rank_matches<'a, T>(query: &str, haystack: &'a [T], cap: usize) -> Vec<&'a T>
where
    T: Send + Sync + Searchable,
{
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<(MatchRank, usize, &T)> = haystack
        .par_iter()
        .enumerate()
        .filter_map(|(index, hay)| rank(hay, &needle).map(|rank| (rank, index, hay)))
        .collect();

    results.par_sort_unstable_by_key(|(rank, index, _)| (*rank, *index));
    results.truncate(cap);
    results.into_iter().map(|(_, _, entity)| entity).collect()
}
