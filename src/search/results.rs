use crate::catalog::{Catalog, Route};

use super::RouteFilter;

/// Routes that satisfy both the query and the filter.
///
/// A blank query means "no search": the base set is then the whole catalog
/// in feed order. Otherwise it is the capped, ranked output of the route
/// matcher. The filter narrows the base set without reordering it.
pub fn compose_results<'a>(
    query: &str,
    filter: &RouteFilter,
    catalog: &'a Catalog,
) -> Vec<&'a Route> {
    let base: Vec<&Route> = if query.trim().is_empty() {
        catalog.routes().iter().collect()
    } else {
        catalog.search_routes(query)
    };
    filter.evaluate(base)
}

/// How many catalog routes pass the filter alone. The query never plays a
/// part here, this count backs the "routes match your filters" badge.
pub fn filtered_count(filter: &RouteFilter, catalog: &Catalog) -> usize {
    catalog
        .routes()
        .iter()
        .filter(|route| filter.matches(route))
        .count()
}
