//! A fast, in-memory catalog engine for curated travel routes. Handles
//! ranked search, filtering and marketplace bookkeeping without relying on
//! external services.

pub mod catalog;
pub mod feed;
pub mod market;
pub mod search;
pub mod shared;

pub mod prelude {
    pub use crate::catalog::{
        Catalog, Difficulty, Highlights, Location, Route, RouteKind, User,
    };
    pub use crate::feed::{Config, Feed};
    pub use crate::market::{Application, ApplicationStatus, Market, Purchase, Review};
    pub use crate::search::{
        LOCATION_RESULT_CAP, MatchRank, ROUTE_RESULT_CAP, RouteFilter, Searchable,
        USER_RESULT_CAP, compose_results, filtered_count, rank_matches,
    };
    pub use crate::shared::{DurationUnit, RouteDuration, normalize};
}
