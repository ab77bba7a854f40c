use std::collections::BTreeSet;

use crate::{
    catalog::{Difficulty, Route, RouteKind},
    shared::DurationUnit,
};

/// All the ways a route list can be narrowed. Every dimension is optional
/// and the default filter passes everything.
///
/// Bounds are inclusive. A dimension whose minimum exceeds its maximum
/// matches no route at all, it never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteFilter {
    pub kind: Option<RouteKind>,
    pub min_price: f64,
    pub max_price: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    /// Unit the duration bounds are expressed in.
    pub duration_unit: DurationUnit,
    pub min_points: u32,
    pub max_points: u32,
    pub difficulty: Option<Difficulty>,
    /// Lowercase category ids, empty means unrestricted.
    pub categories: BTreeSet<String>,
}

impl Default for RouteFilter {
    fn default() -> Self {
        Self {
            kind: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
            min_duration: 0.0,
            max_duration: f64::INFINITY,
            duration_unit: DurationUnit::default(),
            min_points: 0,
            max_points: u32::MAX,
            difficulty: None,
            categories: BTreeSet::new(),
        }
    }
}

impl RouteFilter {
    pub fn new() -> Self {
        Default::default()
    }

    /// True when the route satisfies every active dimension.
    pub fn matches(&self, route: &Route) -> bool {
        self.matches_kind(route)
            && self.matches_price(route)
            && self.matches_duration(route)
            && self.matches_points(route)
            && self.matches_difficulty(route)
            && self.matches_categories(route)
    }

    /// The subset of `routes` passing every predicate, in input order.
    pub fn evaluate<'a, I>(&self, routes: I) -> Vec<&'a Route>
    where
        I: IntoIterator<Item = &'a Route>,
    {
        routes
            .into_iter()
            .filter(|route| self.matches(route))
            .collect()
    }

    fn matches_kind(&self, route: &Route) -> bool {
        match self.kind {
            Some(kind) => route.kind == kind,
            None => true,
        }
    }

    fn matches_price(&self, route: &Route) -> bool {
        route.price >= self.min_price && route.price <= self.max_price
    }

    fn matches_duration(&self, route: &Route) -> bool {
        if self.min_duration > self.max_duration {
            return false;
        }
        // Routes with no readable duration count as zero-length.
        let duration = route.duration.unwrap_or_default();
        match self.duration_unit {
            DurationUnit::Hours => {
                let hours = duration.as_hours();
                hours >= self.min_duration && hours <= self.max_duration
            }
            // A route spans every whole day its hours touch, so a 25 hour
            // route counts as both a 1 and a 2 day trip.
            DurationUnit::Days => {
                let (first, last) = duration.day_span();
                last >= self.min_duration && first <= self.max_duration
            }
        }
    }

    fn matches_points(&self, route: &Route) -> bool {
        route.points >= self.min_points && route.points <= self.max_points
    }

    fn matches_difficulty(&self, route: &Route) -> bool {
        match self.difficulty {
            Some(difficulty) => route.difficulty == difficulty,
            None => true,
        }
    }

    fn matches_categories(&self, route: &Route) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        route
            .categories
            .iter()
            .any(|category| self.categories.contains(category.as_ref()))
    }

    fn price_active(&self) -> bool {
        self.min_price > 0.0 || self.max_price.is_finite()
    }

    fn duration_active(&self) -> bool {
        self.min_duration > 0.0 || self.max_duration.is_finite()
    }

    fn points_active(&self) -> bool {
        self.min_points > 0 || self.max_points < u32::MAX
    }

    /// How many dimensions deviate from the default. Changing only the
    /// duration unit does not count.
    pub fn active_count(&self) -> usize {
        [
            self.kind.is_some(),
            self.price_active(),
            self.duration_active(),
            self.points_active(),
            self.difficulty.is_some(),
            !self.categories.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Resets every dimension back to pass-everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
