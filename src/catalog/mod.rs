use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

mod entities;
mod highlights;
mod source;

pub use entities::*;
pub use highlights::Highlights;

use crate::search::{self, LOCATION_RESULT_CAP, ROUTE_RESULT_CAP, USER_RESULT_CAP};

type KeyToIndex = HashMap<Arc<str>, usize>;

/// In-memory catalog of everything the marketplace shows: routes, the
/// locations they run through, the creators behind them, and the per-route
/// highlight teasers.
///
/// Collections keep feed order. Keyed writes go through
/// [`Catalog::upsert_route`] and friends so the id lookups stay in sync.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    routes: Vec<Route>,
    locations: Vec<Location>,
    users: Vec<User>,
    highlights: Highlights,

    route_lookup: KeyToIndex,
    user_lookup: KeyToIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    pub fn highlights_mut(&mut self) -> &mut Highlights {
        &mut self.highlights
    }

    /// Get a route with the given id.
    /// If no route is found with the given id None is returned.
    /// Route is safe to clone if an owned instance is needed.
    pub fn route_by_id(&self, id: &str) -> Option<&Route> {
        let index = self.route_lookup.get(id)?;
        Some(&self.routes[*index])
    }

    /// Get a user with the given nickname.
    /// If no user is found with the given nickname None is returned.
    pub fn user_by_nickname(&self, nickname: &str) -> Option<&User> {
        let index = self.user_lookup.get(nickname)?;
        Some(&self.users[*index])
    }

    /// Inserts the route, or replaces the one sharing its id.
    /// New routes go to the end, replaced routes keep their position.
    pub fn upsert_route(&mut self, route: Route) {
        match self.route_lookup.get(route.id.as_ref()) {
            Some(index) => self.routes[*index] = route,
            None => {
                self.route_lookup
                    .insert(route.id.clone(), self.routes.len());
                self.routes.push(route);
            }
        }
    }

    /// Removes and returns the route with the given id.
    /// Later routes keep their relative order.
    pub fn remove_route(&mut self, id: &str) -> Option<Route> {
        let index = self.route_lookup.remove(id)?;
        let route = self.routes.remove(index);
        for slot in self.route_lookup.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(route)
    }

    /// Inserts the user, or replaces the one sharing its nickname.
    pub fn upsert_user(&mut self, user: User) {
        match self.user_lookup.get(user.nickname.as_ref()) {
            Some(index) => self.users[*index] = user,
            None => {
                self.user_lookup
                    .insert(user.nickname.clone(), self.users.len());
                self.users.push(user);
            }
        }
    }

    /// Removes and returns the user with the given nickname.
    pub fn remove_user(&mut self, nickname: &str) -> Option<User> {
        let index = self.user_lookup.remove(nickname)?;
        let user = self.users.remove(index);
        for slot in self.user_lookup.values_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(user)
    }

    /// Locations carry no key, they are only ever appended.
    pub fn add_location(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// Top route matches for the query, best first.
    pub fn search_routes<'a>(&'a self, query: &str) -> Vec<&'a Route> {
        search::rank_matches(query, &self.routes, ROUTE_RESULT_CAP)
    }

    /// Top location matches for the query, collapsed to one entry per
    /// distinct city and country pair before the cap applies.
    pub fn search_locations<'a>(&'a self, query: &str) -> Vec<&'a Location> {
        let mut results = search::rank_matches(query, &self.locations, usize::MAX);
        let mut seen = HashSet::new();
        results.retain(|location| {
            seen.insert((
                location.normalized_city.clone(),
                location.normalized_country.clone(),
            ))
        });
        results.truncate(LOCATION_RESULT_CAP);
        results
    }

    /// Top creator matches for the query, best first.
    pub fn search_users<'a>(&'a self, query: &str) -> Vec<&'a User> {
        search::rank_matches(query, &self.users, USER_RESULT_CAP)
    }
}
