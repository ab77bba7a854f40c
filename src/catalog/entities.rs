use std::{fmt::Display, sync::Arc};

use crate::{
    search::Searchable,
    shared::{RouteDuration, normalize},
};

/// Canonical travel style of a route.
///
/// Marketplace feeds spell this freely and in more than one language
/// ("hike", "vandring", "husbil"); [`RouteKind::from_alias`] folds the known
/// spellings into this enumeration once, at ingestion, so filtering can use
/// plain equality.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Walking,
    Hiking,
    Cycling,
    Camper,
    Driving,
    /// Anything the alias tables do not recognize.
    #[default]
    Other,
}

impl RouteKind {
    pub fn from_alias(alias: &str) -> Option<Self> {
        match normalize(alias).as_str() {
            "walking" | "walk" | "stroll" | "city walk" | "promenad" => Some(Self::Walking),
            "hiking" | "hike" | "trek" | "trekking" | "vandring" => Some(Self::Hiking),
            "cycling" | "bike" | "biking" | "bicycle" | "cykling" | "cykel" => Some(Self::Cycling),
            "camper" | "campervan" | "van" | "rv" | "motorhome" | "husbil" => Some(Self::Camper),
            "driving" | "car" | "auto" | "road trip" | "roadtrip" | "bil" => Some(Self::Driving),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Hiking => "hiking",
            Self::Cycling => "cycling",
            Self::Camper => "camper",
            Self::Driving => "driving",
            Self::Other => "other",
        }
    }
}

impl Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How demanding a route is. The set is closed; unrecognized feed values fall
/// back to [`Difficulty::Easy`] during ingestion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_alias(alias: &str) -> Option<Self> {
        match normalize(alias).as_str() {
            "easy" | "beginner" | "light" | "lätt" => Some(Self::Easy),
            "medium" | "moderate" | "intermediate" | "medel" => Some(Self::Medium),
            "hard" | "difficult" | "challenging" | "expert" | "svår" => Some(Self::Hard),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable curated travel itinerary, the catalog's principal entity.
#[derive(Debug, Default, Clone)]
pub struct Route {
    /// Unique external identifier.
    pub id: Arc<str>,
    /// Display name (e.g., "Berlin Street Art Tour").
    pub name: Arc<str>,
    /// Free-text place description, searched alongside the name.
    pub location: Arc<str>,
    pub description: Arc<str>,
    /// Canonical travel style, resolved from feed aliases at load time.
    pub kind: RouteKind,
    pub difficulty: Difficulty,
    /// Parsed travel time; `None` when the feed string was unreadable, which
    /// the filter treats as a zero-length route.
    pub duration: Option<RouteDuration>,
    /// Number of waypoints along the route.
    pub points: u32,
    /// Non-negative price; `0` marks a free route.
    pub price: f64,
    /// Lowercase category identifiers.
    pub categories: Box<[Arc<str>]>,
    /// Running review average, `0.0` until the first review lands.
    pub rating: f64,
    pub review_count: u32,

    /// Search-normalized copies of the text fields (trimmed, lowercased).
    pub normalized_name: Arc<str>,
    pub normalized_location: Arc<str>,
    pub normalized_description: Arc<str>,
}

impl Route {
    pub fn new(
        id: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        location: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
    ) -> Self {
        let name = name.into();
        let location = location.into();
        let description = description.into();
        Self {
            id: id.into(),
            normalized_name: normalize(&name).into(),
            normalized_location: normalize(&location).into(),
            normalized_description: normalize(&description).into(),
            name,
            location,
            description,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: RouteKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_duration(mut self, duration: RouteDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price.max(0.0);
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.categories = categories
            .into_iter()
            .map(|category| normalize(category.as_ref()))
            .filter(|category| !category.is_empty())
            .map(Arc::from)
            .collect();
        self
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

impl Searchable for Route {
    fn primary(&self) -> &str {
        &self.normalized_name
    }

    fn secondary(&self) -> impl Iterator<Item = &str> {
        [
            self.normalized_location.as_ref(),
            self.normalized_description.as_ref(),
        ]
        .into_iter()
    }
}

/// A city/country pair. The catalog tolerates duplicate pairs; search output
/// collapses them.
#[derive(Debug, Default, Clone)]
pub struct Location {
    pub city: Arc<str>,
    pub country: Arc<str>,
    pub normalized_city: Arc<str>,
    pub normalized_country: Arc<str>,
}

impl Location {
    pub fn new(city: impl Into<Arc<str>>, country: impl Into<Arc<str>>) -> Self {
        let city = city.into();
        let country = country.into();
        Self {
            normalized_city: normalize(&city).into(),
            normalized_country: normalize(&country).into(),
            city,
            country,
        }
    }
}

impl Searchable for Location {
    fn primary(&self) -> &str {
        &self.normalized_city
    }

    fn secondary(&self) -> impl Iterator<Item = &str> {
        [self.normalized_country.as_ref()].into_iter()
    }
}

/// A route creator as shown in search: the public profile numbers, nothing
/// account-related.
#[derive(Debug, Default, Clone)]
pub struct User {
    /// Unique handle.
    pub nickname: Arc<str>,
    pub description: Arc<str>,
    /// Community rating, absent until the creator has been rated.
    pub rating: Option<f64>,
    pub visited_countries: u32,
    pub created_routes: u32,

    pub normalized_nickname: Arc<str>,
    pub normalized_description: Arc<str>,
}

impl User {
    pub fn new(nickname: impl Into<Arc<str>>, description: impl Into<Arc<str>>) -> Self {
        let nickname = nickname.into();
        let description = description.into();
        Self {
            normalized_nickname: normalize(&nickname).into(),
            normalized_description: normalize(&description).into(),
            nickname,
            description,
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_visited_countries(mut self, visited_countries: u32) -> Self {
        self.visited_countries = visited_countries;
        self
    }

    pub fn with_created_routes(mut self, created_routes: u32) -> Self {
        self.created_routes = created_routes;
        self
    }
}

impl Searchable for User {
    fn primary(&self) -> &str {
        &self.normalized_nickname
    }

    fn secondary(&self) -> impl Iterator<Item = &str> {
        [self.normalized_description.as_ref()].into_iter()
    }
}

#[test]
fn kind_alias_english() {
    assert_eq!(RouteKind::from_alias("Hike"), Some(RouteKind::Hiking));
    assert_eq!(RouteKind::from_alias("road trip"), Some(RouteKind::Driving));
}

#[test]
fn kind_alias_swedish() {
    assert_eq!(RouteKind::from_alias("vandring"), Some(RouteKind::Hiking));
    assert_eq!(RouteKind::from_alias("husbil"), Some(RouteKind::Camper));
}

#[test]
fn kind_alias_unknown() {
    assert_eq!(RouteKind::from_alias("submarine"), None);
}

#[test]
fn difficulty_alias() {
    assert_eq!(Difficulty::from_alias("Moderate"), Some(Difficulty::Medium));
    assert_eq!(Difficulty::from_alias("svår"), Some(Difficulty::Hard));
}

#[test]
fn difficulty_alias_unknown() {
    assert_eq!(Difficulty::from_alias("impossible"), None);
}

#[test]
fn route_builder_normalizes_text() {
    let route = Route::new("r1", "  Berlin Street Art Tour ", "Berlin", "Murals");
    assert_eq!(route.normalized_name.as_ref(), "berlin street art tour");
    assert_eq!(route.name.as_ref(), "  Berlin Street Art Tour ");
}

#[test]
fn route_builder_clamps_negative_price() {
    let route = Route::new("r1", "a", "b", "c").with_price(-5.0);
    assert_eq!(route.price, 0.0);
    assert!(route.is_free());
}

#[test]
fn route_categories_lowercased() {
    let route = Route::new("r1", "a", "b", "c").with_categories(["Food", " ART ", ""]);
    let categories: Vec<_> = route.categories.iter().map(|c| c.as_ref()).collect();
    assert_eq!(categories, vec!["food", "art"]);
}
