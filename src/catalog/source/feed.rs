use std::time::Instant;

use tracing::{debug, warn};

use crate::{
    catalog::{Catalog, Difficulty, Location, Route, RouteKind, User},
    feed::{
        self, Feed,
        models::{FeedRoute, FeedUser},
    },
    shared::RouteDuration,
};

impl Catalog {
    /// Streams a marketplace feed into the catalog.
    /// Depending on the size of the feed this can be a long blocking function.
    pub fn load_feed(mut self, feed: Feed) -> Result<Self, feed::Error> {
        self.load_routes(&feed)?;
        self.load_locations(&feed)?;
        self.load_users(&feed)?;
        self.load_highlights(&feed)?;
        Ok(self)
    }

    fn load_routes(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading routes...");
        let now = Instant::now();
        feed.stream_routes(|(_, row)| {
            let route = convert_route(row);
            if self.route_by_id(&route.id).is_some() {
                warn!("Route {} appears twice, keeping the later row", route.id);
            }
            self.upsert_route(route);
        })?;
        debug!("Loading routes took {:?}", now.elapsed());
        Ok(())
    }

    fn load_locations(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading locations...");
        let now = Instant::now();
        feed.stream_locations(|(_, row)| {
            self.add_location(Location::new(row.city, row.country));
        })?;
        debug!("Loading locations took {:?}", now.elapsed());
        Ok(())
    }

    fn load_users(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading users...");
        let now = Instant::now();
        feed.stream_users(|(_, row)| {
            let user = convert_user(row);
            if self.user_by_nickname(&user.nickname).is_some() {
                warn!("User {} appears twice, keeping the later row", user.nickname);
            }
            self.upsert_user(user);
        })?;
        debug!("Loading users took {:?}", now.elapsed());
        Ok(())
    }

    fn load_highlights(&mut self, feed: &Feed) -> Result<(), feed::Error> {
        debug!("Loading highlights...");
        let now = Instant::now();
        let result = feed.stream_highlights(|(_, row)| {
            if self.route_by_id(&row.route_id).is_none() {
                warn!("Highlight for unknown route {}", row.route_id);
            }
            self.highlights_mut().insert(row.route_id, row.highlight);
        });
        match result {
            Ok(()) => {}
            // The highlights table is optional, feeds without one fall back
            // to the shared default list.
            Err(feed::Error::FileNotFound(_)) => {}
            Err(err) => return Err(err),
        }
        debug!("Loading highlights took {:?}", now.elapsed());
        Ok(())
    }
}

fn convert_route(row: FeedRoute) -> Route {
    let FeedRoute {
        id,
        name,
        location,
        description,
        kind,
        difficulty,
        duration,
        categories,
        points,
        price,
    } = row;

    let kind = kind
        .as_deref()
        .filter(|alias| !alias.trim().is_empty())
        .map(|alias| {
            RouteKind::from_alias(alias).unwrap_or_else(|| {
                warn!("Route {id}: unknown type {alias:?} treated as other");
                RouteKind::Other
            })
        })
        .unwrap_or_default();

    let difficulty = difficulty
        .as_deref()
        .filter(|alias| !alias.trim().is_empty())
        .map(|alias| {
            Difficulty::from_alias(alias).unwrap_or_else(|| {
                warn!("Route {id}: unknown difficulty {alias:?} treated as easy");
                Difficulty::Easy
            })
        })
        .unwrap_or_default();

    let duration = duration
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .and_then(|text| {
            let parsed = RouteDuration::parse(text);
            if parsed.is_none() {
                warn!("Route {id}: unreadable duration {text:?}");
            }
            parsed
        });

    let price = price.unwrap_or(0.0);
    if price < 0.0 {
        warn!("Route {id}: negative price {price} clamped to 0");
    }

    let mut route = Route::new(id, name, location, description)
        .with_kind(kind)
        .with_difficulty(difficulty)
        .with_points(points.unwrap_or(0))
        .with_price(price);
    if let Some(duration) = duration {
        route = route.with_duration(duration);
    }
    if let Some(categories) = categories {
        route = route.with_categories(categories.split(';'));
    }
    route
}

fn convert_user(row: FeedUser) -> User {
    let FeedUser {
        nickname,
        description,
        rating,
        visited_countries,
        created_routes,
    } = row;

    let mut user = User::new(nickname, description)
        .with_visited_countries(visited_countries.unwrap_or(0))
        .with_created_routes(created_routes.unwrap_or(0));
    if let Some(rating) = rating {
        if !(0.0..=5.0).contains(&rating) {
            warn!("User {}: rating {rating} clamped to 0..=5", user.nickname);
        }
        user = user.with_rating(rating.clamp(0.0, 5.0));
    }
    user
}
