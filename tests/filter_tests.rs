use jaunt::{
    catalog::{Difficulty, Route, RouteKind},
    search::RouteFilter,
    shared::{DurationUnit, RouteDuration},
};

fn route(id: &str) -> Route {
    Route::new(id, format!("Route {id}"), "Berlin", "A day out")
}

#[test]
fn filter_default_passes_everything() {
    let filter = RouteFilter::new();
    assert!(filter.matches(&route("a")));
    assert!(filter.matches(
        &route("b")
            .with_kind(RouteKind::Camper)
            .with_duration(RouteDuration::from_days(14.0))
            .with_points(900)
            .with_price(4999.0)
    ));
    assert!(!filter.is_active());
}

#[test]
fn filter_kind_is_exact() {
    let mut filter = RouteFilter::new();
    filter.kind = Some(RouteKind::Cycling);
    assert!(filter.matches(&route("a").with_kind(RouteKind::Cycling)));
    assert!(!filter.matches(&route("b").with_kind(RouteKind::Walking)));
}

#[test]
fn filter_price_bounds_are_inclusive() {
    let mut filter = RouteFilter::new();
    filter.min_price = 10.0;
    filter.max_price = 20.0;
    assert!(filter.matches(&route("a").with_price(10.0)));
    assert!(filter.matches(&route("b").with_price(20.0)));
    assert!(!filter.matches(&route("c").with_price(9.99)));
    assert!(!filter.matches(&route("d").with_price(20.01)));
}

#[test]
fn filter_min_above_max_matches_nothing() {
    let mut filter = RouteFilter::new();
    filter.min_price = 30.0;
    filter.max_price = 10.0;
    assert!(!filter.matches(&route("a").with_price(20.0)));

    let mut filter = RouteFilter::new();
    filter.duration_unit = DurationUnit::Days;
    filter.min_duration = 2.0;
    filter.max_duration = 1.0;
    // A 30 hour route touches both day 1 and day 2, the inverted bounds must
    // still exclude it.
    assert!(!filter.matches(&route("b").with_duration(RouteDuration::from_hours(30.0))));
}

#[test]
fn filter_duration_hours_is_inclusive() {
    let mut filter = RouteFilter::new();
    filter.min_duration = 2.0;
    filter.max_duration = 4.0;
    assert!(filter.matches(&route("a").with_duration(RouteDuration::from_hours(2.0))));
    assert!(filter.matches(&route("b").with_duration(RouteDuration::from_hours(4.0))));
    assert!(!filter.matches(&route("c").with_duration(RouteDuration::from_hours(4.5))));
}

#[test]
fn filter_hours_convert_day_routes_exactly() {
    let mut filter = RouteFilter::new();
    filter.min_duration = 48.0;
    filter.max_duration = 48.0;
    assert!(filter.matches(&route("a").with_duration(RouteDuration::from_days(2.0))));
    assert!(!filter.matches(&route("b").with_duration(RouteDuration::from_days(3.0))));
}

#[test]
fn filter_whole_day_routes_fit_single_day() {
    let mut filter = RouteFilter::new();
    filter.duration_unit = DurationUnit::Days;
    filter.min_duration = 1.0;
    filter.max_duration = 1.0;
    assert!(filter.matches(&route("a").with_duration(RouteDuration::from_hours(24.0))));
    // 25 hours spills into a second day but still covers day one.
    assert!(filter.matches(&route("b").with_duration(RouteDuration::from_hours(25.0))));
    // 23 hours rounds up to a full day.
    assert!(filter.matches(&route("c").with_duration(RouteDuration::from_hours(23.0))));
    assert!(!filter.matches(&route("d").with_duration(RouteDuration::from_hours(49.0))));
}

#[test]
fn filter_day_bounds_track_day_routes() {
    let mut filter = RouteFilter::new();
    filter.duration_unit = DurationUnit::Days;
    filter.min_duration = 2.0;
    filter.max_duration = 3.0;
    assert!(filter.matches(&route("a").with_duration(RouteDuration::from_days(2.0))));
    assert!(filter.matches(&route("b").with_duration(RouteDuration::from_hours(49.0))));
    assert!(!filter.matches(&route("c").with_duration(RouteDuration::from_days(1.0))));
    assert!(!filter.matches(&route("d").with_duration(RouteDuration::from_days(4.0))));
}

#[test]
fn filter_missing_duration_counts_as_zero() {
    let mut filter = RouteFilter::new();
    filter.max_duration = 5.0;
    assert!(filter.matches(&route("a")));

    filter.min_duration = 1.0;
    assert!(!filter.matches(&route("b")));
}

#[test]
fn filter_points_bounds_are_inclusive() {
    let mut filter = RouteFilter::new();
    filter.min_points = 6;
    filter.max_points = 10;
    assert!(!filter.matches(&route("a").with_points(5)));
    assert!(filter.matches(&route("b").with_points(8)));
    assert!(!filter.matches(&route("c").with_points(11)));
    assert!(filter.matches(&route("d").with_points(6)));
    assert!(filter.matches(&route("e").with_points(10)));
}

#[test]
fn filter_difficulty_is_exact() {
    let mut filter = RouteFilter::new();
    filter.difficulty = Some(Difficulty::Hard);
    assert!(filter.matches(&route("a").with_difficulty(Difficulty::Hard)));
    assert!(!filter.matches(&route("b").with_difficulty(Difficulty::Medium)));
}

#[test]
fn filter_categories_need_one_overlap() {
    let mut filter = RouteFilter::new();
    filter.categories = ["art".to_string(), "music".to_string()].into();
    assert!(filter.matches(&route("a").with_categories(["food", "art"])));
    assert!(!filter.matches(&route("b").with_categories(["food"])));
    assert!(!filter.matches(&route("c")));
}

#[test]
fn filter_empty_categories_pass() {
    let filter = RouteFilter::new();
    assert!(filter.matches(&route("a").with_categories(["food"])));
}

#[test]
fn filter_active_count_tracks_dimensions() {
    let mut filter = RouteFilter::new();
    assert_eq!(filter.active_count(), 0);

    filter.kind = Some(RouteKind::Hiking);
    filter.min_price = 5.0;
    assert_eq!(filter.active_count(), 2);

    // Flipping only the unit leaves the duration dimension inactive.
    filter.duration_unit = DurationUnit::Days;
    assert_eq!(filter.active_count(), 2);

    filter.max_duration = 3.0;
    filter.min_points = 2;
    filter.difficulty = Some(Difficulty::Easy);
    filter.categories.insert("food".to_string());
    assert_eq!(filter.active_count(), 6);
    assert!(filter.is_active());

    filter.clear();
    assert_eq!(filter.active_count(), 0);
    assert_eq!(filter, RouteFilter::default());
}
