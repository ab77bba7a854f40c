use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use jaunt::catalog::{Catalog, Difficulty, RouteKind};
use jaunt::feed::{Error, Feed};
use jaunt::search::RouteFilter;
use zip::{ZipWriter, write::SimpleFileOptions};

const ROUTES_HEADER: &str = "id,name,location,description,type,difficulty,duration,points,price,categories";
const LOCATIONS_HEADER: &str = "city,country";
const USERS_HEADER: &str = "nickname,description,rating,visited_countries,created_routes";

/// Builds a feed archive under a test-private temp directory.
fn write_feed_zip(test: &str, files: &[(&str, String)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("jaunt-feed-{test}"));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("feed.zip");
    let mut zip = ZipWriter::new(fs::File::create(&path).unwrap());
    for (name, content) in files {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

fn load(path: &Path) -> Catalog {
    let feed = Feed::new().from_zip(path).unwrap();
    Catalog::new().load_feed(feed).unwrap()
}

fn cleanup(path: PathBuf) {
    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn feed_round_trip_populates_the_catalog() {
    let path = write_feed_zip(
        "round-trip",
        &[
            (
                "routes.csv",
                format!(
                    "{ROUTES_HEADER}\n\
                     r1,Berlin Street Art Tour,Berlin,Murals and markets,Vandring,Moderate,2 days,12,9.5,Food;ART\n\
                     r2,Night Market Crawl,Taipei,Snacks after dark,,,3 hours,5,0,\n"
                ),
            ),
            (
                "locations.csv",
                format!("{LOCATIONS_HEADER}\nBerlin,Germany\nTaipei,Taiwan\n"),
            ),
            (
                "users.csv",
                format!("{USERS_HEADER}\nanna,Street art guide,4.6,12,3\n"),
            ),
            (
                "highlights.csv",
                "route_id,highlight\n\
                 r1,East Side Gallery at sunrise\n\
                 r1,Hidden courtyard murals\n"
                    .to_string(),
            ),
        ],
    );
    let catalog = load(&path);

    assert_eq!(catalog.routes().len(), 2);
    let r1 = catalog.route_by_id("r1").unwrap();
    assert_eq!(r1.kind, RouteKind::Hiking);
    assert_eq!(r1.difficulty, Difficulty::Medium);
    assert_eq!(r1.duration.unwrap().as_hours(), 48.0);
    assert_eq!(r1.points, 12);
    assert_eq!(r1.price, 9.5);
    let categories: Vec<_> = r1.categories.iter().map(|c| c.as_ref()).collect();
    assert_eq!(categories, vec!["food", "art"]);

    let r2 = catalog.route_by_id("r2").unwrap();
    assert_eq!(r2.kind, RouteKind::Other);
    assert_eq!(r2.difficulty, Difficulty::Easy);
    assert!(r2.categories.is_empty());

    assert_eq!(catalog.locations().len(), 2);

    let anna = catalog.user_by_nickname("anna").unwrap();
    assert_eq!(anna.rating, Some(4.6));
    assert_eq!(anna.visited_countries, 12);
    assert_eq!(anna.created_routes, 3);

    assert_eq!(catalog.highlights().for_route("r1").len(), 2);
    assert!(catalog.highlights().is_tailored("r1"));
    assert!(!catalog.highlights().is_tailored("r2"));

    cleanup(path);
}

#[test]
fn feed_without_highlights_uses_the_default_list() {
    let path = write_feed_zip(
        "no-highlights",
        &[
            (
                "routes.csv",
                format!("{ROUTES_HEADER}\nr1,Harbour Loop,Oslo,Along the water,walking,easy,2 hours,4,0,\n"),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let catalog = load(&path);

    assert!(!catalog.highlights().for_route("r1").is_empty());
    assert!(!catalog.highlights().is_tailored("r1"));
    assert_eq!(catalog.highlights().tailored_count(), 0);

    cleanup(path);
}

#[test]
fn feed_without_routes_file_fails() {
    let path = write_feed_zip(
        "no-routes",
        &[
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let feed = Feed::new().from_zip(&path).unwrap();

    match Catalog::new().load_feed(feed) {
        Err(Error::FileNotFound(name)) => assert_eq!(name, "routes.csv"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("a feed without routes should not load"),
    }

    cleanup(path);
}

#[test]
fn feed_skips_malformed_rows() {
    let path = write_feed_zip(
        "malformed",
        &[
            (
                "routes.csv",
                format!(
                    "{ROUTES_HEADER}\n\
                     r1,Good Route,Berlin,Fine,walking,easy,2 hours,3,0,\n\
                     rx,Broken Route,Berlin,Bad,walking,easy,2 hours,many,0,\n"
                ),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let catalog = load(&path);

    assert_eq!(catalog.routes().len(), 1);
    assert!(catalog.route_by_id("r1").is_some());
    assert!(catalog.route_by_id("rx").is_none());

    cleanup(path);
}

#[test]
fn feed_duplicate_route_keeps_the_later_row() {
    let path = write_feed_zip(
        "duplicate",
        &[
            (
                "routes.csv",
                format!(
                    "{ROUTES_HEADER}\n\
                     r1,First Name,Berlin,One,walking,easy,2 hours,3,0,\n\
                     r1,Second Name,Berlin,Two,walking,easy,2 hours,3,0,\n"
                ),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let catalog = load(&path);

    assert_eq!(catalog.routes().len(), 1);
    assert_eq!(catalog.route_by_id("r1").map(|r| r.name.as_ref()), Some("Second Name"));

    cleanup(path);
}

#[test]
fn feed_unknown_aliases_fall_back() {
    let path = write_feed_zip(
        "aliases",
        &[
            (
                "routes.csv",
                format!("{ROUTES_HEADER}\nr1,Mystery Tour,Atlantis,Down we go,submarine,impossible,whenever,0,0,\n"),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let catalog = load(&path);

    let route = catalog.route_by_id("r1").unwrap();
    assert_eq!(route.kind, RouteKind::Other);
    assert_eq!(route.difficulty, Difficulty::Easy);
    assert!(route.duration.is_none());

    cleanup(path);
}

#[test]
fn feed_non_finite_duration_falls_back() {
    let path = write_feed_zip(
        "non-finite",
        &[
            (
                "routes.csv",
                format!("{ROUTES_HEADER}\nr1,Endless Walk,Berlin,No end in sight,walking,easy,nan hours,3,0,\n"),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            ("users.csv", format!("{USERS_HEADER}\n")),
        ],
    );
    let catalog = load(&path);

    let route = catalog.route_by_id("r1").unwrap();
    assert!(route.duration.is_none());
    // An unreadable duration never hides the route from an open filter.
    assert!(RouteFilter::new().matches(route));

    cleanup(path);
}

#[test]
fn feed_clamps_out_of_range_numbers() {
    let path = write_feed_zip(
        "clamps",
        &[
            (
                "routes.csv",
                format!("{ROUTES_HEADER}\nr1,Bargain Tour,Berlin,Cheap,walking,easy,2 hours,3,-5,\n"),
            ),
            ("locations.csv", format!("{LOCATIONS_HEADER}\n")),
            (
                "users.csv",
                format!("{USERS_HEADER}\nanna,Too enthusiastic,7.5,1,1\n"),
            ),
        ],
    );
    let catalog = load(&path);

    let route = catalog.route_by_id("r1").unwrap();
    assert_eq!(route.price, 0.0);
    assert!(route.is_free());

    let anna = catalog.user_by_nickname("anna").unwrap();
    assert_eq!(anna.rating, Some(5.0));

    cleanup(path);
}

#[test]
fn feed_without_storage_gives_an_empty_catalog() {
    let catalog = Catalog::new().load_feed(Feed::new()).unwrap();

    assert!(catalog.routes().is_empty());
    assert!(catalog.locations().is_empty());
    assert!(catalog.users().is_empty());
    // The shared default highlights are still there.
    assert!(!catalog.highlights().for_route("r1").is_empty());
}
