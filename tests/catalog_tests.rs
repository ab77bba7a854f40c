use jaunt::catalog::{Catalog, Route, User};

fn route(id: &str, name: &str) -> Route {
    Route::new(id, name, "Berlin", "A day out")
}

#[test]
fn catalog_upsert_appends_then_replaces() {
    let mut catalog = Catalog::new();
    catalog.upsert_route(route("r1", "First"));
    catalog.upsert_route(route("r2", "Second"));
    assert_eq!(catalog.routes().len(), 2);

    catalog.upsert_route(route("r1", "First, renamed"));
    assert_eq!(catalog.routes().len(), 2);
    // The replacement keeps its slot.
    assert_eq!(catalog.routes()[0].name.as_ref(), "First, renamed");
    assert_eq!(catalog.route_by_id("r1").map(|r| r.name.as_ref()), Some("First, renamed"));
}

#[test]
fn catalog_remove_keeps_lookup_consistent() {
    let mut catalog = Catalog::new();
    catalog.upsert_route(route("r1", "First"));
    catalog.upsert_route(route("r2", "Second"));
    catalog.upsert_route(route("r3", "Third"));

    let removed = catalog.remove_route("r2");
    assert_eq!(removed.map(|r| r.id.to_string()), Some("r2".to_string()));
    assert_eq!(catalog.routes().len(), 2);
    assert!(catalog.route_by_id("r2").is_none());

    // Later entries shifted down but stay reachable by id.
    assert_eq!(catalog.route_by_id("r3").map(|r| r.name.as_ref()), Some("Third"));
    let ids: Vec<_> = catalog.routes().iter().map(|r| r.id.as_ref()).collect();
    assert_eq!(ids, vec!["r1", "r3"]);
}

#[test]
fn catalog_remove_unknown_is_none() {
    let mut catalog = Catalog::new();
    catalog.upsert_route(route("r1", "First"));
    assert!(catalog.remove_route("nope").is_none());
    assert_eq!(catalog.routes().len(), 1);
}

#[test]
fn catalog_users_upsert_and_remove() {
    let mut catalog = Catalog::new();
    catalog.upsert_user(User::new("anna", "Hiker"));
    catalog.upsert_user(User::new("bo", "Cyclist"));

    catalog.upsert_user(User::new("anna", "Hiker and packrafter"));
    assert_eq!(catalog.users().len(), 2);
    assert_eq!(
        catalog.user_by_nickname("anna").map(|u| u.description.as_ref()),
        Some("Hiker and packrafter")
    );

    assert!(catalog.remove_user("anna").is_some());
    assert!(catalog.user_by_nickname("anna").is_none());
    assert_eq!(catalog.user_by_nickname("bo").map(|u| u.nickname.as_ref()), Some("bo"));
}

#[test]
fn catalog_lookup_unknown_is_none() {
    let catalog = Catalog::new();
    assert!(catalog.route_by_id("r1").is_none());
    assert!(catalog.user_by_nickname("anna").is_none());
}

#[test]
fn catalog_highlights_fall_back_to_default() {
    let mut catalog = Catalog::new();
    catalog.upsert_route(route("r1", "First"));
    catalog.highlights_mut().insert("r1", "The hidden courtyard");

    assert_eq!(catalog.highlights().for_route("r1").len(), 1);
    assert!(!catalog.highlights().for_route("r2").is_empty());
    assert!(!catalog.highlights().is_tailored("r2"));
}
