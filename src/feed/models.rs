use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FeedRoute {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub difficulty: Option<String>,
    pub duration: Option<String>,
    pub points: Option<u32>,
    pub price: Option<f64>,
    // Semicolon-separated category identifiers.
    pub categories: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FeedLocation {
    pub city: String,
    pub country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FeedUser {
    pub nickname: String,
    pub description: String,
    pub rating: Option<f64>,
    pub visited_countries: Option<u32>,
    pub created_routes: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FeedHighlight {
    pub route_id: String,
    pub highlight: String,
}
