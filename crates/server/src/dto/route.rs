use jaunt::{
    catalog::{Catalog, Route},
    market::Market,
};
use serde::{Deserialize, Serialize};

use crate::dto::ReviewDto;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDto {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub difficulty: String,
    pub duration: Option<String>,
    pub points: u32,
    pub price: f64,
    pub categories: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
}

impl RouteDto {
    pub fn from(route: &Route) -> Self {
        Self {
            id: route.id.to_string(),
            name: route.name.to_string(),
            location: route.location.to_string(),
            description: route.description.to_string(),
            kind: route.kind.to_string(),
            difficulty: route.difficulty.to_string(),
            duration: route.duration.map(|duration| duration.to_string()),
            points: route.points,
            price: route.price,
            categories: route
                .categories
                .iter()
                .map(|category| category.to_string())
                .collect(),
            rating: route.rating,
            review_count: route.review_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDetailDto {
    pub route: RouteDto,
    pub highlights: Vec<String>,
    pub reviews: Vec<ReviewDto>,
}

impl RouteDetailDto {
    pub fn from(route: &Route, catalog: &Catalog, market: &Market) -> Self {
        let highlights = catalog
            .highlights()
            .for_route(&route.id)
            .iter()
            .map(|highlight| highlight.to_string())
            .collect();
        let reviews = market
            .reviews_for(&route.id)
            .into_iter()
            .map(ReviewDto::from)
            .collect();
        Self {
            route: RouteDto::from(route),
            highlights,
            reviews,
        }
    }
}
