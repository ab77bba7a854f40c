use jaunt::catalog::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub nickname: String,
    pub description: String,
    pub rating: Option<f64>,
    pub visited_countries: u32,
    pub created_routes: u32,
}

impl UserDto {
    pub fn from(user: &User) -> Self {
        Self {
            nickname: user.nickname.to_string(),
            description: user.description.to_string(),
            rating: user.rating,
            visited_countries: user.visited_countries,
            created_routes: user.created_routes,
        }
    }
}
