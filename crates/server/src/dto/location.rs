use jaunt::catalog::Location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub city: String,
    pub country: String,
}

impl LocationDto {
    pub fn from(location: &Location) -> Self {
        Self {
            city: location.city.to_string(),
            country: location.country.to_string(),
        }
    }
}
