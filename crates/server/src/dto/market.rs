use jaunt::market::{Application, Purchase, Review};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub route_id: String,
    pub buyer: String,
    pub price_paid: f64,
    pub at: String,
}

impl PurchaseDto {
    pub fn from(purchase: &Purchase) -> Self {
        Self {
            route_id: purchase.route_id.to_string(),
            buyer: purchase.buyer.to_string(),
            price_paid: purchase.price_paid,
            at: purchase.at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDto {
    pub route_id: String,
    pub reviewer: String,
    pub rating: u8,
    pub comment: String,
    pub at: String,
}

impl ReviewDto {
    pub fn from(review: &Review) -> Self {
        Self {
            route_id: review.route_id.to_string(),
            reviewer: review.reviewer.to_string(),
            rating: review.rating,
            comment: review.comment.to_string(),
            at: review.at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub nickname: String,
    pub description: String,
    pub status: String,
    pub at: String,
}

impl ApplicationDto {
    pub fn from(application: &Application) -> Self {
        Self {
            nickname: application.nickname.to_string(),
            description: application.description.to_string(),
            status: application.status.to_string(),
            at: application.at.to_rfc3339(),
        }
    }
}
