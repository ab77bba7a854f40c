use std::{fmt::Display, sync::Arc};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::catalog::{Catalog, User};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("No route with id: {0}")]
    UnknownRoute(String),
    #[error("{buyer} already owns route {route_id}")]
    AlreadyOwned { route_id: String, buyer: String },
    #[error("Rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
    #[error("{reviewer} has not purchased route {route_id}")]
    NotOwned { route_id: String, reviewer: String },
    #[error("Nickname is already taken: {0}")]
    NicknameTaken(String),
    #[error("No application from: {0}")]
    UnknownApplication(String),
    #[error("Application from {0} was already decided")]
    AlreadyDecided(String),
}

/// Proof that a buyer owns a route, priced as it was at checkout.
#[derive(Debug, Clone)]
pub struct Purchase {
    pub route_id: Arc<str>,
    pub buyer: Arc<str>,
    pub price_paid: f64,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Review {
    pub route_id: Arc<str>,
    pub reviewer: Arc<str>,
    /// Stars, 1..=5.
    pub rating: u8,
    pub comment: Arc<str>,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to join the marketplace as a route creator.
#[derive(Debug, Clone)]
pub struct Application {
    pub nickname: Arc<str>,
    pub description: Arc<str>,
    pub status: ApplicationStatus,
    pub at: DateTime<Utc>,
}

/// Marketplace state layered on top of the catalog: who bought what, what
/// they said about it, and who wants to become a creator.
#[derive(Debug, Default, Clone)]
pub struct Market {
    purchases: Vec<Purchase>,
    reviews: Vec<Review>,
    applications: Vec<Application>,
}

impl Market {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn owns(&self, route_id: &str, buyer: &str) -> bool {
        self.purchases.iter().any(|purchase| {
            purchase.route_id.as_ref() == route_id && purchase.buyer.as_ref() == buyer
        })
    }

    pub fn purchases_by(&self, buyer: &str) -> Vec<&Purchase> {
        self.purchases
            .iter()
            .filter(|purchase| purchase.buyer.as_ref() == buyer)
            .collect()
    }

    pub fn reviews_for(&self, route_id: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|review| review.route_id.as_ref() == route_id)
            .collect()
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn pending_applications(&self) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.status == ApplicationStatus::Pending)
            .collect()
    }

    /// Records a purchase of the route at its current price.
    /// Free routes can be claimed too, which unlocks reviewing them.
    pub fn purchase(
        &mut self,
        catalog: &Catalog,
        route_id: &str,
        buyer: &str,
    ) -> Result<&Purchase, Error> {
        let route = catalog
            .route_by_id(route_id)
            .ok_or_else(|| Error::UnknownRoute(route_id.to_string()))?;
        if self.owns(route_id, buyer) {
            return Err(Error::AlreadyOwned {
                route_id: route_id.to_string(),
                buyer: buyer.to_string(),
            });
        }

        self.purchases.push(Purchase {
            route_id: route.id.clone(),
            buyer: buyer.into(),
            price_paid: route.price,
            at: Utc::now(),
        });
        let index = self.purchases.len() - 1;
        Ok(&self.purchases[index])
    }

    /// Records a review. Paid routes only accept reviews from owners, and
    /// the route's rating aggregate is recomputed on the spot.
    pub fn review(
        &mut self,
        catalog: &mut Catalog,
        route_id: &str,
        reviewer: &str,
        rating: u8,
        comment: &str,
    ) -> Result<&Review, Error> {
        if !(1..=5).contains(&rating) {
            return Err(Error::RatingOutOfRange(rating));
        }
        let route = catalog
            .route_by_id(route_id)
            .ok_or_else(|| Error::UnknownRoute(route_id.to_string()))?;
        if !route.is_free() && !self.owns(route_id, reviewer) {
            return Err(Error::NotOwned {
                route_id: route_id.to_string(),
                reviewer: reviewer.to_string(),
            });
        }
        let mut route = route.clone();

        self.reviews.push(Review {
            route_id: route.id.clone(),
            reviewer: reviewer.into(),
            rating,
            comment: comment.into(),
            at: Utc::now(),
        });

        let reviews = self.reviews_for(route_id);
        route.review_count = reviews.len() as u32;
        route.rating = reviews
            .iter()
            .map(|review| review.rating as f64)
            .sum::<f64>()
            / reviews.len() as f64;
        catalog.upsert_route(route);

        let index = self.reviews.len() - 1;
        Ok(&self.reviews[index])
    }

    /// Files a creator application. The nickname must be free among catalog
    /// users and pending applications.
    pub fn apply(
        &mut self,
        catalog: &Catalog,
        nickname: &str,
        description: &str,
    ) -> Result<&Application, Error> {
        let taken = catalog.user_by_nickname(nickname).is_some()
            || self.applications.iter().any(|application| {
                application.nickname.as_ref() == nickname
                    && application.status == ApplicationStatus::Pending
            });
        if taken {
            return Err(Error::NicknameTaken(nickname.to_string()));
        }

        self.applications.push(Application {
            nickname: nickname.into(),
            description: description.into(),
            status: ApplicationStatus::Pending,
            at: Utc::now(),
        });
        let index = self.applications.len() - 1;
        Ok(&self.applications[index])
    }

    /// Approves the nickname's pending application and adds the creator to
    /// the catalog.
    pub fn approve(&mut self, catalog: &mut Catalog, nickname: &str) -> Result<(), Error> {
        let application = self.decide(nickname, ApplicationStatus::Approved)?;
        catalog.upsert_user(User::new(
            application.nickname.clone(),
            application.description.clone(),
        ));
        Ok(())
    }

    /// Rejects the nickname's pending application. The nickname frees up for
    /// a later attempt.
    pub fn reject(&mut self, nickname: &str) -> Result<(), Error> {
        self.decide(nickname, ApplicationStatus::Rejected)?;
        Ok(())
    }

    fn decide(
        &mut self,
        nickname: &str,
        status: ApplicationStatus,
    ) -> Result<&Application, Error> {
        let mut seen = false;
        for application in self.applications.iter_mut() {
            if application.nickname.as_ref() != nickname {
                continue;
            }
            seen = true;
            if application.status == ApplicationStatus::Pending {
                application.status = status;
                return Ok(application);
            }
        }
        if seen {
            Err(Error::AlreadyDecided(nickname.to_string()))
        } else {
            Err(Error::UnknownApplication(nickname.to_string()))
        }
    }
}
