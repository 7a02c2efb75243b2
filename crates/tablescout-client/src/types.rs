use serde::{Deserialize, Serialize};
use tablescout_core::PriceTier;

/// Storage key holding the bearer token issued by `POST /api/auth/login`.
pub const TOKEN_KEY: &str = "token";

/// Optional filters for `GET /api/restaurants`. Unset fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantQuery {
    pub cuisine_type: Option<String>,
    pub neighborhood: Option<String>,
    pub min_rating: Option<f64>,
    pub price_range: Option<PriceTier>,
}

impl RestaurantQuery {
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(c) = &self.cuisine_type {
            pairs.push(("cuisine_type", c.clone()));
        }
        if let Some(n) = &self.neighborhood {
            pairs.push(("neighborhood", n.clone()));
        }
        if let Some(r) = self.min_rating {
            pairs.push(("min_rating", r.to_string()));
        }
        if let Some(p) = self.price_range {
            pairs.push(("price_range", p.symbol().to_owned()));
        }
        pairs
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}
