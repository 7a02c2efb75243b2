use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::PriceTier;

/// Storage key the signed-in identity is persisted under.
pub const SESSION_KEY: &str = "auth_user";

/// Credentials that sign in as the fixed demo identity.
pub const DEMO_EMAIL: &str = "test@example.com";
pub const DEMO_PASSWORD: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// In the order the user gave them.
    pub favorite_cuisines: Vec<String>,
    pub favorite_neighborhoods: Vec<String>,
    pub price_range: PriceTier,
}

impl Preferences {
    fn new(cuisines: &[&str], neighborhoods: &[&str], price_range: PriceTier) -> Self {
        Self {
            favorite_cuisines: cuisines.iter().map(|c| (*c).to_owned()).collect(),
            favorite_neighborhoods: neighborhoods.iter().map(|n| (*n).to_owned()).collect(),
            price_range,
        }
    }

    /// Preferences given to freshly registered accounts.
    #[must_use]
    pub fn signup_defaults() -> Self {
        Self::new(&["American"], &["Midtown"], PriceTier::Moderate)
    }
}

/// A signed-in identity. Exists only client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl Session {
    /// The fixed identity behind the demo credentials.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            id: "1".to_owned(),
            email: DEMO_EMAIL.to_owned(),
            name: "Test User".to_owned(),
            preferences: Some(Preferences::new(
                &["Italian", "American"],
                &["West Village", "SoHo"],
                PriceTier::Moderate,
            )),
        }
    }

    /// Demo identity re-labelled for an arbitrary email; the display name is
    /// the part before `@`.
    #[must_use]
    pub fn for_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default().to_owned();
        Self {
            email: email.to_owned(),
            name,
            ..Self::demo()
        }
    }

    /// A newly registered identity, keyed by the signup instant in
    /// milliseconds.
    #[must_use]
    pub fn registered(email: &str, name: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis().to_string(),
            email: email.to_owned(),
            name: name.to_owned(),
            preferences: Some(Preferences::signup_defaults()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn for_email_derives_name_from_local_part() {
        let session = Session::for_email("ada@lovelace.dev");
        assert_eq!(session.name, "ada");
        assert_eq!(session.email, "ada@lovelace.dev");
        assert_eq!(session.id, "1");
        assert_eq!(session.preferences, Session::demo().preferences);
    }

    #[test]
    fn for_email_without_at_uses_whole_string() {
        assert_eq!(Session::for_email("nobody").name, "nobody");
    }

    #[test]
    fn registered_uses_millisecond_id_and_default_preferences() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let session = Session::registered("new@user.io", "New User", at);
        assert_eq!(session.id, at.timestamp_millis().to_string());
        let prefs = session.preferences.unwrap();
        assert_eq!(prefs.favorite_cuisines, vec!["American"]);
        assert_eq!(prefs.favorite_neighborhoods, vec!["Midtown"]);
        assert_eq!(prefs.price_range, PriceTier::Moderate);
    }

    #[test]
    fn serializes_with_camel_case_preferences() {
        let value = serde_json::to_value(Session::demo()).unwrap();
        assert_eq!(value["preferences"]["priceRange"], "$$");
        assert!(value["preferences"]["favoriteCuisines"].is_array());
        assert!(value["preferences"]["favoriteNeighborhoods"].is_array());
    }

    #[test]
    fn stored_preference_order_survives_a_round_trip() {
        let raw = r#"{"id":"1","email":"a@b.c","name":"a","preferences":{
            "favoriteCuisines":["Thai","Italian","American"],
            "favoriteNeighborhoods":["SoHo","Chelsea"],
            "priceRange":"$$"}}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        let prefs = session.preferences.as_ref().unwrap();
        assert_eq!(prefs.favorite_cuisines, vec!["Thai", "Italian", "American"]);

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value["preferences"]["favoriteNeighborhoods"],
            serde_json::json!(["SoHo", "Chelsea"])
        );
    }

    #[test]
    fn deserializes_stored_identity_without_preferences() {
        let raw = r#"{"id":"7","email":"a@b.c","name":"a"}"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert!(session.preferences.is_none());
    }
}
