use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::{
    geo::{haversine_distance, Coordinate},
    id::HasId,
};

use crate::{Locatable, WithProximity};

/// A washroom listing as the backend returns it. The coordinate is what
/// proximity ranking works on; everything else is payload carried through
/// for display.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Washroom {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "long")]
    pub longitude: f64,
    /// Raw geometry as stored by the backend, passed through untouched.
    pub geom: Option<serde_json::Value>,
    pub opening_hours: Option<serde_json::Value>,
    pub wheelchair_access: bool,
    /// Derived from reviews server-side.
    #[serde(default)]
    pub overall_rating: f64,
    #[serde(default)]
    pub rating_count: u32,
    pub created_by: Option<String>,
}

impl Washroom {
    /// Attach distance and travel estimates relative to `origin`, or
    /// `None` if this listing has no usable coordinate.
    pub fn with_proximity_to(self, origin: Coordinate) -> Option<WithProximity<Washroom>> {
        let coordinate = self.coordinate().filter(Coordinate::is_finite)?;
        let distance = haversine_distance(origin, coordinate);
        Some(WithProximity::new(distance, self))
    }
}

impl HasId for Washroom {
    type IdType = String;
}

impl Locatable for Washroom {
    fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude, self.longitude))
    }
}

/// Payload for creating a listing. Rating fields are derived from reviews
/// on the backend, so they are not part of the payload; the creator is
/// filled in from the session server-side.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewWashroom {
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "long")]
    pub longitude: f64,
    pub geom: Option<String>,
    pub opening_hours: Option<serde_json::Value>,
    pub wheelchair_access: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(latitude: f64, longitude: f64) -> Washroom {
        Washroom {
            name: "Waterfront Station".to_owned(),
            description: String::new(),
            address: String::new(),
            city: "Vancouver".to_owned(),
            country: "Canada".to_owned(),
            latitude,
            longitude,
            geom: None,
            opening_hours: None,
            wheelchair_access: true,
            overall_rating: 4.2,
            rating_count: 17,
            created_by: None,
        }
    }

    #[test]
    fn proximity_attaches_distance_and_estimates() {
        let origin = Coordinate::new(49.2827, -123.1207);
        let ranked = listing(49.2856, -123.1115)
            .with_proximity_to(origin)
            .unwrap();

        // A few hundred meters away, so well under a kilometer.
        assert!(ranked.distance_km > 0.0);
        assert!(ranked.distance_km < 1.0);
        assert!(!ranked.walking_estimate.is_empty());
        assert!(!ranked.driving_estimate.is_empty());
        assert_eq!(ranked.content.name, "Waterfront Station");
    }

    #[test]
    fn proximity_refuses_listings_without_a_usable_coordinate() {
        let origin = Coordinate::new(49.2827, -123.1207);
        assert!(listing(f64::NAN, -123.1115).with_proximity_to(origin).is_none());
        assert!(listing(49.2856, f64::INFINITY)
            .with_proximity_to(origin)
            .is_none());
    }
}
