use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and per degree of longitude at the
/// equator). Good enough for query boxes, not for geodesy.
pub const KM_PER_DEGREE: f64 = 111.0;

/// A point on the map in degrees. Latitude is expected in [-90, 90] and
/// longitude in [-180, 180]; nothing in here enforces that, out-of-range
/// values just produce out-of-range results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite. Only NaN and infinity make a
    /// coordinate unusable for distance calculations.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Axis-aligned latitude/longitude rectangle used to constrain backend
/// queries. Derived on the fly, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Great-circle distance between two coordinates in kilometers, via the
/// haversine formula. No rounding happens here; formatting is the
/// caller's job.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();

    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// A box of roughly `radius_km` around `center`. The longitude spread
/// widens with latitude; at the poles the cosine denominator degenerates
/// to zero, in which case the equator spread is used instead of dividing
/// by zero. A radius of 0 degenerates to a point box, which is fine;
/// callers treat empty query results as a normal case.
///
/// Bounds are not normalized: near the antimeridian or the poles they can
/// leave [-180, 180] or [-90, 90]. Callers that need wraparound have to
/// split or clamp the box themselves.
pub fn bounds_around(center: Coordinate, radius_km: f64) -> BoundingBox {
    let delta_lat = radius_km / KM_PER_DEGREE;

    // cos(±90°) is not exactly zero in floating point, only ~6e-17, so the
    // degenerate-pole check needs a tolerance rather than == 0.
    let denominator = KM_PER_DEGREE * center.latitude.to_radians().cos();
    let delta_lon = if denominator.is_finite() && denominator.abs() >= 1e-9 {
        radius_km / denominator
    } else {
        delta_lat
    };

    BoundingBox {
        min_latitude: center.latitude - delta_lat,
        max_latitude: center.latitude + delta_lat,
        min_longitude: center.longitude - delta_lon,
        max_longitude: center.longitude + delta_lon,
    }
}
