//! Minimal client for the Mapbox Directions API.
//!
//! Routing is strictly optional: every caller already has a coarse
//! travel-time estimate derived from straight-line distance, and a routed
//! duration merely supersedes that string when a token is configured and
//! the request succeeds.

use std::{env, error, fmt, sync::Arc};

use futures::future::try_join;
use log::debug;
use serde::Deserialize;
use utility::{geo::Coordinate, travel::format_duration_from_seconds};

pub const MAPBOX_API_URL: &str = "https://api.mapbox.com/directions/v5/mapbox";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteProfile {
    Walking,
    Driving,
}

impl RouteProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
        }
    }
}

impl fmt::Display for RouteProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct MapboxConfig {
    pub access_token: String,
}

impl MapboxConfig {
    pub fn new<S>(access_token: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            access_token: access_token.into(),
        }
    }

    /// `None` when no token is configured; callers then stay on the
    /// coarse estimates.
    pub fn from_env() -> Option<Self> {
        env::var("MAPBOX_ACCESS_TOKEN").ok().map(Self::new)
    }
}

#[derive(Debug, Clone)]
pub struct RouteSummary {
    pub profile: RouteProfile,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

impl RouteSummary {
    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }

    /// Routed duration in the same display buckets as the coarse
    /// estimates, so one string can replace the other.
    pub fn duration_text(&self) -> String {
        format_duration_from_seconds(self.duration_seconds)
    }
}

#[derive(Debug, Clone)]
pub enum DirectionsError {
    RequestError(Arc<reqwest::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    NoRoute,
}

impl error::Error for DirectionsError {}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DirectionsError::RequestError(e) => {
                write!(f, "HTTP request error: {}", e)
            }
            DirectionsError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid response ({}) {}: {}", status_code, url, text)
                }
                None => write!(f, "Invalid response ({}) {}", status_code, url),
            },
            DirectionsError::NoRoute => write!(f, "No route found."),
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(e: reqwest::Error) -> Self {
        DirectionsError::RequestError(Arc::new(e))
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    distance: f64,
    duration: f64,
}

#[derive(Debug, Clone)]
pub struct DirectionsClient {
    config: MapboxConfig,
    http: reqwest::Client,
}

impl DirectionsClient {
    pub fn new(config: MapboxConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch the best route for one profile. Mapbox wants coordinates as
    /// `lon,lat` pairs, the reverse of how they are carried everywhere
    /// else in this workspace.
    pub async fn route(
        &self,
        profile: RouteProfile,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteSummary, DirectionsError> {
        let url = format!(
            "{MAPBOX_API_URL}/{profile}/{},{};{},{}",
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude
        );
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("access_token", self.config.access_token.as_str()),
                ("overview", "false"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status_code = response.status();
            return Err(match response.text().await {
                Ok(text) => DirectionsError::InvalidResponse {
                    status_code,
                    url,
                    response: Some(text),
                },
                Err(_) => DirectionsError::InvalidResponse {
                    status_code,
                    url,
                    response: None,
                },
            });
        }

        let parsed: DirectionsResponse = response.json().await?;
        parsed
            .routes
            .into_iter()
            .next()
            .map(|route| RouteSummary {
                profile,
                distance_meters: route.distance,
                duration_seconds: route.duration,
            })
            .ok_or(DirectionsError::NoRoute)
    }

    /// Both profiles in one round trip pair, for views that show walk and
    /// drive times side by side.
    pub async fn walking_and_driving(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<(RouteSummary, RouteSummary), DirectionsError> {
        try_join(
            self.route(RouteProfile::Walking, origin, destination),
            self.route(RouteProfile::Driving, origin, destination),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_responses_parse_down_to_a_summary() {
        let json = r#"{
            "routes": [
                {"distance": 1820.4, "duration": 1311.0, "weight": 1400.1},
                {"distance": 2100.0, "duration": 1500.0, "weight": 1600.0}
            ],
            "waypoints": [],
            "code": "Ok"
        }"#;

        let parsed: DirectionsResponse = serde_json::from_str(json).unwrap();
        let best = parsed.routes.into_iter().next().unwrap();
        assert_eq!(best.distance, 1820.4);
        assert_eq!(best.duration, 1311.0);
    }

    #[test]
    fn summaries_format_like_the_coarse_estimates() {
        let summary = RouteSummary {
            profile: RouteProfile::Walking,
            distance_meters: 1820.4,
            duration_seconds: 1311.0,
        };
        assert!((summary.distance_km() - 1.8204).abs() < 1e-9);
        assert_eq!(summary.duration_text(), "22 min");
    }
}
