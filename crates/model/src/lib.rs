use std::fmt::Debug;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use serde_with;
use utility::{
    geo::{haversine_distance, Coordinate},
    id::{HasId, Id},
    travel::{estimate_driving_time, estimate_walking_time},
};

pub mod review;
pub mod user;
pub mod washroom;

/// Anything that can be pinned to a map position. Records without a
/// usable position return `None` and are skipped by proximity ranking.
pub trait Locatable {
    fn coordinate(&self) -> Option<Coordinate>;
}

/// A record together with its backend identifier. The id rides next to
/// the flattened content, matching the backend's JSON layout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(bound(
    serialize = "V: HasId + Serialize, V::IdType: Serialize + Debug + Clone",
    deserialize = "V: HasId + Deserialize<'de>, \
                   V::IdType: Serialize + Debug + Clone + Deserialize<'de>"
))]
#[schemars(bound = "V: HasId + JsonSchema, V::IdType: Serialize + Debug + Clone")]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}

impl<V> Locatable for WithId<V>
where
    V: Locatable + HasId,
    V::IdType: Serialize + Debug + Clone,
{
    fn coordinate(&self) -> Option<Coordinate> {
        self.content.coordinate()
    }
}

/// A candidate augmented with its distance from a reference point and the
/// coarse travel-time estimates derived from that distance. Produced
/// fresh on every ranking call, never cached.
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithProximity<T> {
    pub distance_km: f64,
    pub walking_estimate: String,
    pub driving_estimate: String,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithProximity<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            walking_estimate: estimate_walking_time(distance_km),
            driving_estimate: estimate_driving_time(distance_km),
            content,
        }
    }
}

/// Sort candidates by ascending great-circle distance from `origin`.
///
/// Candidates without a finite coordinate are excluded up front. Passing
/// one is a precondition violation on the caller's side, answered with a
/// smaller result instead of a panic or an arbitrary sort position.
pub fn rank_by_proximity<T>(
    origin: Coordinate,
    candidates: Vec<T>,
) -> Vec<WithProximity<T>>
where
    T: Locatable,
{
    let mut ranked = candidates
        .into_iter()
        .filter_map(|candidate| {
            let coordinate = candidate.coordinate().filter(Coordinate::is_finite)?;
            let distance = haversine_distance(origin, coordinate);
            Some(WithProximity::new(distance, candidate))
        })
        .collect::<Vec<_>>();
    // Vec::sort_by is stable, so equal distances keep their input order
    // and repeated calls on the same input render identically.
    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin {
        id: &'static str,
        latitude: f64,
        longitude: f64,
    }

    impl Pin {
        fn new(id: &'static str, latitude: f64, longitude: f64) -> Self {
            Self {
                id,
                latitude,
                longitude,
            }
        }
    }

    impl Locatable for Pin {
        fn coordinate(&self) -> Option<Coordinate> {
            Some(Coordinate::new(self.latitude, self.longitude))
        }
    }

    #[test]
    fn ranks_closer_candidates_first() {
        // Downtown Vancouver, looking west.
        let origin = Coordinate::new(49.2827, -123.1207);
        let candidates = vec![
            Pin::new("a", 49.2606, -123.2460),
            Pin::new("b", 49.2750, -123.2200),
        ];

        let ranked = rank_by_proximity(origin, candidates);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].content.id, "b");
        assert_eq!(ranked[1].content.id, "a");
        assert!(ranked[0].distance_km < ranked[1].distance_km);
        assert!(!ranked[0].walking_estimate.is_empty());
        assert!(!ranked[0].driving_estimate.is_empty());
        assert!(!ranked[1].walking_estimate.is_empty());
        assert!(!ranked[1].driving_estimate.is_empty());
    }

    #[test]
    fn equal_distances_keep_their_input_order() {
        let origin = Coordinate::new(0.0, 0.0);
        // Mirrored east/west, same distance from the origin.
        let candidates = vec![
            Pin::new("east", 0.0, 1.0),
            Pin::new("west", 0.0, -1.0),
            Pin::new("east-again", 0.0, 1.0),
        ];

        let ranked = rank_by_proximity(origin, candidates);

        let order = ranked
            .iter()
            .map(|entry| entry.content.id)
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["east", "west", "east-again"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let origin = Coordinate::new(49.2827, -123.1207);
        let make_candidates = || {
            vec![
                Pin::new("a", 49.2606, -123.2460),
                Pin::new("b", 49.2750, -123.2200),
                Pin::new("c", 49.2900, -123.1300),
            ]
        };

        let first = rank_by_proximity(origin, make_candidates());
        let second = rank_by_proximity(origin, make_candidates());

        let ids = |ranked: &[WithProximity<Pin>]| {
            ranked
                .iter()
                .map(|entry| entry.content.id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn candidates_without_a_usable_coordinate_are_excluded() {
        let origin = Coordinate::new(0.0, 0.0);
        let candidates = vec![
            Pin::new("broken", f64::NAN, 0.0),
            Pin::new("ok", 1.0, 1.0),
            Pin::new("far-gone", f64::INFINITY, f64::INFINITY),
        ];

        let ranked = rank_by_proximity(origin, candidates);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].content.id, "ok");
    }

    #[test]
    fn empty_input_is_a_normal_case() {
        let origin = Coordinate::new(0.0, 0.0);
        let ranked = rank_by_proximity::<Pin>(origin, Vec::new());
        assert!(ranked.is_empty());
    }
}
