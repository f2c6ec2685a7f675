use model::{
    rank_by_proximity,
    washroom::{NewWashroom, Washroom},
    WithId, WithProximity,
};
use utility::{
    geo::{bounds_around, BoundingBox, Coordinate},
    id::Id,
};

use crate::{client::WashroomApiClient, ApiResult};

/// Default search radius for nearby queries, in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 2.0;

impl WashroomApiClient {
    pub async fn washrooms(&self) -> ApiResult<Vec<WithId<Washroom>>> {
        self.get("washrooms/").await
    }

    /// Listings inside a bounding box. The box is flattened into the
    /// backend's `min_lat`/`max_lat`/`min_lon`/`max_lon` query parameters
    /// here; the geo helpers stay unaware of the URL scheme.
    pub async fn washrooms_in_bounds(
        &self,
        bounds: &BoundingBox,
    ) -> ApiResult<Vec<WithId<Washroom>>> {
        self.get_with_query(
            "washrooms/",
            &[
                ("min_lat", bounds.min_latitude),
                ("max_lat", bounds.max_latitude),
                ("min_lon", bounds.min_longitude),
                ("max_lon", bounds.max_longitude),
            ],
        )
        .await
    }

    pub async fn washroom(&self, id: &Id<Washroom>) -> ApiResult<WithId<Washroom>> {
        self.get(&format!("washrooms/{id}")).await
    }

    pub async fn create_washroom(
        &self,
        washroom: &NewWashroom,
    ) -> ApiResult<WithId<Washroom>> {
        self.post("washrooms/", washroom).await
    }

    /// One call for the whole map flow: derive a query box around the
    /// origin, fetch the listings inside it, and return them ranked by
    /// ascending distance with travel estimates attached. An empty result
    /// simply means nothing is listed within the radius.
    pub async fn nearby_washrooms(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> ApiResult<Vec<WithProximity<WithId<Washroom>>>> {
        let bounds = bounds_around(origin, radius_km);
        let washrooms = self.washrooms_in_bounds(&bounds).await?;
        Ok(rank_by_proximity(origin, washrooms))
    }
}
