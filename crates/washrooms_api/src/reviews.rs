use model::{
    review::{NewReview, Review, ReviewUpdate},
    user::User,
    washroom::Washroom,
    WithId,
};
use utility::id::Id;

use crate::{client::WashroomApiClient, ApiResult};

impl WashroomApiClient {
    /// Reviews for one washroom, newest first as the backend orders them.
    pub async fn reviews_by_washroom(
        &self,
        washroom: &Id<Washroom>,
    ) -> ApiResult<Vec<WithId<Review>>> {
        self.get(&format!("review/washroom/{washroom}")).await
    }

    pub async fn reviews_by_user(
        &self,
        user: &Id<User>,
    ) -> ApiResult<Vec<WithId<Review>>> {
        self.get(&format!("review/user/{user}")).await
    }

    pub async fn create_review(&self, review: &NewReview) -> ApiResult<WithId<Review>> {
        self.post("review/", review).await
    }

    pub async fn update_review(
        &self,
        id: &Id<Review>,
        update: &ReviewUpdate,
    ) -> ApiResult<WithId<Review>> {
        self.put(&format!("review/{id}"), update).await
    }

    /// Returns the deleted review, matching the backend's response body.
    pub async fn delete_review(&self, id: &Id<Review>) -> ApiResult<WithId<Review>> {
        self.delete(&format!("review/{id}")).await
    }
}
