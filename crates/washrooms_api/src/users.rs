use model::{
    user::{NewUser, User, UserUpdate},
    WithId,
};
use utility::id::Id;

use crate::{client::WashroomApiClient, ApiResult};

impl WashroomApiClient {
    pub async fn users(&self) -> ApiResult<Vec<WithId<User>>> {
        self.get("users").await
    }

    pub async fn user(&self, id: &Id<User>) -> ApiResult<WithId<User>> {
        self.get(&format!("users/{id}")).await
    }

    pub async fn create_user(&self, user: &NewUser) -> ApiResult<WithId<User>> {
        self.post("users/", user).await
    }

    pub async fn update_user(
        &self,
        id: &Id<User>,
        update: &UserUpdate,
    ) -> ApiResult<WithId<User>> {
        self.patch(&format!("users/{id}"), update).await
    }

    pub async fn delete_user(&self, id: &Id<User>) -> ApiResult<WithId<User>> {
        self.delete(&format!("users/{id}")).await
    }
}
