use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{user::User, washroom::Washroom};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A user's review of a washroom. When reviews are listed for a known
/// washroom the backend omits `washroom_id`, and likewise `user_id` when
/// listing by user, hence both being optional.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Review {
    pub washroom_id: Option<Id<Washroom>>,
    pub user_id: Option<Id<User>>,
    pub rating: u8,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HasId for Review {
    type IdType = String;
}

/// Payload for submitting a review. The backend rejects ratings outside
/// [`MIN_RATING`, `MAX_RATING`]; `clamped_rating` mirrors what the star
/// input widget enforces client-side.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewReview {
    pub washroom_id: Id<Washroom>,
    pub user_id: Option<Id<User>>,
    pub rating: u8,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Payload for editing an existing review.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReviewUpdate {
    pub rating: u8,
    pub title: Option<String>,
    pub description: Option<String>,
}

pub fn clamped_rating(rating: u8) -> u8 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_clamp_to_the_star_scale() {
        assert_eq!(clamped_rating(0), 1);
        assert_eq!(clamped_rating(3), 3);
        assert_eq!(clamped_rating(9), 5);
    }
}
