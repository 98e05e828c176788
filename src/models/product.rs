use crate::models::ProductCategory;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>, // assigned by the store on insert
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: ProductCategory,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    pub comments: Vec<ObjectId>, // append-only, in attachment order
    pub ratings: Vec<i32>,       // stars of `comments`, same order
    pub stars: f64,              // mean of `ratings`, 0 without comments
}

impl Product {
    /// Mean of the attached ratings; what `stars` must always equal.
    pub fn mean_rating(ratings: &[i32]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }

        let total: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
        total as f64 / ratings.len() as f64
    }

    /// Attach a comment and recompute the rating from the full set.
    pub fn attach_comment(&mut self, comment_id: ObjectId, stars: i32) {
        self.comments.push(comment_id);
        self.ratings.push(stars);
        self.stars = Self::mean_rating(&self.ratings);
    }
}
