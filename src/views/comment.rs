use crate::models;
use async_graphql::{SimpleObject, ID};
use chrono::{DateTime, Utc};
use std::convert::From;

#[derive(Debug, Clone, SimpleObject)]
pub struct Comment {
    #[graphql(name = "_id")]
    pub id: ID,
    pub title: String,
    pub body: Option<String>,
    pub stars: i32,
    pub date: DateTime<Utc>,
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: ID(comment.id.map(|id| id.to_hex()).unwrap_or_default()),
            title: comment.title,
            body: comment.body,
            stars: comment.stars,
            date: comment.date,
        }
    }
}
