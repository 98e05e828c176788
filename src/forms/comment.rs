use crate::models;
use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, InputObject)]
pub struct CommentCreateInput {
    #[validate(pattern = r"\S")]
    pub title: String,
    pub body: Option<String>,
    #[validate(minimum = 1)]
    #[validate(maximum = 5)]
    pub stars: i32,
}

impl From<CommentCreateInput> for models::Comment {
    fn from(form: CommentCreateInput) -> Self {
        models::Comment {
            id: None,
            title: form.title,
            body: form.body,
            stars: form.stars,
            date: bson::DateTime::now().to_chrono(),
        }
    }
}
