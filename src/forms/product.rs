use crate::models;
use async_graphql::InputObject;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, InputObject)]
pub struct ProductCreateInput {
    #[validate(pattern = r"\S")]
    pub name: String,
    pub description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: f64,
    pub category: models::ProductCategory,
}

impl From<ProductCreateInput> for models::Product {
    fn from(form: ProductCreateInput) -> Self {
        models::Product {
            id: None,
            name: form.name,
            description: form.description,
            price: form.price,
            category: form.category,
            created_at: bson::DateTime::now().to_chrono(),
            comments: vec![],
            ratings: vec![],
            stars: 0.0,
        }
    }
}
