use crate::db::CatalogueStore;
use crate::models;
use crate::services::catalogue;
use crate::views::Comment;
use async_graphql::{ComplexObject, Context, ErrorExtensions, SimpleObject, ID};
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use std::convert::From;
use std::sync::Arc;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Product {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: models::ProductCategory,
    pub created_at: DateTime<Utc>,
    pub stars: f64,
    #[graphql(skip)]
    pub comment_ids: Vec<ObjectId>,
}

#[ComplexObject]
impl Product {
    /// Comments in attachment order, or the `last` most recent ones newest first.
    async fn comments(
        &self,
        ctx: &Context<'_>,
        last: Option<i32>,
    ) -> async_graphql::Result<Vec<Comment>> {
        let store = ctx.data::<Arc<dyn CatalogueStore>>()?;

        catalogue::comments_of(store.as_ref(), &self.comment_ids, last)
            .await
            .map(|comments| comments.into_iter().map(Into::into).collect())
            .map_err(|err| err.extend())
    }
}

impl From<models::Product> for Product {
    fn from(product: models::Product) -> Self {
        Self {
            id: ID(product.id.map(|id| id.to_hex()).unwrap_or_default()),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            created_at: product.created_at,
            stars: product.stars,
            comment_ids: product.comments,
        }
    }
}
