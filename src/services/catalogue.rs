//! Catalogue operations behind the GraphQL resolvers.
//!
//! Every operation is a free function over a [`CatalogueStore`]; nothing is
//! kept between calls apart from what the store holds.

use crate::db::{CatalogueStore, ProductQuery};
use crate::errors::{CatalogueError, StoreError};
use crate::forms::{CommentCreateInput, ProductCreateInput, ProductFilterInput, ProductSortInput};
use crate::models;
use bson::oid::ObjectId;
use serde_valid::Validate;
use std::collections::HashMap;

pub type Result<T> = std::result::Result<T, CatalogueError>;

/// Malformed ids cannot name a stored document, so they are reported as not found.
pub fn parse_id(id: &str) -> Result<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| CatalogueError::NotFound(format!("no document with id {}", id)))
}

#[tracing::instrument(name = "Create product.", skip(store))]
pub async fn create_product(
    store: &dyn CatalogueStore,
    form: ProductCreateInput,
) -> Result<models::Product> {
    form.validate()?;

    let product = store.insert_product(form.into()).await?;
    tracing::info!("New product {:?} has been saved", product.id);

    Ok(product)
}

#[tracing::instrument(name = "Create comment.", skip(store))]
pub async fn create_comment(
    store: &dyn CatalogueStore,
    form: CommentCreateInput,
    product_id: &str,
) -> Result<models::Comment> {
    form.validate()?;
    let product_id = parse_id(product_id)?;

    if store.fetch_product(product_id).await?.is_none() {
        return Err(CatalogueError::NotFound(format!("product {}", product_id)));
    }

    let comment = store.insert_comment(form.into()).await?;
    let comment_id = comment.id.ok_or_else(|| {
        CatalogueError::Store(StoreError::Driver("comment stored without id".to_string()))
    })?;

    match store.apply_comment(product_id, comment_id, comment.stars).await? {
        Some(product) => {
            tracing::info!(
                "Comment {} attached to product {}, stars now {:.2} over {} comments",
                comment_id,
                product_id,
                product.stars,
                product.comments.len()
            );
            Ok(comment)
        }
        None => {
            // product vanished between the check and the update
            tracing::warn!(
                "Product {} disappeared, removing orphan comment {}",
                product_id,
                comment_id
            );
            if let Err(err) = store.delete_comment(comment_id).await {
                tracing::error!("Failed to remove orphan comment {}: {}", comment_id, err);
            }
            Err(CatalogueError::NotFound(format!("product {}", product_id)))
        }
    }
}

#[tracing::instrument(name = "Get product.", skip(store))]
pub async fn product(store: &dyn CatalogueStore, id: &str) -> Result<models::Product> {
    let id = parse_id(id)?;

    store
        .fetch_product(id)
        .await?
        .ok_or_else(|| CatalogueError::NotFound(format!("product {}", id)))
}

#[tracing::instrument(name = "List products.", skip(store))]
pub async fn products(
    store: &dyn CatalogueStore,
    filter: Option<ProductFilterInput>,
    sort: Option<ProductSortInput>,
) -> Result<Vec<models::Product>> {
    let query = ProductQuery::from_inputs(filter, sort)?;

    Ok(store.fetch_products(&query).await?)
}

/// Comments referenced by a product. Without `last` they come back in
/// attachment order; with `last` only the `last` most recent are returned,
/// newest first.
pub async fn comments_of(
    store: &dyn CatalogueStore,
    ids: &[ObjectId],
    last: Option<i32>,
) -> Result<Vec<models::Comment>> {
    let last = match last {
        Some(n) if n < 0 => {
            return Err(CatalogueError::Validation(format!(
                "last must not be negative, got {}",
                n
            )))
        }
        Some(n) => Some(n as usize),
        None => None,
    };
    if last == Some(0) || ids.is_empty() {
        return Ok(vec![]);
    }

    let mut by_id: HashMap<ObjectId, models::Comment> = store
        .fetch_comments(ids)
        .await?
        .into_iter()
        .filter_map(|comment| comment.id.map(|id| (id, comment)))
        .collect();
    let mut comments: Vec<models::Comment> =
        ids.iter().filter_map(|id| by_id.remove(id)).collect();

    if let Some(last) = last {
        // newest attachment wins a tie on date
        comments.reverse();
        comments.sort_by(|a, b| b.date.cmp(&a.date));
        comments.truncate(last);
    }

    Ok(comments)
}
