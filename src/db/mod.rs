mod memory;
mod mongo;
mod query;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use query::ProductQuery;

use crate::errors::StoreError;
use crate::models;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::time::Duration;

/// Access to the catalogue documents. Resolvers only talk to the store
/// through this trait.
#[async_trait]
pub trait CatalogueStore: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;

    /// Persist a new product; the returned copy carries the assigned id.
    async fn insert_product(&self, product: models::Product)
        -> Result<models::Product, StoreError>;

    async fn fetch_product(&self, id: ObjectId) -> Result<Option<models::Product>, StoreError>;

    async fn fetch_products(&self, query: &ProductQuery)
        -> Result<Vec<models::Product>, StoreError>;

    /// Persist a new comment; the returned copy carries the assigned id.
    async fn insert_comment(&self, comment: models::Comment)
        -> Result<models::Comment, StoreError>;

    /// Comments with the given ids, in no particular order. Unknown ids are skipped.
    async fn fetch_comments(&self, ids: &[ObjectId]) -> Result<Vec<models::Comment>, StoreError>;

    async fn delete_comment(&self, id: ObjectId) -> Result<(), StoreError>;

    /// Atomically append `comment_id` to the product's comments and
    /// recompute its stars over the full rating set including `stars`.
    /// Concurrent calls on the same product never lose an update.
    /// Returns `None` when the product does not exist.
    async fn apply_comment(
        &self,
        product_id: ObjectId,
        comment_id: ObjectId,
        stars: i32,
    ) -> Result<Option<models::Product>, StoreError>;
}

/// Ping the store every `heartbeat` until it stops answering.
/// Only returns once the store is considered lost.
pub async fn watch_connection<S>(store: &S, heartbeat: Duration) -> StoreError
where
    S: CatalogueStore + ?Sized,
{
    let mut interval = tokio::time::interval(heartbeat);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        interval.tick().await;
        if let Err(err) = store.ping().await {
            tracing::error!("Document store heartbeat failed: {}", err);
            return err;
        }
        tracing::debug!("Document store heartbeat ok");
    }
}
