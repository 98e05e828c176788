use super::{CatalogueStore, ProductQuery};
use crate::errors::StoreError;
use crate::models;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-process catalogue with the same semantics as [`super::MongoStore`].
/// Used by the test suite and for running the service without MongoDB.
#[derive(Debug)]
pub struct MemoryStore {
    products: RwLock<HashMap<ObjectId, models::Product>>,
    comments: RwLock<HashMap<ObjectId, models::Comment>>,
    reachable: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            comments: RwLock::new(HashMap::new()),
            reachable: AtomicBool::new(true),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing (or regaining) the connection to the store.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub async fn comment_count(&self) -> usize {
        self.comments.read().await.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StoreError::Unreachable("memory store switched off".to_string()))
        }
    }
}

#[async_trait]
impl CatalogueStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check()
    }

    async fn insert_product(
        &self,
        mut product: models::Product,
    ) -> Result<models::Product, StoreError> {
        self.check()?;
        let id = ObjectId::new();
        product.id = Some(id);
        self.products.write().await.insert(id, product.clone());

        Ok(product)
    }

    async fn fetch_product(&self, id: ObjectId) -> Result<Option<models::Product>, StoreError> {
        self.check()?;
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<models::Product>, StoreError> {
        self.check()?;
        let mut products: Vec<models::Product> = self
            .products
            .read()
            .await
            .values()
            .filter(|product| query.matches(product))
            .cloned()
            .collect();
        products.sort_by(|a, b| query.compare(a, b));

        Ok(products)
    }

    async fn insert_comment(
        &self,
        mut comment: models::Comment,
    ) -> Result<models::Comment, StoreError> {
        self.check()?;
        let id = ObjectId::new();
        comment.id = Some(id);
        self.comments.write().await.insert(id, comment.clone());

        Ok(comment)
    }

    async fn fetch_comments(&self, ids: &[ObjectId]) -> Result<Vec<models::Comment>, StoreError> {
        self.check()?;
        let comments = self.comments.read().await;

        Ok(ids.iter().filter_map(|id| comments.get(id).cloned()).collect())
    }

    async fn delete_comment(&self, id: ObjectId) -> Result<(), StoreError> {
        self.check()?;
        self.comments.write().await.remove(&id);
        Ok(())
    }

    async fn apply_comment(
        &self,
        product_id: ObjectId,
        comment_id: ObjectId,
        stars: i32,
    ) -> Result<Option<models::Product>, StoreError> {
        self.check()?;
        // the write guard is the serialization point for every product
        let mut products = self.products.write().await;

        Ok(products.get_mut(&product_id).map(|product| {
            product.attach_comment(comment_id, stars);
            product.clone()
        }))
    }
}
