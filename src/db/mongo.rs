use super::{CatalogueStore, ProductQuery};
use crate::configuration::DatabaseSettings;
use crate::errors::StoreError;
use crate::forms::{SortingOrder, SortingValue};
use crate::models;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Client, Collection, Database};
use tracing::Instrument;

const PRODUCTS: &str = "products";
const COMMENTS: &str = "comments";

#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to the configured catalogue and make sure it answers.
    #[tracing::instrument(
        name = "Connect to MongoDB",
        skip(settings),
        fields(host = %settings.host, port = settings.port)
    )]
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(settings.connection_string()).await?;
        options.app_name = Some("catalogue".to_string());
        options.connect_timeout = Some(settings.connect_timeout());
        options.server_selection_timeout = Some(settings.connect_timeout());

        let client = Client::with_options(options)?;
        let store = Self {
            database: client.database(&settings.database_name),
        };
        store.ping().await?;

        Ok(store)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    fn products(&self) -> Collection<models::Product> {
        self.database.collection(PRODUCTS)
    }

    fn comments(&self) -> Collection<models::Comment> {
        self.database.collection(COMMENTS)
    }
}

/// `{category: {$in}, stars: {$gte}, price: {$gte, $lte?}}`
pub(crate) fn product_filter(query: &ProductQuery) -> Document {
    let categories: Vec<&str> = query.categories.iter().map(|c| c.as_str()).collect();

    let mut price = doc! { "$gte": query.min_price };
    if let Some(max_price) = query.max_price {
        price.insert("$lte", max_price);
    }

    doc! {
        "category": { "$in": categories },
        "stars": { "$gte": query.min_stars },
        "price": price,
    }
}

pub(crate) fn product_sort(query: &ProductQuery) -> Document {
    let field = match query.sort.value {
        SortingValue::CreatedAt => "created_at",
        SortingValue::Price => "price",
    };
    let direction = match query.sort.order {
        SortingOrder::Asc => 1,
        SortingOrder::Desc => -1,
    };

    let mut sort = Document::new();
    sort.insert(field, direction);
    sort
}

/// Update pipeline attaching a comment. Both arrays grow in the same
/// write and `stars` is recomputed server side from the grown array.
pub(crate) fn apply_comment_pipeline(comment_id: ObjectId, stars: i32) -> Vec<Document> {
    vec![
        doc! {
            "$set": {
                "comments": { "$concatArrays": [ "$comments", [ comment_id ] ] },
                "ratings": { "$concatArrays": [ "$ratings", [ stars ] ] },
            }
        },
        doc! {
            "$set": { "stars": { "$avg": "$ratings" } }
        },
    ]
}

fn inserted_object_id(inserted: bson::Bson) -> Result<ObjectId, StoreError> {
    inserted
        .as_object_id()
        .ok_or_else(|| StoreError::Driver(format!("unexpected generated id {}", inserted)))
}

#[async_trait]
impl CatalogueStore for MongoStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(StoreError::from)
    }

    async fn insert_product(
        &self,
        mut product: models::Product,
    ) -> Result<models::Product, StoreError> {
        let query_span = tracing::info_span!("Saving new product into the database");
        let result = self
            .products()
            .insert_one(&product, None)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to insert product: {:?}", err);
                StoreError::from(err)
            })?;

        product.id = Some(inserted_object_id(result.inserted_id)?);
        Ok(product)
    }

    async fn fetch_product(&self, id: ObjectId) -> Result<Option<models::Product>, StoreError> {
        let query_span = tracing::info_span!("Fetch product by id.", %id);
        self.products()
            .find_one(doc! { "_id": id }, None)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch product: {:?}", err);
                StoreError::from(err)
            })
    }

    async fn fetch_products(
        &self,
        query: &ProductQuery,
    ) -> Result<Vec<models::Product>, StoreError> {
        let query_span = tracing::info_span!("Fetch products by filter.", ?query);
        let options = FindOptions::builder().sort(product_sort(query)).build();

        let cursor = self
            .products()
            .find(product_filter(query), options)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch products: {:?}", err);
                StoreError::from(err)
            })?;

        cursor.try_collect().await.map_err(|err| {
            tracing::error!("Failed to read products cursor: {:?}", err);
            StoreError::from(err)
        })
    }

    async fn insert_comment(
        &self,
        mut comment: models::Comment,
    ) -> Result<models::Comment, StoreError> {
        let query_span = tracing::info_span!("Saving new comment into the database");
        let result = self
            .comments()
            .insert_one(&comment, None)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to insert comment: {:?}", err);
                StoreError::from(err)
            })?;

        comment.id = Some(inserted_object_id(result.inserted_id)?);
        Ok(comment)
    }

    async fn fetch_comments(&self, ids: &[ObjectId]) -> Result<Vec<models::Comment>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let query_span = tracing::info_span!("Fetch comments by ids.", count = ids.len());
        let cursor = self
            .comments()
            .find(doc! { "_id": { "$in": ids.to_vec() } }, None)
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch comments: {:?}", err);
                StoreError::from(err)
            })?;

        cursor.try_collect().await.map_err(|err| {
            tracing::error!("Failed to read comments cursor: {:?}", err);
            StoreError::from(err)
        })
    }

    async fn delete_comment(&self, id: ObjectId) -> Result<(), StoreError> {
        let query_span = tracing::info_span!("Delete comment.", %id);
        self.comments()
            .delete_one(doc! { "_id": id }, None)
            .instrument(query_span)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!("Failed to delete comment: {:?}", err);
                StoreError::from(err)
            })
    }

    async fn apply_comment(
        &self,
        product_id: ObjectId,
        comment_id: ObjectId,
        stars: i32,
    ) -> Result<Option<models::Product>, StoreError> {
        let query_span =
            tracing::info_span!("Attach comment to product.", %product_id, %comment_id);
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.products()
            .find_one_and_update(
                doc! { "_id": product_id },
                apply_comment_pipeline(comment_id, stars),
                options,
            )
            .instrument(query_span)
            .await
            .map_err(|err| {
                tracing::error!("Failed to attach comment: {:?}", err);
                StoreError::from(err)
            })
    }
}
