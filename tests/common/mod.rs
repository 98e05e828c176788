#![allow(dead_code)]

use catalogue::configuration::{get_configuration, Settings};
use catalogue::db::{CatalogueStore, MemoryStore, MongoStore};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub graphql_url: String,
    pub store: Arc<dyn CatalogueStore>,
}

pub fn test_configuration() -> Settings {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.app_port = 0;
    configuration
}

pub async fn spawn_app_with_store(
    store: Arc<dyn CatalogueStore>,
    configuration: Settings,
) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let graphql_url = format!("{}{}", address, configuration.graphql.path);

    let server = catalogue::startup::run(listener, store.clone(), configuration)
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp {
        address,
        graphql_url,
        store,
    }
}

/// Server backed by a fresh in-memory catalogue.
pub async fn spawn_app() -> (TestApp, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = spawn_app_with_store(store.clone(), test_configuration()).await;

    (app, store)
}

/// Server backed by a throwaway MongoDB database, `None` when MongoDB is not running.
pub async fn spawn_mongo_app() -> Option<(TestApp, MongoStore)> {
    let mut configuration = test_configuration();
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();
    configuration.database.connect_timeout_secs = 2;

    let store = match MongoStore::connect(&configuration.database).await {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to mongodb: {}", err);
            return None;
        }
    };
    let app = spawn_app_with_store(Arc::new(store.clone()), configuration).await;

    Some((app, store))
}

impl TestApp {
    pub async fn graphql(&self, query: &str, variables: Value) -> Value {
        reqwest::Client::new()
            .post(&self.graphql_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .expect("Failed to execute request.")
            .json()
            .await
            .expect("Response is not JSON")
    }

    pub async fn create_product(&self, name: &str, price: f64, category: &str) -> Value {
        let response = self
            .graphql(
                r#"mutation ($product: ProductCreateInput!) {
                    createProduct(product: $product) {
                        _id name description price category createdAt stars
                        comments { _id }
                    }
                }"#,
                json!({ "product": { "name": name, "price": price, "category": category } }),
            )
            .await;

        response["data"]["createProduct"].clone()
    }

    pub async fn create_comment(&self, product_id: &str, stars: i64) -> Value {
        self.graphql(
            r#"mutation ($comment: CommentCreateInput!, $productId: ID!) {
                createComment(comment: $comment, productId: $productId) {
                    _id title body stars date
                }
            }"#,
            json!({
                "comment": { "title": format!("{} stars", stars), "body": "text", "stars": stars },
                "productId": product_id,
            }),
        )
        .await
    }

    pub async fn product(&self, product_id: &str) -> Value {
        self.graphql(
            r#"query ($id: ID!) {
                product(id: $id) { _id name stars comments { _id stars } }
            }"#,
            json!({ "id": product_id }),
        )
        .await
    }
}

pub fn error_code(response: &Value) -> Option<&str> {
    response["errors"][0]["extensions"]["code"].as_str()
}
