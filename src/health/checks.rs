use super::models::{ComponentHealth, HealthCheckResponse};
use crate::configuration::Settings;
use crate::db::CatalogueStore;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);
const SLOW_RESPONSE_THRESHOLD_MS: u64 = 1000;

pub struct HealthChecker {
    store: Arc<dyn CatalogueStore>,
    settings: Arc<Settings>,
    start_time: Instant,
}

impl HealthChecker {
    pub fn new(store: Arc<dyn CatalogueStore>, settings: Arc<Settings>) -> Self {
        Self {
            store,
            settings,
            start_time: Instant::now(),
        }
    }

    pub async fn check_all(&self) -> HealthCheckResponse {
        let version = env!("CARGO_PKG_VERSION").to_string();
        let uptime = self.start_time.elapsed().as_secs();
        let mut response = HealthCheckResponse::new(version, uptime);

        let store_health = timeout(CHECK_TIMEOUT, self.check_store())
            .await
            .unwrap_or_else(|_| ComponentHealth::unhealthy("Timeout".to_string()));

        response.add_component("document_store".to_string(), store_health);

        response
    }

    #[tracing::instrument(name = "Check document store health", skip(self))]
    async fn check_store(&self) -> ComponentHealth {
        let start = Instant::now();

        match self.store.ping().await {
            Ok(()) => {
                let elapsed = start.elapsed().as_millis() as u64;
                let mut health = ComponentHealth::healthy(elapsed);

                if elapsed > SLOW_RESPONSE_THRESHOLD_MS {
                    health = ComponentHealth::degraded(
                        "Document store responding slowly".to_string(),
                        Some(elapsed),
                    );
                }

                let database = &self.settings.database;
                let mut details = HashMap::new();
                details.insert("host".to_string(), serde_json::json!(database.host));
                details.insert("port".to_string(), serde_json::json!(database.port));
                details.insert(
                    "database".to_string(),
                    serde_json::json!(database.database_name),
                );

                health.with_details(details)
            }
            Err(e) => {
                tracing::error!("Document store health check failed: {:?}", e);
                ComponentHealth::unhealthy(format!("Document store error: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::{DatabaseSettings, GraphqlSettings};
    use crate::db::MemoryStore;
    use crate::health::ComponentStatus;

    fn settings() -> Arc<Settings> {
        Arc::new(Settings {
            database: DatabaseSettings {
                username: None,
                password: None,
                host: "localhost".to_string(),
                port: 27017,
                database_name: "Catalogue".to_string(),
                connect_timeout_secs: 5,
                heartbeat_secs: 10,
            },
            app_port: 0,
            app_host: "127.0.0.1".to_string(),
            graphql: GraphqlSettings::default(),
        })
    }

    #[tokio::test]
    async fn reachable_store_is_healthy() {
        let checker = HealthChecker::new(Arc::new(MemoryStore::new()), settings());
        let response = checker.check_all().await;

        assert!(response.is_healthy());
        assert!(response.components.contains_key("document_store"));
    }

    #[tokio::test]
    async fn unreachable_store_is_unhealthy() {
        let store = Arc::new(MemoryStore::new());
        store.set_reachable(false);
        let checker = HealthChecker::new(store, settings());
        let response = checker.check_all().await;

        assert_eq!(ComponentStatus::Unhealthy, response.status);
    }
}
