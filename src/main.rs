use anyhow::Context;
use catalogue::configuration::get_configuration;
use catalogue::db::{self, CatalogueStore, MongoStore};
use catalogue::startup::run;
use catalogue::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("catalogue".into(), "info".into());
    init_subscriber(subscriber);

    let settings = get_configuration().context("Failed to read configuration.")?;

    tracing::info!(
        db_host = %settings.database.host,
        db_port = settings.database.port,
        db_name = %settings.database.database_name,
        "Connecting to MongoDB"
    );
    let store = MongoStore::connect(&settings.database)
        .await
        .context("Failed to connect to the database.")?;
    let store: Arc<dyn CatalogueStore> = Arc::new(store);

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;
    tracing::info!(
        "Server listening on {}, GraphQL at {}",
        &address,
        settings.graphql.path
    );

    let heartbeat = settings.database.heartbeat();
    let server = run(listener, store.clone(), settings).await?;
    let handle = server.handle();

    tokio::select! {
        served = server => served.context("Server stopped with an error."),
        lost = db::watch_connection(&*store, heartbeat) => {
            tracing::error!("Database connection lost, shutting down");
            handle.stop(false).await;
            Err(anyhow::Error::new(lost).context("Database connection lost."))
        }
    }
}
