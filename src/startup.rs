use crate::configuration::Settings;
use crate::db::CatalogueStore;
use crate::health::HealthChecker;
use crate::routes;
use crate::schema;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn CatalogueStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let settings_arc = Arc::new(settings.clone());

    let health_checker = Arc::new(HealthChecker::new(store.clone(), settings_arc));
    let health_checker = web::Data::new(health_checker);

    let schema = web::Data::new(schema::build_schema(store));
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        let mut graphql = web::resource(settings.graphql.path.clone())
            .route(web::post().to(routes::graphql_handler));
        if settings.graphql.console {
            graphql = graphql.route(web::get().to(routes::graphql_console));
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(graphql)
            .app_data(schema.clone())
            .app_data(health_checker.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
