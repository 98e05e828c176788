use crate::configuration::Settings;
use crate::schema::{log_operation, CatalogueSchema, OperationSummary};
use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

#[tracing::instrument(name = "GraphQL request.", skip_all)]
pub async fn graphql_handler(
    schema: web::Data<CatalogueSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    let operation = OperationSummary::of(&request);
    let response = schema.execute(request).await;
    log_operation(&operation, &response);

    response.into()
}

#[tracing::instrument(name = "GraphiQL console.", skip_all)]
pub async fn graphql_console(settings: web::Data<Settings>) -> HttpResponse {
    let source = GraphiQLSource::build()
        .endpoint(&settings.graphql.path)
        .finish();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(source)
}
