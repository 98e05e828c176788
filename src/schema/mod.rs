mod logger;
mod mutation;
mod query;

pub use logger::{log_operation, OperationSummary};
pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::db::CatalogueStore;
use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Schema};
use std::sync::Arc;

pub type CatalogueSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<dyn CatalogueStore>) -> CatalogueSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn CatalogueStore>> {
    ctx.data::<Arc<dyn CatalogueStore>>()
}
