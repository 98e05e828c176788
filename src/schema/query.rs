use crate::forms::{ProductFilterInput, ProductSortInput};
use crate::services::catalogue;
use crate::views;
use async_graphql::{Context, ErrorExtensions, Object, ID};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single product; reports NOT_FOUND when the id matches nothing.
    async fn product(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<views::Product>> {
        let store = super::store(ctx)?;

        catalogue::product(store.as_ref(), id.as_str())
            .await
            .map(|product| Some(product.into()))
            .map_err(|err| err.extend())
    }

    /// Products matching every filter clause. Oldest first unless `sort` says otherwise.
    async fn products(
        &self,
        ctx: &Context<'_>,
        filter: Option<ProductFilterInput>,
        sort: Option<ProductSortInput>,
    ) -> async_graphql::Result<Vec<views::Product>> {
        let store = super::store(ctx)?;

        catalogue::products(store.as_ref(), filter, sort)
            .await
            .map(|products| products.into_iter().map(Into::into).collect())
            .map_err(|err| err.extend())
    }
}
