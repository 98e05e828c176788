use crate::forms::{CommentCreateInput, ProductCreateInput};
use crate::services::catalogue;
use crate::views;
use async_graphql::{Context, ErrorExtensions, Object, ID};

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        product: ProductCreateInput,
    ) -> async_graphql::Result<views::Product> {
        let store = super::store(ctx)?;

        catalogue::create_product(store.as_ref(), product)
            .await
            .map(Into::into)
            .map_err(|err| err.extend())
    }

    /// Stores the comment and attaches it to the product, updating its stars.
    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        comment: CommentCreateInput,
        product_id: ID,
    ) -> async_graphql::Result<views::Comment> {
        let store = super::store(ctx)?;

        catalogue::create_comment(store.as_ref(), comment, product_id.as_str())
            .await
            .map(Into::into)
            .map_err(|err| err.extend())
    }
}
