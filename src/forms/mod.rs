mod comment;
mod filter;
mod product;

pub use comment::CommentCreateInput;
pub use filter::{ProductFilterInput, ProductSortInput, SortingOrder, SortingValue};
pub use product::ProductCreateInput;
