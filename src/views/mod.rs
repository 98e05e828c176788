mod comment;
mod product;

pub use comment::Comment;
pub use product::Product;
