mod category;
mod comment;
mod product;

pub use category::*;
pub use comment::*;
pub use product::*;
