pub mod graphql;
pub mod health_checks;

pub use graphql::*;
pub use health_checks::*;
