use async_graphql::ErrorExtensions;

/// Failures reported by a [`crate::db::CatalogueStore`] implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store answered but the operation failed
    #[error("store operation failed: {0}")]
    Driver(String),
    /// The store could not be reached at all
    #[error("store unreachable: {0}")]
    Unreachable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match *err.kind {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) | ErrorKind::DnsResolve { .. } => {
                Self::Unreachable(err.to_string())
            }
            _ => Self::Driver(err.to_string()),
        }
    }
}

/// Request-level failures of catalogue operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogueError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Object not found: {0}")]
    NotFound(String),
    #[error("Internal error")]
    Store(#[from] StoreError),
}

impl CatalogueError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "BAD_USER_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "INTERNAL",
        }
    }
}

impl ErrorExtensions for CatalogueError {
    fn extend(&self) -> async_graphql::Error {
        if let Self::Store(err) = self {
            tracing::error!("Store failure: {:?}", err);
        }

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

impl From<serde_valid::validation::Errors> for CatalogueError {
    fn from(errors: serde_valid::validation::Errors) -> Self {
        Self::Validation(errors.to_string())
    }
}
