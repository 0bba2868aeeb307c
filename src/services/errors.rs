#[derive(Debug, PartialEq)]
pub enum ProductServiceError {
    ProductNotFound,
    ProductAlreadyExists,
    InvalidSortDirection,
    ProductCreationFailed,
    ProductUpdateFailed,
    ProductDeletionFailed,
    DatabaseError,
}

impl std::error::Error for ProductServiceError {}

impl std::fmt::Display for ProductServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductServiceError::ProductNotFound => write!(f, "Product not found"),
            ProductServiceError::ProductAlreadyExists => write!(f, "Product already exists"),
            ProductServiceError::InvalidSortDirection => write!(f, "Invalid sort direction"),
            ProductServiceError::ProductCreationFailed => write!(f, "Product creation failed"),
            ProductServiceError::ProductUpdateFailed => write!(f, "Product update failed"),
            ProductServiceError::ProductDeletionFailed => write!(f, "Product deletion failed"),
            ProductServiceError::DatabaseError => write!(f, "Database error"),
        }
    }
}
