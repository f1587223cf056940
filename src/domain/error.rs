use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown category: {0}")]
    NotFound(String),
    #[error("catalog has no categories")]
    EmptyCatalog,
    #[error("category id must not be empty")]
    EmptyId,
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("duplicate command {name:?} in category {category}")]
    DuplicateCommand { category: String, name: String },
}
