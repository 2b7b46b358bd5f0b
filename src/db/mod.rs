pub mod drink;

/// Storage failures the handlers care to tell apart.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("a drink titled {0:?} already exists")]
    DuplicateTitle(String),
    #[error("stored recipe of drink {id} is unreadable: {source}")]
    CorruptRecipe {
        id: i32,
        source: serde_json::Error,
    },
    #[error("recipe can't be serialized: {0}")]
    Serialize(serde_json::Error),
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}
