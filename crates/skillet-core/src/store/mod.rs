//! Abstract persistence port for the recipe aggregate.

pub mod memory;

use thiserror::Error;

use crate::domain::Recipe;
use crate::predicate::RecipePredicate;

pub use memory::MemoryRecipeStore;

/// Errors surfaced by store implementations. Callers treat anything here as
/// a persistence failure; the distinction between connection and backend
/// trouble exists for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage connection unavailable: {0}")]
    Connection(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Persistence contract the service depends on. Implementations must make
/// each call atomic: an aggregate and its owned collections are persisted or
/// removed together, never partially.
pub trait RecipeStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<Recipe>, StoreError>;

    fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError>;

    /// Evaluate a compiled predicate against the aggregate set. Each
    /// matching recipe appears exactly once, regardless of how many owned
    /// rows satisfied the predicate's relation fragments.
    fn find_matching(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>, StoreError>;

    /// Persist the aggregate. Assigns ids to the root and to owned rows
    /// that lack one, and replaces both owned collections in full.
    fn save(&self, recipe: Recipe) -> Result<Recipe, StoreError>;

    /// Remove the aggregate and everything it owns.
    fn delete(&self, recipe: &Recipe) -> Result<(), StoreError>;
}
