use std::collections::BTreeSet;

/// A single ingredient row, owned by exactly one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub recipe_id: Option<i64>,
}

/// A single instruction row, owned by exactly one recipe.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instruction {
    pub id: Option<i64>,
    pub description: String,
    pub recipe_id: Option<i64>,
}

/// The recipe aggregate: root fields plus the two owned collections.
///
/// The owned collections are only ever replaced in full. Children are never
/// persisted or deleted independently of their owner, and deleting the recipe
/// removes them with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    /// Surrogate id, assigned by storage on first save and immutable after.
    pub id: Option<i64>,
    pub name: String,
    pub serving_number: i32,
    pub is_vegetarian: bool,
    pub ingredients: BTreeSet<Ingredient>,
    pub instructions: BTreeSet<Instruction>,
}
