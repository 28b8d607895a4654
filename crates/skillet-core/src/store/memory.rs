//! In-process store backed by a map, for tests and local experiments.
//!
//! Behaves like the relational adapter from the caller's point of view:
//! monotonically increasing ids, full replacement of owned collections on
//! save, cascade on delete.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::Recipe;
use crate::predicate::RecipePredicate;
use crate::store::{RecipeStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryRecipeStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    recipes: BTreeMap<i64, Recipe>,
    next_recipe_id: i64,
    next_child_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            recipes: BTreeMap::new(),
            next_recipe_id: 1,
            next_child_id: 1,
        }
    }
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeStore for MemoryRecipeStore {
    fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.recipes.values().cloned().collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.recipes.get(&id).cloned())
    }

    fn find_matching(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .recipes
            .values()
            .filter(|recipe| predicate.matches(recipe))
            .cloned()
            .collect())
    }

    fn save(&self, mut recipe: Recipe) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        let id = match recipe.id {
            Some(id) => id,
            None => {
                let id = inner.next_recipe_id;
                inner.next_recipe_id += 1;
                id
            }
        };
        recipe.id = Some(id);

        // Replace the owned collections wholesale, stamping ownership and
        // fresh ids exactly as the relational adapter would.
        let mut next_child = inner.next_child_id;
        recipe.ingredients = std::mem::take(&mut recipe.ingredients)
            .into_iter()
            .map(|mut item| {
                item.id = Some(item.id.unwrap_or_else(|| {
                    let assigned = next_child;
                    next_child += 1;
                    assigned
                }));
                item.recipe_id = Some(id);
                item
            })
            .collect();
        recipe.instructions = std::mem::take(&mut recipe.instructions)
            .into_iter()
            .map(|mut item| {
                item.id = Some(item.id.unwrap_or_else(|| {
                    let assigned = next_child;
                    next_child += 1;
                    assigned
                }));
                item.recipe_id = Some(id);
                item
            })
            .collect();
        inner.next_child_id = next_child;

        inner.recipes.insert(id, recipe.clone());
        Ok(recipe)
    }

    fn delete(&self, recipe: &Recipe) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(id) = recipe.id {
            inner.recipes.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ingredient;

    fn unsaved(name: &str) -> Recipe {
        Recipe {
            id: None,
            name: name.to_string(),
            serving_number: 2,
            is_vegetarian: false,
            ingredients: [Ingredient {
                id: None,
                name: "Salt".to_string(),
                recipe_id: None,
            }]
            .into_iter()
            .collect(),
            instructions: Default::default(),
        }
    }

    #[test]
    fn test_save_assigns_ids_and_ownership() {
        let store = MemoryRecipeStore::new();
        let saved = store.save(unsaved("Toast")).unwrap();

        let id = saved.id.unwrap();
        assert!(id > 0);
        for ingredient in &saved.ingredients {
            assert!(ingredient.id.is_some());
            assert_eq!(ingredient.recipe_id, Some(id));
        }
    }

    #[test]
    fn test_ids_are_monotonic() {
        let store = MemoryRecipeStore::new();
        let first = store.save(unsaved("A")).unwrap();
        let second = store.save(unsaved("B")).unwrap();
        assert!(second.id.unwrap() > first.id.unwrap());
    }

    #[test]
    fn test_save_replaces_owned_collections() {
        let store = MemoryRecipeStore::new();
        let saved = store.save(unsaved("Stew")).unwrap();

        let mut updated = saved.clone();
        updated.ingredients = [Ingredient {
            id: None,
            name: "Pepper".to_string(),
            recipe_id: None,
        }]
        .into_iter()
        .collect();
        store.save(updated).unwrap();

        let reloaded = store.find_by_id(saved.id.unwrap()).unwrap().unwrap();
        let names: Vec<&str> = reloaded.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pepper"]);
    }

    #[test]
    fn test_delete_removes_aggregate() {
        let store = MemoryRecipeStore::new();
        let saved = store.save(unsaved("Gone")).unwrap();
        store.delete(&saved).unwrap();
        assert!(store.find_by_id(saved.id.unwrap()).unwrap().is_none());
    }
}
