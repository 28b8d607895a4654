//! Relational adapter for the recipe store, backed by Postgres.
//!
//! Collation-independent scalar fragments are pushed into the SQL query to
//! narrow the candidate set; the compiled predicate then runs over the
//! hydrated aggregates so every operator keeps a single set of semantics.

use std::collections::HashMap;

use anyhow::Context;
use diesel::prelude::*;
use skillet_core::domain::Recipe;
use skillet_core::predicate::{Fragment, RecipePredicate, RootField};
use skillet_core::store::{RecipeStore, StoreError};

use crate::db::DbPool;
use crate::models::{
    IngredientRow, InstructionRow, NewIngredientRow, NewInstructionRow, NewRecipeRow, RecipeRow,
};
use crate::schema::{ingredients, instructions, recipe};

pub struct PgRecipeStore {
    pool: DbPool,
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>, StoreError>
    {
        self.pool
            .get()
            .map_err(|err| StoreError::Connection(err.to_string()))
    }
}

/// Load the owned rows for a batch of root rows and assemble the aggregates.
fn hydrate(conn: &mut PgConnection, rows: Vec<RecipeRow>) -> anyhow::Result<Vec<Recipe>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

    let ingredient_rows: Vec<IngredientRow> = ingredients::table
        .filter(ingredients::recipe_id.eq_any(&ids))
        .select(IngredientRow::as_select())
        .load(conn)
        .context("loading ingredients")?;
    let instruction_rows: Vec<InstructionRow> = instructions::table
        .filter(instructions::recipe_id.eq_any(&ids))
        .select(InstructionRow::as_select())
        .load(conn)
        .context("loading instructions")?;

    let mut ingredients_by_recipe: HashMap<i64, Vec<IngredientRow>> = HashMap::new();
    for row in ingredient_rows {
        ingredients_by_recipe.entry(row.recipe_id).or_default().push(row);
    }
    let mut instructions_by_recipe: HashMap<i64, Vec<InstructionRow>> = HashMap::new();
    for row in instruction_rows {
        instructions_by_recipe.entry(row.recipe_id).or_default().push(row);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let id = row.id;
            row.into_aggregate(
                ingredients_by_recipe.remove(&id).unwrap_or_default(),
                instructions_by_recipe.remove(&id).unwrap_or_default(),
            )
        })
        .collect())
}

/// Replace both owned collections of a recipe row inside the current
/// transaction.
fn replace_children(conn: &mut PgConnection, recipe_id: i64, aggregate: &Recipe) -> anyhow::Result<()> {
    diesel::delete(ingredients::table.filter(ingredients::recipe_id.eq(recipe_id)))
        .execute(conn)
        .context("clearing ingredients")?;
    diesel::delete(instructions::table.filter(instructions::recipe_id.eq(recipe_id)))
        .execute(conn)
        .context("clearing instructions")?;

    let new_ingredients: Vec<NewIngredientRow<'_>> = aggregate
        .ingredients
        .iter()
        .map(|item| NewIngredientRow {
            name: &item.name,
            recipe_id,
        })
        .collect();
    if !new_ingredients.is_empty() {
        diesel::insert_into(ingredients::table)
            .values(&new_ingredients)
            .execute(conn)
            .context("inserting ingredients")?;
    }

    let new_instructions: Vec<NewInstructionRow<'_>> = aggregate
        .instructions
        .iter()
        .map(|item| NewInstructionRow {
            description: &item.description,
            recipe_id,
        })
        .collect();
    if !new_instructions.is_empty() {
        diesel::insert_into(instructions::table)
            .values(&new_instructions)
            .execute(conn)
            .context("inserting instructions")?;
    }

    Ok(())
}

fn load_one(conn: &mut PgConnection, recipe_id: i64) -> anyhow::Result<Option<Recipe>> {
    let row: Option<RecipeRow> = recipe::table
        .find(recipe_id)
        .select(RecipeRow::as_select())
        .first(conn)
        .optional()
        .context("loading recipe")?;
    match row {
        Some(row) => Ok(hydrate(conn, vec![row])?.pop()),
        None => Ok(None),
    }
}

impl RecipeStore for PgRecipeStore {
    fn find_all(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;
        let rows: Vec<RecipeRow> = recipe::table
            .order(recipe::id.asc())
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .context("loading recipes")?;
        Ok(hydrate(&mut conn, rows)?)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Recipe>, StoreError> {
        let mut conn = self.conn()?;
        Ok(load_one(&mut conn, id)?)
    }

    fn find_matching(&self, predicate: &RecipePredicate) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        let mut query = recipe::table.select(RecipeRow::as_select()).into_boxed();
        for fragment in predicate.fragments() {
            match fragment {
                Fragment::Equals {
                    field: RootField::Id,
                    value,
                } => {
                    if let Some(id) = value.as_i64() {
                        query = query.filter(recipe::id.eq(id));
                    }
                }
                Fragment::Equals {
                    field: RootField::ServingNumber,
                    value,
                } => {
                    if let Some(count) = value.as_i64() {
                        query = query.filter(recipe::serving_number.eq(count as i32));
                    }
                }
                Fragment::Equals {
                    field: RootField::IsVegetarian,
                    value,
                } => {
                    if let Some(flag) = value.as_bool() {
                        query = query.filter(recipe::is_vegetarian.eq(flag));
                    }
                }
                Fragment::AtLeast {
                    field: RootField::Id,
                    value,
                } => {
                    if let Some(id) = value.as_i64() {
                        query = query.filter(recipe::id.ge(id));
                    }
                }
                Fragment::AtLeast {
                    field: RootField::ServingNumber,
                    value,
                } => {
                    if let Some(count) = value.as_i64() {
                        query = query.filter(recipe::serving_number.ge(count as i32));
                    }
                }
                // Text and relation fragments evaluate over the hydrated
                // aggregates below.
                _ => {}
            }
        }

        let rows: Vec<RecipeRow> = query
            .order(recipe::id.asc())
            .load(&mut conn)
            .context("searching recipes")?;
        let candidates = hydrate(&mut conn, rows)?;
        Ok(candidates
            .into_iter()
            .filter(|candidate| predicate.matches(candidate))
            .collect())
    }

    fn save(&self, aggregate: Recipe) -> Result<Recipe, StoreError> {
        let mut conn = self.conn()?;
        let saved = conn.transaction::<Recipe, anyhow::Error, _>(|conn| {
            let recipe_id = match aggregate.id {
                None => diesel::insert_into(recipe::table)
                    .values(NewRecipeRow {
                        name: &aggregate.name,
                        serving_number: aggregate.serving_number,
                        is_vegetarian: aggregate.is_vegetarian,
                    })
                    .returning(recipe::id)
                    .get_result::<i64>(conn)
                    .context("inserting recipe")?,
                Some(id) => {
                    let updated = diesel::update(recipe::table.find(id))
                        .set((
                            recipe::name.eq(&aggregate.name),
                            recipe::serving_number.eq(aggregate.serving_number),
                            recipe::is_vegetarian.eq(aggregate.is_vegetarian),
                        ))
                        .execute(conn)
                        .context("updating recipe")?;
                    anyhow::ensure!(updated == 1, "no recipe row with id {id}");
                    id
                }
            };

            replace_children(conn, recipe_id, &aggregate)?;

            load_one(conn, recipe_id)?
                .ok_or_else(|| anyhow::anyhow!("recipe {recipe_id} vanished mid-save"))
        })?;
        Ok(saved)
    }

    fn delete(&self, aggregate: &Recipe) -> Result<(), StoreError> {
        let Some(id) = aggregate.id else {
            // Never persisted, nothing to remove
            return Ok(());
        };
        let mut conn = self.conn()?;
        conn.transaction::<(), anyhow::Error, _>(|conn| {
            diesel::delete(ingredients::table.filter(ingredients::recipe_id.eq(id)))
                .execute(conn)
                .context("deleting ingredients")?;
            diesel::delete(instructions::table.filter(instructions::recipe_id.eq(id)))
                .execute(conn)
                .context("deleting instructions")?;
            diesel::delete(recipe::table.find(id))
                .execute(conn)
                .context("deleting recipe")?;
            Ok(())
        })?;
        Ok(())
    }
}
