use diesel::prelude::*;
use skillet_core::domain::{Ingredient, Instruction, Recipe};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub serving_number: i32,
    pub is_vegetarian: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe)]
pub struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub serving_number: i32,
    pub is_vegetarian: bool,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IngredientRow {
    pub id: i64,
    pub name: String,
    pub recipe_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredientRow<'a> {
    pub name: &'a str,
    pub recipe_id: i64,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::instructions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct InstructionRow {
    pub id: i64,
    pub description: String,
    pub recipe_id: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::instructions)]
pub struct NewInstructionRow<'a> {
    pub description: &'a str,
    pub recipe_id: i64,
}

impl RecipeRow {
    /// Assemble the aggregate from its root row and owned rows.
    pub fn into_aggregate(
        self,
        ingredients: Vec<IngredientRow>,
        instructions: Vec<InstructionRow>,
    ) -> Recipe {
        Recipe {
            id: Some(self.id),
            name: self.name,
            serving_number: self.serving_number,
            is_vegetarian: self.is_vegetarian,
            ingredients: ingredients
                .into_iter()
                .map(|row| Ingredient {
                    id: Some(row.id),
                    name: row.name,
                    recipe_id: Some(row.recipe_id),
                })
                .collect(),
            instructions: instructions
                .into_iter()
                .map(|row| Instruction {
                    id: Some(row.id),
                    description: row.description,
                    recipe_id: Some(row.recipe_id),
                })
                .collect(),
        }
    }
}
