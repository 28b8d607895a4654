//! Field-for-field conversion between the persistence aggregate and its wire
//! representation. Strict matching only; nothing is dropped or renamed on
//! the way through.

use crate::domain::{Ingredient, Instruction, Recipe};
use crate::dto::{IngredientDto, InstructionDto, RecipeDto};

pub fn ingredient_to_dto(ingredient: &Ingredient) -> IngredientDto {
    IngredientDto {
        id: ingredient.id,
        ingredient_name: ingredient.name.clone(),
        recipe_id: ingredient.recipe_id,
    }
}

pub fn ingredient_from_dto(dto: &IngredientDto) -> Ingredient {
    Ingredient {
        id: dto.id,
        name: dto.ingredient_name.clone(),
        recipe_id: dto.recipe_id,
    }
}

pub fn instruction_to_dto(instruction: &Instruction) -> InstructionDto {
    InstructionDto {
        id: instruction.id,
        description: instruction.description.clone(),
        recipe_id: instruction.recipe_id,
    }
}

pub fn instruction_from_dto(dto: &InstructionDto) -> Instruction {
    Instruction {
        id: dto.id,
        description: dto.description.clone(),
        recipe_id: dto.recipe_id,
    }
}

pub fn recipe_to_dto(recipe: &Recipe) -> RecipeDto {
    RecipeDto {
        id: recipe.id,
        name: recipe.name.clone(),
        serving_number: recipe.serving_number,
        is_vegetarian: recipe.is_vegetarian,
        ingredients: recipe.ingredients.iter().map(ingredient_to_dto).collect(),
        instructions: recipe.instructions.iter().map(instruction_to_dto).collect(),
    }
}

pub fn recipe_from_dto(dto: &RecipeDto) -> Recipe {
    Recipe {
        id: dto.id,
        name: dto.name.clone(),
        serving_number: dto.serving_number,
        is_vegetarian: dto.is_vegetarian,
        ingredients: dto.ingredients.iter().map(ingredient_from_dto).collect(),
        instructions: dto.instructions.iter().map(instruction_from_dto).collect(),
    }
}
