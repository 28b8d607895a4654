use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct IngredientDto {
    pub id: Option<i64>,
    pub ingredient_name: String,
    pub recipe_id: Option<i64>,
}

#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct InstructionDto {
    pub id: Option<i64>,
    pub description: String,
    pub recipe_id: Option<i64>,
}

/// Wire representation of the recipe aggregate.
///
/// Collections are sets: structurally equal entries collapse and order is not
/// part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: Option<i64>,
    pub name: String,
    pub serving_number: i32,
    pub is_vegetarian: bool,
    #[serde(default)]
    pub ingredients: BTreeSet<IngredientDto>,
    #[serde(default)]
    pub instructions: BTreeSet<InstructionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let dto: RecipeDto = serde_json::from_str(
            r#"{
                "name": "Pasta",
                "servingNumber": 4,
                "isVegetarian": true,
                "ingredients": [{"ingredientName": "Tomato"}],
                "instructions": [{"description": "Boil water"}]
            }"#,
        )
        .unwrap();

        assert_eq!(dto.name, "Pasta");
        assert_eq!(dto.serving_number, 4);
        assert!(dto.is_vegetarian);
        assert_eq!(dto.ingredients.len(), 1);
        assert_eq!(dto.instructions.len(), 1);
    }

    #[test]
    fn test_duplicate_collection_entries_collapse() {
        let dto: RecipeDto = serde_json::from_str(
            r#"{
                "name": "Soup",
                "servingNumber": 2,
                "isVegetarian": false,
                "ingredients": [
                    {"ingredientName": "Onion"},
                    {"ingredientName": "Onion"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dto.ingredients.len(), 1);
        assert!(dto.instructions.is_empty());
    }
}
