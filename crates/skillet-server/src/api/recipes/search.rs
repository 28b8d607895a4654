use crate::api::respond;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;
use serde_json::{json, Value};
use skillet_core::dto::RecipeDto;
use skillet_core::response::RestResponse;
use skillet_core::{SearchCriteria, SearchOperation};
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchRecipesParams {
    /// Exact vegetarian flag
    pub is_vegetarian: Option<bool>,
    /// Minimum number of servings
    pub serving_number: Option<i32>,
    /// Ingredient that must be present (substring match)
    pub ingredient_name: Option<String>,
    /// Ingredient that must be absent (substring match)
    pub exclude_ingredient_name: Option<String>,
    /// Text that must appear in at least one instruction
    pub instruction_text: Option<String>,
}

impl SearchRecipesParams {
    /// Fold the present parameters into a criteria list, in a fixed order.
    pub fn into_criteria(self) -> Vec<SearchCriteria> {
        let mut criteria = Vec::new();

        if let Some(flag) = self.is_vegetarian {
            criteria.push(SearchCriteria::new(
                "isVegetarian",
                SearchOperation::Equality,
                json!(flag),
            ));
        }
        if let Some(count) = self.serving_number {
            criteria.push(SearchCriteria::new(
                "servingNumber",
                SearchOperation::GreaterThanOrEqual,
                json!(count),
            ));
        }
        if let Some(name) = self.ingredient_name {
            criteria.push(SearchCriteria::new(
                "ingredientName",
                SearchOperation::Contains,
                Value::String(name),
            ));
        }
        if let Some(name) = self.exclude_ingredient_name {
            criteria.push(SearchCriteria::new(
                "ingredientName",
                SearchOperation::NotContains,
                Value::String(name),
            ));
        }
        if let Some(text) = self.instruction_text {
            criteria.push(SearchCriteria::new(
                "description",
                SearchOperation::Contains,
                Value::String(text),
            ));
        }

        criteria
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/search",
    tag = "recipes",
    params(SearchRecipesParams),
    responses(
        (status = 200, description = "Matching recipes", body = RestResponse<Vec<RecipeDto>>)
    )
)]
pub async fn search_recipes(
    State(service): State<AppState>,
    Query(params): Query<SearchRecipesParams>,
) -> Response {
    respond(service.search_recipes(&params.into_criteria()))
}
