use crate::api::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use skillet_core::dto::RecipeDto;
use skillet_core::response::RestResponse;

#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe found", body = RestResponse<RecipeDto>),
        (status = 404, description = "No recipe with the given id", body = RestResponse<RecipeDto>),
        (status = 400, description = "Recipe could not be fetched", body = RestResponse<RecipeDto>)
    )
)]
pub async fn get_recipe(State(service): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(service.find_recipe(id))
}
