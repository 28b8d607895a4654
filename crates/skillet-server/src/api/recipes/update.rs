use crate::api::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use skillet_core::dto::RecipeDto;
use skillet_core::response::RestResponse;

#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    request_body = RecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = RestResponse<RecipeDto>),
        (status = 406, description = "Body id does not match the path", body = RestResponse<RecipeDto>),
        (status = 404, description = "No recipe with the given id", body = RestResponse<RecipeDto>),
        (status = 400, description = "Recipe could not be updated", body = RestResponse<RecipeDto>)
    )
)]
pub async fn update_recipe(
    State(service): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<RecipeDto>,
) -> Response {
    respond(service.update_recipe(id, &dto))
}
