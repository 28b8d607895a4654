use crate::api::respond;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use axum::Json;
use skillet_core::dto::RecipeDto;
use skillet_core::response::RestResponse;

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = RecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RestResponse<RecipeDto>),
        (status = 400, description = "Recipe could not be saved", body = RestResponse<RecipeDto>)
    )
)]
pub async fn create_recipe(
    State(service): State<AppState>,
    Json(dto): Json<RecipeDto>,
) -> Response {
    respond(service.save_recipe(&dto))
}
