use crate::api::respond;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use skillet_core::dto::RecipeDto;
use skillet_core::response::RestResponse;

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes", body = RestResponse<Vec<RecipeDto>>)
    )
)]
pub async fn list_recipes(State(service): State<AppState>) -> Response {
    respond(service.find_all())
}
