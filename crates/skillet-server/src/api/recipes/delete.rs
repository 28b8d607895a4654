use crate::api::respond;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::Response;
use skillet_core::response::RestResponse;

#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = RestResponse<String>),
        (status = 404, description = "No recipe with the given id", body = RestResponse<String>),
        (status = 400, description = "Recipe could not be deleted", body = RestResponse<String>)
    )
)]
pub async fn delete_recipe(State(service): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(service.delete_recipe(id))
}
