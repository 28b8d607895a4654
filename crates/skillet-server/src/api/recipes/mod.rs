pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use skillet_core::dto::{IngredientDto, InstructionDto, RecipeDto};
use skillet_core::response::{Message, ResponseStatus, RestResponse, Severity};
use utoipa::OpenApi;

/// Router for the recipe resource (mounted at /api/v1/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search", get(search::search_recipes))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        create::create_recipe,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
        search::search_recipes,
    ),
    components(schemas(
        RecipeDto,
        IngredientDto,
        InstructionDto,
        Message,
        Severity,
        ResponseStatus,
        RestResponse<RecipeDto>,
        RestResponse<Vec<RecipeDto>>,
        RestResponse<String>,
    ))
)]
pub struct ApiDoc;
