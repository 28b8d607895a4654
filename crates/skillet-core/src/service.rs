//! Service-layer orchestration: storage port + mapper + predicate builder.
//!
//! Every operation returns one result envelope. Failures are classified and
//! folded into the envelope here; nothing propagates past this boundary.

use crate::criteria::SearchCriteria;
use crate::dto::RecipeDto;
use crate::mapper;
use crate::predicate::RecipePredicate;
use crate::response::{Message, ResponseStatus, RestResponse};
use crate::store::RecipeStore;

pub struct RecipeService<S> {
    store: S,
}

impl<S: RecipeStore> RecipeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn find_all(&self) -> RestResponse<Vec<RecipeDto>> {
        tracing::info!("listing all recipes");

        match self.store.find_all() {
            Ok(recipes) => {
                let dtos: Vec<RecipeDto> = recipes.iter().map(mapper::recipe_to_dto).collect();
                RestResponse::of(dtos, ResponseStatus::Ok, Message::info("success.findAll"))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to list recipes");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.findAll"))
            }
        }
    }

    pub fn save_recipe(&self, dto: &RecipeDto) -> RestResponse<RecipeDto> {
        tracing::info!(name = %dto.name, "saving new recipe");

        let recipe = mapper::recipe_from_dto(dto);
        match self.store.save(recipe) {
            Ok(saved) => RestResponse::of(
                mapper::recipe_to_dto(&saved),
                ResponseStatus::Created,
                Message::info("success.Save"),
            ),
            Err(err) => {
                tracing::error!(error = %err, "failed to save recipe");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.Save"))
            }
        }
    }

    pub fn update_recipe(&self, recipe_id: i64, dto: &RecipeDto) -> RestResponse<RecipeDto> {
        tracing::info!(recipe_id, "updating recipe");

        if dto.id.is_some_and(|body_id| body_id != recipe_id) {
            tracing::warn!(recipe_id, body_id = ?dto.id, "path and body ids disagree");
            return RestResponse::empty(
                ResponseStatus::NotAcceptable,
                Message::error("error.IdMismatch"),
            );
        }

        let mut recipe = match self.store.find_by_id(recipe_id) {
            Ok(Some(recipe)) => recipe,
            Ok(None) => {
                tracing::warn!(recipe_id, "no recipe with this id");
                return RestResponse::empty(
                    ResponseStatus::NotFound,
                    Message::error("error.UpdateNoData"),
                );
            }
            Err(err) => {
                tracing::error!(recipe_id, error = %err, "failed to load recipe for update");
                return RestResponse::empty(
                    ResponseStatus::BadRequest,
                    Message::error("error.Update"),
                );
            }
        };

        recipe.name = dto.name.clone();
        recipe.serving_number = dto.serving_number;
        recipe.is_vegetarian = dto.is_vegetarian;
        // Owned collections are cleared and rebuilt from the body, never merged.
        recipe.ingredients = dto.ingredients.iter().map(mapper::ingredient_from_dto).collect();
        recipe.instructions = dto
            .instructions
            .iter()
            .map(mapper::instruction_from_dto)
            .collect();

        match self.store.save(recipe) {
            Ok(saved) => RestResponse::of(
                mapper::recipe_to_dto(&saved),
                ResponseStatus::NoContent,
                Message::info("success.Update"),
            ),
            Err(err) => {
                tracing::error!(recipe_id, error = %err, "failed to update recipe");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.Update"))
            }
        }
    }

    pub fn delete_recipe(&self, recipe_id: i64) -> RestResponse<String> {
        tracing::info!(recipe_id, "deleting recipe");

        let recipe = match self.store.find_by_id(recipe_id) {
            Ok(Some(recipe)) => recipe,
            Ok(None) => {
                tracing::warn!(recipe_id, "no recipe with this id");
                return RestResponse::empty(
                    ResponseStatus::NotFound,
                    Message::error("error.DeleteNoData"),
                );
            }
            Err(err) => {
                tracing::error!(recipe_id, error = %err, "failed to load recipe for delete");
                return RestResponse::empty(
                    ResponseStatus::BadRequest,
                    Message::error("error.Delete"),
                );
            }
        };

        match self.store.delete(&recipe) {
            Ok(()) => RestResponse::of(
                String::new(),
                ResponseStatus::NoContent,
                Message::info("success.Delete"),
            ),
            Err(err) => {
                tracing::error!(recipe_id, error = %err, "failed to delete recipe");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.Delete"))
            }
        }
    }

    pub fn find_recipe(&self, recipe_id: i64) -> RestResponse<RecipeDto> {
        tracing::info!(recipe_id, "fetching recipe");

        match self.store.find_by_id(recipe_id) {
            Ok(Some(recipe)) => RestResponse::of(
                mapper::recipe_to_dto(&recipe),
                ResponseStatus::Ok,
                Message::info("success.Find"),
            ),
            Ok(None) => {
                tracing::warn!(recipe_id, "no recipe with this id");
                RestResponse::empty(ResponseStatus::NotFound, Message::error("error.FindNoData"))
            }
            Err(err) => {
                tracing::error!(recipe_id, error = %err, "failed to fetch recipe");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.Find"))
            }
        }
    }

    pub fn search_recipes(&self, criteria: &[SearchCriteria]) -> RestResponse<Vec<RecipeDto>> {
        tracing::info!(criteria_count = criteria.len(), "searching recipes");

        let predicate = match RecipePredicate::compile(criteria) {
            Ok(predicate) => predicate,
            Err(err) => {
                tracing::warn!(error = %err, "rejecting malformed search");
                return RestResponse::empty(
                    ResponseStatus::BadRequest,
                    Message::error("error.Search"),
                );
            }
        };

        match self.store.find_matching(&predicate) {
            Ok(recipes) => {
                let dtos: Vec<RecipeDto> = recipes.iter().map(mapper::recipe_to_dto).collect();
                RestResponse::of(dtos, ResponseStatus::Ok, Message::info("success.Search"))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to search recipes");
                RestResponse::empty(ResponseStatus::BadRequest, Message::error("error.Search"))
            }
        }
    }
}
