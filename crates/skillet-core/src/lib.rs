pub mod criteria;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod predicate;
pub mod response;
pub mod service;
pub mod store;

pub use criteria::{SearchCriteria, SearchOperation};
pub use domain::{Ingredient, Instruction, Recipe};
pub use dto::{IngredientDto, InstructionDto, RecipeDto};
pub use predicate::{CriteriaError, Fragment, JoinKey, RecipePredicate, RootField};
pub use response::{Message, ResponseStatus, RestResponse, Severity};
pub use service::RecipeService;
pub use store::{RecipeStore, StoreError};
