#![forbid(unsafe_code)]

mod convert;
mod dto;
mod error_mapping;
mod errors;

pub use convert::{
    access_state, dashboard, purchase_outcome, purchased_recipe, recipe_card, recipe_detail,
    user_stats,
};
pub use dto::{
    AccessStateDto, ChefProfileDto, DashboardDto, GatedListDto, NutritionFactsDto,
    PurchaseOutcomeDto, PurchasedRecipeDto, RecipeCardDto, RecipeDetailDto, RecipeListResponseDto,
    UserStatsDto,
};
pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ApiErrorCode};

pub const CRATE_NAME: &str = "curry-creations-api";
pub const API_VERSION: &str = "v1";

#[must_use]
pub fn recipe_route_key(id: &curry_creations_model::RecipeId) -> String {
    format!("/recipe/{}", id.as_str())
}
