#![forbid(unsafe_code)]
//! CurryCreations model SSOT.
//!
//! ```compile_fail
//! use curry_creations_model::AccessState;
//!
//! fn exhaustive_match(s: AccessState) -> &'static str {
//!     match s {
//!         AccessState::Unpurchased => "u",
//!         AccessState::Purchasing => "busy",
//!         AccessState::Purchased => "owned",
//!     }
//! }
//! ```

mod access;
mod catalog;
mod purchase;
mod recipe;

pub use access::{AccessState, TransitionError};
pub use catalog::{Catalog, CatalogError};
pub use purchase::{PurchasedRecipe, UserStats};
pub use recipe::{
    ChefProfile, Difficulty, NutritionFacts, ParseError, Price, Rating, RecipeDetail, RecipeId,
    RecipeSummary, SpiceLevel, SpiceMarker, ID_MAX_LEN, TITLE_MAX_LEN,
};

pub const CRATE_NAME: &str = "curry-creations-model";
