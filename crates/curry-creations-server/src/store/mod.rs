// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use curry_creations_model::{
    CatalogError, ParseError, PurchasedRecipe, RecipeDetail, RecipeId, RecipeSummary,
};
use std::fmt::{Display, Formatter};

mod memory;
mod sample;

pub use memory::InMemoryRepository;

#[derive(Debug)]
pub struct RepositoryError(pub String);

impl Display for RepositoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for RepositoryError {}

impl From<ParseError> for RepositoryError {
    fn from(err: ParseError) -> Self {
        Self(err.to_string())
    }
}

impl From<CatalogError> for RepositoryError {
    fn from(err: CatalogError) -> Self {
        Self(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub favorites: Vec<RecipeId>,
    pub recipes_made: u64,
}

/// Backend seam for the catalog and the user's purchase history. Page and
/// API handlers depend on this trait only; the in-memory implementation
/// stands in for a real backend.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, RepositoryError>;

    async fn get_recipe_by_id(
        &self,
        id: &RecipeId,
    ) -> Result<Option<RecipeDetail>, RepositoryError>;

    async fn purchased_recipes(&self) -> Result<Vec<PurchasedRecipe>, RepositoryError>;

    async fn recommendations(&self) -> Result<Vec<RecipeSummary>, RepositoryError>;

    async fn user_profile(&self) -> Result<UserProfile, RepositoryError>;
}
