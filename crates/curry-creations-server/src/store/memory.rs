// SPDX-License-Identifier: Apache-2.0

use crate::store::{sample, RecipeRepository, RepositoryError, UserProfile};
use async_trait::async_trait;
use curry_creations_model::{Catalog, PurchasedRecipe, RecipeDetail, RecipeId, RecipeSummary};

/// Repository over hard-coded sample records. Process-lifetime data only;
/// nothing is persisted.
pub struct InMemoryRepository {
    catalog: Catalog,
    purchased: Vec<PurchasedRecipe>,
    recommended: Vec<RecipeSummary>,
    profile: UserProfile,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(
        catalog: Catalog,
        purchased: Vec<PurchasedRecipe>,
        recommended: Vec<RecipeSummary>,
        profile: UserProfile,
    ) -> Self {
        Self {
            catalog,
            purchased,
            recommended,
            profile,
        }
    }

    /// The demo dataset: four catalog recipes, three purchased records, two
    /// recommendations, one user.
    pub fn with_sample_data() -> Result<Self, RepositoryError> {
        Ok(Self::new(
            sample::catalog()?,
            sample::purchased()?,
            sample::recommendations()?,
            sample::profile()?,
        ))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, RepositoryError> {
        Ok(self.catalog.summaries().cloned().collect())
    }

    async fn get_recipe_by_id(
        &self,
        id: &RecipeId,
    ) -> Result<Option<RecipeDetail>, RepositoryError> {
        Ok(self.catalog.get(id).cloned())
    }

    async fn purchased_recipes(&self) -> Result<Vec<PurchasedRecipe>, RepositoryError> {
        Ok(self.purchased.clone())
    }

    async fn recommendations(&self) -> Result<Vec<RecipeSummary>, RepositoryError> {
        Ok(self.recommended.clone())
    }

    async fn user_profile(&self) -> Result<UserProfile, RepositoryError> {
        Ok(self.profile.clone())
    }
}
