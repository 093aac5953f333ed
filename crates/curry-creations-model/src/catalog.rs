// SPDX-License-Identifier: Apache-2.0

use crate::recipe::{ParseError, RecipeDetail, RecipeId, RecipeSummary};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    DuplicateRecipeId(String),
    InvalidRecipe { id: String, source: ParseError },
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateRecipeId(id) => write!(f, "duplicate recipe id: {id}"),
            Self::InvalidRecipe { id, source } => write!(f, "invalid recipe {id}: {source}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Identifier-keyed recipe lookup. Absence of an id is a NotFound result for
/// callers, never an error path.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_id: HashMap<RecipeId, RecipeDetail>,
    order: Vec<RecipeId>,
}

impl Catalog {
    pub fn new(recipes: Vec<RecipeDetail>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        let mut order = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            recipe.validate().map_err(|source| CatalogError::InvalidRecipe {
                id: recipe.id().as_str().to_string(),
                source,
            })?;
            let id = recipe.id().clone();
            if by_id.insert(id.clone(), recipe).is_some() {
                return Err(CatalogError::DuplicateRecipeId(id.as_str().to_string()));
            }
            order.push(id);
        }
        Ok(Self { by_id, order })
    }

    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&RecipeDetail> {
        self.by_id.get(id)
    }

    /// Catalog entries in publication order.
    pub fn summaries(&self) -> impl Iterator<Item = &RecipeSummary> {
        self.order.iter().filter_map(|id| self.by_id.get(id)).map(|r| &r.summary)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
