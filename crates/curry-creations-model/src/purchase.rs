// SPDX-License-Identifier: Apache-2.0

use crate::recipe::{ParseError, Price, RecipeSummary};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Catalog entry enriched with purchase metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct PurchasedRecipe {
    pub recipe: RecipeSummary,
    pub purchase_date: NaiveDate,
    pub last_accessed: Option<NaiveDate>,
}

impl PurchasedRecipe {
    #[must_use]
    pub fn new(
        recipe: RecipeSummary,
        purchase_date: NaiveDate,
        last_accessed: Option<NaiveDate>,
    ) -> Self {
        Self {
            recipe,
            purchase_date,
            last_accessed,
        }
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        self.recipe.validate()?;
        if let Some(accessed) = self.last_accessed {
            if accessed < self.purchase_date {
                return Err(ParseError::InvalidFormat(
                    "last_accessed must not precede purchase_date",
                ));
            }
        }
        Ok(())
    }
}

/// Aggregate counters shown on the dashboard. Owned count and total spend
/// are always derived from the purchased list; favorite and made counts come
/// from the user profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct UserStats {
    pub recipes_owned: u64,
    pub total_spent: Price,
    pub favorite_count: u64,
    pub recipes_made: u64,
}

impl UserStats {
    #[must_use]
    pub fn derive(purchased: &[PurchasedRecipe], favorite_count: u64, recipes_made: u64) -> Self {
        Self {
            recipes_owned: purchased.len() as u64,
            total_spent: purchased.iter().map(|p| p.recipe.price).sum(),
            favorite_count,
            recipes_made,
        }
    }
}
