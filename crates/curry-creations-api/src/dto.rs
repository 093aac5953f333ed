// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeCardDto {
    pub id: String,
    pub title: String,
    pub image: String,
    pub price: String,
    pub rating: f64,
    pub review_count: u64,
    pub cook_time: String,
    pub difficulty: String,
    pub spice_level: u8,
    pub spice_label: String,
    pub cuisine: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessStateDto {
    pub state: String,
    pub reason: Option<String>,
}

/// Premium list content. Before purchase only the teaser is populated; after
/// purchase the full items replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatedListDto {
    pub purchased: bool,
    pub teaser: Option<String>,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NutritionFactsDto {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChefProfileDto {
    pub name: String,
    pub bio: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeDetailDto {
    pub card: RecipeCardDto,
    pub servings: u32,
    pub prep_time: String,
    pub ingredients: GatedListDto,
    pub instructions: GatedListDto,
    pub tips: Vec<String>,
    pub nutrition: NutritionFactsDto,
    pub chef: ChefProfileDto,
    pub access: AccessStateDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchasedRecipeDto {
    pub card: RecipeCardDto,
    pub purchase_date: String,
    pub last_accessed: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserStatsDto {
    pub recipes_owned: u64,
    pub total_spent: String,
    pub favorite_count: u64,
    pub recipes_made: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardDto {
    pub api_version: String,
    pub stats: UserStatsDto,
    pub purchased: Vec<PurchasedRecipeDto>,
    pub favorites: Vec<RecipeCardDto>,
    pub recommended: Vec<RecipeCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeListResponseDto {
    pub api_version: String,
    pub recipes: Vec<RecipeCardDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PurchaseOutcomeDto {
    pub recipe_id: String,
    pub access: AccessStateDto,
}
