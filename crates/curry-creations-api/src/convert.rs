// SPDX-License-Identifier: Apache-2.0

use crate::dto::{
    AccessStateDto, ChefProfileDto, DashboardDto, GatedListDto, NutritionFactsDto,
    PurchaseOutcomeDto, PurchasedRecipeDto, RecipeCardDto, RecipeDetailDto, UserStatsDto,
};
use crate::API_VERSION;
use curry_creations_model::{
    AccessState, PurchasedRecipe, RecipeDetail, RecipeSummary, UserStats,
};

#[must_use]
pub fn recipe_card(summary: &RecipeSummary) -> RecipeCardDto {
    RecipeCardDto {
        id: summary.id.as_str().to_string(),
        title: summary.title.clone(),
        image: summary.image.clone(),
        price: summary.price.to_string(),
        rating: summary.rating.value(),
        review_count: summary.review_count,
        cook_time: summary.cook_time.clone(),
        difficulty: summary.difficulty.as_str().to_string(),
        spice_level: summary.spice_level.get(),
        spice_label: summary.spice_level.label().to_string(),
        cuisine: summary.cuisine.clone(),
        description: summary.description.clone(),
    }
}

#[must_use]
pub fn access_state(state: &AccessState) -> AccessStateDto {
    match state {
        AccessState::Unpurchased => AccessStateDto {
            state: "unpurchased".to_string(),
            reason: None,
        },
        AccessState::Purchasing => AccessStateDto {
            state: "purchasing".to_string(),
            reason: None,
        },
        AccessState::Purchased => AccessStateDto {
            state: "purchased".to_string(),
            reason: None,
        },
        AccessState::PurchaseFailed { reason } => AccessStateDto {
            state: "purchase_failed".to_string(),
            reason: Some(reason.clone()),
        },
        _ => AccessStateDto {
            state: "unpurchased".to_string(),
            reason: None,
        },
    }
}

fn gated(purchased: bool, teaser: &str, items: &[String]) -> GatedListDto {
    if purchased {
        GatedListDto {
            purchased: true,
            teaser: None,
            items: items.to_vec(),
        }
    } else {
        GatedListDto {
            purchased: false,
            teaser: Some(teaser.to_string()),
            items: Vec::new(),
        }
    }
}

/// Premium content (ingredients, instructions) collapses to the teaser until
/// the access state is `Purchased`; every other field is always visible.
#[must_use]
pub fn recipe_detail(detail: &RecipeDetail, access: &AccessState) -> RecipeDetailDto {
    let purchased = access.is_purchased();
    RecipeDetailDto {
        card: recipe_card(&detail.summary),
        servings: detail.servings,
        prep_time: detail.prep_time.clone(),
        ingredients: gated(purchased, &detail.ingredient_teaser, &detail.ingredients),
        instructions: gated(purchased, &detail.instruction_teaser, &detail.instructions),
        tips: detail.tips.clone(),
        nutrition: NutritionFactsDto {
            calories: detail.nutrition.calories,
            protein: detail.nutrition.protein.clone(),
            carbs: detail.nutrition.carbs.clone(),
            fat: detail.nutrition.fat.clone(),
            fiber: detail.nutrition.fiber.clone(),
        },
        chef: ChefProfileDto {
            name: detail.chef.name.clone(),
            bio: detail.chef.bio.clone(),
            avatar: detail.chef.avatar.clone(),
        },
        access: access_state(access),
    }
}

#[must_use]
pub fn purchased_recipe(record: &PurchasedRecipe) -> PurchasedRecipeDto {
    PurchasedRecipeDto {
        card: recipe_card(&record.recipe),
        purchase_date: record.purchase_date.format("%Y-%m-%d").to_string(),
        last_accessed: record
            .last_accessed
            .map(|d| d.format("%Y-%m-%d").to_string()),
    }
}

#[must_use]
pub fn user_stats(stats: &UserStats) -> UserStatsDto {
    UserStatsDto {
        recipes_owned: stats.recipes_owned,
        total_spent: stats.total_spent.to_string(),
        favorite_count: stats.favorite_count,
        recipes_made: stats.recipes_made,
    }
}

#[must_use]
pub fn dashboard(
    stats: &UserStats,
    purchased: &[PurchasedRecipe],
    favorites: &[RecipeSummary],
    recommended: &[RecipeSummary],
) -> DashboardDto {
    DashboardDto {
        api_version: API_VERSION.to_string(),
        stats: user_stats(stats),
        purchased: purchased.iter().map(purchased_recipe).collect(),
        favorites: favorites.iter().map(recipe_card).collect(),
        recommended: recommended.iter().map(recipe_card).collect(),
    }
}

#[must_use]
pub fn purchase_outcome(id: &curry_creations_model::RecipeId, access: &AccessState) -> PurchaseOutcomeDto {
    PurchaseOutcomeDto {
        recipe_id: id.as_str().to_string(),
        access: access_state(access),
    }
}
