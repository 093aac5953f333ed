use curry_creations_api::{map_error, recipe_detail, ApiError, ApiErrorCode};
use curry_creations_model::{
    AccessState, ChefProfile, Difficulty, NutritionFacts, Price, Rating, RecipeDetail, RecipeId,
    RecipeSummary, SpiceLevel,
};

fn butter_chicken() -> RecipeDetail {
    RecipeDetail::new(
        RecipeSummary::new(
            RecipeId::parse("butter-chicken").expect("id"),
            "Authentic Butter Chicken".to_string(),
            "/generated/butter-chicken.png".to_string(),
            Price::parse("5.99").expect("price"),
            Rating::parse(4.8).expect("rating"),
            127,
            "45 min".to_string(),
            Difficulty::Medium,
            SpiceLevel::parse(2).expect("spice"),
            "Indian".to_string(),
            "Rich, creamy tomato-based curry with tender chicken pieces".to_string(),
        ),
        4,
        "20 min".to_string(),
        vec![
            "2 lbs boneless chicken, cut into chunks".to_string(),
            "1 cup heavy cream".to_string(),
            "3 tbsp butter".to_string(),
        ],
        vec![
            "Brown the chicken.".to_string(),
            "Simmer in the sauce.".to_string(),
        ],
        vec!["Marinate overnight for best flavor".to_string()],
        NutritionFacts::new(485, "32g".into(), "12g".into(), "36g".into(), "3g".into()),
        ChefProfile::new(
            "Chef Priya Sharma".to_string(),
            "Master of North Indian cuisine".to_string(),
            "/avatars/chef-priya.jpg".to_string(),
        ),
        "Preview: Chicken, cream, butter, onion, garlic, ginger, spices...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    )
}

#[test]
fn unpurchased_detail_carries_teaser_only() {
    let dto = recipe_detail(&butter_chicken(), &AccessState::Unpurchased);
    assert!(!dto.ingredients.purchased);
    assert!(dto.ingredients.items.is_empty());
    assert_eq!(
        dto.ingredients.teaser.as_deref(),
        Some("Preview: Chicken, cream, butter, onion, garlic, ginger, spices...")
    );
    assert!(dto.instructions.items.is_empty());
    assert_eq!(dto.access.state, "unpurchased");
    // Everything outside the gate stays visible.
    assert_eq!(dto.card.price, "5.99");
    assert_eq!(dto.card.spice_level, 2);
    assert_eq!(dto.tips.len(), 1);
    assert_eq!(dto.nutrition.calories, 485);
}

#[test]
fn purchased_detail_carries_full_lists() {
    let detail = butter_chicken();
    let dto = recipe_detail(&detail, &AccessState::Purchased);
    assert!(dto.ingredients.purchased);
    assert!(dto.ingredients.teaser.is_none());
    assert_eq!(dto.ingredients.items, detail.ingredients);
    assert_eq!(dto.instructions.items, detail.instructions);
    assert_eq!(dto.access.state, "purchased");
}

#[test]
fn failed_purchase_surfaces_reason() {
    let dto = recipe_detail(
        &butter_chicken(),
        &AccessState::PurchaseFailed {
            reason: "gateway timeout".to_string(),
        },
    );
    assert_eq!(dto.access.state, "purchase_failed");
    assert_eq!(dto.access.reason.as_deref(), Some("gateway timeout"));
    assert!(!dto.ingredients.purchased);
}

#[test]
fn error_codes_map_to_expected_statuses() {
    let cases = [
        (ApiError::recipe_not_found("nonexistent-id"), 404),
        (ApiError::invalid_recipe_id("Butter Chicken", "not a slug"), 400),
        (ApiError::purchase_in_flight("butter-chicken"), 409),
        (ApiError::payment_failed("butter-chicken", "declined"), 402),
        (
            ApiError::new(ApiErrorCode::NotReady, "warming up", serde_json::json!({})),
            503,
        ),
        (
            ApiError::new(ApiErrorCode::Internal, "boom", serde_json::json!({})),
            500,
        ),
    ];
    for (error, status) in cases {
        assert_eq!(map_error(&error).status_code, status, "{:?}", error.code);
    }
}

#[test]
fn dashboard_conversion_formats_dates_and_totals() {
    use curry_creations_model::{PurchasedRecipe, UserStats};

    let record = PurchasedRecipe::new(
        butter_chicken().summary.clone(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 20).expect("date")),
    );
    let stats = UserStats::derive(std::slice::from_ref(&record), 1, 5);
    let dto = curry_creations_api::dashboard(&stats, &[record], &[], &[]);
    assert_eq!(dto.stats.total_spent, "5.99");
    assert_eq!(dto.purchased[0].purchase_date, "2024-01-15");
    assert_eq!(dto.purchased[0].last_accessed.as_deref(), Some("2024-01-20"));
    assert!(dto.favorites.is_empty());
}

#[test]
fn not_found_details_include_catalog_escape_hatch() {
    let error = ApiError::recipe_not_found("nonexistent-id");
    assert_eq!(error.details["catalog"], "/");
    assert_eq!(error.details["recipe_id"], "nonexistent-id");
}
