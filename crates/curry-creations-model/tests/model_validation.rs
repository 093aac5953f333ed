use chrono::NaiveDate;
use curry_creations_model::{
    Catalog, CatalogError, ChefProfile, Difficulty, NutritionFacts, Price, PurchasedRecipe, Rating,
    RecipeDetail, RecipeId, RecipeSummary, SpiceLevel, UserStats,
};

fn summary(id: &str, title: &str, cents: u64) -> RecipeSummary {
    RecipeSummary::new(
        RecipeId::parse(id).expect("id"),
        title.to_string(),
        format!("/generated/{id}.png"),
        Price::from_cents(cents),
        Rating::parse(4.8).expect("rating"),
        127,
        "45 min".to_string(),
        Difficulty::Medium,
        SpiceLevel::parse(2).expect("spice"),
        "Indian".to_string(),
        "Rich, creamy tomato-based curry with tender chicken pieces".to_string(),
    )
}

fn detail(id: &str, title: &str, cents: u64) -> RecipeDetail {
    RecipeDetail::new(
        summary(id, title, cents),
        4,
        "20 min".to_string(),
        vec!["2 lbs boneless chicken".to_string(), "1 cup heavy cream".to_string()],
        vec!["Brown the chicken.".to_string(), "Simmer in sauce.".to_string()],
        vec!["Marinate overnight for best flavor".to_string()],
        NutritionFacts::new(485, "32g".into(), "12g".into(), "36g".into(), "3g".into()),
        ChefProfile::new(
            "Chef Priya Sharma".to_string(),
            "Master of North Indian cuisine".to_string(),
            "/avatars/chef-priya.jpg".to_string(),
        ),
        "Preview: Chicken, cream, butter, spices...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    )
}

#[test]
fn catalog_lookup_returns_matching_id() {
    let catalog = Catalog::new(vec![
        detail("butter-chicken", "Authentic Butter Chicken", 599),
        detail("palak-paneer", "Creamy Palak Paneer", 499),
    ])
    .expect("catalog");
    let id = RecipeId::parse("palak-paneer").expect("id");
    let found = catalog.get(&id).expect("present");
    assert_eq!(found.id(), &id);
}

#[test]
fn catalog_lookup_misses_unknown_id() {
    let catalog =
        Catalog::new(vec![detail("butter-chicken", "Authentic Butter Chicken", 599)])
            .expect("catalog");
    let id = RecipeId::parse("nonexistent-id").expect("id");
    assert!(catalog.get(&id).is_none());
}

#[test]
fn catalog_rejects_duplicate_ids() {
    let err = Catalog::new(vec![
        detail("butter-chicken", "Authentic Butter Chicken", 599),
        detail("butter-chicken", "Butter Chicken Again", 699),
    ])
    .expect_err("duplicate");
    assert_eq!(
        err,
        CatalogError::DuplicateRecipeId("butter-chicken".to_string())
    );
}

#[test]
fn catalog_preserves_publication_order() {
    let catalog = Catalog::new(vec![
        detail("butter-chicken", "Authentic Butter Chicken", 599),
        detail("lamb-vindaloo", "Goan Lamb Vindaloo", 699),
        detail("palak-paneer", "Creamy Palak Paneer", 499),
    ])
    .expect("catalog");
    let ids: Vec<&str> = catalog.summaries().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["butter-chicken", "lamb-vindaloo", "palak-paneer"]);
}

#[test]
fn detail_validate_rejects_empty_ingredients() {
    let mut bad = detail("butter-chicken", "Authentic Butter Chicken", 599);
    bad.ingredients.clear();
    assert!(bad.validate().is_err());
}

#[test]
fn detail_validate_rejects_zero_servings() {
    let mut bad = detail("butter-chicken", "Authentic Butter Chicken", 599);
    bad.servings = 0;
    assert!(bad.validate().is_err());
}

#[test]
fn purchased_record_rejects_access_before_purchase() {
    let record = PurchasedRecipe::new(
        summary("butter-chicken", "Authentic Butter Chicken", 599),
        NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        Some(NaiveDate::from_ymd_opt(2024, 1, 10).expect("date")),
    );
    assert!(record.validate().is_err());
}

#[test]
fn stats_derive_sums_prices_in_cents() {
    let purchased = vec![
        PurchasedRecipe::new(
            summary("butter-chicken", "Authentic Butter Chicken", 599),
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
            Some(NaiveDate::from_ymd_opt(2024, 1, 20).expect("date")),
        ),
        PurchasedRecipe::new(
            summary("palak-paneer", "Creamy Palak Paneer", 499),
            NaiveDate::from_ymd_opt(2024, 1, 10).expect("date"),
            None,
        ),
        PurchasedRecipe::new(
            summary("thai-green-curry", "Thai Green Curry", 549),
            NaiveDate::from_ymd_opt(2024, 1, 8).expect("date"),
            None,
        ),
    ];
    let stats = UserStats::derive(&purchased, 2, 5);
    assert_eq!(stats.recipes_owned, 3);
    assert_eq!(stats.total_spent.to_string(), "16.47");
    assert_eq!(stats.favorite_count, 2);
    assert_eq!(stats.recipes_made, 5);
}

#[test]
fn stats_derive_from_empty_list_is_zero() {
    let stats = UserStats::derive(&[], 0, 0);
    assert_eq!(stats.recipes_owned, 0);
    assert_eq!(stats.total_spent.to_string(), "0.00");
}
