// SPDX-License-Identifier: Apache-2.0
//
// The demo records a real backend would serve: the featured catalog, one
// user's purchase history, and the static recommendations shown on the
// dashboard.

use crate::store::{RepositoryError, UserProfile};
use chrono::NaiveDate;
use curry_creations_model::{
    Catalog, ChefProfile, Difficulty, NutritionFacts, Price, PurchasedRecipe, Rating, RecipeDetail,
    RecipeId, RecipeSummary, SpiceLevel,
};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate, RepositoryError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| RepositoryError(format!("invalid sample date {y}-{m:02}-{d:02}")))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_arguments)]
fn summary(
    id: &str,
    title: &str,
    image: &str,
    price_cents: u64,
    rating: f64,
    review_count: u64,
    cook_time: &str,
    difficulty: Difficulty,
    spice: u8,
    cuisine: &str,
    description: &str,
) -> Result<RecipeSummary, RepositoryError> {
    Ok(RecipeSummary::new(
        RecipeId::parse(id)?,
        title.to_string(),
        image.to_string(),
        Price::from_cents(price_cents),
        Rating::parse(rating)?,
        review_count,
        cook_time.to_string(),
        difficulty,
        SpiceLevel::parse(spice)?,
        cuisine.to_string(),
        description.to_string(),
    ))
}

fn butter_chicken() -> Result<RecipeDetail, RepositoryError> {
    Ok(RecipeDetail::new(
        summary(
            "butter-chicken",
            "Authentic Butter Chicken",
            "/generated/butter-chicken.png",
            599,
            4.8,
            127,
            "45 min",
            Difficulty::Medium,
            2,
            "Indian",
            "Rich, creamy tomato-based curry with tender chicken pieces, infused with aromatic spices and finished with butter and cream. This restaurant-quality recipe brings the flavors of India to your kitchen.",
        )?,
        4,
        "20 min".to_string(),
        strings(&[
            "2 lbs boneless chicken, cut into chunks",
            "1 cup heavy cream",
            "3 tbsp butter",
            "1 large onion, finely chopped",
            "4 cloves garlic, minced",
            "1 inch ginger, grated",
            "2 tbsp tomato paste",
            "1 can (14oz) crushed tomatoes",
            "1 tsp garam masala",
            "1 tsp ground cumin",
            "1 tsp ground coriander",
            "1/2 tsp turmeric powder",
            "1/2 tsp paprika",
            "1/4 tsp cayenne pepper",
            "Salt to taste",
            "Fresh cilantro for garnish",
        ]),
        strings(&[
            "Season chicken with salt and pepper. Heat oil in a large pan over medium-high heat.",
            "Cook chicken until golden brown on all sides. Remove and set aside.",
            "In the same pan, melt butter and sauté onions until golden, about 5 minutes.",
            "Add garlic and ginger, cook for 1 minute until fragrant.",
            "Stir in tomato paste and cook for 2 minutes.",
            "Add all spices and cook for 30 seconds until aromatic.",
            "Pour in crushed tomatoes and simmer for 10 minutes.",
            "Return chicken to the pan and simmer for 15 minutes.",
            "Stir in cream and cook for 5 more minutes.",
            "Garnish with fresh cilantro and serve with basmati rice.",
        ]),
        strings(&[
            "Marinate chicken in yogurt and spices for 2+ hours for best flavor",
            "Use whole spices and grind them fresh for maximum aroma",
            "Don't skip the cream - it balances the acidity of tomatoes",
            "Serve immediately with naan bread or basmati rice",
        ]),
        NutritionFacts::new(485, "32g".into(), "12g".into(), "36g".into(), "3g".into()),
        ChefProfile::new(
            "Chef Priya Sharma".to_string(),
            "Master of North Indian cuisine with 15+ years of experience".to_string(),
            "/avatars/chef-priya.jpg".to_string(),
        ),
        "Preview: Chicken, cream, butter, onion, garlic, ginger, spices...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    ))
}

fn lamb_vindaloo() -> Result<RecipeDetail, RepositoryError> {
    Ok(RecipeDetail::new(
        summary(
            "lamb-vindaloo",
            "Goan Lamb Vindaloo",
            "/generated/lamb-vindaloo.png",
            699,
            4.9,
            89,
            "90 min",
            Difficulty::Hard,
            5,
            "Indian",
            "Fiery Portuguese-influenced curry with tender lamb, featuring a complex blend of spices and tangy vinegar. This authentic Goan recipe delivers intense heat and incredible depth of flavor.",
        )?,
        6,
        "30 min".to_string(),
        strings(&[
            "3 lbs lamb shoulder, cut into chunks",
            "15 dried red chilies",
            "2 tsp cumin seeds",
            "1 tsp black peppercorns",
            "1 inch cinnamon stick",
            "4 cloves",
            "6 cloves garlic",
            "2 inch ginger piece",
            "1/4 cup malt vinegar",
            "2 large onions, sliced",
            "2 tsp brown sugar",
            "1 tsp turmeric",
            "Salt to taste",
            "3 tbsp vegetable oil",
        ]),
        strings(&[
            "Soak dried chilies in warm water for 15 minutes.",
            "Dry roast cumin, peppercorns, cinnamon, and cloves until fragrant.",
            "Blend soaked chilies, roasted spices, garlic, ginger, and vinegar into a smooth paste.",
            "Marinate lamb with spice paste, turmeric, and salt for 2+ hours.",
            "Heat oil in a heavy-bottomed pot over medium heat.",
            "Cook onions until golden brown and caramelized.",
            "Add marinated lamb and cook for 10 minutes.",
            "Add brown sugar and 1 cup water. Bring to a boil.",
            "Reduce heat, cover, and simmer for 60-75 minutes until tender.",
            "Adjust seasoning and serve with steamed rice.",
        ]),
        strings(&[
            "Use Kashmiri chilies for color and mild heat, bird's eye for fire",
            "Marinating overnight develops the best flavor",
            "The curry tastes better the next day - make ahead!",
            "Serve with cooling raita to balance the heat",
        ]),
        NutritionFacts::new(545, "38g".into(), "8g".into(), "42g".into(), "2g".into()),
        ChefProfile::new(
            "Chef Miguel D'Souza".to_string(),
            "Goan cuisine specialist preserving traditional recipes".to_string(),
            "/avatars/chef-miguel.jpg".to_string(),
        ),
        "Preview: Lamb shoulder, dried chilies, whole spices, vinegar...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    ))
}

fn palak_paneer() -> Result<RecipeDetail, RepositoryError> {
    Ok(RecipeDetail::new(
        summary(
            "palak-paneer",
            "Creamy Palak Paneer",
            "/generated/palak-paneer.png",
            499,
            4.7,
            156,
            "30 min",
            Difficulty::Easy,
            2,
            "Indian",
            "Fresh spinach curry with homemade paneer cheese, cooked with aromatic spices and finished with cream. A healthy and delicious vegetarian favorite.",
        )?,
        4,
        "15 min".to_string(),
        strings(&[
            "1 lb fresh spinach, washed",
            "8oz paneer, cubed",
            "1 large onion, chopped",
            "3 cloves garlic, minced",
            "1 inch ginger, grated",
            "2 green chilies, slit",
            "1 tomato, chopped",
            "1/2 cup heavy cream",
            "1 tsp cumin seeds",
            "1 tsp garam masala",
            "1/2 tsp turmeric",
            "Salt to taste",
            "3 tbsp ghee or oil",
        ]),
        strings(&[
            "Blanch spinach in boiling water for 2 minutes, then ice bath.",
            "Blend blanched spinach into a smooth puree.",
            "Heat ghee in a pan, lightly fry paneer cubes until golden. Set aside.",
            "In the same pan, add cumin seeds and let them splutter.",
            "Add onions and cook until golden brown.",
            "Add garlic, ginger, and green chilies. Cook for 1 minute.",
            "Add tomatoes and cook until soft.",
            "Add turmeric and garam masala, cook for 30 seconds.",
            "Pour in spinach puree and simmer for 5 minutes.",
            "Add paneer, cream, and salt. Simmer for 3-4 minutes.",
            "Serve hot with naan or rice.",
        ]),
        strings(&[
            "Ice bath keeps spinach bright green",
            "Don't overcook paneer - it becomes rubbery",
            "Add a pinch of sugar to balance flavors",
            "Fresh homemade paneer tastes best",
        ]),
        NutritionFacts::new(325, "18g".into(), "12g".into(), "24g".into(), "4g".into()),
        ChefProfile::new(
            "Chef Anjali Patel".to_string(),
            "Vegetarian cuisine expert and cookbook author".to_string(),
            "/avatars/chef-anjali.jpg".to_string(),
        ),
        "Preview: Fresh spinach, paneer, onion, garlic, cream, spices...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    ))
}

fn thai_green_curry() -> Result<RecipeDetail, RepositoryError> {
    Ok(RecipeDetail::new(
        summary(
            "thai-green-curry",
            "Thai Green Curry",
            "/generated/thai-green-curry.png",
            549,
            4.6,
            203,
            "25 min",
            Difficulty::Easy,
            3,
            "Thai",
            "Aromatic coconut curry with Thai basil and vegetables, featuring a fragrant green curry paste and tender chicken in rich coconut milk.",
        )?,
        4,
        "15 min".to_string(),
        strings(&[
            "1 lb chicken thighs, sliced",
            "2 cans (14oz each) coconut milk",
            "3 tbsp Thai green curry paste",
            "1 Thai eggplant, cubed",
            "1 bell pepper, sliced",
            "4 kaffir lime leaves",
            "1 cup Thai basil leaves",
            "2 tbsp fish sauce",
            "1 tbsp palm sugar",
            "2 red chilies, sliced",
            "1 tbsp vegetable oil",
        ]),
        strings(&[
            "Heat oil in a wok over medium-high heat.",
            "Fry curry paste for 2 minutes until fragrant.",
            "Add thick coconut cream (from can top) and fry for 3 minutes.",
            "Add chicken and cook until almost done.",
            "Pour in remaining coconut milk and bring to a simmer.",
            "Add eggplant, bell pepper, and lime leaves.",
            "Season with fish sauce and palm sugar.",
            "Simmer for 8-10 minutes until vegetables are tender.",
            "Stir in Thai basil and red chilies.",
            "Serve immediately with jasmine rice.",
        ]),
        strings(&[
            "Use coconut cream first for richer flavor",
            "Don't overcook vegetables - keep them crisp",
            "Adjust sweetness and saltiness to taste",
            "Fresh Thai basil is essential for authentic flavor",
        ]),
        NutritionFacts::new(420, "28g".into(), "15g".into(), "32g".into(), "3g".into()),
        ChefProfile::new(
            "Chef Siriporn Tanaka".to_string(),
            "Bangkok-trained chef specializing in authentic Thai flavors".to_string(),
            "/avatars/chef-siriporn.jpg".to_string(),
        ),
        "Preview: Chicken thighs, coconut milk, green curry paste, Thai basil...".to_string(),
        "Step-by-step instructions with timing and techniques...".to_string(),
    ))
}

pub(crate) fn catalog() -> Result<Catalog, RepositoryError> {
    Ok(Catalog::new(vec![
        butter_chicken()?,
        lamb_vindaloo()?,
        palak_paneer()?,
        thai_green_curry()?,
    ])?)
}

pub(crate) fn purchased() -> Result<Vec<PurchasedRecipe>, RepositoryError> {
    Ok(vec![
        PurchasedRecipe::new(
            butter_chicken()?.summary,
            date(2024, 1, 15)?,
            Some(date(2024, 1, 20)?),
        ),
        PurchasedRecipe::new(
            palak_paneer()?.summary,
            date(2024, 1, 10)?,
            Some(date(2024, 1, 18)?),
        ),
        PurchasedRecipe::new(thai_green_curry()?.summary, date(2024, 1, 8)?, None),
    ])
}

pub(crate) fn recommendations() -> Result<Vec<RecipeSummary>, RepositoryError> {
    Ok(vec![
        summary(
            "biryani",
            "Hyderabadi Chicken Biryani",
            "/generated/butter-chicken.png",
            799,
            4.9,
            64,
            "120 min",
            Difficulty::Hard,
            3,
            "Indian",
            "Fragrant layered rice with saffron and spiced chicken",
        )?,
        summary(
            "masala",
            "Garam Masala Blend",
            "/generated/palak-paneer.png",
            299,
            4.8,
            45,
            "10 min",
            Difficulty::Easy,
            4,
            "Indian",
            "Toast-and-grind signature spice blend for everyday curries",
        )?,
    ])
}

pub(crate) fn profile() -> Result<UserProfile, RepositoryError> {
    Ok(UserProfile {
        display_name: "John Doe".to_string(),
        favorites: vec![
            RecipeId::parse("butter-chicken")?,
            RecipeId::parse("palak-paneer")?,
        ],
        recipes_made: 5,
    })
}
