use crate::http::handlers::{propagated_request_id, with_request_id};
use crate::purchase::{execute_purchase, PurchaseFlowOutcome};
use crate::store::RecipeRepository;
use crate::AppState;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use curry_creations_model::{
    AccessState, PurchasedRecipe, RecipeDetail, RecipeId, RecipeSummary, SpiceLevel, SpiceMarker,
    UserStats,
};
use std::sync::atomic::Ordering;
use std::time::Instant;

fn spice_indicator(level: SpiceLevel) -> String {
    let mut dots = String::new();
    for marker in level.markers() {
        dots.push(match marker {
            SpiceMarker::Active => '●',
            SpiceMarker::Inactive => '○',
        });
    }
    format!("<span class=\"spice\">{dots}</span> {}", level.label())
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title} - CurryCreations</title></head><body>\
<header><a href=\"/\"><strong>CurryCreations</strong></a> | <a href=\"/\">Browse Recipes</a> | <a href=\"/dashboard\">My Dashboard</a></header>\
{body}\
<footer><p>&copy; 2024 CurryCreations. All rights reserved. Version <code>{}</code></p></footer>\
</body></html>",
        env!("CARGO_PKG_VERSION")
    )
}

fn html_response(status: StatusCode, html: String) -> Response {
    let mut resp = Response::new(Body::from(html));
    *resp.status_mut() = status;
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    resp
}

fn not_found_page(recipe_id: &str) -> Response {
    let body = format!(
        "<h1>Recipe Not Found</h1>\
<p>No recipe matches <code>{recipe_id}</code>.</p>\
<p><a href=\"/\">Back to Home</a></p>"
    );
    html_response(StatusCode::NOT_FOUND, page("Recipe Not Found", &body))
}

fn recipe_card(recipe: &RecipeSummary) -> String {
    format!(
        "<li><a href=\"/recipe/{id}\">{title}</a> - ${price} \
({cuisine}, {difficulty}, {cook_time}) \
{spice} \
&#9733; {rating} ({reviews} reviews)<br>{description}</li>",
        id = recipe.id,
        title = recipe.title,
        price = recipe.price,
        cuisine = recipe.cuisine,
        difficulty = recipe.difficulty,
        cook_time = recipe.cook_time,
        spice = spice_indicator(recipe.spice_level),
        rating = recipe.rating,
        reviews = recipe.review_count,
        description = recipe.description,
    )
}

pub(crate) async fn home_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let recipes = state.repository.list_recipes().await.unwrap_or_default();
    let mut list = String::new();
    for recipe in &recipes {
        list.push_str(&recipe_card(recipe));
    }
    if list.is_empty() {
        list.push_str("<li>No recipes published yet.</li>");
    }
    let body = format!(
        "<h1>EXPLORE FLAVORS, MASTER CURRY</h1>\
<p>Authentic Recipes from Around the World</p>\
<h2>Featured Recipes</h2>\
<p>Discover our most popular curry recipes, each crafted with authentic spices and traditional techniques</p>\
<ul>{list}</ul>"
    );
    let resp = html_response(StatusCode::OK, page("Home", &body));
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

fn purchase_block(detail: &RecipeDetail, access: &AccessState) -> String {
    let action = format!("/recipe/{}/purchase", detail.id());
    match access {
        AccessState::Purchased => {
            "<p><strong>&#9989; Purchased!</strong> Lifetime access.</p>".to_string()
        }
        AccessState::Purchasing => "<p>Processing...</p>".to_string(),
        AccessState::PurchaseFailed { reason } => format!(
            "<p>Purchase failed: {reason}</p>\
<form method=\"post\" action=\"{action}\"><button type=\"submit\">Try Again</button></form>"
        ),
        _ => format!(
            "<p>Premium Recipe Access</p>\
<form method=\"post\" action=\"{action}\"><button type=\"submit\">Purchase Recipe - ${}</button></form>\
<p>Lifetime access &bull; Money-back guarantee</p>",
            detail.summary.price
        ),
    }
}

fn gated_section(
    heading: &str,
    locked_copy: &str,
    teaser: &str,
    items: &[String],
    ordered: bool,
    purchased: bool,
) -> String {
    if !purchased {
        return format!(
            "<h2>{heading}</h2><p>{locked_copy}</p><blockquote>{teaser}</blockquote>"
        );
    }
    let tag = if ordered { "ol" } else { "ul" };
    let mut out = format!("<h2>{heading}</h2><{tag}>");
    for item in items {
        out.push_str(&format!("<li>{item}</li>"));
    }
    out.push_str(&format!("</{tag}>"));
    out
}

fn detail_page(detail: &RecipeDetail, access: &AccessState) -> String {
    let summary = &detail.summary;
    let purchased = access.is_purchased();
    let mut body = format!(
        "<p><a href=\"/\">&larr; Back to Recipes</a></p>\
<h1>{title}</h1>\
<p>{description}</p>\
<p>&#9733; {rating} ({reviews} reviews) | Prep: {prep} | Cook: {cook} | Serves: {servings}</p>\
<p>Difficulty: {difficulty} | Spice Level: {spice} | Cuisine: {cuisine}</p>\
{purchase}",
        title = summary.title,
        description = summary.description,
        rating = summary.rating,
        reviews = summary.review_count,
        prep = detail.prep_time,
        cook = summary.cook_time,
        servings = detail.servings,
        difficulty = summary.difficulty,
        spice = spice_indicator(summary.spice_level),
        cuisine = summary.cuisine,
        purchase = purchase_block(detail, access),
    );
    body.push_str(&gated_section(
        "Ingredients",
        "Purchase this recipe to view the complete ingredients list with exact measurements.",
        &detail.ingredient_teaser,
        &detail.ingredients,
        false,
        purchased,
    ));
    body.push_str(&gated_section(
        "Instructions",
        "Purchase this recipe to access detailed step-by-step cooking instructions.",
        &detail.instruction_teaser,
        &detail.instructions,
        true,
        purchased,
    ));
    body.push_str("<h2>Chef Tips</h2><ul>");
    for tip in &detail.tips {
        body.push_str(&format!("<li>{tip}</li>"));
    }
    body.push_str("</ul>");
    body.push_str(&format!(
        "<h2>Nutrition Facts</h2>\
<p>{calories} Calories | Protein {protein} | Carbs {carbs} | Fat {fat} | Fiber {fiber}</p>",
        calories = detail.nutrition.calories,
        protein = detail.nutrition.protein,
        carbs = detail.nutrition.carbs,
        fat = detail.nutrition.fat,
        fiber = detail.nutrition.fiber,
    ));
    body.push_str(&format!(
        "<h2>About the Chef</h2><p><strong>{name}</strong><br>{bio}</p>",
        name = detail.chef.name,
        bio = detail.chef.bio,
    ));
    body
}

pub(crate) async fn recipe_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/recipe/{recipe_id}";
    let Ok(id) = RecipeId::parse(&recipe_id) else {
        let resp = not_found_page(&recipe_id);
        state
            .metrics
            .observe_request(route, StatusCode::NOT_FOUND, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    };
    let resp = match state.repository.get_recipe_by_id(&id).await {
        Ok(Some(detail)) => {
            let access = state.purchases.access_state(&id).await;
            html_response(
                StatusCode::OK,
                page(&detail.summary.title, &detail_page(&detail, &access)),
            )
        }
        Ok(None) => not_found_page(&recipe_id),
        Err(e) => html_response(
            StatusCode::SERVICE_UNAVAILABLE,
            page(
                "Unavailable",
                &format!("<h1>Catalog Unavailable</h1><p>{e}</p><p><a href=\"/\">Back to Home</a></p>"),
            ),
        ),
    };
    let status = resp.status();
    state
        .metrics
        .observe_request(route, status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

/// Form action behind the detail page's purchase button. The resulting
/// access state is whatever the redirected-to page renders.
pub(crate) async fn purchase_action_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(recipe_id): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/recipe/{recipe_id}/purchase";
    let Ok(id) = RecipeId::parse(&recipe_id) else {
        let resp = not_found_page(&recipe_id);
        state
            .metrics
            .observe_request(route, StatusCode::NOT_FOUND, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    };
    let detail = match state.repository.get_recipe_by_id(&id).await {
        Ok(Some(v)) => v,
        _ => {
            let resp = not_found_page(&recipe_id);
            state
                .metrics
                .observe_request(route, StatusCode::NOT_FOUND, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    state
        .metrics
        .purchase_attempts
        .fetch_add(1, Ordering::Relaxed);
    let outcome = execute_purchase(
        state.purchases.as_ref(),
        state.gateway.as_ref(),
        &detail.summary,
    )
    .await;
    match outcome {
        PurchaseFlowOutcome::Confirmed { .. } | PurchaseFlowOutcome::AlreadyOwned => {
            state
                .metrics
                .purchase_confirmed
                .fetch_add(1, Ordering::Relaxed);
        }
        PurchaseFlowOutcome::InFlight => {
            state
                .metrics
                .purchase_rejected_busy
                .fetch_add(1, Ordering::Relaxed);
        }
        PurchaseFlowOutcome::Failed { .. } => {
            state
                .metrics
                .purchase_failed
                .fetch_add(1, Ordering::Relaxed);
        }
    }
    let resp = Redirect::to(&format!("/recipe/{recipe_id}")).into_response();
    let status = resp.status();
    state
        .metrics
        .observe_request(route, status, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

fn purchased_card(record: &PurchasedRecipe) -> String {
    let recipe = &record.recipe;
    let accessed = record
        .last_accessed
        .map(|d| format!("<br>Last accessed: {}", d.format("%Y-%m-%d")))
        .unwrap_or_default();
    format!(
        "<li><a href=\"/recipe/{id}\">{title}</a> ({cook_time}, &#9733; {rating})<br>\
Purchased: {date}{accessed}</li>",
        id = recipe.id,
        title = recipe.title,
        cook_time = recipe.cook_time,
        rating = recipe.rating,
        date = record.purchase_date.format("%Y-%m-%d"),
    )
}

pub(crate) async fn dashboard_page_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/dashboard";
    let (purchased, recommended, profile) = match (
        state.repository.purchased_recipes().await,
        state.repository.recommendations().await,
        state.repository.user_profile().await,
    ) {
        (Ok(p), Ok(r), Ok(u)) => (p, r, u),
        _ => {
            let resp = html_response(
                StatusCode::SERVICE_UNAVAILABLE,
                page(
                    "Unavailable",
                    "<h1>Dashboard Unavailable</h1><p><a href=\"/\">Back to Home</a></p>",
                ),
            );
            state
                .metrics
                .observe_request(route, StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };
    let favorites: Vec<_> = purchased
        .iter()
        .filter(|p| profile.favorites.contains(&p.recipe.id))
        .collect();
    let stats = UserStats::derive(&purchased, favorites.len() as u64, profile.recipes_made);
    let first_name = profile
        .display_name
        .split_whitespace()
        .next()
        .unwrap_or("there");

    let mut body = format!(
        "<h1>Welcome back, {first_name}!</h1>\
<p>Manage your purchased recipes and discover new flavors</p>\
<p><strong>{owned}</strong> Recipes Owned | <strong>${spent}</strong> Total Spent | \
<strong>{favs}</strong> Favorites | <strong>{made}</strong> Recipes Made</p>",
        owned = stats.recipes_owned,
        spent = stats.total_spent,
        favs = stats.favorite_count,
        made = stats.recipes_made,
    );

    body.push_str("<h2>Your Purchased Recipes</h2>");
    if purchased.is_empty() {
        body.push_str(
            "<p>No recipes yet. Start building your recipe collection by purchasing your \
first recipe.</p><p><a href=\"/\">Browse Recipes</a></p>",
        );
    } else {
        body.push_str("<ul>");
        for record in &purchased {
            body.push_str(&purchased_card(record));
        }
        body.push_str("</ul>");
    }

    body.push_str("<h2>Your Favorite Recipes</h2><ul>");
    for record in &favorites {
        body.push_str(&format!(
            "<li><a href=\"/recipe/{id}\">&#10084; {title}</a></li>",
            id = record.recipe.id,
            title = record.recipe.title,
        ));
    }
    body.push_str("</ul>");

    body.push_str("<h2>Recommended for You</h2><ul>");
    for recipe in &recommended {
        body.push_str(&format!(
            "<li><a href=\"/recipe/{id}\">{title}</a> - ${price} ({difficulty}, {cook_time})</li>",
            id = recipe.id,
            title = recipe.title,
            price = recipe.price,
            difficulty = recipe.difficulty,
            cook_time = recipe.cook_time,
        ));
    }
    body.push_str("</ul>");

    let resp = html_response(StatusCode::OK, page("My Dashboard", &body));
    state
        .metrics
        .observe_request(route, StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
