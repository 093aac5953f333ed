use crate::purchase::{
    execute_purchase, PaymentConfirmation, PaymentError, PaymentGateway, PurchaseFlowOutcome,
    PurchaseLedger, SimulatedGateway,
};
use crate::store::{InMemoryRepository, RecipeRepository};
use crate::{build_router, AppState};
use async_trait::async_trait;
use curry_creations_model::{AccessState, Price, RecipeId, UserStats};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

struct FailingGateway;

#[async_trait]
impl PaymentGateway for FailingGateway {
    fn gateway_tag(&self) -> &'static str {
        "failing"
    }

    async fn confirm(
        &self,
        _recipe: &RecipeId,
        _amount: Price,
    ) -> Result<PaymentConfirmation, PaymentError> {
        Err(PaymentError("card declined".to_string()))
    }
}

/// Blocks inside the confirmation call until released, so tests can observe
/// the in-flight window.
struct GatedGateway {
    entered: Notify,
    release: Notify,
    calls: AtomicU64,
}

impl GatedGateway {
    fn new() -> Self {
        Self {
            entered: Notify::new(),
            release: Notify::new(),
            calls: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PaymentGateway for GatedGateway {
    fn gateway_tag(&self) -> &'static str {
        "gated"
    }

    async fn confirm(
        &self,
        recipe: &RecipeId,
        _amount: Price,
    ) -> Result<PaymentConfirmation, PaymentError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(PaymentConfirmation {
            reference: format!("gated-{}", recipe.as_str()),
        })
    }
}

fn sample_repository() -> Arc<InMemoryRepository> {
    Arc::new(InMemoryRepository::with_sample_data().expect("sample data"))
}

fn recipe_id(raw: &str) -> RecipeId {
    RecipeId::parse(raw).expect("recipe id")
}

#[tokio::test]
async fn sample_repository_resolves_known_recipe() {
    let repo = sample_repository();
    let detail = repo
        .get_recipe_by_id(&recipe_id("butter-chicken"))
        .await
        .expect("repository")
        .expect("present");
    assert_eq!(detail.summary.title, "Authentic Butter Chicken");
    assert_eq!(detail.summary.price.to_string(), "5.99");
    assert_eq!(detail.summary.spice_level.get(), 2);
    assert_eq!(detail.ingredients.len(), 16);
}

#[tokio::test]
async fn sample_repository_misses_unknown_recipe() {
    let repo = sample_repository();
    let missing = repo
        .get_recipe_by_id(&recipe_id("nonexistent-id"))
        .await
        .expect("repository");
    assert!(missing.is_none());
}

#[tokio::test]
async fn derived_stats_match_sample_purchase_history() {
    let repo = sample_repository();
    let purchased = repo.purchased_recipes().await.expect("purchased");
    let profile = repo.user_profile().await.expect("profile");
    let favorites = purchased
        .iter()
        .filter(|p| profile.favorites.contains(&p.recipe.id))
        .count() as u64;
    let stats = UserStats::derive(&purchased, favorites, profile.recipes_made);
    assert_eq!(stats.recipes_owned, 3);
    assert_eq!(stats.total_spent.to_string(), "16.47");
    assert_eq!(stats.favorite_count, 2);
    assert_eq!(stats.recipes_made, 5);
}

#[tokio::test]
async fn purchase_confirms_and_stays_purchased() {
    let repo = sample_repository();
    let ledger = PurchaseLedger::new();
    let gateway = SimulatedGateway::new(Duration::ZERO);
    let id = recipe_id("butter-chicken");
    let detail = repo
        .get_recipe_by_id(&id)
        .await
        .expect("repository")
        .expect("present");

    let outcome = execute_purchase(&ledger, &gateway, &detail.summary).await;
    assert!(matches!(outcome, PurchaseFlowOutcome::Confirmed { .. }));
    assert!(ledger.access_state(&id).await.is_purchased());

    // Monotonic for the session: a second attempt observes ownership and
    // never re-enters Purchasing.
    let again = execute_purchase(&ledger, &gateway, &detail.summary).await;
    assert_eq!(again, PurchaseFlowOutcome::AlreadyOwned);
    assert!(ledger.access_state(&id).await.is_purchased());
}

#[tokio::test]
async fn concurrent_purchase_is_rejected_without_second_gateway_call() {
    let repo = sample_repository();
    let ledger = Arc::new(PurchaseLedger::new());
    let gateway = Arc::new(GatedGateway::new());
    let id = recipe_id("palak-paneer");
    let detail = repo
        .get_recipe_by_id(&id)
        .await
        .expect("repository")
        .expect("present");

    let first = {
        let ledger = Arc::clone(&ledger);
        let gateway = Arc::clone(&gateway);
        let summary = detail.summary.clone();
        tokio::spawn(
            async move { execute_purchase(ledger.as_ref(), gateway.as_ref(), &summary).await },
        )
    };
    gateway.entered.notified().await;
    assert!(ledger.access_state(&id).await.is_busy());

    let second = execute_purchase(ledger.as_ref(), gateway.as_ref(), &detail.summary).await;
    assert_eq!(second, PurchaseFlowOutcome::InFlight);
    assert_eq!(gateway.calls.load(Ordering::Relaxed), 1);

    gateway.release.notify_one();
    let outcome = first.await.expect("join");
    assert!(matches!(outcome, PurchaseFlowOutcome::Confirmed { .. }));
    assert!(ledger.access_state(&id).await.is_purchased());
}

#[tokio::test]
async fn premium_content_unlocks_after_purchase() {
    let repo = sample_repository();
    let ledger = PurchaseLedger::new();
    let id = recipe_id("butter-chicken");
    let detail = repo
        .get_recipe_by_id(&id)
        .await
        .expect("repository")
        .expect("present");

    let before = curry_creations_api::recipe_detail(&detail, &ledger.access_state(&id).await);
    assert!(before.ingredients.items.is_empty());
    assert!(before.ingredients.teaser.is_some());

    let outcome = execute_purchase(
        &ledger,
        &SimulatedGateway::new(Duration::ZERO),
        &detail.summary,
    )
    .await;
    assert!(matches!(outcome, PurchaseFlowOutcome::Confirmed { .. }));

    let after = curry_creations_api::recipe_detail(&detail, &ledger.access_state(&id).await);
    assert_eq!(after.ingredients.items.len(), 16);
    assert!(after.ingredients.teaser.is_none());
    assert_eq!(after.access.state, "purchased");
}

#[tokio::test]
async fn gateway_failure_clears_busy_guard_and_allows_retry() {
    let repo = sample_repository();
    let ledger = PurchaseLedger::new();
    let id = recipe_id("thai-green-curry");
    let detail = repo
        .get_recipe_by_id(&id)
        .await
        .expect("repository")
        .expect("present");

    let outcome = execute_purchase(&ledger, &FailingGateway, &detail.summary).await;
    assert_eq!(
        outcome,
        PurchaseFlowOutcome::Failed {
            reason: "card declined".to_string()
        }
    );
    let failed = ledger.access_state(&id).await;
    assert!(!failed.is_busy());
    assert_eq!(
        failed,
        AccessState::PurchaseFailed {
            reason: "card declined".to_string()
        }
    );

    let retried =
        execute_purchase(&ledger, &SimulatedGateway::new(Duration::ZERO), &detail.summary).await;
    assert!(matches!(retried, PurchaseFlowOutcome::Confirmed { .. }));
    assert!(ledger.access_state(&id).await.is_purchased());
}

#[tokio::test]
async fn router_builds_over_sample_state() {
    let state = AppState::new(
        sample_repository(),
        Arc::new(SimulatedGateway::new(Duration::ZERO)),
    );
    state.init_analytics();
    let _router = build_router(state.clone());
    assert!(!crate::http::handlers::is_draining(&state));
    state.begin_shutdown_drain();
    assert!(crate::http::handlers::is_draining(&state));
}
