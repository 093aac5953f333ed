// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use curry_creations_model::{AccessState, Price, RecipeId, RecipeSummary, TransitionError};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub reference: String,
}

#[derive(Debug)]
pub struct PaymentError(pub String);

impl Display for PaymentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PaymentError {}

/// The external payment confirmation call the purchase flow awaits.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    fn gateway_tag(&self) -> &'static str;

    async fn confirm(
        &self,
        recipe: &RecipeId,
        amount: Price,
    ) -> Result<PaymentConfirmation, PaymentError>;
}

/// Stand-in gateway: resolves unconditionally after a fixed delay.
pub struct SimulatedGateway {
    delay: Duration,
    confirmations: AtomicU64,
}

impl SimulatedGateway {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            confirmations: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    fn gateway_tag(&self) -> &'static str {
        "simulated"
    }

    async fn confirm(
        &self,
        recipe: &RecipeId,
        _amount: Price,
    ) -> Result<PaymentConfirmation, PaymentError> {
        tokio::time::sleep(self.delay).await;
        let seq = self.confirmations.fetch_add(1, Ordering::Relaxed);
        Ok(PaymentConfirmation {
            reference: format!("sim-{}-{seq:08x}", recipe.as_str()),
        })
    }
}

/// Session-local access states keyed by recipe. Process-lifetime only; the
/// map resets on restart, matching the source material's session scope.
#[derive(Default)]
pub struct PurchaseLedger {
    states: Mutex<HashMap<RecipeId, AccessState>>,
}

impl PurchaseLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn access_state(&self, id: &RecipeId) -> AccessState {
        self.states.lock().await.get(id).cloned().unwrap_or_default()
    }

    async fn try_begin(&self, id: &RecipeId) -> Result<(), TransitionError> {
        let mut states = self.states.lock().await;
        let entry = states.entry(id.clone()).or_default();
        let next = entry.begin()?;
        *entry = next;
        Ok(())
    }

    async fn apply(
        &self,
        id: &RecipeId,
        step: impl FnOnce(&AccessState) -> Result<AccessState, TransitionError>,
    ) -> AccessState {
        let mut states = self.states.lock().await;
        let entry = states.entry(id.clone()).or_default();
        match step(entry) {
            Ok(next) => *entry = next,
            Err(e) => warn!(recipe_id = %id, "access transition rejected: {e}"),
        }
        entry.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseFlowOutcome {
    Confirmed { reference: String },
    AlreadyOwned,
    InFlight,
    Failed { reason: String },
}

/// Drive one purchase attempt through the state machine. The busy guard
/// makes a concurrent second attempt a no-op, and the guard always clears
/// on gateway failure so the caller can retry.
pub async fn execute_purchase(
    ledger: &PurchaseLedger,
    gateway: &dyn PaymentGateway,
    recipe: &RecipeSummary,
) -> PurchaseFlowOutcome {
    match ledger.try_begin(&recipe.id).await {
        Ok(()) => {}
        Err(TransitionError::PurchaseInFlight) => return PurchaseFlowOutcome::InFlight,
        Err(TransitionError::AlreadyPurchased) => return PurchaseFlowOutcome::AlreadyOwned,
        Err(e) => {
            return PurchaseFlowOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
    match gateway.confirm(&recipe.id, recipe.price).await {
        Ok(confirmation) => {
            ledger.apply(&recipe.id, AccessState::confirm).await;
            info!(
                recipe_id = %recipe.id,
                gateway = gateway.gateway_tag(),
                reference = %confirmation.reference,
                "purchase confirmed"
            );
            PurchaseFlowOutcome::Confirmed {
                reference: confirmation.reference,
            }
        }
        Err(e) => {
            let reason = e.to_string();
            ledger
                .apply(&recipe.id, |state| state.fail(reason.clone()))
                .await;
            warn!(recipe_id = %recipe.id, "purchase failed: {reason}");
            PurchaseFlowOutcome::Failed { reason }
        }
    }
}
