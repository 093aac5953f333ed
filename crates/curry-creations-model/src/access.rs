// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Session-local access to premium recipe content. `Purchased` is terminal:
/// no refund or revoke path is modeled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[non_exhaustive]
pub enum AccessState {
    #[default]
    Unpurchased,
    Purchasing,
    Purchased,
    PurchaseFailed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    PurchaseInFlight,
    AlreadyPurchased,
    NotPurchasing,
}

impl Display for TransitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PurchaseInFlight => f.write_str("a purchase for this recipe is already in flight"),
            Self::AlreadyPurchased => f.write_str("recipe is already purchased"),
            Self::NotPurchasing => f.write_str("no purchase is in flight for this recipe"),
        }
    }
}

impl std::error::Error for TransitionError {}

impl AccessState {
    #[must_use]
    pub const fn is_purchased(&self) -> bool {
        matches!(self, Self::Purchased)
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Purchasing)
    }

    /// Enter `Purchasing`. The busy guard rejects re-entry while a purchase
    /// is in flight; a failed purchase may retry.
    pub fn begin(&self) -> Result<Self, TransitionError> {
        match self {
            Self::Unpurchased | Self::PurchaseFailed { .. } => Ok(Self::Purchasing),
            Self::Purchasing => Err(TransitionError::PurchaseInFlight),
            Self::Purchased => Err(TransitionError::AlreadyPurchased),
        }
    }

    pub fn confirm(&self) -> Result<Self, TransitionError> {
        match self {
            Self::Purchasing => Ok(Self::Purchased),
            _ => Err(TransitionError::NotPurchasing),
        }
    }

    pub fn fail(&self, reason: impl Into<String>) -> Result<Self, TransitionError> {
        match self {
            Self::Purchasing => Ok(Self::PurchaseFailed {
                reason: reason.into(),
            }),
            _ => Err(TransitionError::NotPurchasing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_begin_then_confirm() {
        let state = AccessState::default();
        assert_eq!(state, AccessState::Unpurchased);
        let busy = state.begin().expect("begin");
        assert!(busy.is_busy());
        let owned = busy.confirm().expect("confirm");
        assert!(owned.is_purchased());
    }

    #[test]
    fn busy_guard_rejects_reentry() {
        let busy = AccessState::Unpurchased.begin().expect("begin");
        assert_eq!(busy.begin(), Err(TransitionError::PurchaseInFlight));
    }

    #[test]
    fn purchased_is_terminal() {
        let owned = AccessState::Purchased;
        assert_eq!(owned.begin(), Err(TransitionError::AlreadyPurchased));
        assert_eq!(owned.confirm(), Err(TransitionError::NotPurchasing));
        assert_eq!(owned.fail("late"), Err(TransitionError::NotPurchasing));
    }

    #[test]
    fn failure_clears_busy_guard_and_allows_retry() {
        let busy = AccessState::Unpurchased.begin().expect("begin");
        let failed = busy.fail("gateway timeout").expect("fail");
        assert!(!failed.is_busy());
        let retried = failed.begin().expect("retry");
        assert!(retried.is_busy());
    }

    #[test]
    fn confirm_requires_in_flight_purchase() {
        assert_eq!(
            AccessState::Unpurchased.confirm(),
            Err(TransitionError::NotPurchasing)
        );
    }
}
