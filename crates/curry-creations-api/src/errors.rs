// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidRecipeId,
    RecipeNotFound,
    PurchaseInFlight,
    PaymentFailed,
    ValidationFailed,
    NotReady,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_recipe_id(raw: &str, reason: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidRecipeId,
            "invalid recipe id",
            json!({"recipe_id": raw, "reason": reason}),
        )
    }

    #[must_use]
    pub fn recipe_not_found(raw: &str) -> Self {
        Self::new(
            ApiErrorCode::RecipeNotFound,
            "recipe not found",
            json!({"recipe_id": raw, "catalog": "/"}),
        )
    }

    #[must_use]
    pub fn purchase_in_flight(raw: &str) -> Self {
        Self::new(
            ApiErrorCode::PurchaseInFlight,
            "a purchase for this recipe is already in flight",
            json!({"recipe_id": raw}),
        )
    }

    #[must_use]
    pub fn payment_failed(raw: &str, reason: &str) -> Self {
        Self::new(
            ApiErrorCode::PaymentFailed,
            "payment confirmation failed",
            json!({"recipe_id": raw, "reason": reason, "retryable": true}),
        )
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
