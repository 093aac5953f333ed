// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug)]
pub struct AnalyticsError(pub String);

impl Display for AnalyticsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AnalyticsError {}

/// Optional tracking capability, injected rather than read off a global.
/// Absence is a valid configuration.
pub trait AnalyticsTracker: Send + Sync {
    fn tracker_tag(&self) -> &'static str;

    fn init(&self) -> Result<(), AnalyticsError>;
}

/// Invoked at most once per service start. An initializer failure is logged
/// and swallowed; it never affects page availability.
pub fn init_analytics(tracker: Option<&Arc<dyn AnalyticsTracker>>) {
    let Some(tracker) = tracker else {
        return;
    };
    if let Err(e) = tracker.init() {
        warn!(
            tracker = tracker.tracker_tag(),
            "analytics tracker initialization failed: {e}"
        );
    }
}

/// Default tracker: records page-serving sessions to the log stream.
pub struct LoggingTracker;

impl AnalyticsTracker for LoggingTracker {
    fn tracker_tag(&self) -> &'static str {
        "logging"
    }

    fn init(&self) -> Result<(), AnalyticsError> {
        info!("analytics tracker initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ExplodingTracker;

    impl AnalyticsTracker for ExplodingTracker {
        fn tracker_tag(&self) -> &'static str {
            "exploding"
        }

        fn init(&self) -> Result<(), AnalyticsError> {
            Err(AnalyticsError("script not loaded".to_string()))
        }
    }

    #[test]
    fn absent_tracker_is_ignored() {
        init_analytics(None);
    }

    #[test]
    fn failing_tracker_does_not_propagate() {
        let tracker: Arc<dyn AnalyticsTracker> = Arc::new(ExplodingTracker);
        init_analytics(Some(&tracker));
    }
}
