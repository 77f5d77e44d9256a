use serde::{Deserialize, Serialize};

/// One line of the healing trace (JSONL). Records every decision the
/// pipeline makes about a locator, so a flaky replay can be reconstructed
/// after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum TraceEvent {
    /// A bundle was attached or refreshed on a recorded step.
    #[serde(rename_all = "camelCase")]
    BundleAttached {
        action_id: String,
        fingerprint: String,
        primary_strategy: String,
        primary_value: String,
        fallback_count: usize,
    },

    /// A weak or critical primary was replaced by a derived stable locator.
    #[serde(rename_all = "camelCase")]
    LocatorHealed {
        action_id: String,
        old_strategy: Option<String>,
        old_value: Option<String>,
        new_strategy: String,
        new_value: String,
    },

    /// A locator resolved to a screen point in a hierarchy snapshot.
    #[serde(rename_all = "camelCase")]
    ResolutionHit {
        action_id: String,
        strategy: String,
        value: String,
        x: i32,
        y: i32,
    },

    /// A locator matched nothing in the snapshot.
    #[serde(rename_all = "camelCase")]
    ResolutionMiss {
        action_id: String,
        strategy: String,
        value: String,
    },
}
