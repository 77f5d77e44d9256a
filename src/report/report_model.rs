use serde::{Deserialize, Serialize};

use crate::action::action_model::RecordedAction;
use crate::locator::bundle::normalized_bundle;
use crate::locator::candidate::{is_critical_score, LocatorStrategy};
use crate::locator::stable::{derive_stable_locator, is_weak_class_only_xpath, StableLocator};

/// Health classification for one recorded step's primary locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocatorHealth {
    /// Step type carries no locator (wait, swipe, system key, clear cache)
    NotApplicable,

    /// Locator-bearing step with no bundle and no derivable candidates
    MissingBundle,

    /// Primary resolves by raw screen position only; breaks on any relayout
    CoordinateFallback,

    /// Primary score at or below the critical threshold (externally scored)
    Critical,

    /// Primary is a class-only xpath; rarely unique on a screen
    WeakXPath,

    Healthy,
}

/// One row of an audit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub index: usize,
    pub action_id: String,
    pub action_type: String,
    pub health: LocatorHealth,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_strategy: Option<LocatorStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_score: Option<i32>,
    pub fallback_count: usize,

    /// Proposed replacement when the primary is weak or critical and a
    /// better signal exists. Absent when nothing trustworthy can be
    /// derived; the user is asked to re-capture the element instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<StableLocator>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub scenario_name: String,
    pub entries: Vec<AuditEntry>,
}

impl AuditReport {
    pub fn healthy(&self) -> bool {
        self.flagged_count() == 0
    }

    pub fn flagged_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| {
                !matches!(
                    e.health,
                    LocatorHealth::Healthy | LocatorHealth::NotApplicable
                )
            })
            .count()
    }
}

/// Build the audit report over an already-bundled action sequence.
pub fn build_report(scenario_name: &str, actions: &[RecordedAction]) -> AuditReport {
    let entries = actions
        .iter()
        .enumerate()
        .map(|(index, action)| audit_action(index, action))
        .collect();

    AuditReport {
        scenario_name: scenario_name.to_string(),
        entries,
    }
}

pub fn audit_action(index: usize, action: &RecordedAction) -> AuditEntry {
    let mut entry = AuditEntry {
        index,
        action_id: action.id.clone(),
        action_type: action.action_type.as_str().to_string(),
        health: LocatorHealth::Healthy,
        primary_strategy: None,
        primary_value: None,
        primary_score: None,
        fallback_count: 0,
        suggestion: None,
    };

    if !action.action_type.needs_locator() {
        entry.health = LocatorHealth::NotApplicable;
        return entry;
    }

    let Some(bundle) = normalized_bundle(action) else {
        entry.health = LocatorHealth::MissingBundle;
        return entry;
    };

    entry.primary_strategy = Some(bundle.primary.strategy);
    entry.primary_value = Some(bundle.primary.value.clone());
    entry.primary_score = Some(bundle.primary.score);
    entry.fallback_count = bundle.fallbacks.len();

    entry.health = if bundle.primary.strategy == LocatorStrategy::Coordinates {
        LocatorHealth::CoordinateFallback
    } else if is_critical_score(bundle.primary.score) {
        LocatorHealth::Critical
    } else if bundle.primary.strategy == LocatorStrategy::XPath
        && is_weak_class_only_xpath(&bundle.primary.value)
    {
        LocatorHealth::WeakXPath
    } else {
        LocatorHealth::Healthy
    };

    if entry.health != LocatorHealth::Healthy {
        // Suggest only an actual change; a derivation equal to the current
        // primary is a no-op.
        entry.suggestion = derive_stable_locator(action)
            .filter(|s| s.strategy != bundle.primary.strategy || s.value != bundle.primary.value);
    }

    entry
}
