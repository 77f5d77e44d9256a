use serde::{Deserialize, Serialize};

use crate::action::action_model::{non_empty, RecordedAction};
use crate::locator::builder::build_candidates;
use crate::locator::candidate::{
    normalize_locator_strategy, LocatorCandidate, LocatorSource, SCORE_BUNDLE_FALLBACK,
    SCORE_EXPLICIT_PRIMARY,
};

// ============================================================================
// Stored (wire) bundle shape
// ============================================================================

/// A locator as it appears inside a stored bundle. Everything is optional:
/// older recordings and inspector-emitted bundles each fill a different
/// subset. Normalized into a typed [`LocatorCandidate`] at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocator {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<LocatorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl RawLocator {
    /// Whether both strategy and value are usable. An explicit primary only
    /// counts (and only stays sticky) when this holds.
    pub fn is_complete(&self) -> bool {
        self.strategy
            .as_deref()
            .and_then(normalize_locator_strategy)
            .is_some()
            && non_empty(self.value.as_ref()).is_some()
    }

    /// Lift into a typed candidate, filling score/source defaults for
    /// unscored entries. Returns None when strategy or value is missing or
    /// the strategy string is unknown.
    pub fn to_candidate(
        &self,
        default_score: i32,
        default_source: LocatorSource,
    ) -> Option<LocatorCandidate> {
        let strategy = self
            .strategy
            .as_deref()
            .and_then(normalize_locator_strategy)?;
        let value = non_empty(self.value.as_ref())?;

        Some(LocatorCandidate {
            strategy,
            value: value.to_string(),
            score: self.score.unwrap_or(default_score),
            source: self.source.unwrap_or(default_source),
            reason: self.reason.clone(),
        })
    }
}

impl From<&LocatorCandidate> for RawLocator {
    fn from(candidate: &LocatorCandidate) -> Self {
        RawLocator {
            strategy: Some(candidate.strategy.as_str().to_string()),
            value: Some(candidate.value.clone()),
            score: Some(candidate.score),
            source: Some(candidate.source),
            reason: candidate.reason.clone(),
        }
    }
}

/// The bundle as stored on a recorded action. Partial by design; the
/// normalizer fills it out into a [`LocatorBundleV1`] and writes the result
/// back in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<RawLocator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallbacks: Option<Vec<RawLocator>>,
}

// ============================================================================
// Normalized bundle
// ============================================================================

pub const BUNDLE_VERSION: u32 = 1;

/// Normalized locator bundle: one designated primary plus an ordered
/// fallback chain, with a stable fingerprint for the logical element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorBundleV1 {
    pub version: u32,
    pub fingerprint: String,
    pub primary: LocatorCandidate,
    pub fallbacks: Vec<LocatorCandidate>,
}

impl From<&LocatorBundleV1> for RawBundle {
    fn from(bundle: &LocatorBundleV1) -> Self {
        RawBundle {
            version: Some(bundle.version),
            fingerprint: Some(bundle.fingerprint.clone()),
            primary: Some(RawLocator::from(&bundle.primary)),
            fallbacks: Some(bundle.fallbacks.iter().map(RawLocator::from).collect()),
        }
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Attach or refresh the locator bundle on one recorded action.
///
/// Identity for action types that carry no locator, and for actions with no
/// derivable candidates (a legitimate terminal state: the caller surfaces it
/// as coordinate-fallback mode, not a failure). An explicit primary with
/// both strategy and value set is kept verbatim; a user's choice is never
/// overridden by a higher-scored computed candidate. Idempotent: a second
/// run with no new information yields the same bundle.
pub fn ensure_locator_bundle(action: &RecordedAction) -> RecordedAction {
    if !action.action_type.needs_locator() {
        return action.clone();
    }

    let candidates = build_candidates(action);
    if candidates.is_empty() {
        return action.clone();
    }

    let explicit_primary = action
        .locator_bundle
        .as_ref()
        .and_then(|b| b.primary.as_ref())
        .filter(|p| p.is_complete())
        .and_then(|p| p.to_candidate(SCORE_EXPLICIT_PRIMARY, LocatorSource::Inspector));

    let primary = match explicit_primary {
        Some(primary) => primary,
        None => candidates[0].clone(),
    };

    let fallbacks: Vec<LocatorCandidate> = candidates
        .into_iter()
        .filter(|c| !(c.strategy == primary.strategy && c.value == primary.value))
        .collect();

    let bundle = LocatorBundleV1 {
        version: BUNDLE_VERSION,
        fingerprint: bundle_fingerprint(action),
        primary,
        fallbacks,
    };

    let mut updated = action.clone();
    // Backfill the legacy fields only when they were empty; editors and
    // older consumers still read them.
    if non_empty(updated.locator.as_ref()).is_none() {
        updated.locator = Some(bundle.primary.value.clone());
    }
    if non_empty(updated.locator_strategy.as_ref()).is_none() {
        updated.locator_strategy = Some(bundle.primary.strategy.as_str().to_string());
    }
    updated.locator_bundle = Some(RawBundle::from(&bundle));
    updated
}

/// Batch variant: heal every action of a previously saved scenario
/// independently. Used on load, to upgrade recordings that predate the
/// bundle schema.
pub fn ensure_locator_bundles(actions: &[RecordedAction]) -> Vec<RecordedAction> {
    actions.iter().map(ensure_locator_bundle).collect()
}

/// Extract the normalized bundle from an action, if one is attached and
/// complete enough to type.
pub fn normalized_bundle(action: &RecordedAction) -> Option<LocatorBundleV1> {
    let raw = action.locator_bundle.as_ref()?;
    let primary = raw
        .primary
        .as_ref()?
        .to_candidate(SCORE_EXPLICIT_PRIMARY, LocatorSource::Inspector)?;
    let fallbacks = raw
        .fallbacks
        .iter()
        .flatten()
        .filter_map(|f| f.to_candidate(SCORE_BUNDLE_FALLBACK, LocatorSource::Legacy))
        .collect();

    Some(LocatorBundleV1 {
        version: raw.version.unwrap_or(BUNDLE_VERSION),
        fingerprint: raw
            .fingerprint
            .clone()
            .unwrap_or_else(|| fallback_fingerprint(action)),
        primary,
        fallbacks,
    })
}

/// Fingerprint chain: explicit bundle fingerprint, else the element
/// fingerprint stamped on the action, else a synthesized `"{type}:{id}"`.
fn bundle_fingerprint(action: &RecordedAction) -> String {
    if let Some(fp) = action
        .locator_bundle
        .as_ref()
        .and_then(|b| non_empty(b.fingerprint.as_ref()))
    {
        return fp.to_string();
    }

    if let Some(fp) = non_empty(action.element_fingerprint.as_ref()) {
        return fp.to_string();
    }

    fallback_fingerprint(action)
}

fn fallback_fingerprint(action: &RecordedAction) -> String {
    format!("{}:{}", action.action_type.as_str(), action.id)
}
