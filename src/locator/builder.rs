use std::collections::HashSet;

use crate::action::action_model::{non_empty, RecordedAction};
use crate::locator::candidate::{
    normalize_locator_strategy, LocatorCandidate, LocatorSource, LocatorStrategy,
    SCORE_ACCESSIBILITY_ID, SCORE_BUNDLE_FALLBACK, SCORE_COORDINATES, SCORE_ELEMENT_ID,
    SCORE_EXPLICIT_PRIMARY, SCORE_LEGACY_LOCATOR, SCORE_LEGACY_XPATH, SCORE_SMART_XPATH,
    SCORE_TEXT,
};

/// Insertion-ordered candidate collector. Dedup is by `(strategy, value)`
/// composite key; the first insertion for a key wins.
struct CandidateSet {
    seen: HashSet<String>,
    candidates: Vec<LocatorCandidate>,
}

impl CandidateSet {
    fn new() -> Self {
        CandidateSet {
            seen: HashSet::new(),
            candidates: Vec::new(),
        }
    }

    fn insert(&mut self, candidate: LocatorCandidate) {
        if self.seen.insert(candidate.key()) {
            self.candidates.push(candidate);
        }
    }

    fn into_sorted(mut self) -> Vec<LocatorCandidate> {
        // Stable sort: ties keep insertion order.
        self.candidates.sort_by(|a, b| b.score.cmp(&a.score));
        self.candidates
    }
}

/// Build the full ranked, deduplicated candidate list for one recorded
/// action. Pure function of its input; returns candidates sorted by score
/// descending.
///
/// Signals are inserted in trust order so that dedup keeps the
/// better-provenanced entry when two fields carry the same locator: an
/// explicit bundle first, then the legacy locator field, then element
/// metadata, then coordinates as the last resort.
pub fn build_candidates(action: &RecordedAction) -> Vec<LocatorCandidate> {
    let mut set = CandidateSet::new();

    // 1. Explicit bundle primary, kept with its own score and source.
    if let Some(bundle) = &action.locator_bundle {
        if let Some(primary) = &bundle.primary {
            if let Some(candidate) =
                primary.to_candidate(SCORE_EXPLICIT_PRIMARY, LocatorSource::Inspector)
            {
                set.insert(candidate);
            }
        }

        // 2. Bundle fallbacks in recorded order.
        for fallback in bundle.fallbacks.iter().flatten() {
            if let Some(candidate) =
                fallback.to_candidate(SCORE_BUNDLE_FALLBACK, LocatorSource::Legacy)
            {
                set.insert(candidate);
            }
        }
    }

    // 3. Legacy locator + strategy fields.
    if let Some(strategy) = action
        .locator_strategy
        .as_deref()
        .and_then(normalize_locator_strategy)
    {
        if let Some(value) = non_empty(action.locator.as_ref()) {
            set.insert(LocatorCandidate::new(
                strategy,
                value,
                SCORE_LEGACY_LOCATOR,
                LocatorSource::Legacy,
            ));
        }
    }

    // 4. Inspector-derived xpath.
    if let Some(value) = non_empty(action.smart_xpath.as_ref()) {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::XPath,
            value,
            SCORE_SMART_XPATH,
            LocatorSource::Inspector,
        ));
    }

    // 5. Legacy xpath.
    if let Some(value) = non_empty(action.xpath.as_ref()) {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::XPath,
            value,
            SCORE_LEGACY_XPATH,
            LocatorSource::Legacy,
        ));
    }

    // 6-8. Element metadata captured at record time.
    if let Some(value) = non_empty(action.element_id.as_ref()) {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::Id,
            value,
            SCORE_ELEMENT_ID,
            LocatorSource::Inspector,
        ));
    }

    if let Some(value) = non_empty(action.element_content_desc.as_ref()) {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::AccessibilityId,
            value,
            SCORE_ACCESSIBILITY_ID,
            LocatorSource::Inspector,
        ));
    }

    if let Some(value) = non_empty(action.element_text.as_ref()) {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::Text,
            value,
            SCORE_TEXT,
            LocatorSource::Inspector,
        ));
    }

    // 9. Raw coordinates, the least relayout-resistant signal.
    if let Some(coords) = &action.coordinates {
        set.insert(LocatorCandidate::new(
            LocatorStrategy::Coordinates,
            format!("{},{}", coords.x, coords.y),
            SCORE_COORDINATES,
            LocatorSource::Legacy,
        ));
    }

    set.into_sorted()
}
