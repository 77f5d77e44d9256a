use serde::{Deserialize, Serialize};

// ============================================================================
// Score table
// ============================================================================
//
// Reliability scores, higher = more resistant to UI relayout. Element
// identity signals (resource id, accessibility label) outlive screen text,
// which outlives raw coordinates; inspector-sourced signals outrank legacy
// ones at comparable strategy. The severity badges and the critical-locator
// threshold in consuming UIs depend on this exact scale, so these are
// behavioral constants, not tunable weights.

pub const SCORE_EXPLICIT_PRIMARY: i32 = 90;
pub const SCORE_ELEMENT_ID: i32 = 88;
pub const SCORE_ACCESSIBILITY_ID: i32 = 84;
pub const SCORE_SMART_XPATH: i32 = 74;
pub const SCORE_LEGACY_XPATH: i32 = 68;
pub const SCORE_LEGACY_LOCATOR: i32 = 65;
pub const SCORE_BUNDLE_FALLBACK: i32 = 60;
pub const SCORE_TEXT: i32 = 56;
pub const SCORE_COORDINATES: i32 = 30;

/// Scores at or below this are "critical". Unreachable from the table above;
/// only externally supplied bundle scores (the inspector agent's own
/// heuristics) can get here. See DESIGN.md.
pub const CRITICAL_SCORE_THRESHOLD: i32 = 10;

pub fn is_critical_score(score: i32) -> bool {
    score <= CRITICAL_SCORE_THRESHOLD
}

// ============================================================================
// Strategy / source / candidate
// ============================================================================

/// Identification method for a locator. Closed set: raw strategy strings are
/// normalized at the boundary and anything unknown is dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocatorStrategy {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "accessibilityId")]
    AccessibilityId,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "xpath")]
    XPath,
    #[serde(rename = "coordinates")]
    Coordinates,
    #[serde(rename = "androidUiAutomator")]
    AndroidUiAutomator,
}

impl LocatorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorStrategy::Id => "id",
            LocatorStrategy::AccessibilityId => "accessibilityId",
            LocatorStrategy::Text => "text",
            LocatorStrategy::XPath => "xpath",
            LocatorStrategy::Coordinates => "coordinates",
            LocatorStrategy::AndroidUiAutomator => "androidUiAutomator",
        }
    }
}

/// Base score a freshly derived candidate of this strategy gets. Matches
/// the builder's table; healed primaries re-enter the ranking on the same
/// scale as recorded ones.
pub fn base_score_for(strategy: LocatorStrategy) -> i32 {
    match strategy {
        LocatorStrategy::Id => SCORE_ELEMENT_ID,
        LocatorStrategy::AccessibilityId => SCORE_ACCESSIBILITY_ID,
        LocatorStrategy::XPath => SCORE_SMART_XPATH,
        LocatorStrategy::Text => SCORE_TEXT,
        LocatorStrategy::Coordinates => SCORE_COORDINATES,
        LocatorStrategy::AndroidUiAutomator => SCORE_LEGACY_LOCATOR,
    }
}

/// Normalize a raw strategy string. Accepts only the exact literals; wrong
/// case, unknown names and empty strings all normalize to None.
pub fn normalize_locator_strategy(raw: &str) -> Option<LocatorStrategy> {
    match raw {
        "id" => Some(LocatorStrategy::Id),
        "accessibilityId" => Some(LocatorStrategy::AccessibilityId),
        "text" => Some(LocatorStrategy::Text),
        "xpath" => Some(LocatorStrategy::XPath),
        "coordinates" => Some(LocatorStrategy::Coordinates),
        "androidUiAutomator" => Some(LocatorStrategy::AndroidUiAutomator),
        _ => None,
    }
}

/// Provenance of a candidate. Inspector candidates come from live element
/// inspection and are trusted over legacy ones derived from older recorded
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocatorSource {
    Inspector,
    Legacy,
}

/// One ranked way of identifying an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatorCandidate {
    pub strategy: LocatorStrategy,
    pub value: String,
    pub score: i32,
    pub source: LocatorSource,

    /// Free-text explanation, only present when emitted by the inspector
    /// pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LocatorCandidate {
    pub fn new(strategy: LocatorStrategy, value: impl Into<String>, score: i32, source: LocatorSource) -> Self {
        LocatorCandidate {
            strategy,
            value: value.into(),
            score,
            source,
            reason: None,
        }
    }

    /// Dedup key: candidates are unique per `(strategy, value)` pair.
    pub fn key(&self) -> String {
        format!("{}:{}", self.strategy.as_str(), self.value)
    }
}
