use serde::{Deserialize, Serialize};

use crate::locator::bundle::RawBundle;

/// Step type reported by the recorder. Only a subset of these carries a
/// locator; see [`ActionType::needs_locator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Tap,
    Input,
    LongPress,
    Assert,
    Wait,
    Swipe,
    SystemKey,
    ClearCache,
}

impl ActionType {
    /// Whether this step type identifies an on-screen element and therefore
    /// requires a locator bundle. Coordinate swipes, waits and system keys
    /// do not.
    pub fn needs_locator(&self) -> bool {
        matches!(
            self,
            ActionType::Tap | ActionType::Input | ActionType::LongPress | ActionType::Assert
        )
    }

    /// The camelCase tag used on the wire and in fingerprints.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Tap => "tap",
            ActionType::Input => "input",
            ActionType::LongPress => "longPress",
            ActionType::Assert => "assert",
            ActionType::Wait => "wait",
            ActionType::Swipe => "swipe",
            ActionType::SystemKey => "systemKey",
            ActionType::ClearCache => "clearCache",
        }
    }
}

/// Screen coordinates as reported by the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// One recorded interaction step, in the recorder's camelCase JSON shape.
///
/// Most fields are legacy signals captured at record time: any subset of
/// them may be present. `locator_bundle` is the normalized form attached by
/// the bundle normalizer; older recordings predate it and carry only the
/// legacy fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedAction {
    pub id: String,

    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// Input text for `input` steps, assertion text for `assert` steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,

    /// Raw strategy string; normalized at use via
    /// [`crate::locator::candidate::normalize_locator_strategy`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator_strategy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_content_desc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    #[serde(rename = "smartXPath", default, skip_serializing_if = "Option::is_none")]
    pub smart_xpath: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator_bundle: Option<RawBundle>,
}

impl RecordedAction {
    /// A bare action with only a type and id; all signals absent.
    pub fn new(id: impl Into<String>, action_type: ActionType) -> Self {
        RecordedAction {
            id: id.into(),
            action_type,
            value: None,
            locator: None,
            locator_strategy: None,
            element_id: None,
            element_content_desc: None,
            element_text: None,
            element_class: None,
            element_fingerprint: None,
            xpath: None,
            smart_xpath: None,
            coordinates: None,
            locator_bundle: None,
        }
    }
}

/// Treat empty strings as absent. The recorder serializes missing fields as
/// `""` in some code paths, so every signal check goes through this.
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.as_str()).filter(|s| !s.is_empty())
}
