use serde::{Deserialize, Serialize};

use crate::action::action_model::{non_empty, RecordedAction};
use crate::locator::candidate::LocatorStrategy;

/// A proposed substitute locator for an action whose stored one is
/// low-confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StableLocator {
    pub value: String,
    pub strategy: LocatorStrategy,
}

/// A class-only xpath pins an element down by nothing but its widget class,
/// which is rarely unique on a screen. Weak iff the expression starts with
/// `//`, asserts `@class=` equality, and asserts nothing about resource-id,
/// content-desc or text (neither equality nor `contains`).
pub fn is_weak_class_only_xpath(locator: &str) -> bool {
    if !locator.starts_with("//") {
        return false;
    }
    if !locator.contains("@class=") {
        return false;
    }

    let has_identity = locator.contains("@resource-id=")
        || locator.contains("@content-desc=")
        || locator.contains("@text=")
        || locator.contains("contains(@resource-id")
        || locator.contains("contains(@content-desc")
        || locator.contains("contains(@text");

    !has_identity
}

/// Derive the single best substitute locator from an action's recorded
/// metadata. Signals are tried in strict priority order; the first present
/// one wins. Returns None when nothing trustworthy exists, in which case
/// the caller asks the user to re-capture the element rather than guessing
/// a low-confidence substitute.
pub fn derive_stable_locator(action: &RecordedAction) -> Option<StableLocator> {
    if let Some(id) = non_empty(action.element_id.as_ref()) {
        return Some(StableLocator {
            value: id.to_string(),
            strategy: LocatorStrategy::Id,
        });
    }

    if let Some(desc) = non_empty(action.element_content_desc.as_ref()) {
        return Some(StableLocator {
            value: desc.to_string(),
            strategy: LocatorStrategy::AccessibilityId,
        });
    }

    let text = non_empty(action.element_text.as_ref());
    let class = non_empty(action.element_class.as_ref());

    // Class-qualified text match beats bare text: same widget text can
    // appear in several element kinds on one screen.
    if let (Some(text), Some(class)) = (text, class) {
        return Some(StableLocator {
            value: format!("//{}[normalize-space(@text)=\"{}\"]", class, text),
            strategy: LocatorStrategy::XPath,
        });
    }

    if let Some(text) = text {
        return Some(StableLocator {
            value: text.to_string(),
            strategy: LocatorStrategy::Text,
        });
    }

    if let Some(xpath) = usable_xpath(action.smart_xpath.as_ref()) {
        return Some(StableLocator {
            value: xpath.to_string(),
            strategy: LocatorStrategy::XPath,
        });
    }

    if let Some(xpath) = usable_xpath(action.xpath.as_ref()) {
        return Some(StableLocator {
            value: xpath.to_string(),
            strategy: LocatorStrategy::XPath,
        });
    }

    // No class-only fallback permitted.
    None
}

fn usable_xpath(field: Option<&String>) -> Option<&str> {
    non_empty(field).filter(|x| x.starts_with("//") && !is_weak_class_only_xpath(x))
}
