use locator_healing::action::action_model::{ActionType, RecordedAction};
use locator_healing::locator::candidate::{is_critical_score, CRITICAL_SCORE_THRESHOLD};
use locator_healing::locator::stable::{
    derive_stable_locator, is_weak_class_only_xpath, StableLocator,
};
use locator_healing::locator::candidate::LocatorStrategy;

fn tap(id: &str) -> RecordedAction {
    RecordedAction::new(id, ActionType::Tap)
}

// ============================================================================
// Weak-xpath classification
// ============================================================================

#[test]
fn class_only_xpath_is_weak() {
    assert!(is_weak_class_only_xpath(
        "//android.widget.Button[@class=\"android.widget.Button\"]"
    ));
}

#[test]
fn xpath_with_identity_predicate_is_not_weak() {
    assert!(!is_weak_class_only_xpath(
        "//android.widget.Button[@resource-id=\"btn_ok\"]"
    ));
    assert!(!is_weak_class_only_xpath(
        "//android.widget.Button[@class=\"android.widget.Button\"][@text=\"OK\"]"
    ));
    assert!(!is_weak_class_only_xpath(
        "//android.widget.Button[@class=\"android.widget.Button\"][contains(@content-desc, \"ok\")]"
    ));
}

#[test]
fn non_rooted_or_classless_strings_are_not_weak() {
    assert!(
        !is_weak_class_only_xpath("android.widget.Button[@class=\"x\"]"),
        "must start with //"
    );
    assert!(
        !is_weak_class_only_xpath("//android.widget.Button"),
        "no @class= predicate at all"
    );
    assert!(!is_weak_class_only_xpath(""));
}

// ============================================================================
// Stable locator derivation — strict priority order
// ============================================================================

#[test]
fn derivation_prefers_element_id() {
    let mut action = tap("d1");
    action.element_id = Some("btn_ok".into());
    action.element_content_desc = Some("OK button".into());
    action.element_text = Some("OK".into());
    action.element_class = Some("android.widget.Button".into());

    assert_eq!(
        derive_stable_locator(&action),
        Some(StableLocator {
            value: "btn_ok".into(),
            strategy: LocatorStrategy::Id,
        })
    );
}

#[test]
fn derivation_falls_back_to_content_desc() {
    let mut action = tap("d2");
    action.element_content_desc = Some("OK button".into());
    action.element_text = Some("OK".into());

    assert_eq!(
        derive_stable_locator(&action),
        Some(StableLocator {
            value: "OK button".into(),
            strategy: LocatorStrategy::AccessibilityId,
        })
    );
}

#[test]
fn derivation_synthesizes_class_qualified_text_xpath() {
    let mut action = tap("d3");
    action.element_text = Some("Continue".into());
    action.element_class = Some("android.widget.Button".into());

    assert_eq!(
        derive_stable_locator(&action),
        Some(StableLocator {
            value: "//android.widget.Button[normalize-space(@text)=\"Continue\"]".into(),
            strategy: LocatorStrategy::XPath,
        })
    );
}

#[test]
fn derivation_uses_bare_text_without_class() {
    let mut action = tap("d4");
    action.element_text = Some("Continue".into());

    assert_eq!(
        derive_stable_locator(&action),
        Some(StableLocator {
            value: "Continue".into(),
            strategy: LocatorStrategy::Text,
        })
    );
}

#[test]
fn derivation_accepts_strong_smart_xpath_before_legacy() {
    let mut action = tap("d5");
    action.smart_xpath = Some("//android.widget.Button[@resource-id=\"go\"]".into());
    action.xpath = Some("//android.view.View[@text=\"Go\"]".into());

    let stable = derive_stable_locator(&action).expect("smart xpath usable");
    assert_eq!(stable.value, "//android.widget.Button[@resource-id=\"go\"]");
    assert_eq!(stable.strategy, LocatorStrategy::XPath);
}

#[test]
fn derivation_skips_weak_smart_xpath() {
    let mut action = tap("d6");
    action.smart_xpath = Some("//android.widget.Button[@class=\"android.widget.Button\"]".into());
    action.xpath = Some("//android.view.View[@text=\"Go\"]".into());

    let stable = derive_stable_locator(&action).expect("legacy xpath usable");
    assert_eq!(stable.value, "//android.view.View[@text=\"Go\"]");
}

#[test]
fn derivation_skips_non_rooted_xpath() {
    let mut action = tap("d7");
    action.xpath = Some("hierarchy/node[2]".into());
    assert_eq!(derive_stable_locator(&action), None);
}

#[test]
fn derivation_permits_no_class_only_fallback() {
    let mut action = tap("d8");
    action.element_class = Some("android.widget.Button".into());
    assert_eq!(
        derive_stable_locator(&action),
        None,
        "class alone is never a stable locator"
    );
}

// ============================================================================
// Critical threshold
// ============================================================================

#[test]
fn critical_threshold_is_below_every_derivable_score() {
    assert_eq!(CRITICAL_SCORE_THRESHOLD, 10);
    assert!(is_critical_score(10));
    assert!(is_critical_score(0));
    assert!(!is_critical_score(11));
    assert!(
        !is_critical_score(locator_healing::locator::candidate::SCORE_COORDINATES),
        "even the weakest internal score is above the threshold"
    );
}
