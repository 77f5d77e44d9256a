use locator_healing::action::action_model::{ActionType, RecordedAction};
use locator_healing::locator::bundle::normalized_bundle;
use locator_healing::locator::candidate::LocatorStrategy;
use locator_healing::scenario::scenario_model::Scenario;

// ============================================================================
// Wire format — the recorder's camelCase JSON
// ============================================================================

#[test]
fn recorded_action_deserializes_recorder_json() {
    let json = r#"{
        "id": "step-1",
        "type": "longPress",
        "elementId": "btn_submit",
        "elementContentDesc": "Submit order",
        "elementText": "Submit",
        "elementClass": "android.widget.Button",
        "smartXPath": "//android.widget.Button[@text=\"Submit\"]",
        "coordinates": { "x": 540, "y": 1200 }
    }"#;

    let action: RecordedAction = serde_json::from_str(json).expect("valid recorder JSON");
    assert_eq!(action.action_type, ActionType::LongPress);
    assert_eq!(action.element_id.as_deref(), Some("btn_submit"));
    assert_eq!(
        action.smart_xpath.as_deref(),
        Some("//android.widget.Button[@text=\"Submit\"]")
    );
    assert_eq!(action.coordinates.map(|c| (c.x, c.y)), Some((540, 1200)));
}

#[test]
fn recorded_action_roundtrips_with_bundle() {
    let mut action = RecordedAction::new("step-2", ActionType::Tap);
    action.element_id = Some("btn".into());

    let bundled = locator_healing::locator::bundle::ensure_locator_bundle(&action);
    let json = serde_json::to_string(&bundled).expect("serializes");

    assert!(json.contains("\"locatorBundle\""), "camelCase bundle key");
    assert!(json.contains("\"type\":\"tap\""));

    let back: RecordedAction = serde_json::from_str(&json).expect("round trip");
    assert_eq!(back, bundled);
}

// ============================================================================
// Scenario healing on load
// ============================================================================

#[test]
fn scenario_with_bundles_upgrades_pre_bundle_recordings() {
    let yaml = r#"
name: login flow
actions:
  - id: s1
    type: tap
    elementId: username_field
    elementText: Username
  - id: s2
    type: input
    value: alice
    elementId: username_field
  - id: s3
    type: wait
  - id: s4
    type: assert
    elementText: Welcome
"#;

    let scenario: Scenario = serde_yaml::from_str(yaml).expect("valid scenario YAML");
    let bundled = scenario.with_bundles();

    assert_eq!(bundled.name, "login flow");
    assert_eq!(bundled.actions.len(), 4);

    let first = normalized_bundle(&bundled.actions[0]).expect("tap bundled");
    assert_eq!(first.primary.strategy, LocatorStrategy::Id);
    assert_eq!(first.primary.value, "username_field");

    assert!(
        bundled.actions[2].locator_bundle.is_none(),
        "wait step takes no bundle"
    );

    let assert_step = normalized_bundle(&bundled.actions[3]).expect("assert bundled");
    assert_eq!(assert_step.primary.strategy, LocatorStrategy::Text);
    assert_eq!(assert_step.primary.value, "Welcome");

    // Element signals got fingerprinted on the way in.
    assert!(
        bundled.actions[0].element_fingerprint.is_some(),
        "fingerprint stamped from element signals"
    );
    assert_eq!(first.fingerprint, bundled.actions[0].element_fingerprint.clone().unwrap());
}

#[test]
fn scenario_healing_is_stable_across_reloads() {
    let yaml = r#"
name: idempotent
actions:
  - id: s1
    type: tap
    elementId: btn
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).expect("valid scenario YAML");

    let once = scenario.with_bundles();
    let twice = once.with_bundles();
    assert_eq!(once, twice, "re-healing a healed scenario changes nothing");
}

#[test]
fn scenario_yaml_roundtrip_preserves_bundles() {
    let yaml = r#"
name: roundtrip
actions:
  - id: s1
    type: tap
    elementId: btn
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).expect("valid scenario YAML");
    let bundled = scenario.with_bundles();

    let serialized = serde_yaml::to_string(&bundled).expect("serializes");
    let reloaded: Scenario = serde_yaml::from_str(&serialized).expect("reloads");
    assert_eq!(reloaded, bundled);
}
