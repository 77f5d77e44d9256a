use locator_healing::hierarchy::bounds::{bounds_center, Point};
use locator_healing::hierarchy::node::parse_nodes;
use locator_healing::hierarchy::resolver::resolve_locator;
use locator_healing::hierarchy::xpath::parse_xpath_filter;
use locator_healing::locator::candidate::LocatorStrategy;

// ============================================================================
// Bounds parsing
// ============================================================================

#[test]
fn bounds_center_parses_the_bracket_pair_pattern() {
    assert_eq!(
        bounds_center("[10,20][30,40]"),
        Some(Point { x: 20, y: 30 }),
        "center of the rectangle"
    );
    assert_eq!(
        bounds_center("[100,200][300,260]"),
        Some(Point { x: 200, y: 230 })
    );
    assert_eq!(
        bounds_center("[0,0][0,0]"),
        Some(Point { x: 0, y: 0 }),
        "degenerate rectangle still parses"
    );
    assert_eq!(
        bounds_center("[10,20][21,20]"),
        Some(Point { x: 16, y: 20 }),
        "odd sums round up"
    );
}

#[test]
fn bounds_center_rejects_malformed_strings() {
    assert_eq!(bounds_center(""), None, "empty");
    assert_eq!(bounds_center("abc"), None, "not a bounds string");
    assert_eq!(bounds_center("[10,20]"), None, "single bracket pair");
    assert_eq!(bounds_center("[10,20][30,40][50,60]"), None, "trailing junk");
    assert_eq!(bounds_center("[10,20][30,40] "), None, "trailing space");
    assert_eq!(bounds_center("[-10,20][30,40]"), None, "negative coordinate");
    assert_eq!(bounds_center("[1.5,2][3,4]"), None, "non-integer");
    assert_eq!(
        bounds_center("[99999999999999999999,0][0,0]"),
        None,
        "unrepresentable number"
    );
}

// ============================================================================
// Node scanner
// ============================================================================

const DUMP: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='yes' ?>
<hierarchy rotation="0">
  <node index="0" text="" resource-id="com.example:id/root" class="android.widget.FrameLayout" bounds="[0,0][1080,1920]" />
  <node index="1" text="Submit" resource-id="btn_submit" content-desc="Submit order" class="android.widget.Button" bounds="[100,200][300,260]" />
  <node index="2" text="Cancel" resource-id="" content-desc="" class="android.widget.Button" bounds="[400,200][600,260]" />
</hierarchy>"#;

#[test]
fn parse_nodes_extracts_attribute_maps() {
    let nodes = parse_nodes(DUMP);
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[1].attr("resource-id"), Some("btn_submit"));
    assert_eq!(nodes[1].attr("content-desc"), Some("Submit order"));
    assert_eq!(nodes[1].attr("bounds"), Some("[100,200][300,260]"));
    assert_eq!(nodes[2].attr("text"), Some("Cancel"));
    assert_eq!(nodes[2].attr("resource-id"), Some(""), "empty attribute kept verbatim");
}

#[test]
fn parse_nodes_recognizes_only_self_closing_nodes() {
    let xml = r#"<hierarchy><node text="open" class="a"><node text="inner" class="b" /></node></hierarchy>"#;
    let nodes = parse_nodes(xml);
    assert_eq!(nodes.len(), 1, "open <node> tags are skipped");
    assert_eq!(nodes[0].attr("text"), Some("inner"));
}

#[test]
fn parse_nodes_handles_empty_and_non_conforming_input() {
    assert!(parse_nodes("").is_empty());
    assert!(parse_nodes("not xml at all").is_empty());
    assert!(parse_nodes("<nodes bogus=\"1\" />").is_empty(), "longer tag name is not a node");
}

// ============================================================================
// XPath-subset filter
// ============================================================================

#[test]
fn xpath_filter_extracts_class_and_equality_predicates() {
    let filter = parse_xpath_filter("//android.widget.Button[@resource-id=\"btn_ok\"]");
    assert_eq!(filter.class.as_deref(), Some("android.widget.Button"));
    assert_eq!(
        filter.equals,
        vec![("resource-id".to_string(), "btn_ok".to_string())]
    );
    assert!(filter.contains.is_empty());
}

#[test]
fn xpath_filter_extracts_contains_predicates() {
    let filter = parse_xpath_filter("//*[contains(@text, \"Subm\")][contains(@content-desc,'order')]");
    assert_eq!(filter.class, None, "wildcard class extracts no filter");
    assert!(filter.equals.is_empty());
    assert_eq!(
        filter.contains,
        vec![
            ("text".to_string(), "Subm".to_string()),
            ("content-desc".to_string(), "order".to_string()),
        ]
    );
}

#[test]
fn xpath_filter_ignores_unsupported_predicates() {
    // Positional predicates, axes and function-wrapped comparisons are not
    // extracted; the filter degrades to whatever subset it understood.
    let filter = parse_xpath_filter(
        "//android.widget.Button[position()=2][normalize-space(@text)=\"Go\"]",
    );
    assert_eq!(filter.class.as_deref(), Some("android.widget.Button"));
    assert!(filter.equals.is_empty(), "normalize-space comparison not extracted");
    assert!(filter.contains.is_empty());

    let nested = parse_xpath_filter("//a/b[@text=\"x\"]");
    assert_eq!(nested.class, None, "nested path yields no class filter");
    assert_eq!(nested.equals.len(), 1, "equality predicate still scanned");
}

#[test]
fn xpath_filter_supports_single_quotes() {
    let filter = parse_xpath_filter("//android.view.View[@text='Done']");
    assert_eq!(filter.equals, vec![("text".to_string(), "Done".to_string())]);
}

// ============================================================================
// Re-resolution
// ============================================================================

#[test]
fn resolve_by_id_returns_bounds_center() {
    let point = resolve_locator(LocatorStrategy::Id, "btn_submit", DUMP);
    assert_eq!(point, Some(Point { x: 200, y: 230 }));
}

#[test]
fn resolve_by_accessibility_id_and_text() {
    assert_eq!(
        resolve_locator(LocatorStrategy::AccessibilityId, "Submit order", DUMP),
        Some(Point { x: 200, y: 230 })
    );
    assert_eq!(
        resolve_locator(LocatorStrategy::Text, "Cancel", DUMP),
        Some(Point { x: 500, y: 230 })
    );
}

#[test]
fn resolve_by_xpath_applies_all_extracted_filters() {
    assert_eq!(
        resolve_locator(
            LocatorStrategy::XPath,
            "//android.widget.Button[@resource-id=\"btn_submit\"]",
            DUMP
        ),
        Some(Point { x: 200, y: 230 })
    );
    assert_eq!(
        resolve_locator(
            LocatorStrategy::XPath,
            "//android.widget.Button[contains(@content-desc, \"order\")]",
            DUMP
        ),
        Some(Point { x: 200, y: 230 })
    );
    assert_eq!(
        resolve_locator(
            LocatorStrategy::XPath,
            "//android.widget.Button[@resource-id=\"nope\"]",
            DUMP
        ),
        None
    );
}

#[test]
fn resolve_uses_first_match_semantics() {
    // Two Button nodes; a class-only xpath matches the first in document
    // order, with no ranking among structurally identical nodes.
    assert_eq!(
        resolve_locator(LocatorStrategy::XPath, "//android.widget.Button", DUMP),
        Some(Point { x: 200, y: 230 })
    );
}

#[test]
fn resolve_rejects_unsupported_strategies() {
    assert_eq!(
        resolve_locator(LocatorStrategy::Coordinates, "540,1200", DUMP),
        None,
        "coordinates are never re-resolved"
    );
    assert_eq!(
        resolve_locator(
            LocatorStrategy::AndroidUiAutomator,
            "new UiSelector().text(\"Submit\")",
            DUMP
        ),
        None
    );
}

#[test]
fn resolve_returns_none_for_empty_dump_or_missing_match() {
    assert_eq!(resolve_locator(LocatorStrategy::Id, "btn_submit", ""), None);
    assert_eq!(resolve_locator(LocatorStrategy::Id, "unknown_id", DUMP), None);
}

#[test]
fn resolve_returns_none_when_match_has_malformed_bounds() {
    let xml = r#"<node resource-id="x" bounds="oops" />"#;
    assert_eq!(resolve_locator(LocatorStrategy::Id, "x", xml), None);
}
