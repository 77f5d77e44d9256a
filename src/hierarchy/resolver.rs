use crate::hierarchy::bounds::{bounds_center, Point};
use crate::hierarchy::node::{parse_nodes, UiNode};
use crate::hierarchy::xpath::parse_xpath_filter;
use crate::locator::candidate::LocatorStrategy;

/// Re-resolve a stored locator against a live hierarchy snapshot, returning
/// the center of the first matching node. Used both for on-screen
/// highlighting and for healing during script generation.
///
/// First-match semantics: no ranking among structurally identical nodes.
/// Total: unsupported strategies, empty dumps and malformed bounds all
/// yield None. The snapshot must have been taken after the screen settled;
/// staleness is the caller's problem.
pub fn resolve_locator(strategy: LocatorStrategy, value: &str, xml: &str) -> Option<Point> {
    let nodes = parse_nodes(xml);
    if nodes.is_empty() {
        return None;
    }

    let node = match strategy {
        LocatorStrategy::Id => find_by_attr(&nodes, "resource-id", value),
        LocatorStrategy::AccessibilityId => find_by_attr(&nodes, "content-desc", value),
        LocatorStrategy::Text => find_by_attr(&nodes, "text", value),
        LocatorStrategy::XPath => {
            let filter = parse_xpath_filter(value);
            nodes.iter().find(|n| filter.matches(n))
        }
        // Coordinates and UiAutomator expressions are never re-resolved
        // against a hierarchy dump.
        LocatorStrategy::Coordinates | LocatorStrategy::AndroidUiAutomator => None,
    }?;

    bounds_center(node.attr("bounds")?)
}

fn find_by_attr<'a>(nodes: &'a [UiNode], attr: &str, expected: &str) -> Option<&'a UiNode> {
    nodes.iter().find(|n| n.attr(attr) == Some(expected))
}
