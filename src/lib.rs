//! Locator resolution and self-healing for recorded mobile UI scenarios.
//!
//! The core is a pure transformation library: given one recorded
//! interaction step, build a ranked, deduplicated set of candidate locators
//! (`locator::builder`), wrap it into a bundle with one primary and an
//! ordered fallback chain (`locator::bundle`), and re-resolve any stored
//! locator against a live uiautomator hierarchy dump (`hierarchy`). The
//! surrounding modules are the thin tooling around that core: scenario
//! persistence, a consume-only agent client, auditing and a healing trace.

pub mod action;
pub mod agent;
pub mod cli;
pub mod hierarchy;
pub mod locator;
pub mod report;
pub mod scenario;
pub mod trace;

pub use action::action_model::{ActionType, Coordinates, RecordedAction};
pub use hierarchy::bounds::{bounds_center, Point};
pub use hierarchy::resolver::resolve_locator;
pub use locator::builder::build_candidates;
pub use locator::bundle::{ensure_locator_bundle, ensure_locator_bundles, LocatorBundleV1};
pub use locator::candidate::{normalize_locator_strategy, LocatorCandidate, LocatorStrategy};
pub use locator::stable::{derive_stable_locator, is_weak_class_only_xpath, StableLocator};
