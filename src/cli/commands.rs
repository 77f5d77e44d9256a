use crate::action::action_model::RecordedAction;
use crate::agent::client::AgentClient;
use crate::hierarchy::resolver::resolve_locator;
use crate::locator::bundle::{ensure_locator_bundle, normalized_bundle, RawLocator};
use crate::locator::candidate::{base_score_for, LocatorSource};
use crate::locator::stable::StableLocator;
use crate::report::console::format_console_report;
use crate::report::report_model::{audit_action, build_report, LocatorHealth};
use crate::scenario::scenario_model::Scenario;
use crate::trace::logger::TraceLog;
use crate::trace::trace::TraceEvent;

// ============================================================================
// audit subcommand
// ============================================================================

/// Bundle a scenario and report its locator health. Returns whether no step
/// was flagged.
pub fn cmd_audit(
    scenario_path: &str,
    output: Option<&str>,
    tracer: &TraceLog,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scenario = load_scenario(scenario_path)?;

    if verbose > 0 {
        eprintln!("Auditing {} ({} steps)...", scenario.name, scenario.actions.len());
    }

    let bundled = scenario.with_bundles();
    trace_bundles(&bundled, tracer);

    let report = build_report(&bundled.name, &bundled.actions);
    print!("{}", format_console_report(&report));

    if let Some(path) = output {
        write_scenario(path, &bundled)?;
        if verbose > 0 {
            eprintln!("Wrote bundled scenario to {}", path);
        }
    }

    Ok(report.healthy())
}

// ============================================================================
// heal subcommand
// ============================================================================

/// Replace weak and critical primaries with derived stable locators and
/// write the updated scenario. Steps with no stable substitute are left
/// untouched and reported.
pub fn cmd_heal(
    scenario_path: &str,
    output: Option<&str>,
    tracer: &TraceLog,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(scenario_path)?;
    let bundled = scenario.with_bundles();

    let mut healed_count = 0;
    let mut actions = Vec::with_capacity(bundled.actions.len());

    for (index, action) in bundled.actions.iter().enumerate() {
        let entry = audit_action(index, action);

        let Some(suggestion) = entry.suggestion else {
            if !matches!(
                entry.health,
                LocatorHealth::Healthy | LocatorHealth::NotApplicable
            ) && verbose > 0
            {
                eprintln!("  #{}: no stable substitute, left as is", index);
            }
            actions.push(action.clone());
            continue;
        };

        tracer.record(&TraceEvent::LocatorHealed {
            action_id: action.id.clone(),
            old_strategy: entry.primary_strategy.map(|s| s.as_str().to_string()),
            old_value: entry.primary_value.clone(),
            new_strategy: suggestion.strategy.as_str().to_string(),
            new_value: suggestion.value.clone(),
        });

        actions.push(apply_healing(action, &suggestion));
        healed_count += 1;
    }

    let healed = Scenario {
        name: bundled.name.clone(),
        actions,
    };

    let target = output.unwrap_or(scenario_path);
    write_scenario(target, &healed)?;
    println!("Healed {} of {} steps, wrote {}", healed_count, healed.actions.len(), target);

    Ok(())
}

/// Install a derived stable locator as the step's primary. Healing is the
/// one case where an explicit primary is overridden: the user accepted the
/// replacement. The bundle is re-normalized so fallbacks re-rank around the
/// new primary.
fn apply_healing(action: &RecordedAction, suggestion: &StableLocator) -> RecordedAction {
    let mut updated = action.clone();
    updated.locator = Some(suggestion.value.clone());
    updated.locator_strategy = Some(suggestion.strategy.as_str().to_string());

    if let Some(bundle) = updated.locator_bundle.as_mut() {
        bundle.primary = Some(RawLocator {
            strategy: Some(suggestion.strategy.as_str().to_string()),
            value: Some(suggestion.value.clone()),
            score: Some(base_score_for(suggestion.strategy)),
            source: Some(LocatorSource::Inspector),
            reason: Some("healed: replaced unreliable locator".to_string()),
        });
    }

    ensure_locator_bundle(&updated)
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Re-resolve each step's locator chain against a hierarchy snapshot, from
/// a dump file or fetched live from the agent. Returns whether every
/// locator-bearing step resolved.
pub fn cmd_resolve(
    scenario_path: &str,
    dump: Option<&str>,
    agent_url: &str,
    tracer: &TraceLog,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let scenario = load_scenario(scenario_path)?;
    let bundled = scenario.with_bundles();

    let xml = match dump {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            if verbose > 0 {
                eprintln!("Fetching hierarchy from agent at {}...", agent_url);
            }
            AgentClient::new(agent_url).fetch_hierarchy()?
        }
    };

    let mut all_resolved = true;

    for (index, action) in bundled.actions.iter().enumerate() {
        if !action.action_type.needs_locator() {
            continue;
        }

        let Some(bundle) = normalized_bundle(action) else {
            println!("#{} {}: no bundle", index, action.action_type.as_str());
            all_resolved = false;
            continue;
        };

        // Self-healing chain: try the primary, then each fallback in score
        // order, and report which one resolved.
        let chain = std::iter::once(&bundle.primary).chain(bundle.fallbacks.iter());
        let mut resolved = None;

        for candidate in chain {
            match resolve_locator(candidate.strategy, &candidate.value, &xml) {
                Some(point) => {
                    tracer.record(&TraceEvent::ResolutionHit {
                        action_id: action.id.clone(),
                        strategy: candidate.strategy.as_str().to_string(),
                        value: candidate.value.clone(),
                        x: point.x,
                        y: point.y,
                    });
                    resolved = Some((candidate, point));
                    break;
                }
                None => {
                    tracer.record(&TraceEvent::ResolutionMiss {
                        action_id: action.id.clone(),
                        strategy: candidate.strategy.as_str().to_string(),
                        value: candidate.value.clone(),
                    });
                }
            }
        }

        match resolved {
            Some((candidate, point)) => {
                let via = if candidate.value == bundle.primary.value
                    && candidate.strategy == bundle.primary.strategy
                {
                    "primary".to_string()
                } else {
                    format!("fallback {}", candidate.strategy.as_str())
                };
                println!(
                    "#{} {}: ({}, {}) via {}",
                    index,
                    action.action_type.as_str(),
                    point.x,
                    point.y,
                    via
                );
            }
            None => {
                println!("#{} {}: no match in snapshot", index, action.action_type.as_str());
                all_resolved = false;
            }
        }
    }

    Ok(all_resolved)
}

// ============================================================================
// Scenario IO
// ============================================================================

/// Load a scenario from YAML or JSON, dispatched on extension.
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;

    let scenario = if is_json_path(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    Ok(scenario)
}

/// Write a scenario in the format implied by the target extension.
pub fn write_scenario(path: &str, scenario: &Scenario) -> Result<(), Box<dyn std::error::Error>> {
    let content = if is_json_path(path) {
        serde_json::to_string_pretty(scenario)?
    } else {
        serde_yaml::to_string(scenario)?
    };

    std::fs::write(path, content)?;
    Ok(())
}

fn is_json_path(path: &str) -> bool {
    std::path::Path::new(path)
        .extension()
        .map_or(false, |e| e == "json")
}

fn trace_bundles(scenario: &Scenario, tracer: &TraceLog) {
    for action in &scenario.actions {
        if let Some(bundle) = normalized_bundle(action) {
            tracer.record(&TraceEvent::BundleAttached {
                action_id: action.id.clone(),
                fingerprint: bundle.fingerprint.clone(),
                primary_strategy: bundle.primary.strategy.as_str().to_string(),
                primary_value: bundle.primary.value.clone(),
                fallback_count: bundle.fallbacks.len(),
            });
        }
    }
}
