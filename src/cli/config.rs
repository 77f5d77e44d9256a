use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::agent::client::DEFAULT_AGENT_URL;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "locator-healing",
    version,
    about = "Self-healing locator engine for recorded mobile UI scenarios"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Base URL of the local device automation agent
    #[arg(long, global = true)]
    pub agent_url: Option<String>,

    /// Healing trace file (JSONL); disables tracing when unset
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Path to config file (default: locator-healing.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Attach locator bundles to a scenario and report locator health
    Audit {
        /// Path to scenario YAML or JSON file
        #[arg(long)]
        scenario: String,

        /// Write the bundled scenario back to this path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Replace weak and critical primaries with derived stable locators
    Heal {
        /// Path to scenario YAML or JSON file
        #[arg(long)]
        scenario: String,

        /// Where to write the healed scenario (default: in place)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Re-resolve each step's locator chain against a hierarchy snapshot
    Resolve {
        /// Path to scenario YAML or JSON file
        #[arg(long)]
        scenario: String,

        /// UI-hierarchy XML dump file; fetched from the agent when unset
        #[arg(long)]
        dump: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `locator-healing.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub file: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("locator-healing.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

/// Resolve the agent base URL: CLI flag > config file > default.
pub fn resolve_agent_url(cli_url: Option<&str>, config: &AppConfig) -> String {
    cli_url
        .or(config.agent.base_url.as_deref())
        .unwrap_or(DEFAULT_AGENT_URL)
        .to_string()
}
