use serde::Deserialize;

use crate::agent::error::AgentError;

pub const DEFAULT_AGENT_URL: &str = "http://127.0.0.1:7100";

/// Thin client for the local device automation agent. Consume-only: it
/// fetches what the agent observed (hierarchy dumps, liveness); it never
/// drives the device itself.
pub struct AgentClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct HierarchyResponse {
    xml: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: Option<String>,
}

impl AgentClient {
    pub fn new(base_url: &str) -> Self {
        AgentClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch a fresh UI-hierarchy XML snapshot. The caller is responsible
    /// for requesting it only once the screen has settled.
    pub fn fetch_hierarchy(&self) -> Result<String, AgentError> {
        let endpoint = format!("{}/hierarchy", self.base_url);
        let response = self.get(&endpoint)?;

        let parsed: HierarchyResponse = response.json().map_err(|e| AgentError::JsonParse {
            context: "hierarchy".to_string(),
            source: e,
        })?;

        parsed.xml.ok_or_else(|| AgentError::MissingField {
            context: "hierarchy".to_string(),
            field: "xml".to_string(),
        })
    }

    /// Liveness check. Ok(()) when the agent reports ready.
    pub fn ping(&self) -> Result<(), AgentError> {
        let endpoint = format!("{}/status", self.base_url);
        let response = self.get(&endpoint)?;

        let parsed: StatusResponse = response.json().map_err(|e| AgentError::JsonParse {
            context: "status".to_string(),
            source: e,
        })?;

        match parsed.status.as_deref() {
            Some("ok") | Some("ready") => Ok(()),
            other => Err(AgentError::MissingField {
                context: format!("status={}", other.unwrap_or("<none>")),
                field: "status".to_string(),
            }),
        }
    }

    fn get(&self, endpoint: &str) -> Result<reqwest::blocking::Response, AgentError> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .map_err(|e| AgentError::Http {
                endpoint: endpoint.to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(AgentError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }
}
