use std::fmt;

#[derive(Debug)]
pub enum AgentError {
    /// HTTP request to the local automation agent failed (connection,
    /// timeout, DNS)
    Http { endpoint: String, source: reqwest::Error },

    /// Agent responded with a non-success status
    Status { endpoint: String, status: u16 },

    /// Agent response body did not parse as the expected JSON shape
    JsonParse { context: String, source: reqwest::Error },

    /// Agent response parsed but lacked a required field
    MissingField { context: String, field: String },
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Http { endpoint, source } => {
                write!(f, "Request to agent at {} failed (is the agent running?): {}", endpoint, source)
            }
            AgentError::Status { endpoint, status } => {
                write!(f, "Agent at {} returned HTTP {}", endpoint, status)
            }
            AgentError::JsonParse { context, source } => {
                write!(f, "Agent JSON parse error ({}): {}", context, source)
            }
            AgentError::MissingField { context, field } => {
                write!(f, "Agent response ({}) missing field '{}'", context, field)
            }
        }
    }
}

impl std::error::Error for AgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentError::Http { source, .. } => Some(source),
            AgentError::JsonParse { source, .. } => Some(source),
            _ => None,
        }
    }
}
