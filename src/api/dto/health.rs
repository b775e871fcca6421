//! DTOs for the health endpoint.

use serde::Serialize;

/// Service-level health report: overall status, crate version, and the
/// outcome of each component probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Per-component probe results. The database is the service's only
/// dependency, so it is the only entry.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of probing one component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    /// A passing check with a human-readable detail.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: Some(message.into()),
        }
    }

    /// A failing check carrying the failure reason.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    /// Whether the probe passed.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
