//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::models::{CheckResponse, SessionCheck};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an inspect operation
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Where the checks were read from
    pub source: String,
    /// Kind filter applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Summaries of the matching checks
    pub checks: Vec<CheckSummary>,
}

/// Summary of a single check
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    /// Check ID
    pub id: Option<String>,
    /// Check type as reported by the service
    #[serde(rename = "type")]
    pub check_type: Option<String>,
    /// Whether the type is one with a dedicated model
    pub known_kind: bool,
    /// Check state
    pub state: Option<String>,
    /// Report recommendation value
    pub recommendation: Option<String>,
    /// Number of resources used
    pub resources_used: usize,
    /// Number of generated media
    pub generated_media: usize,
    /// Creation timestamp (RFC3339)
    pub created: Option<String>,
    /// Last update timestamp (RFC3339)
    pub last_updated: Option<String>,
}

impl CheckSummary {
    /// Summarise a check response
    #[must_use]
    pub fn new(check: &CheckResponse) -> Self {
        Self {
            id: check.id().map(str::to_string),
            check_type: check.check_type().map(str::to_string),
            known_kind: check.kind().is_some(),
            state: check.state().map(str::to_string),
            recommendation: check
                .report()
                .and_then(|report| report.recommendation())
                .and_then(|rec| rec.value())
                .map(str::to_string),
            resources_used: check.resources_used().len(),
            generated_media: check.generated_media().len(),
            created: check.created().map(|dt| dt.to_rfc3339()),
            last_updated: check.last_updated().map(|dt| dt.to_rfc3339()),
        }
    }
}

impl From<&SessionCheck> for CheckSummary {
    fn from(check: &SessionCheck) -> Self {
        Self::new(check.response())
    }
}

impl InspectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.checks.is_empty() {
            match &self.kind {
                Some(kind) => println!("No {kind} checks found in {}.", self.source),
                None => println!("No checks found in {}.", self.source),
            }
            return;
        }

        println!("Checks in {}: {}\n", self.source, self.checks.len());
        for c in &self.checks {
            println!(
                "  [{}] {}",
                c.state.as_deref().unwrap_or("UNKNOWN"),
                c.check_type.as_deref().unwrap_or("(no type)")
            );
            println!("  ID: {}", c.id.as_deref().unwrap_or("-"));
            if let Some(created) = &c.created {
                println!("  Created: {created}");
            }
            if let Some(updated) = &c.last_updated {
                println!("  Last updated: {updated}");
            }
            if let Some(rec) = &c.recommendation {
                println!("  Recommendation: {rec}");
            }
            println!("  Resources: {}, Media: {}\n", c.resources_used, c.generated_media);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
