//! Report model
//!
//! A report is attached to a completed check and carries the service's
//! recommendation plus a per-sub-check breakdown.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;

/// The report of a check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ReportResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<RecommendationResponse>,

    breakdown: Vec<BreakdownResponse>,
}

/// Overall recommendation of a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RecommendationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    recovery_suggestion: Option<String>,
}

/// Result of a single sub-check within a report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct BreakdownResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_check: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,

    details: Vec<DetailsResponse>,
}

/// A name/value detail of a breakdown entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct DetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl ReportResponse {
    /// Map a raw report object; never fails
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            recommendation: fields::field(obj, "recommendation")
                .map(|raw| RecommendationResponse::new(Some(raw))),
            breakdown: fields::list(obj, "breakdown")
                .iter()
                .map(|raw| BreakdownResponse::new(Some(raw)))
                .collect(),
        }
    }

    /// The overall recommendation, if the service gave one
    #[must_use]
    pub const fn recommendation(&self) -> Option<&RecommendationResponse> {
        self.recommendation.as_ref()
    }

    /// Sub-check results in the order reported
    #[must_use]
    pub fn breakdown(&self) -> &[BreakdownResponse] {
        &self.breakdown
    }
}

impl RecommendationResponse {
    /// Map a raw recommendation object; never fails
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            value: fields::string(obj, "value"),
            reason: fields::string(obj, "reason"),
            recovery_suggestion: fields::string(obj, "recovery_suggestion"),
        }
    }

    /// Recommendation value, e.g. `"APPROVE"`, `"REJECT"`, `"NOT_AVAILABLE"`
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Reason for the recommendation
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Suggested recovery action for the end user
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<&str> {
        self.recovery_suggestion.as_deref()
    }
}

impl BreakdownResponse {
    /// Map a raw breakdown object; never fails
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            sub_check: fields::string(obj, "sub_check"),
            result: fields::string(obj, "result"),
            details: fields::list(obj, "details")
                .iter()
                .map(|raw| DetailsResponse::new(Some(raw)))
                .collect(),
        }
    }

    /// Name of the sub-check
    #[must_use]
    pub fn sub_check(&self) -> Option<&str> {
        self.sub_check.as_deref()
    }

    /// Result of the sub-check, e.g. `"PASS"`
    #[must_use]
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Extra details of the sub-check
    #[must_use]
    pub fn details(&self) -> &[DetailsResponse] {
        &self.details
    }
}

impl DetailsResponse {
    /// Map a raw details object; never fails
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            name: fields::string(obj, "name"),
            value: fields::string(obj, "value"),
        }
    }

    /// Detail name
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Detail value
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

macro_rules! from_value {
    ($($name:ident),+) => {
        $(
            impl From<Value> for $name {
                fn from(value: Value) -> Self {
                    Self::new(Some(&value))
                }
            }

            impl From<&Value> for $name {
                fn from(value: &Value) -> Self {
                    Self::new(Some(value))
                }
            }
        )+
    };
}

from_value!(ReportResponse, RecommendationResponse, BreakdownResponse, DetailsResponse);
