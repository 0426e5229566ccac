//! Check response model
//!
//! A check is a single verification the service performs within a session.
//! Every check shares the same shape, so [`CheckResponse`] holds the mapping
//! and one thin newtype per [`CheckKind`] gives downstream code a distinct
//! type to dispatch on.
//!
//! Mapping never fails. Missing keys, `null`, and unparseable timestamps
//! all end up as absent values.

use std::ops::Deref;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields;
use super::kind::CheckKind;
use super::media::GeneratedMedia;
use super::report::ReportResponse;
use super::session::SessionCheck;
use crate::date::parse_date;

/// Attributes shared by every check in a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct CheckResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    check_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,

    resources_used: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ReportResponse>,

    generated_media: Vec<GeneratedMedia>,

    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<DateTime<FixedOffset>>,
}

impl CheckResponse {
    /// Map a raw check object
    ///
    /// `None`, `null` and non-object values produce a check with every
    /// attribute absent. Unknown keys are ignored.
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let obj = fields::as_object(data);
        Self {
            id: fields::string(obj, "id"),
            check_type: fields::string(obj, "type"),
            state: fields::string(obj, "state"),
            resources_used: fields::string_list(obj, "resources_used"),
            report: fields::field(obj, "report").map(|raw| ReportResponse::new(Some(raw))),
            generated_media: fields::list(obj, "generated_media")
                .iter()
                .map(|raw| GeneratedMedia::new(Some(raw)))
                .collect(),
            created: fields::field(obj, "created").and_then(timestamp),
            last_updated: fields::field(obj, "last_updated").and_then(timestamp),
        }
    }

    /// ID of the check
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Type of the check as reported by the service
    #[must_use]
    pub fn check_type(&self) -> Option<&str> {
        self.check_type.as_deref()
    }

    /// The [`CheckKind`] named by [`Self::check_type`], if it is a known one
    #[must_use]
    pub fn kind(&self) -> Option<CheckKind> {
        self.check_type().and_then(CheckKind::from_type)
    }

    /// State of the check, e.g. `"COMPLETED"`
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// IDs of the resources the check used
    #[must_use]
    pub fn resources_used(&self) -> &[String] {
        &self.resources_used
    }

    /// When the check was created
    #[must_use]
    pub const fn created(&self) -> Option<DateTime<FixedOffset>> {
        self.created
    }

    /// When the check was last updated
    #[must_use]
    pub const fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        self.last_updated
    }

    /// Media generated while performing the check
    #[must_use]
    pub fn generated_media(&self) -> &[GeneratedMedia] {
        &self.generated_media
    }

    /// Report of the check
    #[must_use]
    pub const fn report(&self) -> Option<&ReportResponse> {
        self.report.as_ref()
    }
}

fn timestamp(value: &Value) -> Option<DateTime<FixedOffset>> {
    value.as_str().and_then(|text| parse_date(text).ok())
}

impl From<Value> for CheckResponse {
    fn from(value: Value) -> Self {
        Self::new(Some(&value))
    }
}

impl From<&Value> for CheckResponse {
    fn from(value: &Value) -> Self {
        Self::new(Some(value))
    }
}

/// A check response whose kind is known from its static type
///
/// ```
/// use doc_scan_checks::models::{LivenessCheckResponse, TypedCheck};
///
/// fn describe<T: TypedCheck>(check: &T) -> String {
///     format!("{} {}", T::KIND, check.state().unwrap_or("UNKNOWN"))
/// }
///
/// let check = LivenessCheckResponse::new(None);
/// assert_eq!(describe(&check), "LIVENESS UNKNOWN");
/// ```
pub trait TypedCheck: Deref<Target = CheckResponse> + Sized {
    /// Kind this type represents
    const KIND: CheckKind;

    /// Borrow the typed response if `check` is of this kind
    fn from_session(check: &SessionCheck) -> Option<&Self>;
}

macro_rules! typed_check {
    ($(#[$meta:meta])* $name:ident, $variant:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(CheckResponse);

        impl $name {
            /// Map a raw check object, see [`CheckResponse::new`]
            #[must_use]
            pub fn new(data: Option<&Value>) -> Self {
                Self(CheckResponse::new(data))
            }

            /// Drop the kind and keep the shared response
            #[must_use]
            pub fn into_inner(self) -> CheckResponse {
                self.0
            }
        }

        impl TypedCheck for $name {
            const KIND: CheckKind = CheckKind::$variant;

            fn from_session(check: &SessionCheck) -> Option<&Self> {
                match check {
                    SessionCheck::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl Deref for $name {
            type Target = CheckResponse;

            fn deref(&self) -> &CheckResponse {
                &self.0
            }
        }

        impl AsRef<CheckResponse> for $name {
            fn as_ref(&self) -> &CheckResponse {
                &self.0
            }
        }

        impl From<CheckResponse> for $name {
            fn from(response: CheckResponse) -> Self {
                Self(response)
            }
        }

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
    };
}

typed_check!(
    /// A document authenticity check
    AuthenticityCheckResponse,
    Authenticity
);

typed_check!(
    /// A face match check
    FaceMatchCheckResponse,
    FaceMatch
);

typed_check!(
    /// A liveness check
    LivenessCheckResponse,
    Liveness
);

typed_check!(
    /// An identity document text data check
    TextDataCheckResponse,
    TextData
);

typed_check!(
    /// A comparison between identity documents
    IdDocumentComparisonCheckResponse,
    IdDocumentComparison
);

typed_check!(
    /// A supplementary document text data check
    SupplementaryDocumentTextDataCheckResponse,
    SupplementaryDocumentTextData
);

typed_check!(
    /// An identity check requested from a third party
    RequestedThirdPartyIdentityCheckResponse,
    ThirdPartyIdentity
);
