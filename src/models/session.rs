//! Checks of a session
//!
//! A session result lists all of its checks in one `checks` array. Each entry
//! is dispatched on its `type` field to the matching typed response, with
//! [`SessionCheck::Other`] catching types this crate has no dedicated type
//! for.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::check::{
    AuthenticityCheckResponse, CheckResponse, FaceMatchCheckResponse,
    IdDocumentComparisonCheckResponse, LivenessCheckResponse,
    RequestedThirdPartyIdentityCheckResponse, SupplementaryDocumentTextDataCheckResponse,
    TextDataCheckResponse, TypedCheck,
};
use super::fields;
use super::kind::CheckKind;

/// A check of a session, typed by its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "Value")]
pub enum SessionCheck {
    /// `ID_DOCUMENT_AUTHENTICITY`
    Authenticity(AuthenticityCheckResponse),
    /// `ID_DOCUMENT_FACE_MATCH`
    FaceMatch(FaceMatchCheckResponse),
    /// `LIVENESS`
    Liveness(LivenessCheckResponse),
    /// `ID_DOCUMENT_TEXT_DATA_CHECK`
    TextData(TextDataCheckResponse),
    /// `ID_DOCUMENT_COMPARISON`
    IdDocumentComparison(IdDocumentComparisonCheckResponse),
    /// `SUPPLEMENTARY_DOCUMENT_TEXT_DATA_CHECK`
    SupplementaryDocumentTextData(SupplementaryDocumentTextDataCheckResponse),
    /// `THIRD_PARTY_IDENTITY`
    ThirdPartyIdentity(RequestedThirdPartyIdentityCheckResponse),
    /// Missing or unrecognised type
    Other(CheckResponse),
}

impl SessionCheck {
    /// Map a raw check object and dispatch it on its `type`
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        Self::from(CheckResponse::new(data))
    }

    /// Kind of the check, `None` for [`SessionCheck::Other`]
    #[must_use]
    pub const fn kind(&self) -> Option<CheckKind> {
        match self {
            Self::Authenticity(_) => Some(CheckKind::Authenticity),
            Self::FaceMatch(_) => Some(CheckKind::FaceMatch),
            Self::Liveness(_) => Some(CheckKind::Liveness),
            Self::TextData(_) => Some(CheckKind::TextData),
            Self::IdDocumentComparison(_) => Some(CheckKind::IdDocumentComparison),
            Self::SupplementaryDocumentTextData(_) => {
                Some(CheckKind::SupplementaryDocumentTextData)
            },
            Self::ThirdPartyIdentity(_) => Some(CheckKind::ThirdPartyIdentity),
            Self::Other(_) => None,
        }
    }

    /// The shared response, whatever the kind
    #[must_use]
    pub fn response(&self) -> &CheckResponse {
        match self {
            Self::Authenticity(check) => check,
            Self::FaceMatch(check) => check,
            Self::Liveness(check) => check,
            Self::TextData(check) => check,
            Self::IdDocumentComparison(check) => check,
            Self::SupplementaryDocumentTextData(check) => check,
            Self::ThirdPartyIdentity(check) => check,
            Self::Other(check) => check,
        }
    }

    /// Unwrap into the shared response
    #[must_use]
    pub fn into_response(self) -> CheckResponse {
        match self {
            Self::Authenticity(check) => check.into_inner(),
            Self::FaceMatch(check) => check.into_inner(),
            Self::Liveness(check) => check.into_inner(),
            Self::TextData(check) => check.into_inner(),
            Self::IdDocumentComparison(check) => check.into_inner(),
            Self::SupplementaryDocumentTextData(check) => check.into_inner(),
            Self::ThirdPartyIdentity(check) => check.into_inner(),
            Self::Other(check) => check,
        }
    }
}

impl From<CheckResponse> for SessionCheck {
    fn from(response: CheckResponse) -> Self {
        match response.kind() {
            Some(CheckKind::Authenticity) => Self::Authenticity(response.into()),
            Some(CheckKind::FaceMatch) => Self::FaceMatch(response.into()),
            Some(CheckKind::Liveness) => Self::Liveness(response.into()),
            Some(CheckKind::TextData) => Self::TextData(response.into()),
            Some(CheckKind::IdDocumentComparison) => Self::IdDocumentComparison(response.into()),
            Some(CheckKind::SupplementaryDocumentTextData) => {
                Self::SupplementaryDocumentTextData(response.into())
            },
            Some(CheckKind::ThirdPartyIdentity) => Self::ThirdPartyIdentity(response.into()),
            None => Self::Other(response),
        }
    }
}

impl From<Value> for SessionCheck {
    fn from(value: Value) -> Self {
        Self::new(Some(&value))
    }
}

impl From<&Value> for SessionCheck {
    fn from(value: &Value) -> Self {
        Self::new(Some(value))
    }
}

/// All checks of a session, in the order the service listed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct SessionChecks {
    checks: Vec<SessionCheck>,
}

impl SessionChecks {
    /// Map the checks of a session result
    ///
    /// Accepts either a session result object with a `checks` array or the
    /// bare array. Anything else yields no checks.
    #[must_use]
    pub fn new(data: Option<&Value>) -> Self {
        let items = match data {
            Some(Value::Array(items)) => items.as_slice(),
            other => fields::list(fields::as_object(other), "checks"),
        };

        items.iter().map(|raw| SessionCheck::new(Some(raw))).collect()
    }

    /// Number of checks
    #[must_use]
    pub const fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the session has no checks
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Iterate over all checks
    pub fn iter(&self) -> std::slice::Iter<'_, SessionCheck> {
        self.checks.iter()
    }

    /// Checks of the given kind
    #[must_use]
    pub fn of_kind(&self, kind: CheckKind) -> Vec<&SessionCheck> {
        self.checks.iter().filter(|check| check.kind() == Some(kind)).collect()
    }

    /// Checks of the kind represented by `T`
    #[must_use]
    pub fn typed<T: TypedCheck>(&self) -> Vec<&T> {
        self.checks.iter().filter_map(T::from_session).collect()
    }

    /// Document authenticity checks
    #[must_use]
    pub fn authenticity_checks(&self) -> Vec<&AuthenticityCheckResponse> {
        self.typed()
    }

    /// Face match checks
    #[must_use]
    pub fn face_match_checks(&self) -> Vec<&FaceMatchCheckResponse> {
        self.typed()
    }

    /// Liveness checks
    #[must_use]
    pub fn liveness_checks(&self) -> Vec<&LivenessCheckResponse> {
        self.typed()
    }

    /// Identity document text data checks
    #[must_use]
    pub fn text_data_checks(&self) -> Vec<&TextDataCheckResponse> {
        self.typed()
    }

    /// Identity document comparison checks
    #[must_use]
    pub fn id_document_comparison_checks(&self) -> Vec<&IdDocumentComparisonCheckResponse> {
        self.typed()
    }

    /// Supplementary document text data checks
    #[must_use]
    pub fn supplementary_document_text_data_checks(
        &self,
    ) -> Vec<&SupplementaryDocumentTextDataCheckResponse> {
        self.typed()
    }

    /// Third party identity checks
    #[must_use]
    pub fn third_party_identity_checks(&self) -> Vec<&RequestedThirdPartyIdentityCheckResponse> {
        self.typed()
    }
}

impl FromIterator<SessionCheck> for SessionChecks {
    fn from_iter<I: IntoIterator<Item = SessionCheck>>(iter: I) -> Self {
        Self {
            checks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SessionChecks {
    type Item = SessionCheck;
    type IntoIter = std::vec::IntoIter<SessionCheck>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.into_iter()
    }
}

impl<'a> IntoIterator for &'a SessionChecks {
    type Item = &'a SessionCheck;
    type IntoIter = std::slice::Iter<'a, SessionCheck>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

impl From<Value> for SessionChecks {
    fn from(value: Value) -> Self {
        Self::new(Some(&value))
    }
}

impl From<&Value> for SessionChecks {
    fn from(value: &Value) -> Self {
        Self::new(Some(value))
    }
}
