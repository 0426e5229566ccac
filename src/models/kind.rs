//! Check kinds
//!
//! The service reports the category of each check in its `type` field.
//! [`CheckKind`] names the categories this crate gives a dedicated type.

use serde::{Deserialize, Serialize};

/// Category of a check, as reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    /// Document authenticity
    #[serde(rename = "ID_DOCUMENT_AUTHENTICITY")]
    Authenticity,
    /// Face on the document matches the user's face
    #[serde(rename = "ID_DOCUMENT_FACE_MATCH")]
    FaceMatch,
    /// The user was physically present
    #[serde(rename = "LIVENESS")]
    Liveness,
    /// Text data extracted from an identity document
    #[serde(rename = "ID_DOCUMENT_TEXT_DATA_CHECK")]
    TextData,
    /// Comparison between two identity documents
    #[serde(rename = "ID_DOCUMENT_COMPARISON")]
    IdDocumentComparison,
    /// Text data extracted from a supplementary document
    #[serde(rename = "SUPPLEMENTARY_DOCUMENT_TEXT_DATA_CHECK")]
    SupplementaryDocumentTextData,
    /// Identity check performed by a third party
    #[serde(rename = "THIRD_PARTY_IDENTITY")]
    ThirdPartyIdentity,
}

impl CheckKind {
    /// Every known kind
    pub const ALL: [Self; 7] = [
        Self::Authenticity,
        Self::FaceMatch,
        Self::Liveness,
        Self::TextData,
        Self::IdDocumentComparison,
        Self::SupplementaryDocumentTextData,
        Self::ThirdPartyIdentity,
    ];

    /// The `type` string the service uses for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Authenticity => "ID_DOCUMENT_AUTHENTICITY",
            Self::FaceMatch => "ID_DOCUMENT_FACE_MATCH",
            Self::Liveness => "LIVENESS",
            Self::TextData => "ID_DOCUMENT_TEXT_DATA_CHECK",
            Self::IdDocumentComparison => "ID_DOCUMENT_COMPARISON",
            Self::SupplementaryDocumentTextData => "SUPPLEMENTARY_DOCUMENT_TEXT_DATA_CHECK",
            Self::ThirdPartyIdentity => "THIRD_PARTY_IDENTITY",
        }
    }

    /// Match a `type` string exactly as the service sends it
    #[must_use]
    pub fn from_type(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase().replace('-', "_");
        if let Some(kind) = Self::from_type(&normalized) {
            return Ok(kind);
        }

        match normalized.as_str() {
            "AUTHENTICITY" => Ok(Self::Authenticity),
            "FACE_MATCH" | "FACEMATCH" => Ok(Self::FaceMatch),
            "TEXT_DATA" => Ok(Self::TextData),
            "COMPARISON" | "DOCUMENT_COMPARISON" => Ok(Self::IdDocumentComparison),
            "SUPPLEMENTARY_TEXT_DATA" | "SUPPLEMENTARY_DOCUMENT_TEXT_DATA" => {
                Ok(Self::SupplementaryDocumentTextData)
            },
            "THIRD_PARTY" => Ok(Self::ThirdPartyIdentity),
            _ => Err(format!(
                "Invalid check kind: {s}. Use: authenticity, face-match, liveness, text-data, \
                 comparison, supplementary-text-data, third-party"
            )),
        }
    }
}
