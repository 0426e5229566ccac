//! Response models for document-scan checks
//!
//! - [`CheckResponse`] - attributes shared by every check
//! - Typed checks ([`AuthenticityCheckResponse`], [`LivenessCheckResponse`], ...) - one per [`CheckKind`]
//! - [`ReportResponse`] - recommendation and breakdown attached to a check
//! - [`GeneratedMedia`] - media produced by a check
//! - [`SessionChecks`] - every check of a session, dispatched by kind

mod check;
mod fields;
mod kind;
mod media;
mod report;
mod session;

pub use check::{
    AuthenticityCheckResponse, CheckResponse, FaceMatchCheckResponse,
    IdDocumentComparisonCheckResponse, LivenessCheckResponse,
    RequestedThirdPartyIdentityCheckResponse, SupplementaryDocumentTextDataCheckResponse,
    TextDataCheckResponse, TypedCheck,
};
pub use kind::CheckKind;
pub use media::GeneratedMedia;
pub use report::{BreakdownResponse, DetailsResponse, RecommendationResponse, ReportResponse};
pub use session::{SessionCheck, SessionChecks};
