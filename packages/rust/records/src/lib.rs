//! Record Source Port — the core's only window onto public records.
//!
//! This crate provides:
//! - [`RecordSource`] — the port trait consumed by the engine
//! - [`HttpRecordSource`] — JSON-POST client for assessor/recorder/tax endpoints
//! - [`FixtureRecordSource`] — in-memory dataset for demos and integration tests
//! - [`wire`] — raw document shapes as the endpoints report them

pub mod fixture;
pub mod http;
pub mod wire;

use async_trait::async_trait;

use titlescout_shared::{OwnershipFact, Result, TaxRecord};

pub use fixture::FixtureRecordSource;
pub use http::HttpRecordSource;
pub use wire::{AssessorResponse, DeedDocument, EncumbranceDocument, TaxStatusResponse};

/// Capabilities of a public-records source. Each call is a single
/// request/response with no internal retry; failure containment is the
/// caller's concern.
///
/// Ownership lookup matching semantics belong to the implementation — the
/// trait does not promise exact address matching.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Current-ownership facts for a street address.
    async fn lookup_ownership(&self, address: &str) -> Result<OwnershipFact>;

    /// The recorded deed(s) that transferred ownership *to* the named
    /// grantee, most relevant first.
    async fn lookup_deed_chain(&self, grantee_name: &str) -> Result<Vec<DeedDocument>>;

    /// Encumbrance instruments recorded against the named owner.
    async fn lookup_encumbrances(&self, owner_name: &str) -> Result<Vec<EncumbranceDocument>>;

    /// Tax standing for a parcel identifier.
    async fn lookup_tax_status(&self, parcel_id: &str) -> Result<TaxRecord>;
}
