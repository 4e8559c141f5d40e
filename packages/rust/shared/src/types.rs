//! Core domain types for TitleScout title reports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Oldest year the chain resolver is required to trace back to.
pub const CUTOFF_YEAR: i32 = 1970;

/// Hard bound on backward chain-walk steps, guarding against cyclic
/// ownership graphs in inconsistent source data.
pub const MAX_CHAIN_STEPS: usize = 10;

// ---------------------------------------------------------------------------
// ReportId
// ---------------------------------------------------------------------------

/// A UUID v7 wrapper for report identifiers (time-sortable).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub Uuid);

impl ReportId {
    /// Generate a new time-sortable report identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReportId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ---------------------------------------------------------------------------
// OwnershipFact
// ---------------------------------------------------------------------------

/// Current-ownership facts for a property, as reported by the assessor.
///
/// Produced once per run and immutable; root of the chain traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipFact {
    /// Assessor parcel number (APN).
    pub parcel_id: String,
    /// Current vested owner, verbatim from the source.
    pub current_owner: String,
    /// Recorded legal description.
    pub legal_description: String,
    /// Street address of the property.
    pub property_address: String,
}

// ---------------------------------------------------------------------------
// Chain of title
// ---------------------------------------------------------------------------

/// One resolved ownership transfer: the deed that conveyed the property
/// *to* `owner` *from* `grantor`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeedLink {
    /// Grantee of the transfer.
    pub owner: String,
    /// Grantor of the transfer.
    pub grantor: String,
    /// Deed instrument type (e.g., "Warranty Deed", "Quitclaim Deed").
    pub deed_type: String,
    /// Recording date of the deed.
    pub recording_date: NaiveDate,
    /// Recorder's document number.
    pub document_number: String,
}

/// Why the backward chain walk stopped. All four are normal outcomes,
/// recorded in the [`Chain`] — never surfaced as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainTermination {
    /// The next-older deed predates [`CUTOFF_YEAR`]; the walk reached a
    /// clean historical bound.
    CutoffReached,
    /// The source returned no deed transferring to the cursor owner.
    NoMoreDocuments,
    /// A chain-step lookup failed; the accumulated links are a valid
    /// partial chain.
    LookupFailed,
    /// The walk hit [`MAX_CHAIN_STEPS`] without any other terminator.
    IterationLimitReached,
}

/// The resolved chain of title, most-recent transfer first.
///
/// Immutable once traversal ends. Invariant (checked by the integrity
/// analyzer, not enforced here): `links[i].grantor == links[i + 1].owner`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chain {
    /// Ordered transfers, most-recent first.
    pub links: Vec<DeedLink>,
    /// Why traversal stopped.
    pub termination: ChainTermination,
}

impl Chain {
    /// The deed under which the current owner holds title, if any was found.
    pub fn vesting_deed(&self) -> Option<&DeedLink> {
        self.links.first()
    }
}

// ---------------------------------------------------------------------------
// Encumbrances
// ---------------------------------------------------------------------------

/// Recorder-reported status of an encumbrance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncumbranceStatus {
    /// No release document found; the claim may still attach.
    #[serde(rename = "Potentially Open")]
    PotentiallyOpen,
    /// A release document was recorded.
    Satisfied,
    /// A standing claim that does not cloud title (e.g., an easement).
    Active,
    /// Any status string the source reports that we do not recognize.
    #[serde(other)]
    Other,
}

impl std::fmt::Display for EncumbranceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::PotentiallyOpen => "Potentially Open",
            Self::Satisfied => "Satisfied",
            Self::Active => "Active",
            Self::Other => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// One recorded claim against the property, attributed to the owner whose
/// name the search was run under.
///
/// Collected as an unordered multiset; the same instrument surfacing under
/// two owners is retained twice, once per attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncumbranceRecord {
    /// Instrument type (e.g., "Mortgage", "Federal Tax Lien").
    pub kind: String,
    /// Parties named on the instrument.
    pub parties: Vec<String>,
    /// Recording date.
    pub recording_date: NaiveDate,
    /// Recorder's document number.
    pub document_number: String,
    /// Reported status.
    pub status: EncumbranceStatus,
    /// Dollar amount, verbatim from the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Free-text description (easements and the like).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document number of the recorded release, if satisfied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_document_number: Option<String>,
    /// Recording date of the release, if satisfied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// The owner name this record was found under.
    pub attributed_owner: String,
}

// ---------------------------------------------------------------------------
// Tax status
// ---------------------------------------------------------------------------

/// Property tax payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxStatus {
    Paid,
    Delinquent,
}

/// Tax standing for a parcel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRecord {
    /// Paid or delinquent.
    pub status: TaxStatus,
    /// Amount owed, verbatim from the source.
    pub amount_owed: String,
    /// Tax lien filings, verbatim from the source ("None" when clear).
    pub liens: String,
}

// ---------------------------------------------------------------------------
// Analysis results
// ---------------------------------------------------------------------------

/// Severity tier assigned by the title condition classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleCondition {
    /// No encumbrances of record.
    Clear,
    /// Only satisfied or standing (non-open) items of record.
    ExceptionsFound,
    /// At least one potentially open mortgage or lien.
    SignificantCloudsDetected,
}

impl std::fmt::Display for TitleCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Clear => "Appears Clear",
            Self::ExceptionsFound => "Exceptions Found",
            Self::SignificantCloudsDetected => {
                "Significant Clouds Detected - Professional Review Required"
            }
        };
        write!(f, "{label}")
    }
}

/// Structural findings from the chain integrity analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainAnalysis {
    /// Ownership gaps, in chain order.
    pub gaps: Vec<String>,
    /// Deed-quality defects, in chain order.
    pub defects: Vec<String>,
    /// True when no gaps and no defects were found.
    pub is_complete: bool,
}

impl ChainAnalysis {
    /// Human-readable summary of the analysis.
    pub fn narrative(&self) -> String {
        if self.is_complete {
            format!("Chain appears complete and unbroken back to {CUTOFF_YEAR}.")
        } else {
            let issues: Vec<&str> = self
                .gaps
                .iter()
                .chain(self.defects.iter())
                .map(String::as_str)
                .collect();
            format!(
                "WARNING: Issues detected in chain of title. {}",
                issues.join("; ")
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The finished preliminary title report — the single immutable output of a
/// report-generation run, owned by the consumer once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier.
    pub id: ReportId,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Assessor ownership facts.
    pub ownership: OwnershipFact,
    /// Resolved chain of title.
    pub chain: Chain,
    /// Aggregated encumbrances across all chain owners.
    pub encumbrances: Vec<EncumbranceRecord>,
    /// Owners whose encumbrance search failed (owner, cause).
    pub failed_owners: Vec<(String, String)>,
    /// Parcel tax standing.
    pub tax: TaxRecord,
    /// Classified title condition.
    pub condition: TitleCondition,
    /// Chain integrity findings.
    pub analysis: ChainAnalysis,
}
