//! Raw document shapes as the record endpoints report them (camelCase JSON).
//!
//! These are the fixed record shapes crossing the port boundary; the engine
//! converts them into domain types before analysis.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use titlescout_shared::{EncumbranceRecord, EncumbranceStatus, OwnershipFact, TaxRecord, TaxStatus};

/// Envelope for recorder search results.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsResponse<T> {
    pub documents: Vec<T>,
}

/// Assessor lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessorResponse {
    pub parcel_number: String,
    pub current_owner: String,
    pub legal_description: String,
    pub property_situs: String,
}

impl AssessorResponse {
    /// Convert into the domain ownership fact.
    pub fn into_fact(self) -> OwnershipFact {
        OwnershipFact {
            parcel_id: self.parcel_number,
            current_owner: self.current_owner,
            legal_description: self.legal_description,
            property_address: self.property_situs,
        }
    }
}

/// A recorded deed from a `deed_chain` search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeedDocument {
    pub document_type: String,
    pub grantor: String,
    pub grantee: String,
    pub recording_date: NaiveDate,
    pub document_number: String,
}

/// A recorded encumbrance instrument from an `encumbrance` search.
///
/// `release_document` carries the release recording date and
/// `release_number` the release document number, matching the recorder's
/// field naming.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncumbranceDocument {
    pub document_type: String,
    pub parties: Vec<String>,
    pub recording_date: NaiveDate,
    pub document_number: String,
    pub status: EncumbranceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_number: Option<String>,
}

impl EncumbranceDocument {
    /// Convert into a domain record attributed to the owner whose name the
    /// search was run under.
    pub fn into_record(self, attributed_owner: impl Into<String>) -> EncumbranceRecord {
        EncumbranceRecord {
            kind: self.document_type,
            parties: self.parties,
            recording_date: self.recording_date,
            document_number: self.document_number,
            status: self.status,
            amount: self.amount,
            description: self.description,
            release_document_number: self.release_number,
            release_date: self.release_document,
            attributed_owner: attributed_owner.into(),
        }
    }
}

/// Tax status endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxStatusResponse {
    pub tax_status: TaxStatus,
    pub amount_owed: String,
    pub tax_liens: String,
}

impl TaxStatusResponse {
    /// Convert into the domain tax record.
    pub fn into_record(self) -> TaxRecord {
        TaxRecord {
            status: self.tax_status,
            amount_owed: self.amount_owed,
            liens: self.tax_liens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deed_document_deserializes_camel_case() {
        let json = r#"{
            "documentType": "Warranty Deed",
            "grantor": "Robert Seller",
            "grantee": "John Doe and Jane Doe",
            "recordingDate": "2023-05-15",
            "documentNumber": "2023-00456"
        }"#;

        let deed: DeedDocument = serde_json::from_str(json).expect("deserialize deed");
        assert_eq!(deed.grantee, "John Doe and Jane Doe");
        assert_eq!(deed.recording_date.to_string(), "2023-05-15");
    }

    #[test]
    fn encumbrance_release_fields_map_to_record() {
        let json = r#"{
            "documentType": "Mortgage",
            "parties": ["Robert Seller", "Community Bank"],
            "recordingDate": "2010-03-22",
            "documentNumber": "2010-00124",
            "status": "Satisfied",
            "releaseDocument": "2015-06-10",
            "releaseNumber": "2015-00345"
        }"#;

        let doc: EncumbranceDocument = serde_json::from_str(json).expect("deserialize");
        let record = doc.into_record("Robert Seller");

        assert_eq!(record.kind, "Mortgage");
        assert_eq!(record.status, EncumbranceStatus::Satisfied);
        assert_eq!(record.release_date.as_deref(), Some("2015-06-10"));
        assert_eq!(record.release_document_number.as_deref(), Some("2015-00345"));
        assert_eq!(record.attributed_owner, "Robert Seller");
    }

    #[test]
    fn tax_response_converts() {
        let json = r#"{
            "taxStatus": "Delinquent",
            "amountOwed": "3,247.50",
            "taxLiens": "Tax lien filed 2023-03-01, Document #2023-00156"
        }"#;

        let resp: TaxStatusResponse = serde_json::from_str(json).expect("deserialize");
        let record = resp.into_record();
        assert_eq!(record.status, TaxStatus::Delinquent);
        assert!(record.liens.contains("2023-00156"));
    }
}
