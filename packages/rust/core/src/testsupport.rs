//! Scripted Record Source Port implementation and builders for engine tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;

use titlescout_records::{DeedDocument, EncumbranceDocument, RecordSource};
use titlescout_shared::{
    Chain, ChainTermination, DeedLink, EncumbranceRecord, EncumbranceStatus, OwnershipFact,
    Result, TaxRecord, TitleScoutError,
};

/// In-test record source with scripted responses and injectable failures.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    ownership: Option<OwnershipFact>,
    deeds: HashMap<String, Vec<DeedDocument>>,
    encumbrances: HashMap<String, Vec<EncumbranceDocument>>,
    failing_deeds: HashSet<String>,
    failing_encumbrances: HashSet<String>,
    tax: Option<TaxRecord>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ownership(mut self, fact: OwnershipFact) -> Self {
        self.ownership = Some(fact);
        self
    }

    /// Script the deed returned for a `deed_chain` search on its grantee.
    pub fn with_deed(mut self, doc: DeedDocument) -> Self {
        self.deeds.entry(doc.grantee.clone()).or_default().push(doc);
        self
    }

    pub fn with_encumbrance(mut self, owner: &str, doc: EncumbranceDocument) -> Self {
        self.encumbrances
            .entry(owner.to_string())
            .or_default()
            .push(doc);
        self
    }

    pub fn fail_deeds_for(mut self, grantee: &str) -> Self {
        self.failing_deeds.insert(grantee.to_string());
        self
    }

    pub fn fail_encumbrances_for(mut self, owner: &str) -> Self {
        self.failing_encumbrances.insert(owner.to_string());
        self
    }

    pub fn with_tax(mut self, tax: TaxRecord) -> Self {
        self.tax = Some(tax);
        self
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn lookup_ownership(&self, address: &str) -> Result<OwnershipFact> {
        self.ownership
            .clone()
            .ok_or_else(|| TitleScoutError::NotFound(format!("no property at '{address}'")))
    }

    async fn lookup_deed_chain(&self, grantee_name: &str) -> Result<Vec<DeedDocument>> {
        if self.failing_deeds.contains(grantee_name) {
            return Err(TitleScoutError::Lookup("scripted deed failure".into()));
        }
        Ok(self.deeds.get(grantee_name).cloned().unwrap_or_default())
    }

    async fn lookup_encumbrances(&self, owner_name: &str) -> Result<Vec<EncumbranceDocument>> {
        if self.failing_encumbrances.contains(owner_name) {
            return Err(TitleScoutError::Lookup(
                "scripted encumbrance failure".into(),
            ));
        }
        Ok(self
            .encumbrances
            .get(owner_name)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_tax_status(&self, parcel_id: &str) -> Result<TaxRecord> {
        self.tax
            .clone()
            .ok_or_else(|| TitleScoutError::NotFound(format!("parcel '{parcel_id}' unknown")))
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub(crate) fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

pub(crate) fn fact(current_owner: &str) -> OwnershipFact {
    OwnershipFact {
        parcel_id: "P-100".into(),
        current_owner: current_owner.into(),
        legal_description: "LOT 1, BLOCK 1, TESTVILLE".into(),
        property_address: "1 Test St, Testville".into(),
    }
}

pub(crate) fn deed(
    grantee: &str,
    grantor: &str,
    deed_type: &str,
    recording_date: &str,
    number: &str,
) -> DeedDocument {
    DeedDocument {
        document_type: deed_type.into(),
        grantor: grantor.into(),
        grantee: grantee.into(),
        recording_date: date(recording_date),
        document_number: number.into(),
    }
}

pub(crate) fn enc(kind: &str, status: EncumbranceStatus, number: &str) -> EncumbranceDocument {
    EncumbranceDocument {
        document_type: kind.into(),
        parties: vec![],
        recording_date: date("2020-01-01"),
        document_number: number.into(),
        status,
        amount: None,
        description: None,
        release_document: None,
        release_number: None,
    }
}

pub(crate) fn link(owner: &str, grantor: &str, deed_type: &str) -> DeedLink {
    DeedLink {
        owner: owner.into(),
        grantor: grantor.into(),
        deed_type: deed_type.into(),
        recording_date: date("2000-01-01"),
        document_number: "D-1".into(),
    }
}

pub(crate) fn chain_of(links: Vec<DeedLink>) -> Chain {
    Chain {
        links,
        termination: ChainTermination::NoMoreDocuments,
    }
}

pub(crate) fn record(kind: &str, status: EncumbranceStatus) -> EncumbranceRecord {
    EncumbranceRecord {
        kind: kind.into(),
        parties: vec![],
        recording_date: date("2020-01-01"),
        document_number: "E-1".into(),
        status,
        amount: None,
        description: None,
        release_document_number: None,
        release_date: None,
        attributed_owner: "X".into(),
    }
}
