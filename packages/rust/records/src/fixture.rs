//! Fixture-backed implementation of the Record Source Port.
//!
//! Serves an embedded dataset of recorded properties, for the CLI `--demo`
//! mode and for engine integration tests. Address and owner matching is
//! deliberately fuzzy (case-insensitive bidirectional substring), matching
//! how the public-facing lookup services behave.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

use titlescout_shared::{OwnershipFact, Result, TaxRecord, TitleScoutError};

use crate::RecordSource;
use crate::wire::{DeedDocument, EncumbranceDocument, TaxStatusResponse};

/// Embedded demo dataset (two properties with full chains and encumbrances).
const DEMO_PROPERTIES: &str =
    include_str!("../../../../fixtures/records/demo-properties.json");

/// One property in the fixture dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureProperty {
    pub address: String,
    pub parcel_number: String,
    pub current_owner: String,
    pub legal_description: String,
    /// Recorded transfers, most-recent first.
    pub chain: Vec<DeedDocument>,
    /// Encumbrance instruments keyed by the canonical owner name.
    #[serde(default)]
    pub encumbrances: BTreeMap<String, Vec<EncumbranceDocument>>,
    pub tax: TaxStatusResponse,
}

/// In-memory record source over a fixed set of properties.
pub struct FixtureRecordSource {
    properties: Vec<FixtureProperty>,
}

impl FixtureRecordSource {
    /// Build a source over a custom dataset.
    pub fn new(properties: Vec<FixtureProperty>) -> Self {
        Self { properties }
    }

    /// Build a source over the embedded demo dataset.
    pub fn demo() -> Self {
        let properties: Vec<FixtureProperty> =
            serde_json::from_str(DEMO_PROPERTIES).expect("embedded demo dataset is valid JSON");
        Self::new(properties)
    }

    /// Fuzzy address match: the stored key contains the queried street
    /// segment, or the query contains the stored street segment.
    fn find_property(&self, address: &str) -> Option<&FixtureProperty> {
        let needle = address.trim().to_lowercase();
        let needle_street = street_segment(&needle);

        self.properties.iter().find(|p| {
            let key = p.address.to_lowercase();
            key.contains(&needle_street) || needle.contains(&street_segment(&key))
        })
    }

    /// Find the transfer that conveyed a property *to* the named grantee,
    /// using bidirectional substring matching on the name.
    fn find_transfer(&self, grantee_name: &str) -> Option<(&FixtureProperty, &DeedDocument)> {
        let needle = grantee_name.to_lowercase();

        self.properties.iter().find_map(|p| {
            p.chain
                .iter()
                .find(|entry| {
                    let owner = entry.grantee.to_lowercase();
                    owner.contains(&needle) || needle.contains(&owner)
                })
                .map(|entry| (p, entry))
        })
    }
}

/// The street portion of an address: everything before the first comma.
fn street_segment(address: &str) -> String {
    address.split(',').next().unwrap_or("").trim().to_string()
}

#[async_trait]
impl RecordSource for FixtureRecordSource {
    async fn lookup_ownership(&self, address: &str) -> Result<OwnershipFact> {
        let property = self.find_property(address).ok_or_else(|| {
            TitleScoutError::NotFound(format!("no property matching '{address}'"))
        })?;

        Ok(OwnershipFact {
            parcel_id: property.parcel_number.clone(),
            current_owner: property.current_owner.clone(),
            legal_description: property.legal_description.clone(),
            property_address: property.address.clone(),
        })
    }

    async fn lookup_deed_chain(&self, grantee_name: &str) -> Result<Vec<DeedDocument>> {
        let (_, entry) = self.find_transfer(grantee_name).ok_or_else(|| {
            TitleScoutError::NotFound(format!(
                "owner '{grantee_name}' not found in any property chain"
            ))
        })?;

        Ok(vec![entry.clone()])
    }

    async fn lookup_encumbrances(&self, owner_name: &str) -> Result<Vec<EncumbranceDocument>> {
        let (property, entry) = self.find_transfer(owner_name).ok_or_else(|| {
            TitleScoutError::NotFound(format!(
                "owner '{owner_name}' not found in any property chain"
            ))
        })?;

        // Instruments are keyed under the canonical name from the chain, so
        // a fuzzy query still resolves to the right records.
        Ok(property
            .encumbrances
            .get(&entry.grantee)
            .cloned()
            .unwrap_or_default())
    }

    async fn lookup_tax_status(&self, parcel_id: &str) -> Result<TaxRecord> {
        self.properties
            .iter()
            .find(|p| p.parcel_number == parcel_id)
            .map(|p| p.tax.clone().into_record())
            .ok_or_else(|| TitleScoutError::NotFound(format!("parcel '{parcel_id}' unknown")))
    }
}
