//! End-to-end report pipeline: address → ownership → chain → encumbrances
//! → tax → analysis → report.
//!
//! Only the initial ownership lookup and the tax lookup are terminal
//! failures — without current-owner and tax identity no meaningful report
//! can exist. Chain-step and per-owner encumbrance failures degrade
//! gracefully in their respective components.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, instrument};

use titlescout_records::RecordSource;
use titlescout_shared::{Report, ReportId, Result};

use crate::{aggregator, analysis, classifier, resolver};

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, report: &Report);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _report: &Report) {}
}

/// Run a full title search for `address` and assemble the report.
#[instrument(skip_all, fields(address = %address))]
pub async fn generate_report(
    source: Arc<dyn RecordSource>,
    address: &str,
    progress: &dyn ProgressReporter,
) -> Result<Report> {
    let start = Instant::now();

    progress.phase("Looking up current ownership");
    let ownership = source.lookup_ownership(address).await?;
    info!(
        parcel = %ownership.parcel_id,
        owner = %ownership.current_owner,
        "assessor lookup complete"
    );

    progress.phase("Resolving chain of title");
    let chain = resolver::resolve_chain(source.as_ref(), &ownership).await;

    progress.phase("Searching encumbrances");
    let search = aggregator::aggregate_encumbrances(&source, &ownership, &chain).await;

    progress.phase("Checking tax status");
    let tax = source.lookup_tax_status(&ownership.parcel_id).await?;

    progress.phase("Analyzing findings");
    let analysis = analysis::analyze_chain(&chain);
    let condition = classifier::classify_title(&search.records);

    let report = Report {
        id: ReportId::new(),
        generated_at: Utc::now(),
        ownership,
        chain,
        encumbrances: search.records,
        failed_owners: search.failed_owners,
        tax,
        condition,
        analysis,
    };

    info!(
        report_id = %report.id,
        links = report.chain.links.len(),
        termination = ?report.chain.termination,
        encumbrances = report.encumbrances.len(),
        failed_owners = report.failed_owners.len(),
        condition = %report.condition,
        elapsed_ms = start.elapsed().as_millis(),
        "report assembled"
    );

    progress.done(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::{ScriptedSource, deed, fact};
    use titlescout_records::{FixtureRecordSource, HttpRecordSource};
    use titlescout_shared::{
        ChainTermination, TaxRecord, TaxStatus, TitleCondition, TitleScoutError,
    };

    #[tokio::test]
    async fn demo_property_with_open_liens() {
        let source: Arc<dyn RecordSource> = Arc::new(FixtureRecordSource::demo());

        let report = generate_report(source, "123 Main St, Anytown, USA", &SilentProgress)
            .await
            .unwrap();

        // Four in-window transfers; the 1965 deed terminates the walk.
        assert_eq!(report.chain.links.len(), 4);
        assert_eq!(report.chain.termination, ChainTermination::CutoffReached);

        // Four records across three owners; the open mortgage and the open
        // tax lien drive the classification.
        assert_eq!(report.encumbrances.len(), 4);
        assert_eq!(report.condition, TitleCondition::SignificantCloudsDetected);
        assert!(report.failed_owners.is_empty());

        // The 1978 quitclaim into an LLC is a defect; no gaps.
        assert!(report.analysis.gaps.is_empty());
        assert_eq!(report.analysis.defects.len(), 1);
        assert!(!report.analysis.is_complete);

        assert_eq!(report.tax.status, TaxStatus::Paid);
    }

    #[tokio::test]
    async fn demo_property_with_estate_history() {
        let source: Arc<dyn RecordSource> = Arc::new(FixtureRecordSource::demo());

        let report = generate_report(source, "456 Oak Avenue, Springfield, IL", &SilentProgress)
            .await
            .unwrap();

        // The oldest grantor ("Estate of Robert Davis") never appears as a
        // grantee, so the next step's search fails and the partial chain
        // is kept.
        assert_eq!(report.chain.links.len(), 4);
        assert_eq!(report.chain.termination, ChainTermination::LookupFailed);

        // Unbroken and defect-free despite the incomplete walk.
        assert!(report.analysis.is_complete);

        assert_eq!(report.encumbrances.len(), 4);
        assert_eq!(report.condition, TitleCondition::SignificantCloudsDetected);
        assert_eq!(report.tax.status, TaxStatus::Delinquent);
        assert!(report.tax.liens.contains("2023-00156"));
    }

    #[tokio::test]
    async fn every_attribution_is_a_known_owner() {
        let source: Arc<dyn RecordSource> = Arc::new(FixtureRecordSource::demo());

        let report = generate_report(source, "123 Main St", &SilentProgress)
            .await
            .unwrap();

        for record in &report.encumbrances {
            let known = record.attributed_owner == report.ownership.current_owner
                || report
                    .chain
                    .links
                    .iter()
                    .any(|l| l.owner == record.attributed_owner);
            assert!(known, "unknown attribution: {}", record.attributed_owner);
        }
    }

    #[tokio::test]
    async fn unknown_address_is_terminal() {
        let source: Arc<dyn RecordSource> = Arc::new(FixtureRecordSource::demo());

        let err = generate_report(source, "999 Nowhere Blvd", &SilentProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, TitleScoutError::NotFound(_)));
    }

    #[tokio::test]
    async fn tax_failure_is_terminal() {
        // Ownership resolves but the parcel is unknown to the tax source.
        let source: Arc<dyn RecordSource> = Arc::new(
            ScriptedSource::new()
                .with_ownership(fact("B"))
                .with_deed(deed("B", "A", "Warranty Deed", "2015-03-01", "2015-01")),
        );

        let err = generate_report(source, "1 Test St", &SilentProgress)
            .await
            .unwrap_err();

        assert!(matches!(err, TitleScoutError::NotFound(_)));
    }

    #[tokio::test]
    async fn clear_title_with_no_records_anywhere() {
        let source: Arc<dyn RecordSource> = Arc::new(
            ScriptedSource::new()
                .with_ownership(fact("B"))
                .with_deed(deed("B", "A", "Warranty Deed", "2015-03-01", "2015-01"))
                .with_deed(deed("A", "Z", "Warranty Deed", "1990-01-01", "1990-01"))
                .with_tax(TaxRecord {
                    status: TaxStatus::Paid,
                    amount_owed: "0.00".into(),
                    liens: "None".into(),
                }),
        );

        let report = generate_report(source, "1 Test St", &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.condition, TitleCondition::Clear);
        assert!(report.analysis.is_complete);
        assert_eq!(report.chain.termination, ChainTermination::NoMoreDocuments);
    }

    #[tokio::test]
    async fn end_to_end_over_http() {
        use wiremock::matchers::{body_partial_json, method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/assessor-lookup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "parcelNumber": "P-1",
                "currentOwner": "Ada Holder",
                "legalDescription": "LOT 9",
                "propertySitus": "9 Wire St"
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/recorder-search"))
            .and(body_partial_json(serde_json::json!({
                "granteeName": "Ada Holder",
                "searchType": "deed_chain"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "documents": [{
                    "documentType": "Warranty Deed",
                    "grantor": "Prior Owner",
                    "grantee": "Ada Holder",
                    "recordingDate": "2019-04-01",
                    "documentNumber": "2019-0001"
                }]
            })))
            .mount(&server)
            .await;

        // No older deed on record.
        Mock::given(method("POST"))
            .and(path("/api/recorder-search"))
            .and(body_partial_json(serde_json::json!({
                "granteeName": "Prior Owner",
                "searchType": "deed_chain"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "documents": []
            })))
            .mount(&server)
            .await;

        for owner in ["Ada Holder", "Prior Owner"] {
            Mock::given(method("POST"))
                .and(path("/api/recorder-search"))
                .and(body_partial_json(serde_json::json!({
                    "granteeName": owner,
                    "searchType": "encumbrance"
                })))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "documents": []
                })))
                .mount(&server)
                .await;
        }

        Mock::given(method("POST"))
            .and(path("/api/tax-status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "taxStatus": "Paid",
                "amountOwed": "0.00",
                "taxLiens": "None"
            })))
            .mount(&server)
            .await;

        let base = url::Url::parse(&server.uri()).unwrap();
        let source: Arc<dyn RecordSource> = Arc::new(
            HttpRecordSource::new(base, std::time::Duration::from_secs(5)).unwrap(),
        );

        let report = generate_report(source, "9 Wire St", &SilentProgress)
            .await
            .unwrap();

        assert_eq!(report.ownership.current_owner, "Ada Holder");
        assert_eq!(report.chain.links.len(), 1);
        assert_eq!(report.chain.termination, ChainTermination::NoMoreDocuments);
        assert_eq!(report.condition, TitleCondition::Clear);
    }
}
