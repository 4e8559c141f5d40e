//! HTTP implementation of the Record Source Port.
//!
//! Talks JSON-POST to three endpoints: `/api/assessor-lookup`,
//! `/api/recorder-search`, and `/api/tax-status`. Each call is one
//! request/response; retry and failure containment live in the engine.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use titlescout_shared::{OwnershipFact, Result, TaxRecord, TitleScoutError};

use crate::RecordSource;
use crate::wire::{
    AssessorResponse, DeedDocument, DocumentsResponse, EncumbranceDocument, TaxStatusResponse,
};

/// User-Agent string for record source requests.
const USER_AGENT: &str = concat!("TitleScout/", env!("CARGO_PKG_VERSION"));

const ASSESSOR_PATH: &str = "/api/assessor-lookup";
const RECORDER_PATH: &str = "/api/recorder-search";
const TAX_PATH: &str = "/api/tax-status";

/// Error body shape the endpoints use for 4xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// JSON-POST client for the assessor/recorder/tax record endpoints.
pub struct HttpRecordSource {
    client: Client,
    base_url: Url,
}

impl HttpRecordSource {
    /// Create a source against `base_url` with a per-call timeout.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TitleScoutError::Lookup(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// POST `body` to `path` and decode the JSON response.
    ///
    /// Status mapping: 404 → `NotFound`, 400 → `RequestInvalid`, any other
    /// non-success or transport error (including timeout) → `Lookup`.
    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        context: &str,
    ) -> Result<T> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| TitleScoutError::Lookup(format!("{context}: bad endpoint URL: {e}")))?;

        debug!(%url, context, "record source request");

        let response = self
            .client
            .post(url.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TitleScoutError::Lookup(format!("{context}: request timed out"))
                } else {
                    TitleScoutError::Lookup(format!("{context}: {e}"))
                }
            })?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map(|b| b.error)
                    .unwrap_or_else(|_| "no matching record".into());
                Err(TitleScoutError::NotFound(format!("{context}: {detail}")))
            }
            StatusCode::BAD_REQUEST => {
                let detail = response
                    .json::<ErrorBody>()
                    .await
                    .map(|b| b.error)
                    .unwrap_or_else(|_| "malformed query".into());
                Err(TitleScoutError::request_invalid(format!(
                    "{context}: {detail}"
                )))
            }
            s if !s.is_success() => Err(TitleScoutError::Lookup(format!(
                "{context}: HTTP {status}"
            ))),
            _ => response
                .json::<T>()
                .await
                .map_err(|e| TitleScoutError::parse(format!("{context}: {e}"))),
        }
    }

    async fn recorder_search<T: DeserializeOwned>(
        &self,
        name: &str,
        search_type: &str,
    ) -> Result<Vec<T>> {
        let body = serde_json::json!({
            "granteeName": name,
            "searchType": search_type,
        });
        let response: DocumentsResponse<T> = self
            .post_json(RECORDER_PATH, body, &format!("recorder search for '{name}'"))
            .await?;
        Ok(response.documents)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn lookup_ownership(&self, address: &str) -> Result<OwnershipFact> {
        let body = serde_json::json!({ "address": address });
        let response: AssessorResponse = self
            .post_json(
                ASSESSOR_PATH,
                body,
                &format!("assessor lookup for '{address}'"),
            )
            .await?;
        Ok(response.into_fact())
    }

    async fn lookup_deed_chain(&self, grantee_name: &str) -> Result<Vec<DeedDocument>> {
        self.recorder_search(grantee_name, "deed_chain").await
    }

    async fn lookup_encumbrances(&self, owner_name: &str) -> Result<Vec<EncumbranceDocument>> {
        self.recorder_search(owner_name, "encumbrance").await
    }

    async fn lookup_tax_status(&self, parcel_id: &str) -> Result<TaxRecord> {
        let body = serde_json::json!({ "parcelNumber": parcel_id });
        let response: TaxStatusResponse = self
            .post_json(TAX_PATH, body, &format!("tax status for '{parcel_id}'"))
            .await?;
        Ok(response.into_record())
    }
}
