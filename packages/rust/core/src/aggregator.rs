//! Multi-owner encumbrance aggregation with per-owner failure isolation.
//!
//! One `encumbrance` search per owner in the resolved chain, issued
//! concurrently but merged in owner order so the output is deterministic
//! regardless of completion order. A single owner's failure never aborts
//! the aggregate or drops other owners' records.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use titlescout_records::RecordSource;
use titlescout_shared::{Chain, EncumbranceRecord, OwnershipFact};

/// Merged result of the encumbrance searches across all chain owners.
#[derive(Debug, Clone, Default)]
pub struct EncumbranceSearch {
    /// All records found, stamped with the owner they were found under.
    pub records: Vec<EncumbranceRecord>,
    /// Owners whose search failed (owner, cause). Informational only.
    pub failed_owners: Vec<(String, String)>,
}

/// Search encumbrances for the current owner and every owner in the chain.
#[instrument(skip_all, fields(current_owner = %fact.current_owner))]
pub async fn aggregate_encumbrances(
    source: &Arc<dyn RecordSource>,
    fact: &OwnershipFact,
    chain: &Chain,
) -> EncumbranceSearch {
    let owners = owner_set(fact, chain);
    debug!(owners = owners.len(), "starting encumbrance searches");

    // One task per owner; handles are awaited in owner order, which keeps
    // the merge deterministic no matter when each search completes.
    let mut handles = Vec::with_capacity(owners.len());
    for owner in owners {
        let source = Arc::clone(source);
        handles.push((
            owner.clone(),
            tokio::spawn(async move { source.lookup_encumbrances(&owner).await }),
        ));
    }

    let mut search = EncumbranceSearch::default();
    for (owner, handle) in handles {
        match handle.await {
            Ok(Ok(documents)) => {
                search.records.extend(
                    documents
                        .into_iter()
                        .map(|doc| doc.into_record(owner.clone())),
                );
            }
            Ok(Err(e)) => {
                warn!(owner = %owner, error = %e, "encumbrance search failed; continuing");
                search.failed_owners.push((owner, e.to_string()));
            }
            Err(e) => {
                warn!(owner = %owner, error = %e, "encumbrance search task failed; continuing");
                search.failed_owners.push((owner, e.to_string()));
            }
        }
    }

    debug!(
        records = search.records.len(),
        failed = search.failed_owners.len(),
        "encumbrance aggregation finished"
    );

    search
}

/// Owner query order: current owner first, then chain owners in chain
/// order, first occurrence wins.
fn owner_set(fact: &OwnershipFact, chain: &Chain) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut owners = Vec::new();

    for owner in std::iter::once(fact.current_owner.as_str())
        .chain(chain.links.iter().map(|link| link.owner.as_str()))
    {
        if seen.insert(owner) {
            owners.push(owner.to_string());
        }
    }

    owners
}
