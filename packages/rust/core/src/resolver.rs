//! Bounded backward chain-of-title resolution.
//!
//! Starting from the current owner, repeatedly fetch the deed that conveyed
//! title *to* the cursor owner and step back to its grantor, until a
//! termination condition is hit. Every termination reason is data recorded
//! in the [`Chain`], never an error.

use chrono::Datelike;
use tracing::{debug, instrument, warn};

use titlescout_records::RecordSource;
use titlescout_shared::{
    CUTOFF_YEAR, Chain, ChainTermination, DeedLink, MAX_CHAIN_STEPS, OwnershipFact,
};

/// Outcome of a single backward step.
enum Step {
    /// Append the link and continue from its grantor.
    Advance(DeedLink),
    /// Stop the walk with the given reason.
    Stop(ChainTermination),
}

/// Walk ownership backward from the current owner, producing the chain of
/// title. Infallible: lookup failures terminate the walk with
/// [`ChainTermination::LookupFailed`] and the accumulated links are kept as
/// a valid partial chain.
#[instrument(skip_all, fields(current_owner = %fact.current_owner))]
pub async fn resolve_chain(source: &dyn RecordSource, fact: &OwnershipFact) -> Chain {
    let mut links: Vec<DeedLink> = Vec::new();
    let mut cursor = fact.current_owner.clone();

    let termination = loop {
        // Hard bound against cyclic ownership graphs in inconsistent data.
        if links.len() >= MAX_CHAIN_STEPS {
            break ChainTermination::IterationLimitReached;
        }

        match step(source, &cursor).await {
            Step::Advance(link) => {
                cursor = link.grantor.clone();
                links.push(link);
            }
            Step::Stop(reason) => break reason,
        }
    };

    debug!(
        links = links.len(),
        ?termination,
        "chain traversal finished"
    );

    Chain { links, termination }
}

/// One backward step: fetch the deed that conveyed title to `grantee` and
/// decide whether the walk extends or stops.
async fn step(source: &dyn RecordSource, grantee: &str) -> Step {
    let documents = match source.lookup_deed_chain(grantee).await {
        Ok(documents) => documents,
        Err(e) => {
            warn!(grantee, error = %e, "chain step lookup failed; keeping partial chain");
            return Step::Stop(ChainTermination::LookupFailed);
        }
    };

    let Some(deed) = documents.into_iter().next() else {
        return Step::Stop(ChainTermination::NoMoreDocuments);
    };

    if deed.recording_date.year() < CUTOFF_YEAR {
        debug!(
            year = deed.recording_date.year(),
            "deed predates cutoff; dropping out-of-window link"
        );
        return Step::Stop(ChainTermination::CutoffReached);
    }

    Step::Advance(DeedLink {
        owner: deed.grantee,
        grantor: deed.grantor,
        deed_type: deed.document_type,
        recording_date: deed.recording_date,
        document_number: deed.document_number,
    })
}
