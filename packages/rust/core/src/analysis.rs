//! Chain integrity analysis: ownership gaps and deed-quality defects.
//!
//! Pure functions over the resolved chain, no I/O. All name comparisons are
//! raw string matches — identity resolution is out of scope, and the
//! heuristics are kept as named predicates so their nature stays visible.

use tracing::debug;

use titlescout_shared::{Chain, ChainAnalysis, DeedLink};

/// Quitclaim deeds convey no warranty of title.
fn is_quitclaim(link: &DeedLink) -> bool {
    link.deed_type == "Quitclaim Deed"
}

/// Probate/estate transfers conventionally use quitclaim-style instruments,
/// so they are exempt from the quitclaim defect. Substring heuristic on the
/// raw party names.
fn is_estate_transfer(link: &DeedLink) -> bool {
    link.owner.contains("Estate") || link.grantor.contains("Estate")
}

/// Inspect the chain for structural gaps and suspicious transfer patterns.
///
/// An unbroken chain requires every grantor to match the grantee of the
/// next-older transfer; mismatches indicate missing recorded transfers.
pub fn analyze_chain(chain: &Chain) -> ChainAnalysis {
    let mut gaps = Vec::new();
    let mut defects = Vec::new();

    for pair in chain.links.windows(2) {
        let (newer, older) = (&pair[0], &pair[1]);
        if newer.grantor != older.owner {
            gaps.push(format!(
                "Gap detected: grantor '{}' does not match next recorded owner '{}'",
                newer.grantor, older.owner
            ));
        }
    }

    for link in &chain.links {
        if is_quitclaim(link) && !is_estate_transfer(link) {
            defects.push(format!(
                "Quitclaim deed used in non-estate transfer: {} to {}",
                link.grantor, link.owner
            ));
        }
    }

    let is_complete = gaps.is_empty() && defects.is_empty();
    debug!(
        gaps = gaps.len(),
        defects = defects.len(),
        is_complete,
        "chain integrity analysis finished"
    );

    ChainAnalysis {
        gaps,
        defects,
        is_complete,
    }
}
