//! Title condition classification over the aggregated encumbrance multiset.
//!
//! Pure function, no I/O. One potentially open lien anywhere in the history
//! dominates the classification regardless of how many satisfied or
//! standing items exist alongside it.

use tracing::debug;

use titlescout_shared::{EncumbranceRecord, EncumbranceStatus, TitleCondition};

/// Mortgage instruments are matched by exact type name.
fn is_mortgage(kind: &str) -> bool {
    kind == "Mortgage"
}

/// Tax liens come in several flavors ("Federal Tax Lien", "State Tax Lien");
/// substring heuristic on the instrument type.
fn is_tax_lien(kind: &str) -> bool {
    kind.contains("Tax Lien")
}

/// Reduce the encumbrance multiset to a severity tier.
pub fn classify_title(encumbrances: &[EncumbranceRecord]) -> TitleCondition {
    let open: Vec<&EncumbranceRecord> = encumbrances
        .iter()
        .filter(|e| e.status == EncumbranceStatus::PotentiallyOpen)
        .collect();

    let open_mortgages = open.iter().filter(|e| is_mortgage(&e.kind)).count();
    let open_tax_liens = open.iter().filter(|e| is_tax_lien(&e.kind)).count();
    let other_open_liens = open
        .iter()
        .filter(|e| !is_mortgage(&e.kind) && !is_tax_lien(&e.kind))
        .count();

    debug!(
        open_mortgages,
        open_tax_liens,
        other_open_liens,
        total = encumbrances.len(),
        "classifying title condition"
    );

    if open_mortgages > 0 || open_tax_liens > 0 || other_open_liens > 0 {
        TitleCondition::SignificantCloudsDetected
    } else if !encumbrances.is_empty() {
        TitleCondition::ExceptionsFound
    } else {
        TitleCondition::Clear
    }
}
