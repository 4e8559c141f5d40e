//! Report rendering: console text summary and Markdown export.
//!
//! The JSON format is handled by serializing the [`Report`] directly and
//! needs no renderer here.

use std::fmt::Write;

use titlescout_shared::{Report, TaxStatus};

const DISCLAIMER: &str = "This is an informational, automated report based on a search of online \
     public records. It is NOT a substitute for a professional title examination or a policy of \
     title insurance. Data may be incomplete or inaccurate. All findings must be verified by a \
     qualified abstractor, attorney, or title company before any real estate transaction.";

fn tax_summary(report: &Report) -> String {
    match report.tax.status {
        TaxStatus::Paid => "Current".to_string(),
        TaxStatus::Delinquent => {
            format!("DELINQUENT - ${} Owed", report.tax.amount_owed)
        }
    }
}

/// Plain-text console summary.
pub(crate) fn render_text(report: &Report) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "  Preliminary Title Report");
    let _ = writeln!(out, "  Report ID:       {}", report.id);
    let _ = writeln!(out, "  Property:        {}", report.ownership.property_address);
    let _ = writeln!(out, "  Parcel:          {}", report.ownership.parcel_id);
    let _ = writeln!(out, "  Current Owner:   {}", report.ownership.current_owner);
    let _ = writeln!(out, "  Tax Status:      {}", tax_summary(report));
    let _ = writeln!(out, "  Title Condition: {}", report.condition);
    let _ = writeln!(out);

    let _ = writeln!(out, "  Chain of Title ({} transfers):", report.chain.links.len());
    for (i, link) in report.chain.links.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {}. {} from {} ({}, {})",
            i + 1,
            link.owner,
            link.grantor,
            link.deed_type,
            link.recording_date
        );
    }
    let _ = writeln!(out, "  {}", report.analysis.narrative());
    let _ = writeln!(out);

    if report.encumbrances.is_empty() {
        let _ = writeln!(out, "  No significant encumbrances found.");
    } else {
        let _ = writeln!(out, "  Encumbrances ({}):", report.encumbrances.len());
        for (i, enc) in report.encumbrances.iter().enumerate() {
            let _ = writeln!(
                out,
                "    {}. {} [{}] Document #{}, Recorded {}",
                i + 1,
                enc.kind,
                enc.status,
                enc.document_number,
                enc.recording_date
            );
        }
    }

    if !report.failed_owners.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  WARNING: encumbrance search failed for {} owner(s); records may be missing:",
            report.failed_owners.len()
        );
        for (owner, cause) in &report.failed_owners {
            let _ = writeln!(out, "    - {owner}: {cause}");
        }
    }
    let _ = writeln!(out);

    out
}

/// Markdown export: disclaimer, executive summary, vesting, chain with
/// analysis narrative, and a Schedule B listing every encumbrance.
pub(crate) fn render_markdown(report: &Report) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Preliminary Title Report");
    let _ = writeln!(md);
    let _ = writeln!(md, "**Prepared for:** Client");
    let _ = writeln!(md, "**Subject Property:** {}", report.ownership.property_address);
    let _ = writeln!(md, "**Generated on:** {}", report.generated_at.format("%B %-d, %Y"));
    let _ = writeln!(md);

    let _ = writeln!(md, "## CRITICAL DISCLAIMER");
    let _ = writeln!(md);
    let _ = writeln!(md, "{DISCLAIMER}");
    let _ = writeln!(md);

    let _ = writeln!(md, "## Executive Summary");
    let _ = writeln!(md);
    let _ = writeln!(md, "- **Current Owner:** {}", report.ownership.current_owner);
    let _ = writeln!(md, "- **Parcel ID (APN):** {}", report.ownership.parcel_id);
    let _ = writeln!(md, "- **Tax Status:** {}", tax_summary(report));
    let _ = writeln!(md, "- **Title Condition:** {}", report.condition);
    let _ = writeln!(md);

    let _ = writeln!(md, "## Property & Vesting Information");
    let _ = writeln!(md);
    let _ = writeln!(md, "- **Property Address:** {}", report.ownership.property_address);
    let _ = writeln!(md, "- **Current Vesting:** {}", report.ownership.current_owner);
    if let Some(deed) = report.chain.vesting_deed() {
        let _ = writeln!(
            md,
            "- **Vesting Deed:** {}, Document #{}, Recorded {}",
            deed.deed_type, deed.document_number, deed.recording_date
        );
    }
    let _ = writeln!(md, "- **Legal Description:** {}", report.ownership.legal_description);
    let _ = writeln!(md);

    let _ = writeln!(md, "## Chain of Title (50-Year History)");
    let _ = writeln!(md);
    for (i, link) in report.chain.links.iter().enumerate() {
        let _ = writeln!(
            md,
            "{}. **{}** from **{}** ({}, {})",
            i + 1,
            link.owner,
            link.grantor,
            link.deed_type,
            link.recording_date
        );
    }
    let _ = writeln!(md);
    let _ = writeln!(md, "**Chain Analysis:** {}", report.analysis.narrative());
    let _ = writeln!(md);

    let _ = writeln!(md, "## Schedule B: Exceptions & Encumbrances");
    let _ = writeln!(md);
    if report.encumbrances.is_empty() {
        let _ = writeln!(md, "No significant encumbrances found.");
        let _ = writeln!(md);
    } else {
        for (i, enc) in report.encumbrances.iter().enumerate() {
            let _ = writeln!(md, "{}. **{}**", i + 1, enc.kind);
            let _ = writeln!(md, "   - **Parties:** {}", enc.parties.join(" and "));
            let _ = writeln!(
                md,
                "   - **Details:** Document #{}, Recorded {}",
                enc.document_number, enc.recording_date
            );
            let _ = writeln!(md, "   - **Status:** {}", enc.status);
            if let Some(amount) = &enc.amount {
                let _ = writeln!(md, "   - **Amount:** {amount}");
            }
            if let Some(description) = &enc.description {
                let _ = writeln!(md, "   - **Description:** {description}");
            }
            let _ = writeln!(md);
        }
    }

    md
}
