//! Title-resolution and risk-classification engine for TitleScout.
//!
//! This crate ties the Record Source Port into end-to-end report
//! generation:
//! - [`resolver`] — bounded backward chain-of-title walk
//! - [`aggregator`] — multi-owner encumbrance aggregation with failure isolation
//! - [`analysis`] — chain integrity analyzer (gaps, deed defects)
//! - [`classifier`] — title condition classifier
//! - [`pipeline`] — report synthesis orchestrating the above

pub mod aggregator;
pub mod analysis;
pub mod classifier;
pub mod pipeline;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testsupport;

pub use aggregator::{EncumbranceSearch, aggregate_encumbrances};
pub use analysis::analyze_chain;
pub use classifier::classify_title;
pub use pipeline::{ProgressReporter, SilentProgress, generate_report};
pub use resolver::resolve_chain;
