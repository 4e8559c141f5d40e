//! Shared types, error model, and configuration for TitleScout.
//!
//! This crate is the foundation depended on by all other TitleScout crates.
//! It provides:
//! - [`TitleScoutError`] — the unified error type
//! - Domain types ([`Report`], [`Chain`], [`EncumbranceRecord`], [`ReportId`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, SourceConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{Result, TitleScoutError};
pub use types::{
    CUTOFF_YEAR, Chain, ChainAnalysis, ChainTermination, DeedLink, EncumbranceRecord,
    EncumbranceStatus, MAX_CHAIN_STEPS, OwnershipFact, Report, ReportId, TaxRecord, TaxStatus,
    TitleCondition,
};
