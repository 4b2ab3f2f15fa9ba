//! Phishwatch: lookalike-domain similarity scanner
//!
//! Flags candidate domains that may be impersonating a whitelist of trusted
//! domains. A cheap lexical gate (normalized edit distance over the domain
//! names) decides which (parent, child) pairs are worth live evidence; gated
//! pairs are scored on three independent signals:
//! - page-content similarity (TF-IDF cosine over the two page bodies)
//! - favicon visual similarity (per-pixel MSE over the two icons)
//! - page-title similarity (edit-distance ratio)
//!
//! The composite score is the unweighted mean of the three, so missing
//! evidence lowers confidence instead of being excluded.

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod similarity;
pub mod types;
pub mod whitelist;

pub use config::Config;
pub use engine::ScanEngine;
pub use types::{Domain, ResultMapping, SimilarityReport};
