//! # Page specs
//!
//! Page-specific extraction rules for the remote catalog. A spec encodes
//! *where the ground truth lives in the HTML* and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of one fetched document into a typed record.
//! - **Selector choice** per field (labeled spans, list containers, inline
//!   handler attributes).
//!
//! ## What does **not** live here
//! - **Networking, pacing, persistence**: that is `scrape` and `file`.
//! - **Cleaning or derived fields**: that is `analysis` / `explore`.
//!
//! ## Conventions & invariants
//! - A lookup that finds nothing yields the placeholder for that field only;
//!   extraction itself never fails.
//! - Specs are testable **offline** against captured HTML.
pub mod text_page;
