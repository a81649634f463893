//! folio — static portfolio catalog loader and selector.
//!
//! Reads per-category `projects.json` files from a data directory, merges
//! them into one newest-first catalog, and answers the selection queries a
//! portfolio front end needs: the capped card-grid view, the uncapped
//! modal view, and the deduplicated superset a class-toggling filter
//! widget keys on. Rendering is the consumer's problem; this crate only
//! hands back ordered [`models::project::Project`] sequences.

pub mod boot;
pub mod catalog;
pub mod models;
