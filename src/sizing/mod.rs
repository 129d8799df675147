//! Size and resolution adaptation
//!
//! Vendors accept only discrete, enumerated output sizes, and each model
//! within a vendor may restrict the set further. This module reconciles a
//! caller's requested pixel dimensions against those catalogs:
//!
//! - [`SizeCatalog`] holds the per-provider, per-model ground-truth tables
//!   (use [`builtin_catalog`] for the shared instance, or build a synthetic
//!   catalog for tests).
//! - [`match_size`]/[`adapt_size`] select the supported size whose aspect
//!   ratio is closest to the request.
//! - [`VideoSize`]'s `Display`/`FromStr` pair is the canonical `"W*H"` wire
//!   form.
//!
//! Everything here is pure computation over immutable data — no I/O, no
//! locking, safe to call concurrently.

pub mod catalog;
pub mod matcher;
pub mod size;

pub use catalog::{builtin_catalog, SizeCatalog};
pub use matcher::{adapt_size, closest_by_ratio, match_size, SizeMatch};
pub use size::{AspectRatio, Resolution, VideoSize};
