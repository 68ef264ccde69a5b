//! seismerge Core - Fundamental types for catalog reconciliation
//!
//! This crate defines the types shared by every ingestion stage:
//! - Tagged time values (NominalTime, TrueTime)
//! - Global identifiers and per-source namespace math
//! - Spatiotemporal records used for duplicate/association matching
//! - The error taxonomy

pub mod error;
pub mod id;
pub mod record;
pub mod time;

pub use error::*;
pub use id::*;
pub use record::*;
pub use time::*;
