//! # Core models and IO helpers for bednorm.
//!
//! This small crate holds the pieces shared by the normalization tool and the
//! CLI: the [Region]/[RegionSet] representation of BED interval files, the
//! error types for loading them, and gzip-transparent reader utilities.

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::RegionSetError;
pub use models::{Region, RegionSet};
