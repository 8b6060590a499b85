//! # Chromosome-name normalization for BED files.
//!
//! BED files collected from different sources name chromosomes
//! inconsistently: bare numbers (`1`), `MT` for the mitochondrion, bare `X`
//! and `Y`, or versioned contig accessions like `GL000219.1`. This crate
//! rewrites the first column of every BED file in a directory so the names
//! match the sequence identifiers of a reference FASTA, writing one
//! `<name>.modified.<ext>` file per input.
//!
//! The pieces:
//! - [catalog] extracts the canonical sequence names from the FASTA.
//! - [normalize] maps one raw chromosome token to its canonical form.
//! - [batch] fans one task per BED file out over a rayon worker pool,
//!   isolating per-file failures and aggregating a run summary.

pub mod batch;
pub mod catalog;
pub mod consts;
pub mod normalize;

// Re-exports
pub use batch::*;
pub use catalog::*;
pub use normalize::*;
