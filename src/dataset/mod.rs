//! Dataset module - FASTA input and the sequence suppliers built on it.

mod catalog;
mod fasta;
mod supplier;

pub use catalog::*;
pub use fasta::*;
pub use supplier::*;
