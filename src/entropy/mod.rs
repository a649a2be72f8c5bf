//! Randomness post-processing
//!
//! Shannon-entropy measures over outcome distributions and raw bit streams,
//! plus the Von Neumann debiasing extractor.

pub mod extractor;
pub mod shannon;

pub use extractor::von_neumann;
pub use shannon::{bit_entropy, bit_sequence_entropy, shannon_entropy};
