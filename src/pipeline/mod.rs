//! Pipeline stages: fetch, extract, detect, compare, enrich.
//!
//! Each stage is constructed from an explicit immutable [`crate::Config`] and
//! composed by plain data passing; there is no shared mutable state between
//! stages. Every operation below is a declared interface whose semantics are
//! not yet settled: all of them fail fast with
//! [`crate::TaggerError::NotImplemented`] rather than returning placeholder
//! results.

pub mod compare;
pub mod detect;
pub mod enrich;
pub mod extract;
pub mod fetch;

pub use compare::{CompareStage, FaceEmbedding};
pub use detect::{DetectStage, ObjectDetection};
pub use enrich::{EnrichStage, TagMetadata};
pub use extract::{ExtractStage, Extraction};
pub use fetch::FetchStage;
