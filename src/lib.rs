// src/lib.rs
//! Extracts people (name, location, job titles) from text copied out of
//! candidate-sourcing tools: Indeed resume search, SignalHire and LinkedIn
//! X-ray search results.

pub mod extractors;
pub mod input;
pub mod utils;

pub use extractors::{extract, PersonRecord, ProfileResult, Source};
