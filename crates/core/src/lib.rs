//! icd-core: Shared ICD-11 autocomplete types
//!
//! This crate holds the wire contract spoken with the autocomplete
//! endpoint: the `Match` record, the response envelope and the lookup
//! error taxonomy.

pub mod code;
pub mod error;
pub mod response;

pub use code::Match;
pub use error::LookupError;
pub use response::SearchResponse;
