//! # chroma_data: Deterministic Portfolio Generation
//!
//! ## Layer 2 (Data Input) Role
//!
//! chroma_data produces the fixed synthetic portfolio every other layer
//! consumes. Generation is fully deterministic: a seeded linear
//! congruential generator drives all variation, so repeated runs (and any
//! implementation following the same recurrence) produce byte-identical
//! company lists.
//!
//! The generator state never leaves this crate. Callers receive a plain
//! `Vec<Company>` and treat it as immutable for the rest of the process
//! lifetime; there is no hidden module-level singleton to reach around.
//!
//! ## Usage Example
//!
//! ```rust
//! let companies = chroma_data::generate();
//!
//! assert_eq!(companies.len(), 120);
//! assert_eq!(companies[0].id.as_str(), "company-1");
//! // Deterministic: a second run is identical.
//! assert_eq!(chroma_data::generate(), companies);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod generator;
mod rng;

pub use generator::{generate, COMPANY_COUNT};
