//! # dian-core: foundational types for the checkout document stack
//!
//! This crate is the leaf of the workspace. It defines the Colombian
//! checkout document primitives that every other crate builds on: the
//! recognized document types, the DIAN modulus-11 check digit, and the
//! validation policy that turns two raw form fields into a
//! [`DocumentIdentity`].
//!
//! ## Key Design Principles
//!
//! 1. **Validated construction.** A [`DocumentIdentity`] can only be
//!    obtained through [`validate`]; there is no way to hold one whose
//!    invariants do not hold.
//!
//! 2. **Single `DocumentType` enum.** One definition, exhaustive `match`
//!    everywhere. Adding a document type forces every consumer to handle
//!    it at compile time.
//!
//! 3. **Pure functions.** [`compute_check_digit`] and [`validate`] perform
//!    no I/O, hold no state, and are safe to call concurrently without
//!    synchronization. Identical input always yields identical output.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod dv;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use document::{validate, DocumentIdentity, DocumentType};
pub use dv::{compute_check_digit, MAX_NIT_DIGITS};
pub use error::ValidationError;
