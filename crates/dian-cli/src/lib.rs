//! # dian-cli: CLI tool for the checkout document stack
//!
//! Provides the `dian` command-line interface over the document
//! primitives, for operators wiring up a storefront and for support staff
//! checking a customer-supplied identifier.
//!
//! ## Subcommands
//!
//! - `dian dv` computes the DIAN check digit for a NIT base number.
//! - `dian validate` runs the full checkout validation for one document
//!   pair.
//! - `dian fields` exports the checkout field configuration as JSON.
//!
//! ```bash
//! dian dv 890903938
//! dian validate --doc-type NIT 90037311
//! dian fields --pretty
//! ```

pub mod dv;
pub mod fields;
pub mod validate;
