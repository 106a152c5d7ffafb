//! # dian-checkout: storefront-side document policy
//!
//! Bridges the document primitives in `dian-core` to a checkout-owning
//! host. The host renders fields, collects raw form values, and persists
//! order metadata; this crate owns everything in between:
//!
//! ```text
//! dian-core (primitives)  -->  dian-checkout (policy)  -->  host storefront
//!   DocumentType                 document_fields()           renders fields
//!   validate()                   process()                   persists MetaEntry
//!                                Bootstrap                   runs setup once
//! ```
//!
//! - [`fields`]: typed configuration records for the two checkout fields,
//!   replacing open-ended field maps. Every recognized field, option, and
//!   constraint is enumerated at compile time.
//! - [`meta`]: structured order metadata keys (group plus field), so field
//!   identity is never assembled from runtime strings.
//! - [`submission`]: validation of one submission's billing and shipping
//!   document pairs into the metadata entries the host persists.
//! - [`bootstrap`]: the one-time initialization guard for the host's
//!   startup sequence.

pub mod bootstrap;
pub mod fields;
pub mod meta;
pub mod submission;

pub use bootstrap::{Bootstrap, BootstrapError};
pub use fields::{document_fields, FieldConfig, FieldId};
pub use meta::{FieldGroup, MetaKey};
pub use submission::{process, CheckoutError, CheckoutSubmission, MetaEntry, RawDocument};
