//! # Order Metadata Keys
//!
//! Structured keys for the order metadata written after a successful
//! submission. A key is a (group, field) pair resolved at compile time;
//! the two string renderings exist because the host exposes two checkout
//! surfaces: the classic form persists `_billing_dni`-style post meta,
//! while the block-based checkout stores additional fields under
//! `_wc_billing/document/dni`.

use std::fmt;

use serde::Serialize;

use crate::fields::FieldId;

/// Address group a document pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    /// The billing address fields.
    Billing,
    /// The shipping address fields.
    Shipping,
}

impl FieldGroup {
    /// Lowercase group name used in key renderings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Billing => "billing",
            Self::Shipping => "shipping",
        }
    }
}

impl fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved order metadata key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MetaKey {
    /// Address group the value belongs to.
    pub group: FieldGroup,
    /// Field the value was collected from.
    pub field: FieldId,
}

impl MetaKey {
    /// Pair a group with a field.
    pub fn new(group: FieldGroup, field: FieldId) -> Self {
        Self { group, field }
    }

    /// Classic post-meta rendering: `_billing_dni`, `_shipping_type_document`.
    pub fn storage_key(&self) -> String {
        format!("_{}_{}", self.group.as_str(), self.field.as_str())
    }

    /// Block-checkout rendering: `_wc_billing/document/dni`.
    pub fn scoped_key(&self) -> String {
        format!("_wc_{}/{}", self.group.as_str(), self.field.form_id())
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}
