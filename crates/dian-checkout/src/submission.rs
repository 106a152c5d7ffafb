//! # Checkout Submission Processing
//!
//! Validates the billing and shipping document pairs of one checkout
//! submission and produces the order metadata entries the host persists.
//! A failing pair blocks the whole submission; it is never fatal to the
//! host process, and nothing is persisted on failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dian_core::{validate, DocumentIdentity, DocumentType, ValidationError};

use crate::fields::FieldId;
use crate::meta::{FieldGroup, MetaKey};

/// The two raw form values collected for one address group, exactly as
/// submitted. Nothing here is validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// The value of the type select field.
    pub document_type: String,
    /// The value of the document number input.
    pub number: String,
}

/// One checkout submission's document fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSubmission {
    /// The billing pair; always present.
    pub billing: RawDocument,
    /// The shipping pair, when the order ships to a separate address.
    #[serde(default)]
    pub shipping: Option<RawDocument>,
}

/// A metadata entry ready for the host to persist on the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaEntry {
    /// Where the value is stored.
    pub key: MetaKey,
    /// The stored value: the wire type code, or the formatted number.
    pub value: String,
}

/// A submission-level validation failure, carrying the group whose pair
/// was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{group} document rejected: {source}")]
pub struct CheckoutError {
    /// The address group that failed.
    pub group: FieldGroup,
    /// The underlying validation failure.
    #[source]
    pub source: ValidationError,
}

impl CheckoutError {
    /// The single notice the storefront shows the shopper for this error.
    ///
    /// Copy is Spanish because the storefront is; the NIT notice keeps the
    /// wording shoppers of the original integration already know.
    pub fn user_notice(&self) -> &'static str {
        match self.source {
            ValidationError::NitMustOmitCheckDigit => "Ingrese un NIT válido sin el DV",
            ValidationError::InvalidNumberFormat(_) => "Ingrese un número de documento válido",
            ValidationError::NumberTooLong { .. } => {
                "El número de documento es demasiado largo"
            }
            ValidationError::UnknownDocumentType(_) => "Seleccione un tipo de documento",
        }
    }
}

/// Validate a submission and produce its order metadata entries.
///
/// Each present group contributes two entries: the document type code
/// under its `type_document` key and the formatted number under its `dni`
/// key (for NIT, the number with the computed DV appended). Groups are
/// validated independently, billing first; the first failing group aborts
/// the submission and nothing is returned for the host to persist.
///
/// # Errors
///
/// [`CheckoutError`] naming the failing group and the underlying
/// [`ValidationError`].
pub fn process(submission: &CheckoutSubmission) -> Result<Vec<MetaEntry>, CheckoutError> {
    let mut entries = Vec::with_capacity(4);

    let billing = validate_group(FieldGroup::Billing, &submission.billing)?;
    push_group_entries(&mut entries, FieldGroup::Billing, &billing);

    if let Some(raw) = &submission.shipping {
        let shipping = validate_group(FieldGroup::Shipping, raw)?;
        push_group_entries(&mut entries, FieldGroup::Shipping, &shipping);
    }

    Ok(entries)
}

fn validate_group(group: FieldGroup, raw: &RawDocument) -> Result<DocumentIdentity, CheckoutError> {
    let document_type = raw
        .document_type
        .parse::<DocumentType>()
        .map_err(|source| CheckoutError { group, source })?;

    match validate(document_type, &raw.number) {
        Ok(identity) => {
            tracing::debug!(%group, %document_type, "checkout document accepted");
            Ok(identity)
        }
        Err(source) => {
            tracing::debug!(%group, %document_type, error = %source, "checkout document rejected");
            Err(CheckoutError { group, source })
        }
    }
}

fn push_group_entries(entries: &mut Vec<MetaEntry>, group: FieldGroup, identity: &DocumentIdentity) {
    entries.push(MetaEntry {
        key: MetaKey::new(group, FieldId::TypeDocument),
        value: identity.document_type().as_str().to_string(),
    });
    entries.push(MetaEntry {
        key: MetaKey::new(group, FieldId::Dni),
        value: identity.formatted(),
    });
}
