//! # Checkout Document Identity
//!
//! The document types collected at checkout and the validation policy
//! applied to them. A submission carries two raw form fields per address
//! group (document type, document number); [`validate`] turns one such
//! pair into a [`DocumentIdentity`] or a [`ValidationError`].
//!
//! A `DocumentIdentity` is transient. It lives for the duration of one
//! checkout submission; only the [`DocumentIdentity::formatted`] string is
//! persisted by the host as order metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dv::compute_check_digit;
use crate::error::ValidationError;

/// Document types recognized at checkout.
///
/// Wire form is the uppercase code submitted by the storefront select
/// field (`"CC"` / `"NIT"`). Every `match` on this enum is exhaustive;
/// adding a type forces every consumer to handle it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cédula de ciudadanía: citizen identification card. No check digit.
    #[serde(rename = "CC")]
    Cc,
    /// Número de identificación tributaria: tax identifier. Carries a
    /// DIAN check digit, which this system computes and appends.
    #[serde(rename = "NIT")]
    Nit,
}

impl DocumentType {
    /// All recognized document types, in storefront option order.
    pub fn all() -> &'static [DocumentType] {
        &[Self::Cc, Self::Nit]
    }

    /// The uppercase wire code.
    ///
    /// This must match the serde serialization format and the value
    /// attribute of the storefront select options.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Nit => "NIT",
        }
    }

    /// Storefront label for the type select field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cc => "Cédula de ciudadanía",
            Self::Nit => "(NIT) Número de identificación tributaria",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    /// Parse a document type from its uppercase wire code.
    ///
    /// Accepts the same codes produced by [`DocumentType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CC" => Ok(Self::Cc),
            "NIT" => Ok(Self::Nit),
            other => Err(ValidationError::UnknownDocumentType(other.to_string())),
        }
    }
}

/// A validated checkout document identity.
///
/// Constructed only by [`validate`], so its invariants always hold:
/// `check_digit` is present exactly when the type is NIT, and it is a
/// pure function of the normalized number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIdentity {
    document_type: DocumentType,
    raw_number: String,
    normalized_number: String,
    check_digit: Option<u8>,
}

impl DocumentIdentity {
    /// The document type this identity was validated as.
    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// The number exactly as the user entered it.
    pub fn raw_number(&self) -> &str {
        &self.raw_number
    }

    /// The entered number with every non-digit character stripped.
    pub fn normalized_number(&self) -> &str {
        &self.normalized_number
    }

    /// The DIAN check digit; present exactly when the type is NIT.
    pub fn check_digit(&self) -> Option<u8> {
        self.check_digit
    }

    /// The value the host persists as order metadata: the raw number
    /// unchanged for CC, `"{raw}-{dv}"` for NIT.
    pub fn formatted(&self) -> String {
        match self.check_digit {
            Some(dv) => format!("{}-{}", self.raw_number, dv),
            None => self.raw_number.clone(),
        }
    }
}

impl fmt::Display for DocumentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Validate one checkout document pair.
///
/// Rules, applied in order:
/// 1. Non-digit characters are stripped from `raw_number`.
/// 2. A NIT whose stripped form is exactly 9 digits is rejected with
///    [`ValidationError::NitMustOmitCheckDigit`]: users must submit the
///    base number and the system appends the DV itself, so a 9-digit
///    input is treated as already carrying a foreign check digit.
/// 3. CC passes through with no further transformation.
/// 4. NIT gets its check digit computed over the stripped form, which is
///    where empty or over-long input fails.
///
/// Applied independently to the billing pair and the shipping pair of a
/// submission. No side effects; the caller persists the formatted value
/// and surfaces any error to the user.
///
/// # Errors
///
/// [`ValidationError::NitMustOmitCheckDigit`],
/// [`ValidationError::InvalidNumberFormat`], or
/// [`ValidationError::NumberTooLong`], as described above.
pub fn validate(
    document_type: DocumentType,
    raw_number: &str,
) -> Result<DocumentIdentity, ValidationError> {
    let normalized: String = raw_number.chars().filter(|c| c.is_ascii_digit()).collect();

    let check_digit = match document_type {
        DocumentType::Cc => None,
        DocumentType::Nit => {
            if normalized.len() == 9 {
                return Err(ValidationError::NitMustOmitCheckDigit);
            }
            Some(compute_check_digit(&normalized)?)
        }
    };

    Ok(DocumentIdentity {
        document_type,
        raw_number: raw_number.to_string(),
        normalized_number: normalized,
        check_digit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- DocumentType --

    #[test]
    fn as_str_roundtrip() {
        for doc_type in DocumentType::all() {
            let parsed: DocumentType = doc_type.as_str().parse().unwrap();
            assert_eq!(*doc_type, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!(matches!(
            "CE".parse::<DocumentType>(),
            Err(ValidationError::UnknownDocumentType(_))
        ));
        assert!("cc".parse::<DocumentType>().is_err()); // case-sensitive
        assert!("".parse::<DocumentType>().is_err());
    }

    #[test]
    fn serde_format_matches_as_str() {
        for doc_type in DocumentType::all() {
            let json = serde_json::to_string(doc_type).unwrap();
            assert_eq!(json, format!("\"{}\"", doc_type.as_str()));
            let parsed: DocumentType = serde_json::from_str(&json).unwrap();
            assert_eq!(*doc_type, parsed);
        }
    }

    #[test]
    fn serde_rejects_unknown_type() {
        assert!(serde_json::from_str::<DocumentType>("\"TI\"").is_err());
    }

    #[test]
    fn labels_are_distinct() {
        assert_ne!(DocumentType::Cc.label(), DocumentType::Nit.label());
    }

    // -- validate: CC --

    #[test]
    fn cc_passes_through_unchanged() {
        let identity = validate(DocumentType::Cc, "1055666777").unwrap();
        assert_eq!(identity.formatted(), "1055666777");
        assert_eq!(identity.check_digit(), None);
        assert_eq!(identity.document_type(), DocumentType::Cc);
    }

    #[test]
    fn cc_keeps_raw_form_but_normalizes_digits() {
        let identity = validate(DocumentType::Cc, "10.556.667").unwrap();
        assert_eq!(identity.raw_number(), "10.556.667");
        assert_eq!(identity.normalized_number(), "10556667");
        assert_eq!(identity.formatted(), "10.556.667");
    }

    #[test]
    fn cc_has_no_length_rule() {
        // Nine digits is only guarded for NIT.
        let identity = validate(DocumentType::Cc, "123456789").unwrap();
        assert_eq!(identity.formatted(), "123456789");
    }

    // -- validate: NIT --

    #[test]
    fn nit_appends_check_digit() {
        let identity = validate(DocumentType::Nit, "90037311").unwrap();
        assert_eq!(identity.check_digit(), Some(3));
        assert_eq!(identity.formatted(), "90037311-3");
    }

    #[test]
    fn nit_rejects_nine_digit_input() {
        assert_eq!(
            validate(DocumentType::Nit, "123456789"),
            Err(ValidationError::NitMustOmitCheckDigit)
        );
    }

    #[test]
    fn nit_nine_digit_guard_applies_after_stripping() {
        // 11 raw characters, 9 digits once separators are stripped.
        assert_eq!(
            validate(DocumentType::Nit, "890.903.938"),
            Err(ValidationError::NitMustOmitCheckDigit)
        );
    }

    #[test]
    fn nit_checksum_runs_on_stripped_form() {
        let identity = validate(DocumentType::Nit, "903.731.15").unwrap();
        // Stripped form is 90373115; the raw form is preserved in the output.
        assert_eq!(identity.normalized_number(), "90373115");
        assert_eq!(identity.formatted(), "903.731.15-6");
    }

    #[test]
    fn nit_empty_input_is_invalid() {
        assert!(matches!(
            validate(DocumentType::Nit, ""),
            Err(ValidationError::InvalidNumberFormat(_))
        ));
        // Stripping can also make the input empty.
        assert!(matches!(
            validate(DocumentType::Nit, "---"),
            Err(ValidationError::InvalidNumberFormat(_))
        ));
    }

    #[test]
    fn nit_sixteen_digits_is_too_long() {
        assert!(matches!(
            validate(DocumentType::Nit, "1234567890123456"),
            Err(ValidationError::NumberTooLong { digits: 16 })
        ));
    }

    // -- Invariants --

    #[test]
    fn check_digit_present_iff_nit() {
        let cc = validate(DocumentType::Cc, "12345678").unwrap();
        let nit = validate(DocumentType::Nit, "12345678").unwrap();
        assert!(cc.check_digit().is_none());
        assert!(nit.check_digit().is_some());
    }

    #[test]
    fn validate_is_idempotent() {
        let first = validate(DocumentType::Nit, "12345678").unwrap();
        let second = validate(DocumentType::Nit, "12345678").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.formatted(), "12345678-8");
    }

    #[test]
    fn display_matches_formatted() {
        let identity = validate(DocumentType::Nit, "90037311").unwrap();
        assert_eq!(identity.to_string(), identity.formatted());
    }
}
