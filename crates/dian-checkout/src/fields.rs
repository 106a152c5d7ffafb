//! # Checkout Field Configuration
//!
//! Typed configuration records for the two document fields the storefront
//! injects into checkout. Recognized fields, their options, and their
//! input constraints are enumerated here as data; the host only renders
//! what these records describe.

use std::fmt;

use serde::Serialize;

use dian_core::DocumentType;

/// Identifier of a checkout document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    /// The document type select (CC / NIT).
    TypeDocument,
    /// The document number input.
    Dni,
}

impl FieldId {
    /// Short field name, used as the metadata key suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeDocument => "type_document",
            Self::Dni => "dni",
        }
    }

    /// Scoped form identifier registered with the checkout renderer.
    pub fn form_id(&self) -> &'static str {
        match self {
            Self::TypeDocument => "document/type_document",
            Self::Dni => "document/dni",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Control rendered for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldControl {
    /// Fixed-option dropdown.
    Select,
    /// Numeric text input.
    Number,
}

/// One option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    /// Wire value the form submits.
    pub value: &'static str,
    /// Label shown to the shopper.
    pub label: &'static str,
}

/// Input constraints forwarded to the rendered control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldAttributes {
    /// Client-side input pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<&'static str>,
    /// Minimum input length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    /// Autocomplete hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<&'static str>,
    /// Example value shown as a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

/// Configuration record for one checkout field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldConfig {
    /// Which field this record configures.
    pub id: FieldId,
    /// Label shown to the shopper.
    pub label: &'static str,
    /// Whether checkout blocks on an empty value.
    pub required: bool,
    /// Control the host renders.
    pub control: FieldControl,
    /// Recognized options; empty for free-input controls.
    pub options: Vec<FieldOption>,
    /// Pre-selected option value, when the control is a select.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    /// Input constraints.
    pub attributes: FieldAttributes,
}

/// The two document fields, as the storefront registers them for both the
/// billing and the shipping address group.
pub fn document_fields() -> [FieldConfig; 2] {
    [
        FieldConfig {
            id: FieldId::TypeDocument,
            label: "Tipo de documento",
            required: true,
            control: FieldControl::Select,
            options: DocumentType::all()
                .iter()
                .map(|doc_type| FieldOption {
                    value: doc_type.as_str(),
                    label: doc_type.label(),
                })
                .collect(),
            default: Some(DocumentType::Cc.as_str()),
            attributes: FieldAttributes::default(),
        },
        FieldConfig {
            id: FieldId::Dni,
            label: "Número de documento",
            required: true,
            control: FieldControl::Number,
            options: Vec::new(),
            default: None,
            attributes: FieldAttributes {
                pattern: Some("[0-9]{5,12}"),
                min_length: Some(5),
                autocomplete: Some("billing_dni"),
                placeholder: Some("1055666777"),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fields_both_required() {
        let fields = document_fields();
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|field| field.required));
    }

    #[test]
    fn type_select_enumerates_every_document_type() {
        let fields = document_fields();
        let select = &fields[0];
        assert_eq!(select.id, FieldId::TypeDocument);
        assert_eq!(select.control, FieldControl::Select);
        assert_eq!(select.options.len(), DocumentType::all().len());
        assert_eq!(select.options[0].value, "CC");
        assert_eq!(select.options[1].value, "NIT");
        assert_eq!(select.default, Some("CC"));
    }

    #[test]
    fn dni_field_carries_input_constraints() {
        let fields = document_fields();
        let dni = &fields[1];
        assert_eq!(dni.id, FieldId::Dni);
        assert_eq!(dni.control, FieldControl::Number);
        assert!(dni.options.is_empty());
        assert_eq!(dni.attributes.pattern, Some("[0-9]{5,12}"));
        assert_eq!(dni.attributes.min_length, Some(5));
    }

    #[test]
    fn form_ids_are_scoped() {
        assert_eq!(FieldId::TypeDocument.form_id(), "document/type_document");
        assert_eq!(FieldId::Dni.form_id(), "document/dni");
    }

    #[test]
    fn field_config_serializes_for_host_rendering() {
        let fields = document_fields();
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json[0]["id"], "type_document");
        assert_eq!(json[0]["options"][1]["value"], "NIT");
        assert_eq!(json[1]["attributes"]["min_length"], 5);
        // Empty attribute slots are omitted, not serialized as null.
        assert!(json[0]["attributes"].get("pattern").is_none());
    }
}
