//! # Validate Subcommand
//!
//! Runs the full checkout validation for one document pair, exactly as a
//! storefront submission would experience it, including the 9-digit NIT
//! guard and the user-facing notice.

use anyhow::Result;
use clap::Args;

use dian_checkout::{process, CheckoutSubmission, RawDocument};

/// Arguments for the `dian validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document type code (CC or NIT).
    #[arg(long = "doc-type", value_name = "TYPE")]
    pub doc_type: String,

    /// Document number as the shopper would enter it.
    #[arg(value_name = "NUMBER")]
    pub number: String,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let submission = CheckoutSubmission {
        billing: RawDocument {
            document_type: args.doc_type.clone(),
            number: args.number.clone(),
        },
        shipping: None,
    };

    match process(&submission) {
        Ok(entries) => {
            for entry in &entries {
                println!("OK: {} = {}", entry.key, entry.value);
            }
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            println!("      {}", e.user_notice());
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(doc_type: &str, number: &str) -> ValidateArgs {
        ValidateArgs {
            doc_type: doc_type.to_string(),
            number: number.to_string(),
        }
    }

    #[test]
    fn cc_pair_passes() {
        assert_eq!(run_validate(&args("CC", "1055666777")).unwrap(), 0);
    }

    #[test]
    fn nit_pair_passes_without_check_digit() {
        assert_eq!(run_validate(&args("NIT", "90037311")).unwrap(), 0);
    }

    #[test]
    fn nine_digit_nit_fails() {
        assert_eq!(run_validate(&args("NIT", "123456789")).unwrap(), 1);
    }

    #[test]
    fn unknown_type_fails() {
        assert_eq!(run_validate(&args("PASSPORT", "1055666777")).unwrap(), 1);
    }
}
