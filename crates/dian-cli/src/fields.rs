//! # Fields Subcommand
//!
//! Exports the checkout field configuration as JSON, for hosts that
//! render the document fields from configuration instead of linking the
//! checkout crate directly.

use anyhow::{Context, Result};
use clap::Args;

use dian_checkout::document_fields;

/// Arguments for the `dian fields` subcommand.
#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Execute the fields subcommand.
///
/// Returns exit code: 0 on success.
pub fn run_fields(args: &FieldsArgs) -> Result<u8> {
    let fields = document_fields();
    let json = if args.pretty {
        serde_json::to_string_pretty(&fields)
    } else {
        serde_json::to_string(&fields)
    }
    .context("failed to serialize field configuration")?;

    println!("{json}");
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_output_succeeds() {
        let args = FieldsArgs { pretty: false };
        assert_eq!(run_fields(&args).unwrap(), 0);
    }

    #[test]
    fn pretty_output_succeeds() {
        let args = FieldsArgs { pretty: true };
        assert_eq!(run_fields(&args).unwrap(), 0);
    }
}
