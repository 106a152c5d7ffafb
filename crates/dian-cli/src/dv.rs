//! # Dv Subcommand
//!
//! Computes the DIAN check digit for a NIT base number. This calls the
//! calculator directly, without the checkout layer's 9-digit guard, so
//! operators can verify any base the algorithm defines.

use anyhow::Result;
use clap::Args;

use dian_core::compute_check_digit;

/// Arguments for the `dian dv` subcommand.
#[derive(Args, Debug)]
pub struct DvArgs {
    /// NIT base number, digits only, without the check digit.
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Print only the check digit instead of the full formatted NIT.
    #[arg(long)]
    pub digit_only: bool,
}

/// Execute the dv subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure.
pub fn run_dv(args: &DvArgs) -> Result<u8> {
    match compute_check_digit(&args.number) {
        Ok(dv) => {
            if args.digit_only {
                println!("{dv}");
            } else {
                println!("{}-{dv}", args.number);
            }
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {e}");
            Ok(1)
        }
    }
}
