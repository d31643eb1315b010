//! company-registry entry point
//!
//! Parses arguments and dispatches to `cli::run`; failures are printed to
//! stderr and exit with status 1.

use company_registry::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
