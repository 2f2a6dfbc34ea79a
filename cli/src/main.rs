//! # Firewall Checklist
//!
//! Creates a firewall checklist for every host inventory in an Ansible
//! `hosts` folder.
//!
//! ## Usage
//!
//! ```bash
//! # All inventories under ./hosts -> ./firewall-checklist/
//! firewall-checklist
//!
//! # Another Ansible directory, continue past broken inventories
//! firewall-checklist --path ../ansible --keep-going --report run.json
//!
//! # One inventory to stdout, or to a file
//! firewall-checklist --file hosts/testnet.yml
//! firewall-checklist --file hosts/testnet.yml -o testnet-firewall.yml
//! ```
//!
//! ## Exit Codes
//!
//! - **0**: all checklists written
//! - **1**: one or more inventories failed (`--keep-going`)
//! - **2**: configuration or execution error

mod cli;
mod config;
mod discovery;
mod logging;
mod output;
mod runner;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let exit_code = match cli.into_config() {
        Err(e) => {
            log::error!("{}", e);
            2
        }
        Ok(config) => match runner::run(&config) {
            Ok(summary) => summary.exit_code(),
            Err(e) => {
                log::error!("{}", e);
                2
            }
        },
    };

    std::process::exit(exit_code);
}
