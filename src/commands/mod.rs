//! Command implementations for licensegen.
//!
//! The dispatcher routes a parsed command line either to the catalog listing
//! or to the interactive generation flow wired to the real terminal and git.

mod generate;
mod list;

pub use generate::{Generated, generate};

use crate::cli::Cli;
use crate::config::RunOptions;
use crate::error::Result;
use crate::git::GitIdentity;
use crate::identity::{FixedIdentity, Identity};
use crate::license::current_year;
use crate::prompt::TerminalPrompter;
use list::catalog_listing;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    if cli.list {
        cmd_list();
        return Ok(());
    }

    let options = RunOptions::from_cli(cli)?;
    cmd_generate(&options)
}

fn cmd_list() {
    print!("{}", catalog_listing());
}

fn cmd_generate(options: &RunOptions) -> Result<()> {
    let mut prompter = TerminalPrompter;
    let year = current_year();

    let generated = if options.needs_detected_identity() {
        generate(options, &GitIdentity::new("."), &mut prompter, year)?
    } else {
        // Both fields were given on the command line; git is not consulted.
        let identity = Identity {
            name: options.name.clone().unwrap_or_default(),
            email: options.email.clone().unwrap_or_default(),
        };
        generate(options, &FixedIdentity(identity), &mut prompter, year)?
    };

    print_success(options, &generated);
    Ok(())
}

fn print_success(options: &RunOptions, generated: &Generated) {
    tracing::info!(
        license = generated.license,
        holder = %generated.holder.name,
        path = %generated.path.display(),
        "license generated"
    );
    if options.is_default_output() {
        println!("Successfully generated license file 🎉");
    } else {
        println!(
            "Successfully generated license file {} 🎉",
            generated.path.display()
        );
    }
}
