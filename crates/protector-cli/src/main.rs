//! Hugo Protector CLI - encrypt content for password-protected Hugo pages
//!
//! Produces payloads for the `protector` shortcode and full-page front
//! matter, and decrypts them again for checking.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{decrypt, encrypt, misc};
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let (message, hint, code) = match e.downcast_ref::<CliError>() {
            Some(cli_err) => {
                let (message, inline_hint) = split_hint(&cli_err.to_string());
                let hint = cli_err.hint().map(str::to_string).or(inline_hint);
                (message, hint, cli_err.exit_code())
            }
            None => {
                let (message, hint) = split_hint(&format!("{:#}", e));
                (message, hint, 1)
            }
        };

        print_error(ctx.ui(), &message, hint.as_deref());
        std::process::exit(code);
    }
}

/// Split a trailing "\nHint: ..." off an error message.
fn split_hint(error: &str) -> (String, Option<String>) {
    match error.find("\nHint:") {
        Some(idx) => (error[..idx].to_string(), Some(error[idx + 1..].to_string())),
        None => (error.to_string(), None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Encrypt(args)) => encrypt::handle_encrypt(ctx, args),
        Some(Commands::Decrypt(args)) => decrypt::handle_decrypt(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            if !cli.quiet {
                println!("{}", misc::quickstart());
            }
            Ok(())
        }
    }
}
