//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use protector_core::{ContentFormat, VERSION};

use crate::config::{OutputFormat, SnippetMode};

/// Hugo Protector - password-protect static site content with AES-256-GCM
#[derive(Parser)]
#[command(name = "hugo-protector")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "HUGO_PROTECTOR_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt content into a payload for the protector shortcode or page
    Encrypt(EncryptArgs),

    /// Decrypt a payload and print the content
    Decrypt(DecryptArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct EncryptArgs {
    /// Read plaintext from a file (defaults to stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Use this string as plaintext (takes precedence over --input)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Password (visible in shell history; prefer --password-file)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Read the password from a file
    #[arg(long, value_name = "FILE")]
    pub password_file: Option<String>,

    /// Snippet to print in helper format
    #[arg(short, long, value_enum)]
    pub mode: Option<SnippetMode>,

    /// PBKDF2 iteration count
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: Option<u32>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print a ready-to-paste snippet or the bare payload
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(clap::Args)]
pub struct DecryptArgs {
    /// Payload string (reads --payload-file or stdin when omitted)
    #[arg(value_name = "PAYLOAD")]
    pub payload: Option<String>,

    /// Read the payload from a file
    #[arg(long, value_name = "FILE")]
    pub payload_file: Option<String>,

    /// Password (visible in shell history; prefer --password-file)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Read the password from a file
    #[arg(long, value_name = "FILE")]
    pub password_file: Option<String>,

    /// How to present the decrypted content
    #[arg(long, value_enum, default_value_t = RenderArg::Html)]
    pub render: RenderArg,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

/// Content format as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    /// Print the plaintext unchanged
    Html,
    /// Convert the plaintext from Markdown to HTML
    Markdown,
}

impl From<RenderArg> for ContentFormat {
    fn from(value: RenderArg) -> Self {
        match value {
            RenderArg::Html => ContentFormat::Html,
            RenderArg::Markdown => ContentFormat::Markdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encrypt_flags_parse() {
        let cli = Cli::try_parse_from([
            "hugo-protector",
            "encrypt",
            "-t",
            "secret",
            "--password-file",
            "pw.txt",
            "--mode",
            "page",
            "--format",
            "raw",
            "--iterations",
            "1000",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Encrypt(args)) => {
                assert_eq!(args.text.as_deref(), Some("secret"));
                assert_eq!(args.password_file.as_deref(), Some("pw.txt"));
                assert_eq!(args.mode, Some(SnippetMode::Page));
                assert_eq!(args.format, Some(OutputFormat::Raw));
                assert_eq!(args.iterations, Some(1000));
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = Cli::try_parse_from(["hugo-protector", "encrypt", "--iterations", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decrypt_render_default() {
        let cli = Cli::try_parse_from(["hugo-protector", "decrypt", "abc"]).unwrap();
        match cli.command {
            Some(Commands::Decrypt(args)) => {
                assert_eq!(args.payload.as_deref(), Some("abc"));
                assert_eq!(args.render, RenderArg::Html);
                assert_eq!(ContentFormat::from(args.render), ContentFormat::Html);
            }
            _ => panic!("expected decrypt"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["hugo-protector", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }
}
