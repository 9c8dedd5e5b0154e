use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "hugo-protector", &mut io::stdout());
    Ok(())
}

pub fn quickstart() -> &'static str {
    "Hugo Protector - password-protect static site content\n\n\
Quickstart:\n  \
hugo-protector encrypt -i post.md --password-file pw.txt\n  \
hugo-protector encrypt -t \"secret\" --mode page\n  \
hugo-protector decrypt <PAYLOAD> --password-file pw.txt --render markdown\n\n\
Run `hugo-protector --help` for all commands."
}
