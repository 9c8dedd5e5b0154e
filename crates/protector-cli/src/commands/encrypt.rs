//! `encrypt`: turn content into a transport payload or Hugo snippet.

use protector_core::crypto::DEFAULT_ITERATIONS;
use protector_core::encode;

use crate::app::AppContext;
use crate::cli::EncryptArgs;
use crate::errors::CliError;
use crate::helpers::input::{read_plaintext, resolve_password, PasswordSources, PromptKind};
use crate::helpers::output::{write_output, Destination};
use crate::helpers::snippet::format_output;
use crate::ui::{print_success, Spinner};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let config = &ctx.config()?.encrypt;

    let plaintext = read_plaintext(args.text.as_deref(), args.input.as_deref())?;
    let password = resolve_password(
        PasswordSources {
            flag: args.password.as_deref(),
            file: args.password_file.as_deref(),
            config_file: config.password_file.as_deref(),
        },
        PromptKind::Confirm,
        ctx.interactive(args.no_input),
    )?;

    let iterations = args
        .iterations
        .or(config.iterations)
        .unwrap_or(DEFAULT_ITERATIONS);
    let mode = args.mode.or(config.mode).unwrap_or_default();
    let format = args.format.or(config.format).unwrap_or_default();

    let spinner = Spinner::new(ctx.ui(), "Deriving key");
    spinner.start();
    let sealed = encode(&plaintext, &password, Some(iterations));
    spinner.clear();
    let payload = sealed.map_err(CliError::from)?;

    tracing::info!(
        iterations,
        ?mode,
        ?format,
        plaintext_bytes = plaintext.len(),
        "encrypted content"
    );

    let content = format_output(format, mode, &payload);
    if let Destination::File(path) = write_output(args.output.as_deref(), &content)? {
        print_success(ctx.ui(), &format!("Wrote payload to {}", path.display()));
    }
    Ok(())
}
