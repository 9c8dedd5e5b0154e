//! `decrypt`: recover and optionally render protected content.

use protector_core::unlock::{unlock_payload, UnlockError};
use protector_core::ContentFormat;

use crate::app::AppContext;
use crate::cli::DecryptArgs;
use crate::errors::CliError;
use crate::helpers::input::{read_payload, resolve_password, PasswordSources, PromptKind};
use crate::helpers::output::{write_output, Destination};
use crate::ui::{print_success, Spinner};

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let payload = read_payload(args.payload.as_deref(), args.payload_file.as_deref())?;
    let password = resolve_password(
        PasswordSources {
            flag: args.password.as_deref(),
            file: args.password_file.as_deref(),
            config_file: None,
        },
        PromptKind::Single,
        ctx.interactive(args.no_input),
    )?;
    let format = ContentFormat::from(args.render);

    let spinner = Spinner::new(ctx.ui(), "Unlocking");
    spinner.start();
    let unlocked = unlock_payload(&payload, &password, format);
    spinner.clear();

    let content = unlocked.map_err(|err| match err {
        UnlockError::PasswordRequired => CliError::invalid_input(err.to_string()),
        _ => CliError::auth_failed_with_hint(
            err.to_string(),
            "Hint: Check the password and that the payload was copied completely.",
        ),
    })?;

    tracing::info!(%format, "decrypted payload");

    if let Destination::File(path) = write_output(args.output.as_deref(), &content)? {
        print_success(ctx.ui(), &format!("Wrote content to {}", path.display()));
    }
    Ok(())
}
