//! Plaintext, payload and password sources.

use std::io::{self, Read};
use std::path::Path;

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::config::expand_tilde;
use crate::constants::env_vars;
use crate::errors::CliError;

/// Whether a password prompt asks twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Ask once (decrypt)
    Single,
    /// Ask twice and require a match (encrypt)
    Confirm,
}

/// Places a password can come from, in precedence order.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordSources<'a> {
    pub flag: Option<&'a str>,
    pub file: Option<&'a str>,
    pub config_file: Option<&'a str>,
}

/// Read plaintext from `--text`, then `--input`, then stdin. Trimmed.
pub fn read_plaintext(text: Option<&str>, input: Option<&str>) -> anyhow::Result<String> {
    let raw = match (text, input) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => read_file(path, "Input file")?,
        (None, None) => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("No plaintext provided").into());
    }
    Ok(trimmed.to_string())
}

/// Read a payload from the positional argument, then `--payload-file`, then stdin.
pub fn read_payload(payload: Option<&str>, file: Option<&str>) -> anyhow::Result<String> {
    let raw = match (payload, file) {
        (Some(value), _) => value.to_string(),
        (None, Some(path)) => read_file(path, "Payload file")?,
        (None, None) => read_stdin()?,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input("No payload provided").into());
    }
    Ok(trimmed.to_string())
}

/// Resolve the password.
///
/// Order: flag, `--password-file`, config `password_file`,
/// `HUGO_PROTECTOR_PASSWORD`, then an interactive prompt.
pub fn resolve_password(
    sources: PasswordSources<'_>,
    kind: PromptKind,
    interactive: bool,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = sources.flag.filter(|v| !v.is_empty()) {
        tracing::debug!("password from flag");
        return Ok(Zeroizing::new(value.to_string()));
    }

    if let Some(path) = sources.file.or(sources.config_file) {
        tracing::debug!(path, "password from file");
        return read_password_file(path);
    }

    if let Ok(value) = std::env::var(env_vars::PASSWORD) {
        if !value.is_empty() {
            tracing::debug!("password from environment");
            return Ok(Zeroizing::new(value));
        }
    }

    if interactive {
        return prompt_password(kind);
    }

    Err(CliError::invalid_input(format!(
        "Password not provided\nHint: Use --password-file or set {}.",
        env_vars::PASSWORD
    ))
    .into())
}

fn read_password_file(path: &str) -> anyhow::Result<Zeroizing<String>> {
    let contents = Zeroizing::new(read_file(path, "Password file")?);
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Err(CliError::invalid_input(format!("Password file is empty: {}", path)).into());
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

fn prompt_password(kind: PromptKind) -> anyhow::Result<Zeroizing<String>> {
    let prompt = Password::new().with_prompt("Password");
    let prompt = match kind {
        PromptKind::Single => prompt,
        PromptKind::Confirm => {
            prompt.with_confirmation("Confirm password", "Passwords do not match")
        }
    };
    let value = prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    if value.is_empty() {
        return Err(CliError::invalid_input("Password not provided").into());
    }
    Ok(Zeroizing::new(value))
}

fn read_file(path: &str, what: &str) -> anyhow::Result<String> {
    let resolved = expand_tilde(path)?;
    if !Path::new(&resolved).exists() {
        return Err(CliError::not_found(
            format!("{} not found: {}", what, resolved.display()),
            "Hint: Check the path and try again.",
        )
        .into());
    }
    std::fs::read_to_string(&resolved)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", resolved.display(), e))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}
