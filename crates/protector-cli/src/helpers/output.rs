//! Writing results to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::expand_tilde;

/// Where a command result ended up.
#[derive(Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

/// Print `content` to stdout with a trailing newline, or write it atomically
/// to `path` as-is.
pub fn write_output(path: Option<&str>, content: &str) -> anyhow::Result<Destination> {
    match path {
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", content)
                .and_then(|_| stdout.flush())
                .map_err(|e| anyhow::anyhow!("Failed to write stdout: {}", e))?;
            Ok(Destination::Stdout)
        }
        Some(path) => {
            let destination = expand_tilde(path)?;
            write_atomic(&destination, content.as_bytes()).map_err(|e| {
                anyhow::anyhow!("Failed to write {}: {}", destination.display(), e)
            })?;
            tracing::info!(path = %destination.display(), bytes = content.len(), "wrote output");
            Ok(Destination::File(destination))
        }
    }
}

/// Write through a sibling temp file and rename over the destination.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = destination
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Output path has no file name"))?;
    let temp_path = parent.join(format!(
        ".{}.tmp-{}",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    rename_with_fallback(&temp_path, destination)
}

/// Rename, retrying after removing the destination on platforms where
/// rename refuses to replace an existing file. Cleans up the temp file on
/// failure.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
