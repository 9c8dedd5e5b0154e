//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (input file, password file, config file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong password or damaged payload).
    pub const AUTH_FAILED: i32 = 5;

    /// Payload could not be produced or read.
    pub const PAYLOAD_UNREADABLE: i32 = 6;
}

/// Environment variable names.
pub mod env_vars {
    /// Password used when no flag or file is given.
    pub const PASSWORD: &str = "HUGO_PROTECTOR_PASSWORD";

    /// Log filter directive (tracing `EnvFilter` syntax).
    pub const LOG: &str = "HUGO_PROTECTOR_LOG";
}
