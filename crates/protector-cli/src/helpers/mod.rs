//! Input, output and snippet helpers shared by commands.

pub mod input;
pub mod output;
pub mod snippet;
