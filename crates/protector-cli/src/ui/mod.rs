//! UI primitives for consistent stderr output.

mod context;
mod progress;
mod render;
mod theme;

pub use context::UiContext;
pub use progress::Spinner;
pub use render::{print_error, print_success};
