//! Application context for the Hugo Protector CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file and the UI
//! context.

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, ProtectorConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    ui: UiContext,
    config: OnceCell<ProtectorConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            ui: UiContext::from_env(cli.no_color, cli.quiet),
            config: OnceCell::new(),
        }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&ProtectorConfig> {
        self.config
            .get_or_try_init(|| load_config(self.cli.config.as_deref()))
    }

    /// Whether prompts may be shown for this invocation.
    pub fn interactive(&self, no_input: bool) -> bool {
        !no_input && self.ui.is_interactive()
    }
}
