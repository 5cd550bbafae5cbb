//! List templates described by the registry config.

use templet::{RegistryConfig, DEFAULT_EXTENSION};

use crate::output;

pub(super) fn handle_list_command(config: &RegistryConfig) -> anyhow::Result<()> {
    if config.templates.is_empty() {
        output::warning("No templates configured.");
        output::hint("Add [[templates]] entries to .templet.toml or pass --config.");
        return Ok(());
    }

    output::header("Configured templates:");
    output::blank();
    for entry in &config.templates {
        output::item(entry.name());
        output::label("content", entry.content_dir.display());
        if let Some(layout_dir) = entry.layout_dir.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            output::label("layout", layout_dir.display());
        }
        output::label("ext", entry.ext.as_deref().unwrap_or(DEFAULT_EXTENSION));
    }
    output::blank();
    if config.hot_reload {
        output::hint("Hot reload is enabled: templates recompile on every render.");
    }

    Ok(())
}
