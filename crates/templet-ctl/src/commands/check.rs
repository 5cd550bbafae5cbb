//! Compile every configured template and report per-template status.

use templet::RegistryConfig;

use crate::output;

pub(super) fn handle_check_command(config: &RegistryConfig) -> anyhow::Result<()> {
    if config.templates.is_empty() {
        output::warning("No templates configured, nothing to check.");
        return Ok(());
    }

    output::header("Checking templates:");
    let mut failures = 0usize;
    for entry in &config.templates {
        let template = entry.to_template();
        match template.initialize() {
            Ok(()) => {
                let files = template.template_names().len();
                output::status_icon(true, format!("{} ({files} files)", template.name()));
            }
            Err(e) => {
                failures += 1;
                tracing::debug!(name = %template.name(), error = %e, "Template failed to compile");
                output::status_icon(false, format!("{}: {e}", template.name()));
            }
        }
    }

    if failures > 0 {
        anyhow::bail!(
            "{failures} of {} templates failed to compile",
            config.templates.len()
        );
    }
    output::success(format!("All {} templates compiled", config.templates.len()));
    Ok(())
}
