//! Render a configured or ad-hoc template.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use templet::Template;

use crate::cli_config::load_registry_config;
use crate::output;
use crate::RenderArgs;

pub(super) fn handle_render_command(
    args: RenderArgs,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let data = match &args.data {
        Some(path) => read_data(path)?,
        None => Value::Null,
    };

    let template = match (&args.template, &args.content) {
        (Some(name), _) => load_registry_config(config_path)?.template(name)?,
        (None, Some(content)) => ad_hoc_template(content, &args),
        // clap enforces one of --template / --content
        (None, None) => anyhow::bail!("either --template or --content is required"),
    };

    // Render fully before touching the destination so a failure leaves it alone.
    let mut page = Vec::new();
    template.render(&mut page, &data)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &page).with_context(|| format!("writing {}", path.display()))?;
            output::success(format!("Rendered {}", path.display()));
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(&page)
                .and_then(|()| out.flush())
                .context("writing rendered output")?;
        }
    }
    Ok(())
}

fn ad_hoc_template(content: &Path, args: &RenderArgs) -> Template {
    let template = match &args.layout {
        Some(layout) => Template::with_layout(content, layout),
        None => Template::new(content),
    };
    match &args.ext {
        Some(ext) => template.with_extension(ext),
        None => template,
    }
}

fn read_data(path: &Path) -> anyhow::Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading render data from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading render data {}", path.display()))?
    };

    serde_json::from_str(&raw).with_context(|| format!("parsing render data {}", path.display()))
}
