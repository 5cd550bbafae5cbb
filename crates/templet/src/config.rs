//! TOML registry descriptions.
//!
//! ```toml
//! hot-reload = true
//!
//! [[templates]]
//! content-dir = "tmplt/content/simple"
//! layout-dir = "tmplt/layout/basic"
//!
//! [[templates]]
//! content-dir = "tmplt/content/nolayout"
//! ext = ".html"
//! ```
//!
//! Relative directories resolve against the config file's directory, and a
//! leading `~/` expands to `$HOME`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::TempletError;
use crate::registry::Registry;
use crate::template::Template;

/// A registry described in TOML.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryConfig {
    /// Enable hot reload on every template in the registry.
    #[serde(default)]
    pub hot_reload: bool,

    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
}

/// One content/layout pairing.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateEntry {
    pub content_dir: PathBuf,

    /// Omitted or empty for a content-only template.
    pub layout_dir: Option<PathBuf>,

    /// Extension filter; `.html` when omitted.
    pub ext: Option<String>,
}

impl TemplateEntry {
    /// Name the template will be registered under.
    pub fn name(&self) -> String {
        crate::discovery::derive_name(&self.content_dir)
    }

    pub fn to_template(&self) -> Template {
        let template = match &self.layout_dir {
            Some(layout_dir) => Template::with_layout(&self.content_dir, layout_dir),
            None => Template::new(&self.content_dir),
        };
        match &self.ext {
            Some(ext) => template.with_extension(ext),
            None => template,
        }
    }
}

impl RegistryConfig {
    /// Read and parse a config file, resolving its directories relative to
    /// the file's location.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        tracing::debug!(?path, templates = config.templates.len(), "Loaded registry config");
        Ok(config)
    }

    /// Expand `~/` and anchor relative directories at `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for entry in &mut self.templates {
            entry.content_dir = resolve(base, &entry.content_dir);
            if let Some(layout_dir) = &entry.layout_dir {
                entry.layout_dir = Some(resolve(base, layout_dir));
            }
        }
    }

    /// Build a registry, initializing every template.
    pub fn build(&self) -> Result<Registry, TempletError> {
        let mut registry = Registry::new().with_hot_reload(self.hot_reload);
        for entry in &self.templates {
            registry.insert(entry.to_template())?;
        }
        Ok(registry)
    }

    /// The template registered under `name`, built on its own without
    /// compiling the rest of the registry. Later entries win, as they do in
    /// [`build`](Self::build).
    pub fn template(&self, name: &str) -> Result<Template, TempletError> {
        self.templates
            .iter()
            .rev()
            .find(|entry| entry.name() == name)
            .map(|entry| entry.to_template().with_hot_reload(self.hot_reload))
            .ok_or_else(|| TempletError::NotFound {
                name: name.to_string(),
            })
    }

    /// [`load`](Self::load) followed by [`build`](Self::build).
    pub fn load_registry(path: &Path) -> Result<Registry, ConfigError> {
        Ok(Self::load(path)?.build()?)
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    // Empty layout paths stay empty so they keep meaning "no layout".
    if expanded.is_absolute() || expanded.as_os_str().is_empty() {
        expanded
    } else {
        base.join(expanded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error(transparent)]
    Template(#[from] TempletError),
}
