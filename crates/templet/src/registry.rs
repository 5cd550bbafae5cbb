//! Name-keyed collection of templates.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{Result, TempletError};
use crate::template::Template;

/// Templates keyed by their derived name (the content directory's final
/// segment).
///
/// The registry owns its templates; lookups hand out borrows. Mutation takes
/// `&mut self`, so sharing a registry across threads for insertion needs an
/// outer lock, while rendering through `&Registry` does not.
#[derive(Debug, Default)]
pub struct Registry {
    hot_reload: bool,
    templates: HashMap<String, Template>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force hot reload on every template inserted from now on.
    pub fn with_hot_reload(mut self, hot_reload: bool) -> Self {
        self.hot_reload = hot_reload;
        self
    }

    /// Affects subsequent insertions only.
    pub fn set_hot_reload(&mut self, hot_reload: bool) {
        self.hot_reload = hot_reload;
    }

    pub fn hot_reload(&self) -> bool {
        self.hot_reload
    }

    /// Add a template under its derived name.
    ///
    /// Turns on the template's hot reload when the registry has it enabled and
    /// initializes the template if no compile has succeeded yet. On failure the
    /// template is dropped and the registry is unchanged. Returns the template
    /// previously registered under the same name, if any.
    pub fn insert(&mut self, mut template: Template) -> Result<Option<Template>> {
        if self.hot_reload {
            template.set_hot_reload(true);
        }
        if !template.is_initialized() {
            template.initialize()?;
        }

        let name = template.name().to_string();
        tracing::debug!(name = %name, hot_reload = template.hot_reload(), "Registered template");
        Ok(self.templates.insert(name, template))
    }

    /// Look up a template by exact name.
    pub fn get(&self, name: &str) -> Result<&Template> {
        self.templates
            .get(name)
            .ok_or_else(|| TempletError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn remove(&mut self, name: &str) -> Option<Template> {
        self.templates.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Look up `name` and render it into `out`.
    pub fn render<T, W>(&self, name: &str, out: W, data: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        self.get(name)?.render(out, data)
    }

    /// Recompile every template, stopping at the first failure.
    ///
    /// Iteration order is unspecified; templates visited before a failure keep
    /// their new units, the rest are untouched.
    pub fn initialize_all(&self) -> Result<()> {
        for template in self.templates.values() {
            template.initialize()?;
        }
        Ok(())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates.iter().map(|(name, t)| (name.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
