//! Error types for template discovery, compilation, lookup, and rendering.

use std::path::PathBuf;
use std::sync::Arc;

/// Convenience alias used throughout the crate.
pub type Result<T, E = TempletError> = std::result::Result<T, E>;

/// Every failure a [`Template`](crate::Template) or [`Registry`](crate::Registry)
/// can surface.
///
/// Engine errors are held behind an `Arc` so a failed first compile can be
/// handed to every caller that waited on it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TempletError {
    #[error("template directory '{}': {reason}", path.display())]
    Path { path: PathBuf, reason: String },

    #[error("failed to compile template '{name}': {source}")]
    Compile {
        name: String,
        source: Arc<tera::Error>,
    },

    #[error("template '{name}' not found")]
    NotFound { name: String },

    #[error("failed to render '{template}': {source}")]
    Render {
        template: String,
        source: Arc<tera::Error>,
    },
}

impl TempletError {
    pub(crate) fn path(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::Path {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn compile(name: &str, source: tera::Error) -> Self {
        Self::Compile {
            name: name.to_string(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn render(template: &str, source: tera::Error) -> Self {
        Self::Render {
            template: template.to_string(),
            source: Arc::new(source),
        }
    }

    /// True for [`TempletError::Path`].
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path { .. })
    }

    /// True for [`TempletError::Compile`].
    pub fn is_compile(&self) -> bool {
        matches!(self, Self::Compile { .. })
    }

    /// True for [`TempletError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for [`TempletError::Render`].
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render { .. })
    }
}
