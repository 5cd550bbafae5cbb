//! Directory-driven Tera templates.
//!
//! A [`Template`] pairs a content directory with an optional layout directory,
//! compiles every matching file under both into one Tera instance, and renders
//! on demand. Templates compile lazily on first render (exactly once, even under
//! concurrent first calls) or on every render when hot reload is enabled.
//! A [`Registry`] keeps many templates keyed by the name of their content
//! directory.
//!
//! # Modules
//!
//! - [`template`]: content/layout pairing, compile state machine, rendering
//! - [`registry`]: name-keyed template collection with bulk initialization
//! - [`config`]: TOML registry descriptions
//! - [`discovery`]: directory validation and extension-filtered file walks
//! - [`error`]: error taxonomy shared by the crate
//!
//! # Example
//!
//! ```no_run
//! use templet::{Registry, Template};
//!
//! let mut registry = Registry::new().with_hot_reload(true);
//! registry.insert(Template::with_layout("tmplt/content/simple", "tmplt/layout/basic"))?;
//!
//! let page = registry.get("simple")?.render_to_string(&serde_json::json!({ "name": "John Doe" }))?;
//! println!("{page}");
//! # Ok::<(), templet::TempletError>(())
//! ```

pub mod config;
pub mod discovery;
pub mod error;
mod filters;
mod layout;
pub mod registry;
pub mod template;

pub use config::{ConfigError, RegistryConfig, TemplateEntry};
pub use error::{Result, TempletError};
pub use layout::Layout;
pub use registry::Registry;
pub use template::{Template, DEFAULT_EXTENSION};
