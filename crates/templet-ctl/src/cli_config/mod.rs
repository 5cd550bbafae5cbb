//! Registry config discovery for `templet-ctl`.
//!
//! The config format itself lives in `templet::config`; this module only
//! decides which file to read.

pub(crate) mod loader;

pub(crate) use loader::load_registry_config;
