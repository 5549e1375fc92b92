//! Dotted-path access to JSON and INI configuration files.
//!
//! This crate loads a configuration file, optionally narrows it to an
//! environment subtree, and answers memoized lookups such as
//! `languages.PHP` or `planets.0`.
//!
//! ```no_run
//! use confkit_config::ConfigStore;
//!
//! let config = ConfigStore::new("config.json", Some("production"))?;
//! let host = config.get_or("database.host", "localhost");
//! # Ok::<(), confkit_config::ConfigError>(())
//! ```

pub mod constants;
mod delimiter;
mod loader;
mod resolver;
mod store;
mod value;

pub use delimiter::Delimiter;
pub use loader::{
    ConfigError, ConfigErrorKind, Format, IniSyntaxError, load, load_file, parse_ini,
    select_environment,
};
pub use resolver::{CacheStats, PathResolver, lookup};
pub use store::ConfigStore;
pub use value::{ConfigValue, Mapping};
